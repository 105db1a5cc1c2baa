use std::{fmt, num::ParseIntError, str::FromStr};

use crate::{
    Error, Result,
    constants::{HEADER_WIDTH, INDEX_WIDTH, PADDING_WIDTH, THRESHOLD_WIDTH, VALUE_WIDTH},
};

/// One holder's portion of a split secret.
///
/// The textual form is fixed-width ASCII:
///
/// ```text
/// [4 hex: index][4 hex: threshold][1 decimal: padding][8 hex per chunk ...]
/// ```
///
/// `Display` produces it and `FromStr` parses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shard {
    index: u16,
    threshold: u16,
    padding: u8,
    values: Vec<u32>,
}

impl Shard {
    /// Fails with `MalformedShard` when `threshold` is zero or `padding` is
    /// outside `1..=4`, since such a shard could not be parsed back.
    pub fn new(index: u16, threshold: u16, padding: u8, values: Vec<u32>) -> Result<Self> {
        if threshold == 0 {
            return Err(malformed("threshold is zero"));
        }
        if !(1..=4).contains(&padding) {
            return Err(malformed(format!("padding {padding} is not in 1..=4")));
        }
        Ok(Self {
            index,
            threshold,
            padding,
            values,
        })
    }

    /// 0-based position of this shard among those produced by one split.
    pub fn index(&self) -> u16 {
        self.index
    }

    /// The x-coordinate this shard's values were evaluated at.
    pub fn x(&self) -> u64 {
        self.index as u64 + 1
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    pub fn padding(&self) -> u8 {
        self.padding
    }

    /// One polynomial evaluation per secret chunk.
    pub fn values(&self) -> &[u32] {
        &self.values
    }
}

impl fmt::Display for Shard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0iw$x}{:0tw$x}{}",
            self.index,
            self.threshold,
            self.padding,
            iw = INDEX_WIDTH,
            tw = THRESHOLD_WIDTH
        )?;
        for value in &self.values {
            write!(f, "{:0vw$x}", value, vw = VALUE_WIDTH)?;
        }
        Ok(())
    }
}

fn malformed(reason: impl Into<String>) -> Error {
    Error::MalformedShard(reason.into())
}

type Radix<T> = fn(&str, u32) -> std::result::Result<T, ParseIntError>;

fn parse_hex<T>(field: &str, what: &str, from_str_radix: Radix<T>) -> Result<T> {
    if !field.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed(format!("{what} {field:?} is not hexadecimal")));
    }
    from_str_radix(field, 16).map_err(|e| malformed(format!("{what} {field:?}: {e}")))
}

impl FromStr for Shard {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if !s.is_ascii() {
            return Err(malformed("shard contains non-ASCII characters"));
        }
        if s.len() < HEADER_WIDTH {
            return Err(malformed(format!(
                "shard is {} characters long, header needs {HEADER_WIDTH}",
                s.len()
            )));
        }

        let (index, rest) = s.split_at(INDEX_WIDTH);
        let (threshold, rest) = rest.split_at(THRESHOLD_WIDTH);
        let (padding, body) = rest.split_at(PADDING_WIDTH);

        let index = parse_hex(index, "index", u16::from_str_radix)?;
        let threshold = parse_hex(threshold, "threshold", u16::from_str_radix)?;
        if threshold == 0 {
            return Err(malformed("threshold is zero"));
        }
        let padding = match padding.as_bytes()[0] {
            digit @ b'1'..=b'4' => digit - b'0',
            _ => return Err(malformed(format!("padding {padding:?} is not in 1..=4"))),
        };

        if body.len() % VALUE_WIDTH != 0 {
            return Err(malformed(format!(
                "value section is {} characters, not a multiple of {VALUE_WIDTH}",
                body.len()
            )));
        }
        let values = body
            .as_bytes()
            .chunks(VALUE_WIDTH)
            .map(|chunk| {
                // Slicing ASCII on byte boundaries keeps valid UTF-8.
                let field = std::str::from_utf8(chunk).map_err(|e| malformed(e.to_string()))?;
                parse_hex(field, "value", u32::from_str_radix)
            })
            .collect::<Result<Vec<u32>>>()?;

        Ok(Self {
            index,
            threshold,
            padding,
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        let shard = Shard::new(0, 2, 3, vec![0x04030202, 0x00000006]).unwrap();
        assert_eq!(shard.to_string(), "0000000230403020200000006");
        let shard = Shard::new(0xabcd, 0xffff, 4, vec![]).unwrap();
        assert_eq!(shard.to_string(), "abcdffff4");
    }

    #[test]
    fn test_decode() {
        let shard: Shard = "0001000230403020300000007".parse().unwrap();
        assert_eq!(shard.index(), 1);
        assert_eq!(shard.x(), 2);
        assert_eq!(shard.threshold(), 2);
        assert_eq!(shard.padding(), 3);
        assert_eq!(shard.values(), &[0x04030203, 0x00000007]);
    }

    #[test]
    fn test_decode_uppercase_hex() {
        let shard: Shard = "00A000011DEADBEEF".parse().unwrap();
        assert_eq!(shard.index(), 0xa0);
        assert_eq!(shard.values(), &[0xdeadbeef]);
    }

    #[test]
    fn test_header_only() {
        let shard: Shard = "000200034".parse().unwrap();
        assert_eq!(shard.index(), 2);
        assert_eq!(shard.threshold(), 3);
        assert_eq!(shard.padding(), 4);
        assert!(shard.values().is_empty());
    }

    #[test]
    fn test_text_survives_parse() {
        let shard = Shard::new(7, 5, 1, vec![0, 1, u32::MAX, 0x89abcdef]).unwrap();
        let parsed: Shard = shard.to_string().parse().unwrap();
        assert_eq!(parsed, shard);
    }

    #[test]
    fn test_new_rejects_unparseable_metadata() {
        for (threshold, padding) in [(0, 1), (1, 0), (1, 5), (1, 10), (0, 0)] {
            assert!(
                matches!(
                    Shard::new(0, threshold, padding, vec![1]),
                    Err(Error::MalformedShard(_))
                ),
                "accepted threshold {threshold}, padding {padding}"
            );
        }
        for padding in 1..=4 {
            let shard = Shard::new(3, 1, padding, vec![1]).unwrap();
            assert_eq!(shard.to_string().parse::<Shard>().unwrap(), shard);
        }
    }

    #[test]
    fn test_malformed() {
        let cases = [
            "",
            "00000001",
            "zz0000011",
            "0000+0011",
            "000000001",
            "000000010",
            "000000015",
            "00000001x",
            "0000000110000000",
            "000000011000000001",
            "000000011g0000000",
            "00000001\u{e9}0000000",
        ];
        for case in cases {
            assert!(
                matches!(case.parse::<Shard>(), Err(Error::MalformedShard(_))),
                "accepted {case:?}"
            );
        }
    }
}
