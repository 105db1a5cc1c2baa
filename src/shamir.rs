use bc_crypto::memzero;
use bc_rand::{RandomNumberGenerator, SecureRandomNumberGenerator};
use tracing::debug;

use crate::{
    Error, MAX_SHARD_COUNT, MIN_SHARD_COUNT, Result, Shard,
    constants::VALUE_LIMIT,
    fragment::{assemble, chunks_of, padding_for},
    interpolate::interpolate_at_zero,
    polynomial::{Share, generate_shares},
};

/// How `combine_shards_with` settles the threshold and padding recorded in
/// the supplied shards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MetadataPolicy {
    /// Every shard must record the same threshold and padding.
    #[default]
    Strict,
    /// Take the rounded mean of each field across all shards, as older
    /// combiners did. Disagreeing shards are not reported.
    RoundedMean,
}

fn validate_parameters(shard_count: usize, threshold: usize) -> Result<()> {
    if !(MIN_SHARD_COUNT..=MAX_SHARD_COUNT).contains(&shard_count) {
        return Err(Error::InvalidShardCount(shard_count));
    } else if threshold < 1 || threshold > shard_count {
        return Err(Error::InvalidThreshold {
            threshold,
            shard_count,
        });
    }
    Ok(())
}

/// Splits `secret` into `shard_count` shards, any `threshold` of which
/// reconstruct it, using the system's secure random number generator.
pub fn split_secret(secret: &[u8], shard_count: usize, threshold: usize) -> Result<Vec<String>> {
    let mut rng = SecureRandomNumberGenerator;
    split_secret_using(secret, shard_count, threshold, &mut rng)
}

/// Like `split_secret`, drawing polynomial coefficients from `rng`.
pub fn split_secret_using(
    secret: &[u8],
    shard_count: usize,
    threshold: usize,
    rng: &mut impl RandomNumberGenerator,
) -> Result<Vec<String>> {
    validate_parameters(shard_count, threshold)?;

    let mut chunks = chunks_of(secret);
    let padding = padding_for(secret.len());
    debug!(shard_count, threshold, chunks = chunks.len(), "splitting secret");

    // One row per shard, one column per chunk.
    let mut table = vec![Vec::with_capacity(chunks.len()); shard_count];
    for chunk in &chunks {
        let shares = generate_shares(*chunk, shard_count, threshold, rng);
        for (row, share) in table.iter_mut().zip(shares) {
            row.push(share.y as u32);
        }
    }
    memzero(chunks.as_mut_slice());

    // Validation bounds both counts to u16.
    table
        .into_iter()
        .enumerate()
        .map(|(index, values)| {
            Shard::new(index as u16, threshold as u16, padding, values).map(|s| s.to_string())
        })
        .collect()
}

/// Recovers the secret from at least `threshold` shards produced by one
/// split, requiring every shard to agree on its metadata.
pub fn combine_shards<S: AsRef<str>>(shards: &[S]) -> Result<Vec<u8>> {
    combine_shards_with(shards, MetadataPolicy::Strict)
}

/// Round half up, matching the legacy combiner.
fn rounded_mean(values: impl Iterator<Item = u64>, count: usize) -> u64 {
    let sum: u64 = values.sum();
    let count = count as u64;
    (2 * sum + count) / (2 * count)
}

fn settle_metadata(shards: &[Shard], policy: MetadataPolicy) -> Result<(usize, u8)> {
    match policy {
        MetadataPolicy::Strict => {
            let first = &shards[0];
            if let Some(other) = shards.iter().find(|s| s.threshold() != first.threshold()) {
                return Err(Error::MalformedShard(format!(
                    "shard {} has threshold {} but shard {} has {}",
                    other.index(),
                    other.threshold(),
                    first.index(),
                    first.threshold()
                )));
            }
            if let Some(other) = shards.iter().find(|s| s.padding() != first.padding()) {
                return Err(Error::MalformedShard(format!(
                    "shard {} has padding {} but shard {} has {}",
                    other.index(),
                    other.padding(),
                    first.index(),
                    first.padding()
                )));
            }
            Ok((first.threshold() as usize, first.padding()))
        }
        MetadataPolicy::RoundedMean => {
            let threshold = rounded_mean(shards.iter().map(|s| s.threshold() as u64), shards.len());
            let padding = rounded_mean(shards.iter().map(|s| s.padding() as u64), shards.len());
            Ok((threshold as usize, padding as u8))
        }
    }
}

/// Recovers the secret from `shards`, settling their metadata per `policy`.
///
/// All supplied shards take part in the interpolation. Shards that do not
/// lie on the same polynomials yield a wrong secret, not an error.
pub fn combine_shards_with<S: AsRef<str>>(shards: &[S], policy: MetadataPolicy) -> Result<Vec<u8>> {
    if shards.is_empty() {
        return Err(Error::InsufficientShares {
            required: 1,
            provided: 0,
        });
    }
    let shards = shards
        .iter()
        .map(|s| s.as_ref().parse::<Shard>())
        .collect::<Result<Vec<_>>>()?;

    let (threshold, padding) = settle_metadata(&shards, policy)?;
    if shards.len() < threshold {
        return Err(Error::InsufficientShares {
            required: threshold,
            provided: shards.len(),
        });
    }

    let chunk_count = shards[0].values().len();
    if let Some(other) = shards.iter().find(|s| s.values().len() != chunk_count) {
        return Err(Error::MalformedShard(format!(
            "shard {} has {} values but shard {} has {chunk_count}",
            other.index(),
            other.values().len(),
            shards[0].index()
        )));
    }
    for (i, shard) in shards.iter().enumerate() {
        if shards[i + 1..].iter().any(|s| s.index() == shard.index()) {
            return Err(Error::DuplicateShareIndex(shard.index()));
        }
    }
    debug!(shards = shards.len(), threshold, chunks = chunk_count, ?policy, "combining shards");

    let mut chunks = Vec::with_capacity(chunk_count);
    let mut points = Vec::with_capacity(shards.len());
    for column in 0..chunk_count {
        points.clear();
        points.extend(shards.iter().map(|s| Share {
            x: s.x(),
            y: s.values()[column] as u64,
        }));
        let value = interpolate_at_zero(&points)?;
        if value >= VALUE_LIMIT {
            return Err(Error::MalformedShard(format!(
                "chunk {column} interpolates outside 32 bits; shards are inconsistent"
            )));
        }
        chunks.push(value as u32);
    }

    let secret = assemble(&chunks, padding);
    memzero(chunks.as_mut_slice());
    Ok(secret)
}

/// Splits the UTF-8 bytes of `secret`.
pub fn split_string(secret: &str, shard_count: usize, threshold: usize) -> Result<Vec<String>> {
    split_secret(secret.as_bytes(), shard_count, threshold)
}

/// Combines shards made by `split_string` back into the original text.
pub fn combine_string<S: AsRef<str>>(shards: &[S]) -> Result<String> {
    Ok(String::from_utf8(combine_shards(shards)?)?)
}
