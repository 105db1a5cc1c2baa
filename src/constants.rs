/// The field modulus: the smallest prime greater than 2^32.
pub const PRIME: u64 = 4_294_967_389;

/// Number of secret bytes packed into one field element.
pub const CHUNK_SIZE: usize = 4;

pub const MIN_SHARD_COUNT: usize = 1;
pub const MAX_SHARD_COUNT: usize = 65_535;

// Shard string layout.
pub(crate) const INDEX_WIDTH: usize = 4;
pub(crate) const THRESHOLD_WIDTH: usize = 4;
pub(crate) const PADDING_WIDTH: usize = 1;
pub(crate) const VALUE_WIDTH: usize = 8;
pub(crate) const HEADER_WIDTH: usize = INDEX_WIDTH + THRESHOLD_WIDTH + PADDING_WIDTH;

/// Exclusive upper bound for a value that fits the shard value field.
pub(crate) const VALUE_LIMIT: u64 = 1 << 32;
