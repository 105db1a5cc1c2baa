use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("shard count {0} is outside 1..=65535")]
    InvalidShardCount(usize),

    #[error("threshold {threshold} is outside 1..={shard_count}")]
    InvalidThreshold { threshold: usize, shard_count: usize },

    #[error("{provided} shards supplied but {required} are required")]
    InsufficientShares { required: usize, provided: usize },

    #[error("malformed shard: {0}")]
    MalformedShard(String),

    #[error("shard index {0} appears more than once")]
    DuplicateShareIndex(u16),

    #[error("reconstructed secret is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
