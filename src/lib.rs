#![doc(html_root_url = "https://docs.rs/bc-shard/0.1.0")]
#![warn(rust_2018_idioms)]

//! # Introduction
//!
//! Shamir's (t, n) threshold secret sharing over GF(P), where P is
//! 4294967389, the smallest prime above 2^32.
//!
//! A secret is cut into 4-byte little-endian chunks, and each chunk is shared
//! independently as the constant term of a random polynomial of degree
//! `threshold - 1`. The result is `shard_count` ASCII shard strings; any
//! `threshold` of them reconstruct the secret and fewer reveal nothing.
//!
//! Shards carry no integrity protection. Mixing shards from different splits,
//! or altering their values, reconstructs a wrong secret without an error.
//!
//! # Getting Started
//!
//! ```toml
//! [dependencies]
//! bc-shard = "0.1.0"
//! ```
//!
//! # Usage
//!
//! ```
//! let secret = b"my secret belongs to me";
//! let shards = bc_shard::split_secret(secret, 5, 3).unwrap();
//! assert_eq!(shards.len(), 5);
//!
//! let recovered = bc_shard::combine_shards(&shards[2..]).unwrap();
//! assert_eq!(recovered, secret);
//!
//! assert!(bc_shard::combine_shards(&shards[..2]).is_err());
//! ```

mod constants;
pub use constants::{CHUNK_SIZE, MAX_SHARD_COUNT, MIN_SHARD_COUNT, PRIME};

mod error;
pub use error::{Error, Result};

mod field;
mod fragment;
mod interpolate;
mod polynomial;

mod shard;
pub use shard::Shard;

mod shamir;
pub use shamir::{
    MetadataPolicy, combine_shards, combine_shards_with, combine_string, split_secret,
    split_secret_using, split_string,
};
