//! Flat-text series storage and train/test splitting.
//!
//! The storage format is deliberately minimal: a plain list of real
//! numbers, whitespace-separated, no header. It is the only persistence
//! format the harness knows about. The splitter partitions a series into a
//! training prefix and a held-out test suffix at `floor(ratio * len)`.

mod error;
mod split;
mod store;

pub use error::DatasetError;
pub use split::{Split, split};
pub use store::{read_series, write_series};
