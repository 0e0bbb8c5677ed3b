//! A crit-bit tree: a binary radix tree over variable-length byte keys.
//!
//! Each branch node tests the first bit at which the keys below it differ, and each leaf is a
//! complete key record owned by the caller. See [`record`] for the key encodings and
//! [`CritBitTree`] for the operations.

#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::all,
    missing_debug_implementations
)]
#![deny(clippy::all, missing_docs, rust_2018_idioms, rust_2021_compatibility)]

mod arena;
mod config;
mod error;
mod node;
mod point;
pub mod record;
mod tree;

#[cfg(test)]
mod proptests;

pub use config::Config;
pub use error::{Error, Result};
pub use point::Point;
pub use record::{Record, RecordBuf};
pub use tree::{CritBitTree, Inserted};
