// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the club roster system.
//!
//! Users and players are stored as plain text, one record per line, in a
//! single data directory. Encoding and decoding records is the job of the
//! crates that own them; this crate only moves lines to and from disk.
//!
//! A missing file reads as an empty collection. Saves go through a
//! temporary file in the same directory and are renamed into place, so a
//! crash mid-write never leaves a truncated file behind.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use store::{FileStore, PLAYERS_FILE_NAME, USERS_FILE_NAME};
