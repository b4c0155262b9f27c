//! Common library for the EquipTrack client
//!
//! This crate provides functionality shared by the client crates, namely the
//! persistent key-value storage that holds the user session and its error
//! handling.
//!
//! ```rust,no_run
//! use common::storage::{FileStorage, LocalStorage};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let storage = FileStorage::open(".equiptrack/storage.json")?;
//!     storage.set_item("token", "abc123")?;
//!     println!("Token: {:?}", storage.get_item("token")?);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod storage;
