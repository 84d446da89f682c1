//! Movie collection storage for reel.
//!
//! The store owns the ordered sequence of [`Movie`] records and is the only
//! component that assigns ids. Every mutation passes through it.
//!
//! # Storage Backends
//!
//! All backends implement the [`MovieStore`] trait:
//!
//! - [`InMemoryMovieStore`] -- `Vec`-backed store scoped to process lifetime
//!
//! # Design Rules
//!
//! 1. Ids come from a monotonic counter and are never reused, even after
//!    deletion. They are never derived from the current record count.
//! 2. Listing returns records in insertion order. Updates never reorder.
//! 3. A missing id is a normal outcome (`Ok(None)`), not an error.
//! 4. Read-modify-write sequences hold a single write lock end to end.
//! 5. `create` only takes a [`NewMovie`], so incomplete records cannot be
//!    stored.
//!
//! [`Movie`]: reel_types::Movie
//! [`NewMovie`]: reel_types::NewMovie

pub mod error;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryMovieStore;
pub use traits::MovieStore;
