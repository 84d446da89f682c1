//! Foundation types for reel.
//!
//! This crate provides the record and payload types shared by the store, the
//! validation gate, and the HTTP server. Every other reel crate depends on
//! `reel-types`.
//!
//! # Key Types
//!
//! - [`MovieId`] — Store-assigned identifier, never reused within a store
//! - [`Movie`] — A stored record (`id`, `title`, `genre`, `year`)
//! - [`MoviePayload`] — Decoded request body with optional, truthiness-checked fields
//! - [`NewMovie`] — A fully-populated draft; the only input accepted by `create`

pub mod error;
pub mod movie;
pub mod payload;

pub use error::TypeError;
pub use movie::{Movie, MovieId};
pub use payload::{MoviePayload, NewMovie};
