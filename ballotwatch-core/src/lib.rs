//! Core types for ballotwatch.
//!
//! This crate provides everything the CLI builds on:
//! - `Event` and related types for race registration windows
//! - `status` and `countdown` for deriving display state from the clock
//! - `view` for filtering, searching and ordering the visible list
//! - `Store` for the file-backed event collection
//!
//! All derivation functions take "now" explicitly; nothing in this crate
//! reads the clock, which keeps the logic deterministic under test.

pub mod config;
pub mod countdown;
pub mod error;
pub mod event;
pub mod seed;
pub mod status;
pub mod store;
pub mod view;

// Re-export all event types at crate root for convenience
pub use event::*;
