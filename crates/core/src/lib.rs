//! Domain logic for the Oro design-system builder.
//!
//! Zero internal dependencies so the db and api crates (and any future
//! tooling) can share the same types, errors, and canvas semantics.

pub mod canvas;
pub mod data_mode;
pub mod error;
pub mod history;
pub mod types;
