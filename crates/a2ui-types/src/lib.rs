//! Wire types for the A2UI protocol.
//!
//! A producer describes a UI surface as a flat list of [`Component`]s that
//! reference each other by id (an adjacency list), plus a separate data model
//! keyed by JSON-Pointer-style paths. Both travel to the renderer as
//! [`Message`]s.
//!
//! - `component`: the component record and the closed catalog of shapes
//! - `message`: producer → renderer messages and renderer → producer events
//! - `factory`: constructor helpers for every shape

pub mod component;
pub mod error;
pub mod factory;
pub mod message;

pub use component::*;
pub use error::{Error, Result};
pub use message::*;
