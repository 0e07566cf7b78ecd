// Engine module - Producer-side surface state and its checks
// Sits between the wire types and whatever transport delivers messages

pub mod error;
pub mod replay;
pub mod surface;
pub mod validation;
pub mod writer;

pub use error::{Error, Result};
pub use replay::{Replay, SurfaceMirror};
pub use surface::Surface;
pub use validation::{ValidationError, ValidationErrorKind, validate_components};
pub use writer::{read_client_message, read_jsonl, write_jsonl, write_message, write_pretty};

pub use a2ui_types as types;
