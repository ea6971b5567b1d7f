//! SQL text composition
//!
//! Everything here returns plain text lines; statements decide where the
//! lines go in their element tree. Long comma lists are split by
//! [`chunk_joined`] so no line grows without bound.

mod chunk;
mod clause;

pub use chunk::{LINE_WIDTH, LineChunker, chunk_joined};
pub use clause::*;
