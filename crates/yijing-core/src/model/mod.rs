//! Data model types.
//!
//! - Lines (the two-valued yin/yang unit)
//! - Paintings (immutable sequences of lines, lowest first)

pub mod line;
pub mod painting;

pub use line::Line;
pub use painting::Painting;
