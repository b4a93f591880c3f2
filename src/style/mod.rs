//! Style resolution pipeline: responsive resolution, shorthand expansion,
//! token/literal classification, emission, and child-gap translation.

pub mod literal;
pub mod value;
pub mod property;
pub mod responsive;
pub mod shorthand;
pub mod emit;
pub mod gap;

pub use emit::{Emission, EmissionResult, StyleEntry};
pub use gap::{Axis, Direction, GapDirective};
pub use property::StyleProperty;
pub use responsive::{ResponsiveProp, Resolved};
pub use shorthand::{ShorthandError, ShorthandQuad};
pub use value::StyleValue;
