//! Pure transforms of the merge-and-link pipeline.
//!
//! Every stage is value-in/value-out: it consumes its input collections and
//! returns new ones, so no stage mutates state another stage still holds.

pub mod aggregate;
pub mod compose;
pub mod diff;
pub mod link;

pub use aggregate::aggregate;
pub use compose::{UnresolvedReference, compose};
pub use diff::{Gap, gap_analysis};
pub use link::link;
