//! Element traits and cell traversal shared by the conversions.
//!
//! `Element` covers anything both matrix libraries can hold and zero-fill.
//! `Integral` narrows that to the fixed-width integers an image buffer can
//! carry as a single-channel pixel.
pub mod element;
pub mod layout;

pub use element::{Element, Integral};
pub use layout::for_each_cell;
