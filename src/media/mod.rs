//! Media Module
//!
//! Image variant descriptors and largest-variant selection.

mod selector;
mod variant;

pub use selector::select_largest;
pub use variant::{dimensions_from_url, ImageVariant};
pub(crate) use variant::lenient_u32;
