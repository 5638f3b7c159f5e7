//! Views Module
//!
//! View models built from typed content, with default substitution and
//! display formatting applied.

mod category;
mod format;
mod post;

pub use category::{CategoryLink, CategoryList};
pub use format::{format_display_date, DISPLAY_DATE_FORMAT};
pub use post::{
    post_cards, PostCard, PostDetail, DEFAULT_CARD_EXCERPT, DEFAULT_CONTENT,
    DEFAULT_DETAIL_EXCERPT, DEFAULT_IMAGE_ALT,
};
