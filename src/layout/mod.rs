//! Layout math: step pagination and carousel fitting

mod fit;
mod pagination;

pub use fit::{visible_items, ItemSpacing, FIT_TOLERANCE};
pub use pagination::{compute_slides, Slide};
