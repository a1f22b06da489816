//! Image preparation ahead of matching.
//!
//! Buffers are the `image` crate's types. `grey` turns paths or in-memory
//! images into 8-bit single-channel buffers; `resize` rescales by a ratio
//! while keeping the aspect ratio. Neither touches its input: every function
//! returns a new buffer.

pub mod grey;
pub mod resize;

pub use grey::{grey_from_image, load_grey, load_grey_from_path, ImageSource};
pub use resize::{resize_dynamic_scale, resize_scale, resize_scale_with, scaled_dimensions};
