//! Greyscale normalization.
//!
//! Colour images are reduced with the `image` crate's luminance weights
//! (`DynamicImage::to_luma8`); alpha is discarded. Images that are already
//! 8-bit single channel pass through untouched.

use crate::trace::enter_stage;
use crate::util::{FinditError, FinditResult};
use ::image::{DynamicImage, GrayImage};
use std::path::Path;

/// Where to take an image from: a file on disk or a decoded buffer.
#[derive(Clone, Copy, Debug)]
pub enum ImageSource<'a> {
    /// Decode the image stored at this path.
    Path(&'a Path),
    /// Use an already decoded image.
    Image(&'a DynamicImage),
}

impl<'a> From<&'a Path> for ImageSource<'a> {
    fn from(path: &'a Path) -> Self {
        ImageSource::Path(path)
    }
}

impl<'a> From<&'a DynamicImage> for ImageSource<'a> {
    fn from(img: &'a DynamicImage) -> Self {
        ImageSource::Image(img)
    }
}

/// Returns a greyscale copy of the image behind `source`.
pub fn load_grey(source: ImageSource<'_>) -> FinditResult<GrayImage> {
    match source {
        ImageSource::Path(path) => load_grey_from_path(path),
        ImageSource::Image(img) => Ok(grey_from_image(img)),
    }
}

/// Decodes the image at `path` and converts it to greyscale.
///
/// Fails with [`FinditError::ImageIo`] if the file cannot be read or its
/// format is not supported.
pub fn load_grey_from_path<P: AsRef<Path>>(path: P) -> FinditResult<GrayImage> {
    let path = path.as_ref();
    enter_stage!(_stage, "load_grey", path = %path.display());
    let img = ::image::open(path).map_err(|err| FinditError::ImageIo {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    Ok(grey_from_image(&img))
}

/// Converts a decoded image to 8-bit greyscale with the same dimensions.
pub fn grey_from_image(img: &DynamicImage) -> GrayImage {
    match img {
        DynamicImage::ImageLuma8(grey) => grey.clone(),
        other => other.to_luma8(),
    }
}
