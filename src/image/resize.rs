//! Ratio-based resizing.
//!
//! The target width is `round(width * scale)`; the height follows from the
//! realised width so the aspect ratio is kept: `round(height * new_w / width)`.

use crate::trace::enter_stage;
use crate::util::{FinditError, FinditResult};
use ::image::imageops::{self, FilterType};
use ::image::{DynamicImage, GenericImageView, ImageBuffer, Pixel};

/// Owned buffer produced by resizing a view with pixel type `P`.
pub type Resized<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

/// Resizes `img` by `scale` with a triangle (bilinear) filter.
pub fn resize_scale<I>(img: &I, scale: f64) -> FinditResult<Resized<I::Pixel>>
where
    I: GenericImageView,
    I::Pixel: 'static,
    <I::Pixel as Pixel>::Subpixel: 'static,
{
    resize_scale_with(img, scale, FilterType::Triangle)
}

/// Resizes `img` by `scale` with the given filter.
///
/// Fails with `InvalidArgument` if `scale` is not a finite positive number or
/// the result would be less than one pixel wide or tall.
pub fn resize_scale_with<I>(
    img: &I,
    scale: f64,
    filter: FilterType,
) -> FinditResult<Resized<I::Pixel>>
where
    I: GenericImageView,
    I::Pixel: 'static,
    <I::Pixel as Pixel>::Subpixel: 'static,
{
    let (width, height) = img.dimensions();
    let (new_width, new_height) = scaled_dimensions(width, height, scale)?;
    enter_stage!(
        _stage,
        "resize_scale",
        width = width,
        height = height,
        new_width = new_width,
        new_height = new_height
    );
    Ok(imageops::resize(img, new_width, new_height, filter))
}

/// Resizes a decoded image by `scale`, keeping its colour layout.
pub fn resize_dynamic_scale(
    img: &DynamicImage,
    scale: f64,
    filter: FilterType,
) -> FinditResult<DynamicImage> {
    let (width, height) = (img.width(), img.height());
    let (new_width, new_height) = scaled_dimensions(width, height, scale)?;
    enter_stage!(
        _stage,
        "resize_scale",
        width = width,
        height = height,
        new_width = new_width,
        new_height = new_height
    );
    Ok(img.resize_exact(new_width, new_height, filter))
}

/// Computes the `(width, height)` that resizing `width x height` by `scale`
/// produces.
pub fn scaled_dimensions(width: u32, height: u32, scale: f64) -> FinditResult<(u32, u32)> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(FinditError::InvalidArgument(
            "scale must be a finite positive number",
        ));
    }
    if width == 0 || height == 0 {
        return Err(FinditError::EmptyImage { width, height });
    }

    let new_width = (f64::from(width) * scale).round();
    let new_height = (f64::from(height) * new_width / f64::from(width)).round();
    if new_width < 1.0 || new_height < 1.0 {
        return Err(FinditError::InvalidArgument("scale shrinks image below one pixel"));
    }
    if new_width > f64::from(u32::MAX) || new_height > f64::from(u32::MAX) {
        return Err(FinditError::InvalidArgument("scale overflows image dimensions"));
    }
    Ok((new_width as u32, new_height as u32))
}
