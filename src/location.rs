//! Converts top-left match locations into window centers.
//!
//! Matchers report the upper-left pixel of the best window. Dimensions are
//! given row-major (`height`, `width`); `x` is the column axis and is shifted
//! by half the width, `y` is the row axis and is shifted by half the height.

use crate::point::Point;
use ::image::GenericImageView;

/// Returns the center of a `height x width` window whose top-left corner is
/// `top_left`.
pub fn fix_location(height: u32, width: u32, top_left: Point) -> Point {
    Point::new(
        top_left.x() + f64::from(width) / 2.0,
        top_left.y() + f64::from(height) / 2.0,
    )
}

/// Returns the center of the window covered by `template` when its top-left
/// corner sits at `top_left`.
pub fn fix_location_for<I: GenericImageView>(template: &I, top_left: Point) -> Point {
    let (width, height) = template.dimensions();
    fix_location(height, width, top_left)
}
