//! findit prepares images for template matching and condenses match results.
//!
//! Image helpers normalize inputs to greyscale and rescale them by a ratio.
//! Result helpers move a reported top-left location to the window center and
//! reduce a cloud of candidate locations to the centroid of its densest
//! k-means cluster. Enable the `tracing` feature for spans around each step.

pub mod aggregate;
pub mod cluster;
pub mod image;
pub mod location;
pub mod point;
mod trace;
pub mod util;

pub use self::aggregate::{
    calculate_center_point, calculate_center_point_with, AggregateConfig, DEFAULT_CLUSTER_NUM,
};
pub use self::cluster::{Kmeans, KmeansConfig, KmeansFit};
pub use self::image::{
    grey_from_image, load_grey, load_grey_from_path, resize_dynamic_scale, resize_scale,
    resize_scale_with, ImageSource,
};
pub use self::location::{fix_location, fix_location_for};
pub use self::point::Point;
pub use self::util::{FinditError, FinditResult};
