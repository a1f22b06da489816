use findit::{
    fix_location_for, grey_from_image, load_grey, load_grey_from_path, resize_dynamic_scale,
    resize_scale, FinditError, ImageSource, Point,
};
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, GrayImage, Luma, Rgb, RgbImage};

fn make_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let v = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
        Rgb([v as u8, (255 - v) as u8, ((x + y) & 0xFF) as u8])
    })
}

fn make_grey(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| Luma([((x * 5 + y * 3) & 0xFF) as u8]))
}

#[test]
fn greyscale_is_idempotent() {
    let colour = DynamicImage::ImageRgb8(make_rgb(24, 16));
    let once = grey_from_image(&colour);
    let twice = grey_from_image(&DynamicImage::ImageLuma8(once.clone()));
    assert_eq!(once, twice);
    assert_eq!(once.dimensions(), (24, 16));
}

#[test]
fn path_and_buffer_sources_agree() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.png");
    let colour = DynamicImage::ImageRgb8(make_rgb(32, 20));
    colour.save(&path).unwrap();

    let from_path = load_grey(ImageSource::Path(&path)).unwrap();
    let from_buffer = load_grey(ImageSource::from(&colour)).unwrap();
    assert_eq!(from_path, from_buffer);
}

#[test]
fn grey_file_loads_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("template.png");
    let grey = make_grey(9, 7);
    grey.save(&path).unwrap();

    assert_eq!(load_grey_from_path(&path).unwrap(), grey);
}

#[test]
fn missing_file_reports_image_io() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.png");
    let err = load_grey_from_path(&path).unwrap_err();
    match err {
        FinditError::ImageIo { path: reported, .. } => {
            assert!(reported.ends_with("absent.png"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn undecodable_file_reports_image_io() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"definitely not a png").unwrap();
    assert!(matches!(
        load_grey_from_path(&path),
        Err(FinditError::ImageIo { .. })
    ));
}

#[test]
fn unit_scale_keeps_dimensions() {
    let grey = make_grey(40, 30);
    let out = resize_scale(&grey, 1.0).unwrap();
    assert_eq!(out.dimensions(), (40, 30));
}

#[test]
fn half_scale_halves_and_keeps_aspect() {
    let grey = make_grey(40, 30);
    let out = resize_scale(&grey, 0.5).unwrap();
    assert_eq!(out.dimensions(), (20, 15));

    let out = resize_scale(&grey, 2.0).unwrap();
    assert_eq!(out.dimensions(), (80, 60));
}

#[test]
fn non_positive_scale_is_rejected() {
    let grey = make_grey(8, 8);
    for scale in [0.0, -0.5] {
        assert!(matches!(
            resize_scale(&grey, scale),
            Err(FinditError::InvalidArgument(_))
        ));
    }
}

#[test]
fn dynamic_resize_keeps_colour_layout() {
    let colour = DynamicImage::ImageRgb8(make_rgb(50, 20));
    let out = resize_dynamic_scale(&colour, 0.5, FilterType::Nearest).unwrap();
    assert_eq!((out.width(), out.height()), (25, 10));
    assert_eq!(out.color(), ColorType::Rgb8);
}

#[test]
fn resized_template_center_tracks_new_size() {
    let template = make_grey(40, 20);
    let small = resize_scale(&template, 0.5).unwrap();
    let center = fix_location_for(&small, Point::new(5.0, 5.0));
    assert_eq!(center, Point::new(15.0, 10.0));
}
