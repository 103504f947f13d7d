use hough_radon::image::io::write_pgm;
use hough_radon::image::GrayImageU8;
use hough_radon::kernels::for_each_circle_offset;
use std::path::{Path, PathBuf};

/// Generates a dark raster with a midpoint-circle ring of uniform intensity.
pub fn ring_u8(width: usize, height: usize, center: (i64, i64), radius: i64, value: u8) -> GrayImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = GrayImageU8::zeros(width, height);
    for_each_circle_offset(radius, |dr, dc| {
        let (r, c) = (center.0 + dr, center.1 + dc);
        if (0..height as i64).contains(&r) && (0..width as i64).contains(&c) {
            img.set(c as usize, r as usize, value);
        }
    });
    img
}

/// Generates a raster holding only the four corners of an axis-aligned
/// rectangle with even `rect_w × rect_h` centered at `center = (row, col)`.
pub fn rectangle_corners_u8(
    width: usize,
    height: usize,
    rect_w: usize,
    rect_h: usize,
    center: (usize, usize),
) -> GrayImageU8 {
    assert!(rect_w % 2 == 0 && rect_h % 2 == 0, "corner layout needs even sizes");
    let mut img = GrayImageU8::zeros(width, height);
    let (r, c) = center;
    for row in [r - rect_h / 2, r + rect_h / 2] {
        for col in [c - rect_w / 2, c + rect_w / 2] {
            img.set(col, row, 255);
        }
    }
    img
}

/// Generates a dark raster with a bright horizontal stripe.
pub fn stripe_u8(width: usize, height: usize, row: usize, value: u8) -> GrayImageU8 {
    let mut img = GrayImageU8::zeros(width, height);
    for x in 0..width {
        img.set(x, row, value);
    }
    img
}

/// Point list text for the diagonal `r = c`, `c = 0..n`.
pub fn diagonal_points_text(n: i64) -> String {
    (0..n).map(|c| format!("{c} {c}\n")).collect()
}

pub fn write_pgm_file(dir: &Path, name: &str, image: &GrayImageU8) -> PathBuf {
    let path = dir.join(name);
    write_pgm(image, &path).expect("write test raster");
    path
}
