//! Test fixtures: synthetic image payloads.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// PNG of a plain document-like image: light background, a dark band of
/// "text" across the middle. No faces, decodes cleanly.
pub fn document_png(width: u32, height: u32) -> Vec<u8> {
    let band_top = height / 3;
    let band_bottom = band_top + height / 8;
    let img = RgbImage::from_fn(width, height, |_, y| {
        if y >= band_top && y < band_bottom {
            Rgb([20, 20, 20])
        } else {
            Rgb([245, 245, 245])
        }
    });

    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("encode fixture PNG");
    buffer.into_inner()
}

/// Bytes that are definitely not a decodable image.
pub fn not_an_image() -> Vec<u8> {
    b"this is just prose pretending to be a scan".to_vec()
}
