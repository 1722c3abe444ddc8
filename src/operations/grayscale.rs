use image::{DynamicImage, GrayImage, Luma, RgbImage};

use crate::{error::EnhanceError, image::Image};

// BT.601 weights scaled by 2^14. They sum to exactly 1 << 14,
// so white stays at 255 and black at 0.
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;
const SHIFT: u32 = 14;

/// ITU-R BT.601 luma, 0.299 R + 0.587 G + 0.114 B, alpha ignored.
///
/// Not `DynamicImage::grayscale()`: `image` uses Rec. 709 weights,
/// see https://github.com/image-rs/image/issues/598
pub fn grayscale(image: &mut Image) -> Result<(), EnhanceError> {
    let luma = match &image.pixels {
        // already single-channel 8-bit, nothing to weigh
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        other => rec601_luma(&other.to_rgb8()),
    };
    image.pixels = DynamicImage::ImageLuma8(luma);
    Ok(())
}

fn rec601_luma(rgb: &RgbImage) -> GrayImage {
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        let weighted =
            u32::from(r) * R_WEIGHT + u32::from(g) * G_WEIGHT + u32::from(b) * B_WEIGHT;
        // round half up; the maximum is 255 << 14, so this never exceeds u8
        Luma([((weighted + (1 << (SHIFT - 1))) >> SHIFT) as u8])
    })
}
