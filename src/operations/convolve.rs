use image::{DynamicImage, GrayImage, Luma};

use crate::{error::EnhanceError, image::Image};

/// A 3x3 integer convolution kernel, indexed `[row][column]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel3x3 {
    pub weights: [[i32; 3]; 3],
}

impl Kernel3x3 {
    /// Strong positive center with negative neighbors. The weights sum to 1,
    /// so flat regions come out unchanged and edges get steeper.
    pub const SHARPEN: Self = Self {
        weights: [[-1, -1, -1], [-1, 9, -1], [-1, -1, -1]],
    };
}

pub fn convolve(image: &mut Image, kernel: &Kernel3x3) -> Result<(), EnhanceError> {
    let filtered = match &image.pixels {
        DynamicImage::ImageLuma8(gray) => filter_luma8(gray, kernel),
        other => filter_luma8(&other.to_luma8(), kernel),
    };
    image.pixels = DynamicImage::ImageLuma8(filtered);
    Ok(())
}

/// Borders are mirrored without repeating the edge pixel (`dcb|abcd|cba`),
/// and results are saturated to `0..=255`.
fn filter_luma8(input: &GrayImage, kernel: &Kernel3x3) -> GrayImage {
    let (width, height) = input.dimensions();
    GrayImage::from_fn(width, height, |x, y| {
        let mut acc: i32 = 0;
        for (row, dy) in kernel.weights.iter().zip(-1i64..=1) {
            let sy = reflect_101(i64::from(y) + dy, height);
            for (weight, dx) in row.iter().zip(-1i64..=1) {
                let sx = reflect_101(i64::from(x) + dx, width);
                acc += weight * i32::from(input.get_pixel(sx, sy).0[0]);
            }
        }
        Luma([acc.clamp(0, 255) as u8])
    })
}

/// Maps an index that may be one step outside `0..len` back inside.
fn reflect_101(index: i64, len: u32) -> u32 {
    let len = i64::from(len);
    if len == 1 {
        return 0;
    }
    let reflected = if index < 0 {
        -index
    } else if index >= len {
        2 * len - 2 - index
    } else {
        index
    };
    reflected as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use std::num::NonZeroU8;

    fn sharpen(gray: GrayImage) -> GrayImage {
        let mut image = Image::from(DynamicImage::ImageLuma8(gray));
        convolve(&mut image, &Kernel3x3::SHARPEN).unwrap();
        image.pixels.as_luma8().unwrap().clone()
    }

    #[test]
    fn sharpen_kernel_sums_to_one() {
        let sum: i32 = Kernel3x3::SHARPEN.weights.iter().flatten().sum();
        assert_eq!(sum, 1);
    }

    #[test]
    fn reflect_101_mirrors_without_repeating_the_edge() {
        assert_eq!(reflect_101(-1, 5), 1);
        assert_eq!(reflect_101(0, 5), 0);
        assert_eq!(reflect_101(4, 5), 4);
        assert_eq!(reflect_101(5, 5), 3);
        assert_eq!(reflect_101(-1, 2), 1);
        assert_eq!(reflect_101(2, 2), 0);
        assert_eq!(reflect_101(-1, 1), 0);
        assert_eq!(reflect_101(1, 1), 0);
    }

    #[test]
    fn single_row_uses_mirrored_columns() {
        let row = GrayImage::from_raw(3, 1, vec![10, 20, 30]).unwrap();
        assert_eq!(sharpen(row).into_raw(), vec![0, 20, 90]);
    }

    #[test]
    fn single_pixel_is_unchanged() {
        let pixel = GrayImage::from_pixel(1, 1, Luma([123]));
        assert_eq!(sharpen(pixel.clone()), pixel);
    }

    #[test]
    fn isolated_spike_saturates() {
        let mut dark = GrayImage::from_pixel(5, 5, Luma([0]));
        dark.put_pixel(2, 2, Luma([255]));
        let sharpened = sharpen(dark);
        // 9 * 255 overflows u8 and must clamp rather than wrap
        assert_eq!(sharpened.get_pixel(2, 2).0[0], 255);
        // far from the spike, nothing changes
        assert_eq!(sharpened.get_pixel(0, 0).0[0], 0);
    }

    #[test]
    fn checkerboard_contrast_is_amplified() {
        let board = GrayImage::from_fn(6, 6, |x, y| {
            if (x + y) % 2 == 0 {
                Luma([150])
            } else {
                Luma([100])
            }
        });
        let sharpened = sharpen(board.clone());
        for (x, y, pixel) in sharpened.enumerate_pixels() {
            let before = board.get_pixel(x, y).0[0];
            let expected = if before == 150 { 255 } else { 0 };
            assert_eq!(pixel.0[0], expected, "at {x},{y}");
        }
    }

    #[test]
    fn non_luma_input_is_converted_first() {
        let mut image = Image::from(DynamicImage::new_rgb8(4, 3));
        convolve(&mut image, &Kernel3x3::SHARPEN).unwrap();
        assert_eq!(image.pixels.as_luma8().unwrap().dimensions(), (4, 3));
    }

    #[quickcheck]
    fn dimensions_are_preserved(width: NonZeroU8, height: NonZeroU8, seed: u8) -> bool {
        let (width, height) = (u32::from(width.get()), u32::from(height.get()));
        let noisy = GrayImage::from_fn(width, height, |x, y| {
            Luma([(x.wrapping_mul(31) ^ y.wrapping_mul(17) ^ u32::from(seed)) as u8])
        });
        sharpen(noisy).dimensions() == (width, height)
    }

    #[quickcheck]
    fn flat_images_stay_flat(width: NonZeroU8, height: NonZeroU8, value: u8) -> bool {
        let (width, height) = (u32::from(width.get()), u32::from(height.get()));
        let flat = GrayImage::from_pixel(width, height, Luma([value]));
        sharpen(flat.clone()) == flat
    }
}
