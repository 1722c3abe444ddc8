use std::{num::NonZeroU8, path::Path};

use arbitrary::Unstructured;
use image::{ImageBuffer, ImageResult, RgbImage};

/// A small RGB image whose pixel data is fully determined by the fuzzer input.
#[derive(Debug)]
pub struct StructuredImage {
    pub width: NonZeroU8,
    pub height: NonZeroU8,
    pub rgb_data: Vec<u8>,
}

impl StructuredImage {
    pub fn to_rgb8(&self) -> RgbImage {
        let width = u32::from(self.width.get());
        ImageBuffer::from_fn(width, u32::from(self.height.get()), |x, y| {
            let idx = (y * width + x) as usize * 3;
            image::Rgb([
                self.rgb_data[idx],
                self.rgb_data[idx + 1],
                self.rgb_data[idx + 2],
            ])
        })
    }

    pub fn save_as_png(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        self.to_rgb8().save_with_format(path, image::ImageFormat::Png)
    }
}

impl<'a> arbitrary::Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let width: NonZeroU8 = unstructured.arbitrary()?;
        let height: NonZeroU8 = unstructured.arbitrary()?;
        let rgb_data_len = width.get() as usize * height.get() as usize * 3;
        let rgb_data = unstructured.bytes(rgb_data_len)?;

        Ok(Self {
            width,
            height,
            rgb_data: rgb_data.to_vec(),
        })
    }
}
