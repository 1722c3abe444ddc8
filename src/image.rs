use image::DynamicImage;

#[derive(Debug, Clone)]
pub struct Image {
    pub pixels: DynamicImage,
}

impl From<DynamicImage> for Image {
    fn from(pixels: DynamicImage) -> Self {
        Self { pixels }
    }
}
