use std::path::Path;

use image::ImageReader;
use log::debug;

use crate::{
    enh_err,
    error::{EnhanceError, ErrorKind},
    image::Image,
};

/// Guesses the format based on file contents, falling back to the extension.
///
/// Every failure, including a missing file, is reported as [`ErrorKind::Decode`].
pub fn decode(path: &Path) -> Result<Image, EnhanceError> {
    let not_found = |cause: &dyn std::fmt::Display| {
        enh_err!(
            ErrorKind::Decode,
            "unable to open image `{}': {cause}",
            path.display()
        )
    };

    let reader = ImageReader::open(path).map_err(|e| not_found(&e))?;
    let reader = reader.with_guessed_format().map_err(|e| not_found(&e))?;
    let format = reader.format();
    let pixels = reader.decode().map_err(|e| not_found(&e))?;

    debug!(
        "decoded {} as {:?}: {}x{} {:?}",
        path.display(),
        format,
        pixels.width(),
        pixels.height(),
        pixels.color()
    );
    Ok(Image { pixels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};

    #[test]
    fn missing_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode(&dir.path().join("nope.png")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(err.to_string().contains("unable to open image"));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert_eq!(decode(&path).unwrap_err().kind(), ErrorKind::Decode);
    }

    #[test]
    fn contents_win_over_the_extension() {
        let dir = tempfile::tempdir().unwrap();
        // misleading extension, PNG contents
        let path = dir.path().join("picture.jpg");
        RgbImage::from_pixel(3, 2, Rgb([1, 2, 3]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();
        let image = decode(&path).unwrap();
        assert_eq!((image.pixels.width(), image.pixels.height()), (3, 2));
        let rgb = image.pixels.as_rgb8().unwrap();
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([1, 2, 3]));
    }
}
