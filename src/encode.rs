use std::{
    ffi::OsStr,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::ImageFormat;
use log::debug;

use crate::{
    enh_err, enh_try,
    error::{EnhanceError, ErrorKind},
    image::Image,
};

pub fn encode(image: &Image, path: &Path) -> Result<(), EnhanceError> {
    // pick the format before touching the filesystem, so that an unsupported
    // extension does not leave an empty file behind
    let format = choose_encoding_format(path)?;
    debug!("encoding {} as {:?}", path.display(), format);

    // `File::create` automatically truncates (overwrites) the file if it exists.
    let file = File::create(path).map_err(|error| {
        enh_err!(
            ErrorKind::Io,
            "unable to open image '{}': {error}",
            path.display()
        )
    })?;
    let mut writer = BufWriter::new(file);

    enh_try!(ErrorKind::Encode, image.pixels.write_to(&mut writer, format));

    // The buffers will be flushed automatically when the writer goes out of scope,
    // but that will not report any errors. This handles errors.
    enh_try!(ErrorKind::Io, writer.flush());
    Ok(())
}

/// The extension alone decides the format. Unknown extensions and formats
/// this build cannot write are errors.
fn choose_encoding_format(path: &Path) -> Result<ImageFormat, EnhanceError> {
    if let Ok(format) = ImageFormat::from_path(path) {
        if format.writing_enabled() {
            return Ok(format);
        }
    }
    let extension = path.extension().unwrap_or(OsStr::new(""));
    Err(enh_err!(
        ErrorKind::Encode,
        "no encode delegate for this image format `{}'",
        extension.to_ascii_uppercase().to_string_lossy()
    ))
}
