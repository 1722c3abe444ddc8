#![no_main]

use libfuzzer_sys::fuzz_target;
use ocr_enhance_fuzz::StructuredImage;

fuzz_target!(|image: StructuredImage| {
    let temp_directory = tempfile::tempdir().expect("failed to create temporary directory");
    let input_path = temp_directory.path().join("input_image.png");
    let output_path = temp_directory.path().join("output_image.png");
    image
        .save_as_png(&input_path)
        .expect("failed to save image as PNG");

    ocr_enhance::enhance(&input_path, &output_path).expect("enhancing a valid PNG must succeed");

    let output = image::open(&output_path).expect("could not open the output file");

    // Contract: same size, one channel.
    assert_eq!(output.color(), image::ColorType::L8);
    assert_eq!(output.width(), u32::from(image.width.get()));
    assert_eq!(output.height(), u32::from(image.height.get()));
});
