#![no_main]

use libfuzzer_sys::fuzz_target;
use ocr_enhance::error::ErrorKind;

// Arbitrary bytes must either go through the pipeline or produce an error, never panic.
fuzz_target!(|data: &[u8]| {
    let temp_directory = tempfile::tempdir().expect("failed to create temporary directory");
    let input_path = temp_directory.path().join("input");
    let output_path = temp_directory.path().join("output.png");
    std::fs::write(&input_path, data).expect("failed to write fuzzer input");

    if let Err(error) = ocr_enhance::enhance(&input_path, &output_path) {
        if error.kind() == ErrorKind::Decode {
            assert!(!output_path.exists(), "{error}");
        }
    }
});
