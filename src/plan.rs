use std::path::PathBuf;

use crate::{
    decode::decode,
    encode::encode,
    error::EnhanceError,
    operations::{Kernel3x3, Operation},
};

/// Everything a single run does: where to read, what to apply, where to write.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancePlan {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub ops: Vec<Operation>,
}

impl EnhancePlan {
    /// The OCR preprocessing pipeline: Rec. 601 grayscale, then sharpen.
    pub fn new(input_file: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            output_file: output_file.into(),
            ops: vec![
                Operation::Grayscale,
                Operation::Convolve(Kernel3x3::SHARPEN),
            ],
        }
    }

    pub fn execute(&self) -> Result<(), EnhanceError> {
        crate::init::init();
        let mut image = decode(&self.input_file)?;

        for operation in &self.ops {
            operation.execute(&mut image)?;
        }

        encode(&image, &self.output_file)
    }
}
