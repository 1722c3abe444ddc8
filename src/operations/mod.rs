mod convolve;
mod grayscale;

pub use convolve::Kernel3x3;

use log::debug;

use crate::{error::EnhanceError, image::Image};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Operation {
    /// Rec. 601 luma, always producing 8-bit single-channel pixels
    Grayscale,
    Convolve(Kernel3x3),
}

impl Operation {
    pub fn execute(&self, image: &mut Image) -> Result<(), EnhanceError> {
        debug!("applying {:?}", self);
        match self {
            Operation::Grayscale => grayscale::grayscale(image),
            Operation::Convolve(kernel) => convolve::convolve(image, kernel),
        }
    }
}
