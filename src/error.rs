use std::fmt::{Debug, Display};

/// Which stage of the pipeline failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The command line could not be turned into a plan
    Args,
    /// The input could not be read or decoded as an image
    Decode,
    /// No encoder for the output, or the encoder itself failed
    Encode,
    /// The output file could not be created or written
    Io,
}

pub struct EnhanceError {
    pub kind: ErrorKind,
    pub message: String,
}

impl EnhanceError {
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Display for EnhanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for EnhanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnhanceError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for EnhanceError {}

#[macro_export]
macro_rules! enh_err {
    ($kind:expr, $($arg:tt)+) => {
        $crate::error::EnhanceError::new(
            $kind,
            format!(
                "ocr-enhance: {} @ {}:{}:{}",
                format_args!($($arg)+),
                file!(),
                line!(),
                column!()
            ),
        )
    };
}

#[macro_export]
macro_rules! enh_try {
    ($kind:expr, $expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::enh_err!($kind, "{}", err));
            }
        }
    };
}
