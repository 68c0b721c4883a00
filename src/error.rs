use std::io;
use std::path::PathBuf;

/// Conversion errors. All of these are terminal: the caller reports the
/// message once on the error stream and exits nonzero. Nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("font image '{}' not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error(
        "'{}' is not a recognized image format (supported: PNG, GIF, JPEG, BMP)",
        path.display()
    )]
    UnrecognizedFormat { path: PathBuf },

    #[error(
        "font image must be 128x128 pixels, got {width}x{height} \
         (the sheet is a 16x16 grid of 8x8 pixel glyphs)"
    )]
    DimensionMismatch { width: u32, height: u32 },

    #[error("could not decode font image: {0}")]
    Decode(image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
