use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{GrayImage, ImageError, ImageReader};
use log::debug;

use crate::error::ConvertError;

/// Sheet geometry. One glyph cell is 8x8 pixels and the sheet is a 16x16
/// grid of cells, one cell per single-byte character code.
pub const SHEET_WIDTH: u32 = 128;
pub const SHEET_HEIGHT: u32 = 128;
pub const GRID_COLUMNS: usize = 16;
pub const GRID_ROWS: usize = 16;
pub const CELL_WIDTH: usize = 8;
pub const CELL_HEIGHT: usize = 8;

/// A validated 128x128 grayscale font sheet.
///
/// Construction checks the dimensions, so cell math downstream never goes
/// out of bounds. The grid is immutable after construction.
pub struct PixelGrid {
    data: Vec<u8>,
}

impl PixelGrid {
    /// Decode the image at `path` and validate its dimensions.
    ///
    /// The container format is sniffed from the file content rather than
    /// trusted from the extension. Color images are reduced to 8-bit luma
    /// by the decoder's standard luminance conversion.
    pub fn load(path: &Path) -> Result<PixelGrid, ConvertError> {
        let file = File::open(path).map_err(|err| open_error(err, path))?;
        let reader = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(ConvertError::Io)?;
        let decoded = reader.decode().map_err(|err| decode_error(err, path))?;
        debug!(
            "decoded {}: {}x{}",
            path.display(),
            decoded.width(),
            decoded.height()
        );
        PixelGrid::from_luma(decoded.to_luma8())
    }

    /// Validate an already-decoded grayscale buffer.
    pub fn from_luma(image: GrayImage) -> Result<PixelGrid, ConvertError> {
        let (width, height) = image.dimensions();
        if width != SHEET_WIDTH || height != SHEET_HEIGHT {
            return Err(ConvertError::DimensionMismatch { width, height });
        }
        Ok(PixelGrid {
            data: image.into_raw(),
        })
    }

    /// Intensity at sheet pixel (x, y), row-major.
    #[inline]
    pub fn intensity(&self, x: usize, y: usize) -> u8 {
        self.data[y * SHEET_WIDTH as usize + x]
    }
}

fn open_error(err: std::io::Error, path: &Path) -> ConvertError {
    if err.kind() == std::io::ErrorKind::NotFound {
        ConvertError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        ConvertError::Io(err)
    }
}

fn decode_error(err: ImageError, path: &Path) -> ConvertError {
    match err {
        // Content the decoder cannot identify at all vs. content that was
        // identified but failed mid-decode are reported as distinct errors.
        ImageError::Unsupported(_) => ConvertError::UnrecognizedFormat {
            path: path.to_path_buf(),
        },
        other => ConvertError::Decode(other),
    }
}
