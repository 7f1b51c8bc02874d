use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError, ImageFormat, ImageReader, RgbaImage};
use log::{debug, info};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] ImageError),

    #[error("Can't tell which format to write for {0}")]
    UnknownFormat(PathBuf),
}

/// A decoded file together with the container format it was read from.
pub struct LoadedImage {
    pub image: DynamicImage,
    pub format: Option<ImageFormat>,
}

/// Converts between files on disk and in-memory pixel buffers.
pub trait ImageCodec {
    /// Decode `path` keeping its original channel layout.
    fn load(&self, path: &Path) -> Result<LoadedImage, CodecError>;

    /// Overwrite `path` with `image`.
    ///
    /// The format is taken from the path's extension, and `fallback` (usually
    /// the format the file was decoded from) is used when the extension is
    /// not recognised.
    fn save(
        &self,
        path: &Path,
        image: &RgbaImage,
        fallback: Option<ImageFormat>,
    ) -> Result<(), CodecError>;
}

/// The `image` crate backed codec, reading and writing the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsCodec;

impl ImageCodec for FsCodec {
    fn load(&self, path: &Path) -> Result<LoadedImage, CodecError> {
        // Sniff the content instead of trusting the extension
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let format = reader.format();
        debug!("Detected format {:?} for {}", format, path.display());

        let image = reader.decode()?;
        Ok(LoadedImage { image, format })
    }

    fn save(
        &self,
        path: &Path,
        image: &RgbaImage,
        fallback: Option<ImageFormat>,
    ) -> Result<(), CodecError> {
        let format = ImageFormat::from_path(path)
            .ok()
            .or(fallback)
            .ok_or_else(|| CodecError::UnknownFormat(path.to_path_buf()))?;

        // Encode fully before touching the file so a failed encode leaves it intact
        let encoded = encode(image, format)?;
        fs::write(path, &encoded)?;
        info!(
            "Wrote {} bytes as {:?} to {}",
            encoded.len(),
            format,
            path.display()
        );

        Ok(())
    }
}

/// Encodes an RGBA buffer into an in-memory file of the given format.
pub fn encode(image: &RgbaImage, format: ImageFormat) -> Result<Vec<u8>, CodecError> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, format)?;
    Ok(buffer.into_inner())
}
