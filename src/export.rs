//! PNG serialization and file export.
//!
//! Exporting is a three-step sequence: encode the icon to PNG bytes,
//! acquire an [`ExportPayload`] over those bytes, and write the payload to
//! its destination. The payload is a use-once handle: writing consumes it,
//! and the buffer is released when the handle goes away, so an acquired
//! payload can never be written twice or leak past its export.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::IconError;
use crate::icon::RenderedIcon;

/// Encodes a rendered icon as lossless PNG bytes.
pub fn encode_png(icon: &RenderedIcon) -> Result<Vec<u8>, IconError> {
    let data = icon.data();
    let mut bytes = Vec::new();

    let encoder = PngEncoder::new(Cursor::new(&mut bytes));
    encoder
        .write_image(
            data.as_raw(),
            data.width(),
            data.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(IconError::Encode)?;

    Ok(bytes)
}

// ============================================================================
// ExportPayload
// ============================================================================

/// A transient handle over an encoded byte buffer.
///
/// Acquired once, written at most once. [`write_to`](Self::write_to)
/// consumes the handle, and dropping it releases the buffer, so the
/// acquire/release pair is guaranteed regardless of whether the write
/// happens.
#[derive(Debug)]
pub struct ExportPayload {
    bytes: Vec<u8>,
}

impl ExportPayload {
    /// Takes ownership of an encoded buffer.
    ///
    /// Returns [`IconError::EmptyPayload`] if the buffer contains no data.
    pub fn acquire(bytes: Vec<u8>) -> Result<Self, IconError> {
        if bytes.is_empty() {
            return Err(IconError::EmptyPayload);
        }
        Ok(Self { bytes })
    }

    /// Returns the encoded bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Writes the payload to `path`, consuming the handle.
    pub fn write_to(self, path: &Path) -> Result<(), IconError> {
        std::fs::write(path, &self.bytes).map_err(|source| IconError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("wrote {} bytes to {}", self.bytes.len(), path.display());
        Ok(())
    }
}

// ============================================================================
// ExportRequest
// ============================================================================

/// A request to save one rendered icon under a given filename.
///
/// Ephemeral: created per export, consumed immediately by
/// [`execute`](Self::execute).
pub struct ExportRequest<'a> {
    pub icon: &'a RenderedIcon,
    pub filename: String,
}

impl<'a> ExportRequest<'a> {
    pub fn new(icon: &'a RenderedIcon, filename: impl Into<String>) -> Self {
        Self {
            icon,
            filename: filename.into(),
        }
    }

    /// Encodes the icon and writes it into `dir` under the request's
    /// filename, returning the full path of the written file.
    pub fn execute(self, dir: &Path) -> Result<PathBuf, IconError> {
        let path = dir.join(&self.filename);
        let payload = ExportPayload::acquire(encode_png(self.icon)?)?;
        payload.write_to(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::SourceImage;
    use crate::render;
    use image::{Rgba, RgbaImage};

    fn test_icon(size: u32) -> RenderedIcon {
        let source = SourceImage::new(RgbaImage::from_pixel(
            size * 2,
            size,
            Rgba([120, 40, 200, 255]),
        ));
        render::render(&source, size).unwrap()
    }

    #[test]
    fn encode_png_roundtrip_512() {
        let icon = test_icon(512);
        let bytes = encode_png(&icon).unwrap();
        assert!(!bytes.is_empty());

        // Decoded output is exactly 512x512 PNG.
        let format = image::guess_format(&bytes).unwrap();
        assert_eq!(format, image::ImageFormat::Png);
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (512, 512));

        // PNG is lossless: the decoded pixels match the rendered buffer.
        assert_eq!(&decoded, icon.data());
    }

    #[test]
    fn payload_rejects_empty_buffer() {
        assert!(matches!(
            ExportPayload::acquire(Vec::new()),
            Err(IconError::EmptyPayload)
        ));
    }

    #[test]
    fn payload_holds_acquired_bytes() {
        let payload = ExportPayload::acquire(vec![1, 2, 3]).unwrap();
        assert_eq!(payload.bytes(), &[1, 2, 3]);
    }

    #[test]
    fn export_request_writes_file() {
        let dir = std::env::temp_dir().join("appicon-export-test");
        std::fs::create_dir_all(&dir).unwrap();

        let icon = test_icon(192);
        let path = ExportRequest::new(&icon, "icon-192.png")
            .execute(&dir)
            .unwrap();
        assert_eq!(path.file_name().unwrap(), "icon-192.png");

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (192, 192));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn export_to_missing_dir_reports_path() {
        let icon = test_icon(16);
        let result = ExportRequest::new(&icon, "icon-16.png")
            .execute(Path::new("/nonexistent/appicon-dir"));
        assert!(matches!(result, Err(IconError::Write { .. })));
    }
}
