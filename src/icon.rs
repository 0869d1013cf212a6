//! Core types for icon generation.
//!
//! This module provides the pixel-buffer types that flow through the
//! crate: a decoded [`SourceImage`], the square [`RenderedIcon`] derived
//! from it, and the [`IconTarget`] sizes the renderer is asked for.

use image::RgbaImage;

use crate::error::IconError;

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// A square region within a source image, in pixel coordinates.
///
/// Produced by [`center_crop_region`](crate::render::center_crop_region);
/// `edge` is both the width and height of the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CropRegion {
    /// X offset from the left edge of the image.
    pub x: u32,
    /// Y offset from the top edge of the image.
    pub y: u32,
    /// Side length of the square region.
    pub edge: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, edge: u32) -> Self {
        Self { x, y, edge }
    }
}

/// A decoded source image.
///
/// The pixel buffer is read-only once constructed: the loader decodes it
/// a single time and every icon is derived from the same unmodified data.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    data: RgbaImage,
}

impl SourceImage {
    /// Wraps an already-decoded RGBA buffer.
    pub fn new(data: RgbaImage) -> Self {
        Self { data }
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// Returns the underlying pixel buffer.
    pub fn data(&self) -> &RgbaImage {
        &self.data
    }
}

/// A rendered square icon with rounded-corner transparency.
///
/// Invariant: the buffer is always square (`width == height == size`).
/// Values are only produced by [`render`](crate::render::render) or the
/// checked [`from_image`](Self::from_image) constructor, so the invariant
/// holds for every reachable `RenderedIcon`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedIcon {
    data: RgbaImage,
}

impl RenderedIcon {
    /// Wraps a buffer the renderer has already shaped.
    pub(crate) fn new(data: RgbaImage) -> Self {
        debug_assert_eq!(data.width(), data.height());
        Self { data }
    }

    /// Wraps an externally produced buffer, rejecting non-square input.
    pub fn from_image(data: RgbaImage) -> Result<Self, IconError> {
        if data.width() != data.height() {
            return Err(IconError::NotSquare {
                width: data.width(),
                height: data.height(),
            });
        }
        Ok(Self { data })
    }

    /// Returns the edge length of the icon.
    pub fn size(&self) -> u32 {
        self.data.width()
    }

    /// Returns the pixel buffer.
    pub fn data(&self) -> &RgbaImage {
        &self.data
    }

    /// Consumes the icon, returning the pixel buffer.
    pub fn into_inner(self) -> RgbaImage {
        self.data
    }
}

/// A requested output size for a generated icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconTarget {
    /// Output edge length in pixels.
    pub size: u32,
}

impl IconTarget {
    pub const fn new(size: u32) -> Self {
        Self { size }
    }

    /// The fixed output filename for this target, `icon-{size}.png`.
    pub fn filename(&self) -> String {
        format!("icon-{}.png", self.size)
    }
}

/// The standard target sizes, in the order they are rendered.
pub const STANDARD_TARGETS: [IconTarget; 2] = [IconTarget::new(192), IconTarget::new(512)];
