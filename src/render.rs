//! The icon renderer: center-crop, scale, rounded-corner mask.
//!
//! [`render`] is a pure function of `(source, size)`: it extracts the
//! largest centered square from the source, scales it to the target edge
//! length, and masks the corners with a rounded rectangle whose radius is
//! 10% of the edge length. Rendering the same inputs twice yields
//! pixel-identical output.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::IconError;
use crate::icon::{CropRegion, RenderedIcon, SizePx, SourceImage};

/// Corner radius as a fraction of the icon edge length.
///
/// Recomputed per target size so the visual proportion is scale-invariant:
/// a 192 icon gets a 19.2px radius, a 512 icon gets 51.2px.
pub const CORNER_RADIUS_RATIO: f32 = 0.10;

/// Resampling filter used when scaling the crop to the target size.
///
/// Bilinear, matching the default a browser canvas applies; the filter is
/// deliberately not configurable.
const SCALE_FILTER: FilterType = FilterType::Triangle;

// ============================================================================
// Core Algorithm
// ============================================================================

/// Computes the largest centered square region of an image.
///
/// The edge is `min(width, height)` and the origin is the centered offset
/// (integer division). For a square image this covers the whole buffer.
pub fn center_crop_region(dims: SizePx) -> CropRegion {
    let edge = dims.width.min(dims.height);
    CropRegion::new((dims.width - edge) / 2, (dims.height - edge) / 2, edge)
}

/// Returns the rounded-corner radius for a given icon size.
pub fn corner_radius(size: u32) -> f32 {
    size as f32 * CORNER_RADIUS_RATIO
}

/// Renders a square rounded-corner icon at the given edge length.
///
/// Steps:
/// 1. center-crop the source to its largest centered square;
/// 2. scale the crop to `size x size`;
/// 3. apply the rounded-rectangle alpha mask.
///
/// Returns [`IconError::InvalidSize`] if `size` is zero.
pub fn render(source: &SourceImage, size: u32) -> Result<RenderedIcon, IconError> {
    if size == 0 {
        return Err(IconError::InvalidSize);
    }

    let region = center_crop_region(source.dimensions());
    log::debug!(
        "rendering {size}x{size} icon from crop ({}, {}) edge {}",
        region.x,
        region.y,
        region.edge
    );

    let cropped =
        imageops::crop_imm(source.data(), region.x, region.y, region.edge, region.edge).to_image();
    let mut scaled = imageops::resize(&cropped, size, size, SCALE_FILTER);

    apply_rounded_mask(&mut scaled, corner_radius(size));

    Ok(RenderedIcon::new(scaled))
}

// ============================================================================
// Rounded-Rectangle Mask
// ============================================================================

/// Masks a square buffer to a rounded rectangle of the given corner radius.
///
/// Pixels outside the rounded rectangle become fully transparent; pixels
/// inside keep their color and alpha. The quarter-circle corner arcs are
/// evaluated as a continuous path, so edge pixels get fractional coverage
/// rather than a hard jagged cut.
fn apply_rounded_mask(img: &mut RgbaImage, radius: f32) {
    let edge = img.width() as f32;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        // Sample at the pixel center.
        let coverage = rounded_rect_coverage(x as f32 + 0.5, y as f32 + 0.5, edge, radius);
        if coverage < 1.0 {
            pixel[3] = (pixel[3] as f32 * coverage).round() as u8;
        }
    }
}

/// Coverage of a point by a rounded rectangle spanning `(0, 0)..(edge, edge)`.
///
/// Returns 1.0 strictly inside, 0.0 strictly outside, and a linear ramp
/// across the one-pixel band around each corner arc. Points outside the
/// corner zones are always fully covered (the straight edges coincide with
/// the buffer boundary).
fn rounded_rect_coverage(px: f32, py: f32, edge: f32, radius: f32) -> f32 {
    let cx = if px < radius {
        radius
    } else if px > edge - radius {
        edge - radius
    } else {
        return 1.0;
    };
    let cy = if py < radius {
        radius
    } else if py > edge - radius {
        edge - radius
    } else {
        return 1.0;
    };

    let dist = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
    (radius - dist + 0.5).clamp(0.0, 1.0)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid_source(width: u32, height: u32, color: [u8; 4]) -> SourceImage {
        SourceImage::new(RgbaImage::from_pixel(width, height, Rgba(color)))
    }

    #[test]
    fn crop_region_landscape() {
        // width >= height: x offset is (width-height)/2, full height kept
        let region = center_crop_region(SizePx::new(800, 600));
        assert_eq!(region, CropRegion::new(100, 0, 600));
    }

    #[test]
    fn crop_region_portrait() {
        let region = center_crop_region(SizePx::new(600, 800));
        assert_eq!(region, CropRegion::new(0, 100, 600));
    }

    #[test]
    fn crop_region_square_is_noop() {
        let region = center_crop_region(SizePx::new(512, 512));
        assert_eq!(region, CropRegion::new(0, 0, 512));
    }

    #[test]
    fn radius_scales_linearly() {
        assert!((corner_radius(192) - 19.2).abs() < 1e-4);
        assert!((corner_radius(512) - 51.2).abs() < 1e-4);
        assert!((corner_radius(512) - corner_radius(192) * (512.0 / 192.0)).abs() < 1e-4);
    }

    #[test]
    fn rendered_dimensions_match_request() {
        let source = solid_source(800, 600, [10, 20, 30, 255]);
        for size in [1, 16, 192, 512] {
            let icon = render(&source, size).unwrap();
            assert_eq!(icon.size(), size);
            assert_eq!(icon.data().width(), size);
            assert_eq!(icon.data().height(), size);
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        let source = solid_source(64, 64, [0, 0, 0, 255]);
        assert!(matches!(render(&source, 0), Err(IconError::InvalidSize)));
    }

    #[test]
    fn corners_transparent_center_opaque() {
        let source = solid_source(800, 600, [200, 50, 50, 255]);
        let icon = render(&source, 192).unwrap();
        let img = icon.data();

        // All four extreme corner pixels are outside the rounded path.
        for (x, y) in [(0, 0), (191, 0), (0, 191), (191, 191)] {
            assert_eq!(img.get_pixel(x, y)[3], 0, "corner ({x}, {y})");
        }

        // The center retains the source-derived color and alpha.
        let center = img.get_pixel(96, 96);
        assert_eq!(center.0, [200, 50, 50, 255]);
    }

    #[test]
    fn source_alpha_preserved_inside_mask() {
        let source = solid_source(64, 64, [0, 255, 0, 128]);
        let icon = render(&source, 192).unwrap();
        assert_eq!(icon.data().get_pixel(96, 96)[3], 128);
    }

    #[test]
    fn render_is_idempotent() {
        let mut img = RgbaImage::new(300, 200);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            pixel.0 = [(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255];
        }
        let source = SourceImage::new(img);

        let first = render(&source, 192).unwrap();
        let second = render(&source, 192).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn coverage_edges_and_center() {
        // Midpoints of the straight edges are fully covered.
        assert_eq!(rounded_rect_coverage(96.0, 0.5, 192.0, 19.2), 1.0);
        assert_eq!(rounded_rect_coverage(0.5, 96.0, 192.0, 19.2), 1.0);
        // Center is fully covered; the exact corner is not covered at all.
        assert_eq!(rounded_rect_coverage(96.0, 96.0, 192.0, 19.2), 1.0);
        assert_eq!(rounded_rect_coverage(0.5, 0.5, 192.0, 19.2), 0.0);
    }

    #[test]
    fn end_to_end_landscape_scenario() {
        // 800x600 source: crop origin (100, 0), edge 600, scaled to 192,
        // radius 19.2, transparent extreme corners, opaque center.
        let source = solid_source(800, 600, [1, 2, 3, 255]);
        assert_eq!(
            center_crop_region(source.dimensions()),
            CropRegion::new(100, 0, 600)
        );

        let icon = render(&source, 192).unwrap();
        assert_eq!(icon.size(), 192);
        for (x, y) in [(0, 0), (191, 0), (0, 191), (191, 191)] {
            assert_eq!(icon.data().get_pixel(x, y)[3], 0);
        }
        assert_eq!(icon.data().get_pixel(96, 96).0, [1, 2, 3, 255]);
    }
}
