//! appicon-renderer: square rounded-corner app icons from a single image.
//!
//! This crate turns one source image into fixed-size launcher/PWA icons:
//! it center-crops the image to its largest square, scales the crop to the
//! target edge length, applies a rounded-rectangle alpha mask with a
//! corner radius of 10% of the size, and serializes the result as a
//! lossless PNG named `icon-{size}.png`.
//!
//! # Example
//!
//! ```no_run
//! use appicon_renderer::{IconGenerator, ImageLoader, manifest, STANDARD_TARGETS};
//!
//! // Decode the source once.
//! let mut loader = ImageLoader::new();
//! let source = loader.resolve_from_path("logo.png")?.clone();
//!
//! // Render and save icon-192.png and icon-512.png.
//! let generator = IconGenerator::new(source);
//! generator.export_standard("public")?;
//!
//! // Matching manifest.json `icons` fragment.
//! println!("{}", manifest::icons_json(&STANDARD_TARGETS).unwrap());
//! # Ok::<(), appicon_renderer::IconError>(())
//! ```
//!
//! # Rendering a single size
//!
//! The core is a pure function of `(source, size)`:
//!
//! ```
//! use appicon_renderer::{render, SourceImage};
//! use image::{Rgba, RgbaImage};
//!
//! let source = SourceImage::new(RgbaImage::from_pixel(800, 600, Rgba([9, 9, 9, 255])));
//! let icon = render(&source, 192)?;
//! assert_eq!(icon.size(), 192);
//! assert_eq!(icon.data().get_pixel(0, 0)[3], 0); // rounded corner
//! # Ok::<(), appicon_renderer::IconError>(())
//! ```

mod error;
mod export;
mod generator;
mod icon;
mod loader;
pub mod manifest;
mod render;

pub use error::IconError;
pub use export::{encode_png, ExportPayload, ExportRequest};
pub use generator::IconGenerator;
pub use icon::{
    CropRegion, IconTarget, RenderedIcon, SizePx, SourceImage, STANDARD_TARGETS,
};
pub use loader::ImageLoader;
pub use render::{center_crop_region, corner_radius, render, CORNER_RADIUS_RATIO};
