//! End-to-end icon generation.
//!
//! [`IconGenerator`] wires the pieces together the way the whole utility
//! runs: one decoded source, each target rendered in ascending size order,
//! each rendered icon exported under its fixed filename.

use std::path::{Path, PathBuf};

use crate::error::IconError;
use crate::export::ExportRequest;
use crate::icon::{IconTarget, RenderedIcon, SourceImage, STANDARD_TARGETS};
use crate::render;

/// Renders and exports icons from a single source image.
///
/// # Example
///
/// ```no_run
/// use appicon_renderer::{IconGenerator, ImageLoader};
///
/// let mut loader = ImageLoader::new();
/// loader.resolve_from_path("logo.png")?;
/// let generator = IconGenerator::new(loader.source().unwrap().clone());
/// generator.export_standard("public")?;
/// # Ok::<(), appicon_renderer::IconError>(())
/// ```
pub struct IconGenerator {
    source: SourceImage,
}

impl IconGenerator {
    /// Creates a generator over a decoded source image.
    pub fn new(source: SourceImage) -> Self {
        Self { source }
    }

    /// Returns the source image every icon is derived from.
    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    /// Renders one target size.
    pub fn render_target(&self, target: IconTarget) -> Result<RenderedIcon, IconError> {
        render::render(&self.source, target.size)
    }

    /// Renders the standard targets (192, then 512) sequentially.
    pub fn render_standard(&self) -> Result<Vec<(IconTarget, RenderedIcon)>, IconError> {
        STANDARD_TARGETS
            .iter()
            .map(|&target| Ok((target, self.render_target(target)?)))
            .collect()
    }

    /// Renders and exports the standard targets into `dir`.
    ///
    /// Writes `icon-192.png` and `icon-512.png` and returns the written
    /// paths in that order.
    pub fn export_standard(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, IconError> {
        let dir = dir.as_ref();
        let mut written = Vec::with_capacity(STANDARD_TARGETS.len());

        for (target, icon) in self.render_standard()? {
            let path = ExportRequest::new(&icon, target.filename()).execute(dir)?;
            log::info!("exported {}x{} icon to {}", icon.size(), icon.size(), path.display());
            written.push(path);
        }

        Ok(written)
    }
}
