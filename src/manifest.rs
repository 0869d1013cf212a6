//! Web-manifest icon entries.
//!
//! The generated icons are meant to be referenced from a web app manifest.
//! This module emits the matching `icons` array fragment so the caller can
//! drop it straight into `manifest.json`.
//!
//! # Example
//!
//! ```
//! use appicon_renderer::{manifest, STANDARD_TARGETS};
//!
//! let json = manifest::icons_json(&STANDARD_TARGETS).unwrap();
//! assert!(json.contains("icon-192.png"));
//! ```

use serde::{Deserialize, Serialize};

use crate::icon::IconTarget;

/// One entry of a web manifest `icons` array.
///
/// Serializes to the manifest's own key names:
///
/// ```json
/// { "src": "icon-192.png", "sizes": "192x192", "type": "image/png" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    /// Path of the icon file, relative to the manifest.
    pub src: String,

    /// Space-separated size list; always a single `WxH` entry here.
    pub sizes: String,

    /// MIME type of the icon.
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl ManifestIcon {
    /// Builds the manifest entry for a target size.
    pub fn for_target(target: IconTarget) -> Self {
        Self {
            src: target.filename(),
            sizes: format!("{0}x{0}", target.size),
            mime_type: "image/png".to_string(),
        }
    }
}

/// Builds manifest entries for a list of targets, in order.
pub fn manifest_icons(targets: &[IconTarget]) -> Vec<ManifestIcon> {
    targets.iter().copied().map(ManifestIcon::for_target).collect()
}

/// Serializes the `icons` array fragment as pretty-printed JSON.
pub fn icons_json(targets: &[IconTarget]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&manifest_icons(targets))
}
