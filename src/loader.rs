//! One-shot source image loading.
//!
//! [`ImageLoader`] models the single decode step that feeds the renderer:
//! it resolves exactly once per instance, from a file path or an in-memory
//! byte buffer, and hands the decoded [`SourceImage`] to every registered
//! consumer exactly once. There is no retry and no cancellation; a failed
//! decode leaves the loader in a terminal failed state with no consumer
//! invoked.

use std::path::Path;

use crate::error::IconError;
use crate::icon::SourceImage;

type Consumer = Box<dyn FnOnce(&SourceImage)>;

enum LoadState {
    /// Not yet resolved; consumers wait here.
    Pending(Vec<Consumer>),
    Loaded(SourceImage),
    Failed,
}

/// A single-attempt loader for the source image.
///
/// # Example
///
/// ```no_run
/// use appicon_renderer::ImageLoader;
///
/// let mut loader = ImageLoader::new();
/// loader.subscribe(|source| {
///     println!("decoded {:?}", source.dimensions());
/// });
/// loader.resolve_from_path("logo.png")?;
/// # Ok::<(), appicon_renderer::IconError>(())
/// ```
pub struct ImageLoader {
    state: LoadState,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoader {
    /// Creates a loader with no source resolved.
    pub fn new() -> Self {
        Self {
            state: LoadState::Pending(Vec::new()),
        }
    }

    /// Registers a consumer to be invoked once with the decoded image.
    ///
    /// If the loader has already resolved, the consumer runs immediately.
    /// If the decode failed, the consumer is dropped without being invoked.
    pub fn subscribe(&mut self, consumer: impl FnOnce(&SourceImage) + 'static) {
        match &mut self.state {
            LoadState::Pending(consumers) => consumers.push(Box::new(consumer)),
            LoadState::Loaded(source) => consumer(source),
            LoadState::Failed => {}
        }
    }

    /// Decodes the source from a file on disk.
    ///
    /// Single attempt: calling this (or [`resolve_from_memory`]) again
    /// after any resolution returns [`IconError::AlreadyResolved`].
    ///
    /// [`resolve_from_memory`]: Self::resolve_from_memory
    pub fn resolve_from_path(&mut self, path: impl AsRef<Path>) -> Result<&SourceImage, IconError> {
        let path = path.as_ref();
        self.ensure_pending()?;

        let bytes = std::fs::read(path)?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());
        self.decode(&bytes)
    }

    /// Decodes the source from an in-memory encoded buffer.
    pub fn resolve_from_memory(&mut self, bytes: &[u8]) -> Result<&SourceImage, IconError> {
        self.ensure_pending()?;
        self.decode(bytes)
    }

    /// Returns the decoded source, if resolution succeeded.
    pub fn source(&self) -> Option<&SourceImage> {
        match &self.state {
            LoadState::Loaded(source) => Some(source),
            _ => None,
        }
    }

    /// Returns true once a resolution attempt has been made.
    pub fn is_resolved(&self) -> bool {
        !matches!(self.state, LoadState::Pending(_))
    }

    fn ensure_pending(&self) -> Result<(), IconError> {
        if self.is_resolved() {
            return Err(IconError::AlreadyResolved);
        }
        Ok(())
    }

    fn decode(&mut self, bytes: &[u8]) -> Result<&SourceImage, IconError> {
        let decoded = match image::load_from_memory(bytes) {
            Ok(img) => img.to_rgba8(),
            Err(e) => {
                log::warn!("source image decode failed: {e}");
                self.state = LoadState::Failed;
                return Err(IconError::Decode(e));
            }
        };

        let source = SourceImage::new(decoded);
        let consumers = match std::mem::replace(&mut self.state, LoadState::Loaded(source)) {
            LoadState::Pending(consumers) => consumers,
            // ensure_pending ran first
            _ => Vec::new(),
        };

        let LoadState::Loaded(source) = &self.state else {
            unreachable!("state was just set to Loaded");
        };
        for consumer in consumers {
            consumer(source);
        }
        Ok(source)
    }
}
