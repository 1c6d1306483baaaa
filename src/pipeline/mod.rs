/// Image editing pipeline
///
/// This module handles:
/// - Decoding the selected file (loader.rs)
/// - Applying the fixed sharpen filter (sharpen.rs)
/// - Writing the edited image as PNG (export.rs)
/// - Building in-memory previews for the UI (preview.rs)
///
/// [`ImagePipeline`] owns the current session. It is either empty or
/// holds a source image together with its sharpened edit.
use log::info;
use std::path::{Path, PathBuf};

use crate::error::{PipelineError, PipelineResult};
use crate::state::{EditedImage, PipelineConfig, Session, SourceImage};

pub mod export;
pub mod loader;
pub mod preview;
pub mod sharpen;

pub use export::SaveJob;
pub use loader::Opened;
pub use preview::Preview;

pub struct ImagePipeline {
    config: PipelineConfig,
    session: Option<Session>,
}

impl ImagePipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.session.as_ref().map(|s| &s.source)
    }

    pub fn edited(&self) -> Option<&EditedImage> {
        self.session.as_ref().map(|s| &s.edited)
    }

    /// Decode and sharpen `path`, replacing the current session.
    ///
    /// On failure the previous session is kept as it was.
    pub fn open(&mut self, path: &Path) -> PipelineResult<&Session> {
        let session = loader::open_session(path)?;
        Ok(self.install(session))
    }

    /// Replace the current session with one built elsewhere (e.g. on a worker)
    pub fn install(&mut self, session: Session) -> &Session {
        info!("🖼️  Session ready for {}", session.source.path().display());
        self.session.insert(session)
    }

    /// Path the current edit would be saved to
    pub fn output_path(&self) -> Option<PathBuf> {
        self.edited()
            .map(|edited| self.config.output_path(edited.source_path()))
    }

    /// Capture what a save would write, without touching the disk
    pub fn save_job(&self) -> PipelineResult<SaveJob> {
        let edited = self.edited().ok_or(PipelineError::NothingToSave)?;
        let target = self.config.output_path(edited.source_path());
        Ok(SaveJob::new(edited.clone(), target))
    }

    /// Write the edited image and return where it went
    pub fn save(&self) -> PipelineResult<PathBuf> {
        self.save_job()?.run()
    }
}

impl Default for ImagePipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}
