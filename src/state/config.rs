/// Pipeline configuration
///
/// Nothing here is persisted; the defaults are resolved from the
/// user's directories at startup.
use log::warn;
use std::path::{Path, PathBuf};

/// Base name the first release of the editor used for every save.
pub const LEGACY_BASE_NAME: &str = "temp_image";

/// Suffix appended to the base name of every saved file
pub const EDITED_SUFFIX: &str = "_edited";

/// Longest side of the on-screen previews, in pixels
const DEFAULT_PREVIEW_SIDE: u32 = 200;

/// How the output file is named
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputNaming {
    /// Use the stem of the selected input file ("cat.jpg" → "cat")
    SourceStem,
    /// Use the same base name for every save
    Fixed(String),
}

impl OutputNaming {
    /// Naming used by the first release: every save lands on `temp_image_edited.png`
    pub fn legacy() -> Self {
        OutputNaming::Fixed(LEGACY_BASE_NAME.to_string())
    }

    /// Resolve the base name for an image decoded from `source`
    pub fn base_name(&self, source: &Path) -> String {
        match self {
            OutputNaming::SourceStem => source
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .filter(|stem| !stem.is_empty())
                .unwrap_or_else(|| LEGACY_BASE_NAME.to_string()),
            OutputNaming::Fixed(name) => name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory saved images are written to
    pub output_dir: PathBuf,
    pub naming: OutputNaming,
    pub preview_side: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            naming: OutputNaming::SourceStem,
            preview_side: DEFAULT_PREVIEW_SIDE,
        }
    }
}

impl PipelineConfig {
    /// Default configuration writing into `dir` instead of ~/Downloads
    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn naming(mut self, naming: OutputNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Full path an image decoded from `source` is saved to
    pub fn output_path(&self, source: &Path) -> PathBuf {
        let base = self.naming.base_name(source);
        self.output_dir.join(format!("{}{}.png", base, EDITED_SUFFIX))
    }
}

/// Get the directory edited images are saved to
/// Returns ~/Downloads on every platform
fn default_output_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join("Downloads"),
        None => {
            warn!("⚠️  Could not determine home directory, saving into ./Downloads");
            PathBuf::from("Downloads")
        }
    }
}
