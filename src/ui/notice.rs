/// User-facing notices
///
/// Every outcome the user needs to hear about (errors, warnings, a
/// successful save) becomes a [`Notice`], shown in the status line and
/// as a native message box.
use log::{error, info, warn};
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use std::path::Path;

use crate::error::PipelineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: &'static str,
    pub body: String,
}

impl Notice {
    pub fn saved(path: &Path) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: "Success",
            body: format!("Image saved to {}", path.display()),
        }
    }

    /// Status line text
    pub fn status(&self) -> String {
        match self.level {
            NoticeLevel::Info => format!("✅ {}", self.body),
            NoticeLevel::Warning => format!("⚠️  {}", self.body),
            NoticeLevel::Error => format!("❌ {}", self.body),
        }
    }

    /// Log the notice and show it in a blocking native message box
    pub fn show(&self) {
        match self.level {
            NoticeLevel::Info => info!("{}", self.body),
            NoticeLevel::Warning => warn!("{}", self.body),
            NoticeLevel::Error => error!("{}", self.body),
        }

        let level = match self.level {
            NoticeLevel::Info => MessageLevel::Info,
            NoticeLevel::Warning => MessageLevel::Warning,
            NoticeLevel::Error => MessageLevel::Error,
        };

        let _ = MessageDialog::new()
            .set_level(level)
            .set_title(self.title)
            .set_description(self.body.as_str())
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

impl From<&PipelineError> for Notice {
    fn from(err: &PipelineError) -> Self {
        match err {
            PipelineError::NoSelection => Notice {
                level: NoticeLevel::Warning,
                title: "Warning",
                body: "No file selected. Please select an image file.".to_string(),
            },
            PipelineError::NothingToSave => Notice {
                level: NoticeLevel::Warning,
                title: "Warning",
                body: "No edited image to save.".to_string(),
            },
            PipelineError::Decode { .. } | PipelineError::Filter { .. } => Notice {
                level: NoticeLevel::Error,
                title: "Error",
                body: format!("Failed to process the image: {}", err),
            },
            PipelineError::Save { .. } => Notice {
                level: NoticeLevel::Error,
                title: "Error",
                body: format!("Failed to save the image: {}", err),
            },
            PipelineError::Worker(_) => Notice {
                level: NoticeLevel::Error,
                title: "Error",
                body: err.to_string(),
            },
        }
    }
}
