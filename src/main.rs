use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use log::info;
use rfd::FileDialog;
use std::path::PathBuf;

use photo_editor::error::PipelineError;
use photo_editor::pipeline::loader::{self, SUPPORTED_EXTENSIONS};
use photo_editor::pipeline::{ImagePipeline, Opened};
use photo_editor::state::PipelineConfig;
use photo_editor::ui::{self, Notice};

/// Main application state
struct PhotoEditor {
    /// The one pipeline instance the window drives
    pipeline: ImagePipeline,
    /// Preview of the original image
    original: Option<Handle>,
    /// Preview of the sharpened image
    edited: Option<Handle>,
    /// Set while an open or save runs in the background
    busy: bool,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Select File" button
    SelectFile,
    /// Background decode + sharpen finished
    Opened(Result<Opened, PipelineError>),
    /// User clicked the "Save Image" button
    SaveImage,
    /// Background write finished
    Saved(Result<PathBuf, PipelineError>),
}

impl PhotoEditor {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = PipelineConfig::default();
        info!(
            "🎨 Photo Editor ready, saving into {}",
            config.output_dir.display()
        );

        (
            PhotoEditor {
                pipeline: ImagePipeline::new(config),
                original: None,
                edited: None,
                busy: false,
                status: "Select an image file to edit".to_string(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectFile => {
                // Only one open/save in flight at a time
                if self.busy {
                    return Task::none();
                }

                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select Image File")
                    .add_filter("Image files", &SUPPORTED_EXTENSIONS)
                    .pick_file();

                let Some(path) = file else {
                    self.report(&PipelineError::NoSelection);
                    return Task::none();
                };

                self.busy = true;
                self.status = format!("Processing {}...", path.display());

                let preview_side = self.pipeline.config().preview_side;
                Task::perform(
                    loader::open_in_background(path, preview_side),
                    Message::Opened,
                )
            }
            Message::Opened(result) => {
                self.busy = false;
                match result {
                    Ok(opened) => {
                        let Opened {
                            session,
                            original_preview,
                            edited_preview,
                        } = opened;

                        self.pipeline.install(session);
                        self.original = Some(ui::preview_handle(original_preview));
                        self.edited = Some(ui::preview_handle(edited_preview));
                        if let Some(target) = self.pipeline.output_path() {
                            self.status = format!("Sharpened. Save writes {}", target.display());
                        }
                    }
                    Err(e) => self.report(&e),
                }
                Task::none()
            }
            Message::SaveImage => {
                if self.busy {
                    return Task::none();
                }

                match self.pipeline.save_job() {
                    Ok(job) => {
                        self.busy = true;
                        self.status = format!("Saving {}...", job.target.display());
                        Task::perform(job.run_in_background(), Message::Saved)
                    }
                    Err(e) => {
                        self.report(&e);
                        Task::none()
                    }
                }
            }
            Message::Saved(result) => {
                self.busy = false;
                match result {
                    Ok(path) => self.announce(Notice::saved(&path)),
                    Err(e) => self.report(&e),
                }
                Task::none()
            }
        }
    }

    fn report(&mut self, err: &PipelineError) {
        self.announce(Notice::from(err));
    }

    fn announce(&mut self, notice: Notice) {
        self.status = notice.status();
        notice.show();
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        // Buttons stay disabled while work is in flight
        let idle = |message: Message| (!self.busy).then_some(message);

        let previews = row![
            ui::preview_pane("Original Image", self.original.as_ref()),
            ui::preview_pane("Edited Image", self.edited.as_ref()),
        ]
        .spacing(20);

        let buttons = row![
            button("Select File")
                .on_press_maybe(idle(Message::SelectFile))
                .padding(10),
            button("Save Image")
                .on_press_maybe(idle(Message::SaveImage))
                .padding(10),
        ]
        .spacing(10);

        let content: Column<Message> = column![
            text("Select an image file to edit").size(20),
            previews,
            buttons,
            text(&self.status).size(14),
        ]
        .spacing(16)
        .padding(20)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    iced::application("Photo Editor", PhotoEditor::update, PhotoEditor::view)
        .theme(PhotoEditor::theme)
        .window_size((600.0, 460.0))
        .centered()
        .run_with(PhotoEditor::new)
}
