use daylight_core::{FormError, SaveError, SubmitError};

pub const LOAD_ERROR_MESSAGE: &str = "Error loading settings file or levels.\nDefaults will be used.";

/// Modal notice shown over the form until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBox {
    pub title: String,
    pub body: String,
}

impl MessageBox {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn load_error() -> Self {
        Self::new("Load Error", LOAD_ERROR_MESSAGE)
    }

    pub fn for_submit_error(error: &SubmitError) -> Self {
        match error {
            SubmitError::Form(FormError::MissingLevel) => Self::new("Missing Level", error.to_string()),
            SubmitError::Form(FormError::InvalidTransmission { .. }) => Self::new("Invalid Input", error.to_string()),
            SubmitError::Save(SaveError::CreateDir { source, .. }) => {
                Self::new("Directory Error", format!("Failed to create settings directory:\n{}", source))
            }
            SubmitError::Save(_) | SubmitError::Closed => Self::new("Save Error", error.to_string()),
        }
    }

    /// Draw the message box. Returns true once the user dismisses it.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let mut dismissed = false;

        egui::Window::new(self.title.as_str())
            .id(egui::Id::new("message_box"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(self.body.as_str());

                ui.add_space(10.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        dismissed
    }
}
