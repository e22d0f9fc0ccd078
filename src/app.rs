use daylight_core::{FeetDocument, HostError, SettingsDialog};
use egui_lens::{LogColors, ReactiveEventLogger, ReactiveEventLoggerState};
use egui_mobius_reactive::Dynamic;

use crate::constants::{LOG_TYPE_HELP, LOG_TYPE_SETTINGS};
use crate::platform::banner::Banner;
use crate::ui::{MessageBox, PanelAction, show_settings_panel};

/// The settings window
pub struct DaylightSettingsApp {
    dialog: SettingsDialog<FeetDocument>,

    // Logger state and colors
    pub logger_state: Dynamic<ReactiveEventLoggerState>,
    pub log_colors: Dynamic<LogColors>,

    // Modal notice, blocks the form while shown
    message: Option<MessageBox>,
}

impl DaylightSettingsApp {
    /// **Create the settings window around an opened dialog**
    ///
    /// Writes the banner to the event log and reports whether the saved
    /// settings or the host levels had to be replaced by defaults.
    pub fn new(dialog: SettingsDialog<FeetDocument>, host_error: Option<HostError>) -> Self {
        let logger_state = Dynamic::new(ReactiveEventLoggerState::new());
        let log_colors = Dynamic::new(LogColors::default());
        let logger = ReactiveEventLogger::with_colors(&logger_state, &log_colors);

        let mut banner = Banner::new();
        banner.format();
        logger.log_info(&banner.message);
        logger.log_info(&format!("Settings file: {}", dialog.store().path().display()));

        if let Some(e) = &host_error {
            logger.log_error(&e.to_string());
        }

        let mut load_failed = host_error.is_some();
        match dialog.load_error() {
            Some(e) if e.is_missing() => {
                logger.log_warning(&format!("{}. Defaults will be used.", e));
            }
            Some(e) => {
                logger.log_error(&e.to_string());
                load_failed = true;
            }
            None => logger.log_custom(LOG_TYPE_SETTINGS, "Loaded saved settings"),
        }

        Self {
            dialog,
            logger_state: logger_state.clone(),
            log_colors: log_colors.clone(),
            message: load_failed.then(MessageBox::load_error),
        }
    }

    fn save(&mut self, ctx: &egui::Context, logger: &ReactiveEventLogger) {
        match self.dialog.submit() {
            Ok(record) => {
                logger.log_custom(
                    LOG_TYPE_SETTINGS,
                    &format!("Settings saved to {}: {:?}", self.dialog.store().path().display(), record),
                );
                self.dialog.close();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            Err(e) => {
                logger.log_error(&e.to_string());
                self.message = Some(MessageBox::for_submit_error(&e));
            }
        }
    }

    fn help(&self, logger: &ReactiveEventLogger) {
        match self.dialog.open_help() {
            Ok(()) => logger.log_custom(LOG_TYPE_HELP, &format!("Opened {}", daylight_core::help::HELP_URL)),
            Err(e) => logger.log_error(&format!("Failed to open documentation: {}", e)),
        }
    }
}

impl eframe::App for DaylightSettingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let logger_state = self.logger_state.clone();
        let log_colors = self.log_colors.clone();
        let logger = ReactiveEventLogger::with_colors(&logger_state, &log_colors);

        if ctx.input(|i| i.viewport().close_requested()) && !self.dialog.state().is_terminal() {
            log::info!("Settings dialog closed without saving");
            self.dialog.close();
        }

        egui::TopBottomPanel::bottom("event_log")
            .resizable(true)
            .default_height(160.0)
            .show(ctx, |ui| {
                ui.collapsing("Event Log", |ui| {
                    logger.show(ui);
                });
            });

        let mut action = PanelAction::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(self.message.is_none(), |ui| {
                let mut form = self.dialog.form().clone();
                action = show_settings_panel(ui, &mut form, self.dialog.host(), &logger);
                if &form != self.dialog.form() {
                    *self.dialog.form_mut() = form;
                }
            });
        });

        match action {
            PanelAction::Save => self.save(ctx, &logger),
            PanelAction::Help => self.help(&logger),
            PanelAction::None => {}
        }

        let dismissed = self.message.as_ref().is_some_and(|message| message.show(ctx));
        if dismissed {
            self.message = None;
        }
    }
}
