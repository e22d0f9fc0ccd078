use crate::constants::LOG_TYPE_SETTINGS;
use daylight_core::{ExecutionMode, FormState, UnitConverter};
use egui_lens::ReactiveEventLogger;

/// Button pressed in the settings panel this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    None,
    Save,
    Help,
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

pub fn show_settings_panel(
    ui: &mut egui::Ui,
    form: &mut FormState,
    converter: &dyn UnitConverter,
    logger: &ReactiveEventLogger,
) -> PanelAction {
    let mut action = PanelAction::None;

    ui.heading("Daylight Factor Settings");
    ui.separator();

    // Ground floor level
    ui.group(|ui| {
        ui.label("Ground Floor Level");

        let FormState { levels, selected_level, .. } = &mut *form;
        let label = |index: usize| {
            let level = &levels[index];
            format!("{} ({:.0} mm)", level.name, converter.elevation_to_millimetres(level.elevation))
        };
        let selected_text = selected_level
            .filter(|i| *i < levels.len())
            .map(&label)
            .unwrap_or_else(|| "Select a level".to_string());

        let prev = *selected_level;
        egui::ComboBox::from_id_salt("level_selector")
            .selected_text(selected_text)
            .width(300.0)
            .show_ui(ui, |ui| {
                for index in 0..levels.len() {
                    ui.selectable_value(selected_level, Some(index), label(index));
                }
            });

        if prev != *selected_level {
            if let Some(level) = selected_level.and_then(|i| levels.get(i)) {
                logger.log_custom(LOG_TYPE_SETTINGS, &format!("Selected level {}", level.name));
            }
        }
    });

    ui.add_space(10.0);

    // Wall construction
    ui.group(|ui| {
        ui.label("Multilayer Wall");
        let prev = form.multilayer_wall;
        ui.horizontal(|ui| {
            ui.radio_value(&mut form.multilayer_wall, true, "Yes");
            ui.radio_value(&mut form.multilayer_wall, false, "No");
        });
        if prev != form.multilayer_wall {
            logger.log_custom(LOG_TYPE_SETTINGS, &format!("Multilayer wall: {}", yes_no(form.multilayer_wall)));
        }

        ui.horizontal(|ui| {
            ui.label("Transmission:");
            ui.add(egui::TextEdit::singleline(&mut form.transmission_text).desired_width(60.0));
            ui.label("%");
        });
        ui.label("Integer between 0 and 100");
    });

    ui.add_space(10.0);

    // Analysis run
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label("Execution Mode:");
            let prev = form.execution_mode;
            egui::ComboBox::from_id_salt("execution_mode_selector")
                .selected_text(form.execution_mode.display_name())
                .show_ui(ui, |ui| {
                    for mode in ExecutionMode::ALL {
                        ui.selectable_value(&mut form.execution_mode, mode, mode.display_name());
                    }
                });
            if prev != form.execution_mode {
                logger.log_custom(
                    LOG_TYPE_SETTINGS,
                    &format!("Execution mode: {}", form.execution_mode.display_name()),
                );
            }
        });

        ui.label("Write Results");
        let prev = form.write_results;
        ui.horizontal(|ui| {
            ui.radio_value(&mut form.write_results, true, "Yes");
            ui.radio_value(&mut form.write_results, false, "No");
        });
        if prev != form.write_results {
            logger.log_custom(LOG_TYPE_SETTINGS, &format!("Write results: {}", yes_no(form.write_results)));
        }
    });

    ui.add_space(20.0);

    ui.horizontal(|ui| {
        if ui.button("Help").clicked() {
            action = PanelAction::Help;
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Save").clicked() {
                action = PanelAction::Save;
            }
        });
    });

    action
}
