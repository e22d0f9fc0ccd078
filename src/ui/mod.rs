pub mod message_box;
pub mod settings_panel;

pub use message_box::MessageBox;
pub use settings_panel::{show_settings_panel, PanelAction};
