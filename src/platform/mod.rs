// Platform module
pub mod banner;

pub mod parameters {
    pub mod gui {
        pub const APPLICATION_NAME: &str = "Daylight Factor Settings";
        pub const VERSION: &str = env!("CARGO_PKG_VERSION"); // Single source of truth from Cargo.toml
        pub const VIEWPORT_X: f32 = 420.0;
        pub const VIEWPORT_Y: f32 = 520.0;
    }
}
