use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Read Cargo.toml to extract dependency versions
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let cargo_toml_path = Path::new(&manifest_dir).join("Cargo.toml");
    let cargo_toml = fs::read_to_string(cargo_toml_path).unwrap();

    let mut egui_version = "unknown";
    let mut eframe_version = "unknown";
    let mut serde_json_version = "unknown";

    for line in cargo_toml.lines() {
        if line.starts_with("egui = ") {
            egui_version = line.split('"').nth(1).unwrap_or("unknown");
        } else if line.starts_with("eframe = ") {
            eframe_version = line.split('"').nth(1).unwrap_or("unknown");
        } else if line.starts_with("serde_json = ") {
            serde_json_version = line.split('"').nth(1).unwrap_or("unknown");
        }
    }

    // These will be available as env!() variables at compile time
    println!("cargo:rustc-env=EGUI_VERSION={}", egui_version);
    println!("cargo:rustc-env=EFRAME_VERSION={}", eframe_version);
    println!("cargo:rustc-env=SERDE_JSON_VERSION={}", serde_json_version);
    println!("cargo:rerun-if-changed=Cargo.toml");
}
