use std::io;
use std::process::Command;

pub const HELP_URL: &str = "https://github.com/upskiller-xyz/DaylightFactor/wiki/Usage-of-the-Daylight-Factor-Plugin";

/// Open the plugin documentation in the default browser.
pub fn open_documentation() -> io::Result<()> {
    log::info!("Opening documentation: {}", HELP_URL);
    launch(launcher(HELP_URL))
}

// The child is waited on from a detached thread so it does not linger as a zombie.
fn launch(mut command: Command) -> io::Result<()> {
    let mut child = command.spawn()?;

    std::thread::spawn(move || {
        if let Err(e) = child.wait() {
            log::warn!("Documentation launcher failed: {}", e);
        }
    });
    Ok(())
}

#[cfg(target_os = "windows")]
fn launcher(target: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(target);
    cmd
}

#[cfg(target_os = "macos")]
fn launcher(target: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(target);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn launcher(target: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(target);
    cmd
}
