use std::process::{Command, Stdio};

use crate::{Result, VoiceSiteError};

/// Platform command that opens a URL in the default browser
pub fn opener_command(url: &str) -> Command {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else {
        Command::new("xdg-open")
    };
    command.arg(url);
    command
}

/// Open `url` in a new browser window without waiting for it
pub fn open_url(url: &str) -> Result<()> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(VoiceSiteError::Browser(format!("Refusing to open non-web URL: {}", url)));
    }

    opener_command(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| VoiceSiteError::Browser(format!("Failed to launch browser: {}", e)))
}
