//! Default locations under the user's Waybar config directory.

use std::path::PathBuf;

/// Return the Waybar config directory, honouring `$XDG_CONFIG_HOME`.
pub fn waybar_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("waybar")
}

/// `config.ctl` — the pipe-delimited layout table.
pub fn control_file() -> PathBuf {
    waybar_dir().join("config.ctl")
}

/// `config.jsonc` — the document Waybar actually reads.
pub fn config_output() -> PathBuf {
    waybar_dir().join("config.jsonc")
}

pub fn modules_dir() -> PathBuf {
    waybar_dir().join("modules")
}

pub fn themes_dir() -> PathBuf {
    waybar_dir().join("themes")
}
