use bar_core::{BarError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Module requirements of a single Waybar theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeModules {
    pub name:   String,
    #[serde(default)]
    pub left:   Vec<String>,
    #[serde(default)]
    pub center: Vec<String>,
    #[serde(default)]
    pub right:  Vec<String>,
    /// `custom/*` modules; rendered after `right`.
    #[serde(default)]
    pub custom: Vec<String>,
}

impl ThemeModules {
    /// Right-hand modules with the theme's custom modules appended.
    pub fn right_with_custom(&self) -> Vec<String> {
        self.right.iter().chain(&self.custom).cloned().collect()
    }
}

/// Ordered theme → modules table. Iteration order is row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeTable {
    #[serde(default, rename = "theme")]
    pub themes: Vec<ThemeModules>,
}

struct BuiltinTheme {
    name:   &'static str,
    left:   &'static [&'static str],
    center: &'static [&'static str],
    right:  &'static [&'static str],
    custom: &'static [&'static str],
}

const WORKSPACES: &[&str] = &["hyprland/workspaces"];
const WORKSPACES_TASKBAR: &[&str] = &["hyprland/workspaces", "wlr/taskbar"];
const CLOCK: &[&str] = &["clock"];
const AUDIO_BATTERY_TRAY: &[&str] = &["pulseaudio", "battery", "tray"];

const BUILTIN: &[BuiltinTheme] = &[
    BuiltinTheme {
        name:   "aniks-super-waybar",
        left:   WORKSPACES_TASKBAR,
        center: CLOCK,
        right:  AUDIO_BATTERY_TRAY,
        custom: &[],
    },
    BuiltinTheme {
        name:   "beautiful-waybar-theme",
        left:   WORKSPACES,
        center: CLOCK,
        right:  &["cpu", "memory", "temperature", "network", "pulseaudio", "battery", "tray"],
        custom: &[
            "custom/launcher",
            "custom/weather",
            "custom/vpn",
            "custom/notification",
            "custom/cava",
        ],
    },
    BuiltinTheme {
        name:   "cjbassis-configuration",
        left:   WORKSPACES,
        center: CLOCK,
        right:  &["cpu", "memory", "disk", "pulseaudio", "battery"],
        custom: &[],
    },
    BuiltinTheme {
        name:   "dn-debugs-waybar-config",
        left:   WORKSPACES,
        center: CLOCK,
        right:  &["cpu", "memory", "disk", "network", "pulseaudio", "battery", "tray"],
        custom: &[
            "custom/launcher",
            "custom/media",
            "custom/layout",
            "custom/updater",
            "custom/snip",
        ],
    },
    BuiltinTheme {
        name:   "frankydolls-win10-like-configuration",
        left:   WORKSPACES,
        center: CLOCK,
        right:  &[
            "cpu",
            "memory",
            "disk",
            "temperature",
            "network",
            "pulseaudio",
            "battery",
            "tray",
        ],
        custom: &["custom/os_button"],
    },
    BuiltinTheme {
        name:   "macos-15-sequoia-configuration",
        left:   WORKSPACES,
        center: CLOCK,
        right:  AUDIO_BATTERY_TRAY,
        custom: &[],
    },
    BuiltinTheme {
        name:   "mechabar",
        left:   WORKSPACES_TASKBAR,
        center: &["idle_inhibitor", "clock"],
        right:  &["backlight", "pulseaudio", "battery", "tray"],
        custom: &[],
    },
    BuiltinTheme {
        name:   "notscripters-configuration",
        left:   WORKSPACES,
        center: CLOCK,
        right:  AUDIO_BATTERY_TRAY,
        custom: &[],
    },
    BuiltinTheme {
        name:   "whiteshadows-configuration",
        left:   WORKSPACES,
        center: CLOCK,
        right:  AUDIO_BATTERY_TRAY,
        custom: &[],
    },
    BuiltinTheme {
        name:   "woioeows-configuration",
        left:   WORKSPACES,
        center: CLOCK,
        right:  AUDIO_BATTERY_TRAY,
        custom: &[],
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ThemeTable {
    /// The table of themes shipped with the Waybar theme pack.
    pub fn builtin() -> Self {
        let themes = BUILTIN
            .iter()
            .map(|t| ThemeModules {
                name:   t.name.to_string(),
                left:   owned(t.left),
                center: owned(t.center),
                right:  owned(t.right),
                custom: owned(t.custom),
            })
            .collect();
        Self { themes }
    }

    /// Parse a table from TOML made of `[[theme]]` entries.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| BarError::Ctl(format!("theme table parse error: {e}")))
    }

    /// Load a table from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BarError::NotFound(format!(
                "theme table not found: {}",
                path.display()
            )));
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| BarError::Ctl(format!("cannot read '{}': {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    pub fn get(&self, name: &str) -> Option<&ThemeModules> {
        self.themes.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThemeModules> {
        self.themes.iter()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
