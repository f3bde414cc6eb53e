//! Stylesheet templatizing: hard-coded colours become palette variables.

pub mod classify;
pub mod colors;
pub mod templatize;

pub use classify::{suggest_variable, Variable};
pub use colors::{Rgb, RgbaArgs};
pub use templatize::{
    backup_path, discover_theme_files, theme_name, FileReport, Replacement, Templatized, Templatizer,
};
