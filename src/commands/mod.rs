use clap::Subcommand;
use std::path::PathBuf;

pub mod generate;
pub mod layouts;
pub mod templatize;

#[derive(Subcommand)]
pub enum Commands {
    /// Append a config.ctl row for every theme in the module table
    Layouts {
        /// Path to config.ctl [default: $XDG_CONFIG_HOME/waybar/config.ctl]
        #[arg(long)]
        config_ctl: Option<PathBuf>,

        /// TOML theme table to use instead of the built-in one
        #[arg(long)]
        table: Option<PathBuf>,

        /// Show what would be added without modifying the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate config.jsonc from a config.ctl entry
    Generate {
        /// Theme name to find in config.ctl (by comment)
        #[arg(long, conflicts_with = "index")]
        theme: Option<String>,

        /// config.ctl index to use
        #[arg(long)]
        index: Option<u32>,

        /// Path to config.ctl [default: $XDG_CONFIG_HOME/waybar/config.ctl]
        #[arg(long)]
        config_ctl: Option<PathBuf>,

        /// Output file [default: $XDG_CONFIG_HOME/waybar/config.jsonc]
        #[arg(long)]
        output: Option<PathBuf>,

        /// Directory holding module JSONC files [default: $XDG_CONFIG_HOME/waybar/modules]
        #[arg(long)]
        modules_dir: Option<PathBuf>,

        /// JSON(C) document used as the merge base
        #[arg(long)]
        header: Option<PathBuf>,

        /// Print the generated document instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Replace hard-coded colours in theme stylesheets with palette variables
    Templatize {
        /// Directory containing theme-*.css files [default: $XDG_CONFIG_HOME/waybar/themes]
        #[arg(long)]
        theme_dir: Option<PathBuf>,

        /// Only templatize theme-<THEME>.css
        #[arg(long)]
        theme: Option<String>,

        /// Show what would be changed without modifying files
        #[arg(long)]
        dry_run: bool,

        /// Show detailed replacement information
        #[arg(long)]
        verbose: bool,
    },
}

impl Commands {
    pub fn verbose(&self) -> bool {
        matches!(self, Commands::Templatize { verbose: true, .. })
    }

    pub fn execute(self) -> anyhow::Result<()> {
        match self {
            Commands::Layouts { config_ctl, table, dry_run } => {
                let config_ctl = config_ctl.unwrap_or_else(bar_core::paths::control_file);
                layouts::execute(&config_ctl, table.as_deref(), dry_run)
            }
            Commands::Generate {
                theme,
                index,
                config_ctl,
                output,
                modules_dir,
                header,
                dry_run,
            } => {
                let entry = match (theme, index) {
                    (Some(theme), _) => generate::Entry::Theme(theme),
                    (None, Some(index)) => generate::Entry::Index(index),
                    (None, None) => anyhow::bail!("must specify --theme or --index"),
                };
                generate::execute(generate::Options {
                    entry,
                    config_ctl:  config_ctl.unwrap_or_else(bar_core::paths::control_file),
                    output:      output.unwrap_or_else(bar_core::paths::config_output),
                    modules_dir: modules_dir.unwrap_or_else(bar_core::paths::modules_dir),
                    header,
                    dry_run,
                })
            }
            Commands::Templatize { theme_dir, theme, dry_run, verbose } => {
                let theme_dir = theme_dir.unwrap_or_else(bar_core::paths::themes_dir);
                templatize::execute(&theme_dir, theme.as_deref(), dry_run, verbose)
            }
        }
    }
}
