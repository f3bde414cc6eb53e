use bar_ctl::{read_by_index, read_by_theme};
use std::path::PathBuf;
use tracing::warn;

/// How the control-file row is selected.
pub enum Entry {
    Theme(String),
    Index(u32),
}

pub struct Options {
    pub entry:       Entry,
    pub config_ctl:  PathBuf,
    pub output:      PathBuf,
    pub modules_dir: PathBuf,
    pub header:      Option<PathBuf>,
    pub dry_run:     bool,
}

pub fn execute(opts: Options) -> anyhow::Result<()> {
    let row = match &opts.entry {
        Entry::Theme(theme) => read_by_theme(&opts.config_ctl, theme)?
            .ok_or_else(|| anyhow::anyhow!("theme '{theme}' not found in config.ctl"))?,
        Entry::Index(index) => read_by_index(&opts.config_ctl, *index)?
            .ok_or_else(|| anyhow::anyhow!("index {index} not found in config.ctl"))?,
    };

    // The generated `include` globs point here.
    if !opts.modules_dir.is_dir() {
        warn!("Modules directory not found: {}", opts.modules_dir.display());
    }

    if opts.dry_run {
        print!("{}", bar_config::render(&row, opts.header.as_deref()));
        return Ok(());
    }

    bar_config::generate(&row, &opts.output, opts.header.as_deref())?;
    println!("✓ Generated {} from config.ctl entry {}", opts.output.display(), row.index);
    Ok(())
}
