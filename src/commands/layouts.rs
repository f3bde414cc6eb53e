use bar_ctl::{append_theme_layouts, ThemeTable};
use std::path::Path;

pub fn execute(config_ctl: &Path, table: Option<&Path>, dry_run: bool) -> anyhow::Result<()> {
    let table = match table {
        Some(path) => ThemeTable::load(path)?,
        None => ThemeTable::builtin(),
    };

    let report = append_theme_layouts(config_ctl, &table, dry_run)?;

    if dry_run {
        println!("DRY RUN: Would add {} theme layout entries:", report.added());
        println!();
        for (theme, row) in &report.entries {
            println!("  {theme}:");
            println!("    {row}");
            println!();
        }
    } else {
        println!("✓ Added {} theme layout entries to {}", report.added(), config_ctl.display());
        println!("  Next available index: {}", report.next_index);
    }

    Ok(())
}
