use bar_theme::{discover_theme_files, theme_name, Templatizer};
use std::path::Path;

/// Detail lines printed per file in verbose dry runs.
const DETAIL_LIMIT: usize = 10;

pub fn execute(theme_dir: &Path, theme: Option<&str>, dry_run: bool, verbose: bool) -> anyhow::Result<()> {
    let files = discover_theme_files(theme_dir, theme)?;
    let templatizer = Templatizer::new()?;

    let prefix = if dry_run { "DRY RUN: " } else { "" };
    println!("{prefix}Templatizing {} theme file(s)...", files.len());
    println!();

    let mut total = 0;
    for file in &files {
        println!("Processing: {}", theme_name(file));

        let report = templatizer.templatize_file(file, dry_run)?;
        total += report.replacements.len();

        if report.modified {
            println!("  ✓ {} color(s) replaced", report.replacements.len());
            if dry_run && verbose {
                for r in report.replacements.iter().take(DETAIL_LIMIT) {
                    println!(
                        "    {} → {} [{}] (context: ...{})",
                        r.original,
                        r.variable,
                        r.variable.description(),
                        r.context
                    );
                }
                if report.replacements.len() > DETAIL_LIMIT {
                    println!("    ... and {} more", report.replacements.len() - DETAIL_LIMIT);
                }
            }
        } else {
            println!("  - No changes needed (already templatized or no hard-coded colors)");
        }

        if let Some(backup) = &report.backup {
            println!("  ✓ Backup created: {}", backup.display());
        }
        println!();
    }

    println!("Total: {total} color replacement(s) across {} file(s)", files.len());
    if dry_run {
        println!();
        println!("This was a dry run. Use without --dry-run to apply changes.");
    }

    Ok(())
}
