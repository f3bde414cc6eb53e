use crate::lookup::read_control_file;
use crate::row::CtlRow;
use crate::table::ThemeTable;
use bar_core::{BarError, Result};
use std::io::Write as _;
use std::path::Path;
use tracing::info;

/// Height given to every generated theme row.
pub const DEFAULT_HEIGHT: u32 = 40;
/// Position given to every generated theme row.
pub const DEFAULT_POSITION: &str = "top";

const MARKER: &str = "# Theme-specific layouts (added by bar-kit layouts)";

/// Outcome of [`append_theme_layouts`].
#[derive(Debug, Clone)]
pub struct AppendReport {
    /// `(theme name, row)` in the order they were (or would be) appended.
    pub entries:    Vec<(String, CtlRow)>,
    /// First index that is still free after the new rows.
    pub next_index: u32,
}

impl AppendReport {
    pub fn added(&self) -> usize {
        self.entries.len()
    }
}

/// Largest leading index among lines that contain `|`, or `0`.
///
/// Lines whose first field is not a number (comments, garbage) are skipped.
pub fn max_index<'a>(lines: impl IntoIterator<Item = &'a str>) -> u32 {
    lines
        .into_iter()
        .filter(|line| line.contains('|') && !line.trim().is_empty())
        .filter_map(|line| line.split('|').next()?.trim().parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

/// Build one row per theme, numbered from `first_index`.
///
/// `None` if the numbering would run past `u32::MAX`.
pub fn theme_rows(table: &ThemeTable, first_index: u32) -> Option<Vec<(String, CtlRow)>> {
    table
        .iter()
        .enumerate()
        .map(|(offset, theme)| {
            let index = u32::try_from(offset).ok().and_then(|o| first_index.checked_add(o))?;
            let row = CtlRow {
                index,
                height:         Some(DEFAULT_HEIGHT),
                position:       DEFAULT_POSITION.to_string(),
                modules_left:   theme.left.clone(),
                modules_center: theme.center.clone(),
                modules_right:  theme.right_with_custom(),
            };
            Some((theme.name.clone(), row))
        })
        .collect()
}

/// Append a `# <theme>` comment and a layout row for every theme in `table`
/// to the end of the control file at `path`.
///
/// Existing lines are never touched. Indices continue from the highest index
/// already present; uniqueness is not enforced against concurrent writers.
/// With `dry_run` the rows are computed but nothing is written.
pub fn append_theme_layouts(
    path: impl AsRef<Path>,
    table: &ThemeTable,
    dry_run: bool,
) -> Result<AppendReport> {
    let path = path.as_ref();
    let text = read_control_file(path)?;

    let exhausted = || BarError::Ctl(format!("index space exhausted in '{}'", path.display()));
    let first_index = max_index(text.lines()).checked_add(1).ok_or_else(exhausted)?;
    let entries = theme_rows(table, first_index).ok_or_else(exhausted)?;
    let next_index = u32::try_from(entries.len())
        .ok()
        .and_then(|n| first_index.checked_add(n))
        .ok_or_else(exhausted)?;

    if !dry_run {
        let mut block = String::from("\n");
        block.push_str(MARKER);
        block.push('\n');
        for (name, row) in &entries {
            block.push_str(&format!("# {name}\n{row}\n"));
        }

        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| BarError::Ctl(format!("cannot open '{}': {e}", path.display())))?;
        file.write_all(block.as_bytes())?;

        info!(
            "Appended {} theme layout(s) to {} (indices {first_index}..{next_index})",
            entries.len(),
            path.display()
        );
    }

    Ok(AppendReport { entries, next_index })
}
