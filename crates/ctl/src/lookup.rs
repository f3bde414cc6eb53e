use crate::row::CtlRow;
use bar_core::{BarError, Result};
use std::path::Path;

/// Find the row that follows a `# <theme>` (or `#<theme>`) comment line.
///
/// A comment followed by anything other than a `|` row is skipped and the
/// scan continues. The first comment that is followed by a row decides the
/// result, so a row that fails to parse ends the lookup with `None`.
pub fn find_by_theme(text: &str, theme: &str) -> Option<CtlRow> {
    let spaced = format!("# {theme}");
    let tight = format!("#{theme}");
    let lines: Vec<&str> = text.lines().collect();

    for (i, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line != spaced && line != tight {
            continue;
        }
        let Some(next) = lines.get(i + 1).map(|l| l.trim()) else {
            continue;
        };
        if next.contains('|') && !next.starts_with('#') {
            return CtlRow::parse(next);
        }
    }
    None
}

/// Find the first row whose index equals `index`.
pub fn find_by_index(text: &str, index: u32) -> Option<CtlRow> {
    text.lines()
        .filter_map(CtlRow::parse)
        .find(|row| row.index == index)
}

/// Read `path` and look a row up by theme comment.
pub fn read_by_theme(path: impl AsRef<Path>, theme: &str) -> Result<Option<CtlRow>> {
    Ok(find_by_theme(&read_control_file(path.as_ref())?, theme))
}

/// Read `path` and look a row up by index.
pub fn read_by_index(path: impl AsRef<Path>, index: u32) -> Result<Option<CtlRow>> {
    Ok(find_by_index(&read_control_file(path.as_ref())?, index))
}

pub(crate) fn read_control_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(BarError::NotFound(format!(
            "config.ctl not found: {}",
            path.display()
        )));
    }
    std::fs::read_to_string(path)
        .map_err(|e| BarError::Ctl(format!("cannot read '{}': {e}", path.display())))
}
