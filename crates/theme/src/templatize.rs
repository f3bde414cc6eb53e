use crate::classify::{suggest_variable, Variable};
use bar_core::{BarError, Result};
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Characters of preceding text used to classify a literal.
pub const CONTEXT_CHARS: usize = 50;
/// Characters of context kept in a [`Replacement`] for reporting.
pub const SNIPPET_CHARS: usize = 30;

/// One literal that was swapped for a palette variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub original: String,
    pub variable: Variable,
    /// Start of the classification context, for display.
    pub context:  String,
}

/// Result of templatizing a block of stylesheet text.
#[derive(Debug, Clone)]
pub struct Templatized {
    pub content:      String,
    pub replacements: Vec<Replacement>,
}

/// Result of templatizing one stylesheet file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path:         PathBuf,
    pub replacements: Vec<Replacement>,
    pub modified:     bool,
    /// Backup written beside the file, if any.
    pub backup:       Option<PathBuf>,
}

/// Rewrites hard-coded colours in stylesheets to palette variables.
pub struct Templatizer {
    rgba: Regex,
    hex:  Regex,
}

impl Templatizer {
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| BarError::Theme(format!("bad colour pattern {pattern:?}: {e}")))
        };
        Ok(Self {
            rgba: compile(r"rgba?\([^)]+\)")?,
            hex:  compile(r"#[0-9a-fA-F]{3,6}\b")?,
        })
    }

    /// Replace colour literals in `content`.
    ///
    /// `rgb(a)` literals are handled first; hex literals are then matched on
    /// the result, so nothing inside an already substituted literal is
    /// revisited.
    pub fn templatize_str(&self, content: &str) -> Templatized {
        let mut replacements = Vec::new();
        let content = substitute(&self.rgba, content, &mut replacements);
        let content = substitute(&self.hex, &content, &mut replacements);
        Templatized { content, replacements }
    }

    /// Templatize the stylesheet at `path` in place.
    ///
    /// When the content changes, the original is first copied to
    /// `<name>.bak`. With `dry_run` nothing is written.
    pub fn templatize_file(&self, path: impl AsRef<Path>, dry_run: bool) -> Result<FileReport> {
        let path = path.as_ref();
        let original = std::fs::read_to_string(path)
            .map_err(|e| BarError::Theme(format!("cannot read '{}': {e}", path.display())))?;

        let Templatized { content, replacements } = self.templatize_str(&original);
        let modified = content != original;

        let mut backup = None;
        if modified && !dry_run {
            let backup_path = backup_path(path);
            std::fs::write(&backup_path, &original).map_err(|e| {
                BarError::Theme(format!("cannot write backup '{}': {e}", backup_path.display()))
            })?;
            std::fs::write(path, &content)
                .map_err(|e| BarError::Theme(format!("cannot write '{}': {e}", path.display())))?;
            info!(
                "Templatized {} ({} replacement(s), backup at {})",
                path.display(),
                replacements.len(),
                backup_path.display()
            );
            backup = Some(backup_path);
        }

        Ok(FileReport {
            path: path.to_path_buf(),
            replacements,
            modified,
            backup,
        })
    }
}

fn substitute(re: &Regex, text: &str, log: &mut Vec<Replacement>) -> String {
    re.replace_all(text, |caps: &Captures| {
        let Some(m) = caps.get(0) else {
            return String::new();
        };
        let context = context_before(text, m.start());
        match suggest_variable(m.as_str(), context) {
            Some(variable) => {
                debug!("{} -> {variable}", m.as_str());
                log.push(Replacement {
                    original: m.as_str().to_string(),
                    variable,
                    context:  context.chars().take(SNIPPET_CHARS).collect(),
                });
                variable.name().to_string()
            }
            None => m.as_str().to_string(),
        }
    })
    .into_owned()
}

/// Up to [`CONTEXT_CHARS`] characters of `text` ending at byte `end`.
fn context_before(text: &str, end: usize) -> &str {
    let head = &text[..end];
    let start = head
        .char_indices()
        .rev()
        .nth(CONTEXT_CHARS - 1)
        .map_or(0, |(i, _)| i);
    &head[start..]
}

/// `theme-x.css` → `theme-x.css.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".bak");
    path.with_file_name(name)
}

/// Theme name of a `theme-<name>.css` file.
pub fn theme_name(path: &Path) -> String {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    stem.strip_prefix("theme-").unwrap_or(&stem).to_string()
}

/// List the stylesheets to process in `dir`.
///
/// With `theme`, only `theme-<theme>.css`. Otherwise every `theme-*.css`
/// except defaults, in name order.
pub fn discover_theme_files(dir: impl AsRef<Path>, theme: Option<&str>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(BarError::NotFound(format!(
            "theme directory not found: {}",
            dir.display()
        )));
    }

    let files = match theme {
        Some(theme) => {
            let file = dir.join(format!("theme-{theme}.css"));
            if file.is_file() { vec![file] } else { Vec::new() }
        }
        None => {
            let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file())
                .filter(|p| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| {
                            n.starts_with("theme-") && n.ends_with(".css") && !n.contains("default")
                        })
                })
                .collect();
            files.sort();
            files
        }
    };

    if files.is_empty() {
        return Err(BarError::NotFound(format!(
            "no theme files found in {}",
            dir.display()
        )));
    }
    Ok(files)
}
