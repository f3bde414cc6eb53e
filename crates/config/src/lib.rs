pub mod document;
pub mod jsonc;

pub use document::{ConfigDocument, DEFAULT_INCLUDE};

use bar_core::{BarError, Result};
use bar_ctl::CtlRow;
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

/// Where the merge base of a generated document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSource {
    /// No template given, or the file does not exist: built-in baseline.
    Builtin,
    /// The template exists but could not be read or parsed: empty document.
    Unparseable,
    /// The template parsed as a JSON object.
    Loaded,
}

/// Load the merge base for a generated config.
///
/// Falls back to [`ConfigDocument::builtin`] when `path` is `None` or missing,
/// and to an empty document when the file is not a JSON(C) object.
pub fn load_template(path: Option<&Path>) -> (ConfigDocument, TemplateSource) {
    let Some(path) = path.filter(|p| p.exists()) else {
        return (ConfigDocument::builtin(), TemplateSource::Builtin);
    };

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Cannot read template '{}': {e}; starting from an empty document.", path.display());
            return (ConfigDocument::empty(), TemplateSource::Unparseable);
        }
    };

    match serde_json::from_str::<Value>(&jsonc::strip_line_comments(&raw)) {
        Ok(Value::Object(map)) => (ConfigDocument::from_map(map), TemplateSource::Loaded),
        Ok(_) => {
            warn!("Template '{}' is not a JSON object; starting from an empty document.", path.display());
            (ConfigDocument::empty(), TemplateSource::Unparseable)
        }
        Err(e) => {
            warn!("Template '{}' parse error: {e}; starting from an empty document.", path.display());
            (ConfigDocument::empty(), TemplateSource::Unparseable)
        }
    }
}

/// Merge `row` into the template and render the resulting `config.jsonc` text.
pub fn render(row: &CtlRow, template: Option<&Path>) -> String {
    let (mut doc, source) = load_template(template);
    tracing::debug!("Rendering entry {} on a {source:?} template", row.index);
    doc.apply_row(row);
    doc.to_jsonc(row.index)
}

/// Render `row` and write it to `output`, creating parent directories.
pub fn generate(row: &CtlRow, output: impl AsRef<Path>, template: Option<&Path>) -> Result<()> {
    let output = output.as_ref();
    let text = render(row, template);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            BarError::Config(format!("cannot create '{}': {e}", parent.display()))
        })?;
    }
    std::fs::write(output, text)
        .map_err(|e| BarError::Config(format!("cannot write '{}': {e}", output.display())))?;

    info!("Wrote {} from config.ctl entry {}", output.display(), row.index);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row() -> CtlRow {
        CtlRow::parse("2|40|top|( hyprland/workspaces wlr/taskbar )|( clock )|( pulseaudio battery tray )")
            .expect("row parses")
    }

    #[test]
    fn missing_template_uses_builtin() {
        let (doc, source) = load_template(None);
        assert_eq!(source, TemplateSource::Builtin);
        assert_eq!(doc, ConfigDocument::builtin());

        let dir = tempfile::tempdir().expect("tempdir");
        let (_, source) = load_template(Some(dir.path().join("header.jsonc").as_path()));
        assert_eq!(source, TemplateSource::Builtin);
    }

    #[test]
    fn broken_template_yields_empty_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("header.jsonc");

        std::fs::write(&path, "{ not json").expect("write template");
        let (doc, source) = load_template(Some(path.as_path()));
        assert_eq!(source, TemplateSource::Unparseable);
        assert_eq!(doc, ConfigDocument::empty());

        std::fs::write(&path, "[1, 2]").expect("write template");
        assert_eq!(load_template(Some(path.as_path())).1, TemplateSource::Unparseable);
    }

    #[test]
    fn jsonc_template_is_merged() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("header.jsonc");
        std::fs::write(
            &path,
            "{\n  // header\n  \"layer\": \"overlay\",\n  \"height\": 24,\n  \"include\": [\"x.json\"]\n}\n",
        )
        .expect("write template");

        let (doc, source) = load_template(Some(path.as_path()));
        assert_eq!(source, TemplateSource::Loaded);
        assert_eq!(doc.get("layer"), Some(&json!("overlay")));

        let text = render(&row(), Some(path.as_path()));
        assert!(text.contains("    \"layer\": \"overlay\",\n"));
        assert!(text.contains("    \"height\": 40,\n"));
        assert!(text.contains("    \"include\": [\"x.json\"],\n"));
    }

    #[test]
    fn generate_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output = dir.path().join("nested/waybar/config.jsonc");

        generate(&row(), &output, None).expect("generate");

        let text = std::fs::read_to_string(&output).expect("read output");
        assert!(text.starts_with("//   --// waybar config generated from config.ctl //--   //\n"));
        assert!(text.contains("\"$XDG_CONFIG_HOME/waybar/modules/*json*\""));
        assert!(text.contains("        \"pulseaudio\",\n        \"battery\",\n        \"tray\"\n"));
    }
}
