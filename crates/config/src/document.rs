use crate::jsonc;
use bar_ctl::CtlRow;
use serde_json::{json, Map, Value};

/// `include` globs added when the template does not provide its own.
pub const DEFAULT_INCLUDE: [&str; 2] = [
    "$XDG_CONFIG_HOME/waybar/modules/*json*",
    "$XDG_CONFIG_HOME/waybar/includes/includes.json",
];

/// A Waybar configuration document: string keys to JSON values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    fields: Map<String, Value>,
}

impl ConfigDocument {
    /// A document with no keys at all. Emission still falls back to defaults.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The baseline used when no template file is available.
    pub fn builtin() -> Self {
        let mut fields = Map::new();
        fields.insert("layer".into(), json!("top"));
        fields.insert("output".into(), json!(["*"]));
        fields.insert("exclusive".into(), json!(true));
        fields.insert("passthrough".into(), json!(false));
        fields.insert("gtk-layer-shell".into(), json!(true));
        fields.insert("reload_style_on_change".into(), json!(true));
        Self { fields }
    }

    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Merge the layout fields of `row` into the document.
    ///
    /// `position` and the three module lists are always overwritten. `height`
    /// is only written when the row has one, so an inherited height survives a
    /// row without a height.
    pub fn apply_row(&mut self, row: &CtlRow) {
        self.fields.insert("position".into(), json!(row.position));
        if let Some(height) = row.height {
            self.fields.insert("height".into(), json!(height));
        }
        self.fields.insert("modules-left".into(), json!(row.modules_left));
        self.fields.insert("modules-center".into(), json!(row.modules_center));
        self.fields.insert("modules-right".into(), json!(row.modules_right));

        if !self.fields.contains_key("include") {
            self.fields.insert("include".into(), json!(DEFAULT_INCLUDE));
        }
    }

    /// Emit the document as `config.jsonc` text with a fixed key order.
    ///
    /// `source_index` is the control-file entry the document came from.
    pub fn to_jsonc(&self, source_index: u32) -> String {
        let value = |key: &str, fallback: Value| -> String {
            jsonc::inline(self.fields.get(key).unwrap_or(&fallback))
        };
        let modules = |key: &str| -> String {
            jsonc::block(self.fields.get(key).unwrap_or(&json!([])), 8, 4)
        };

        let mut out = String::new();
        out.push_str("//   --// waybar config generated from config.ctl //--   //\n");
        out.push_str("{\n");
        out.push_str(&format!("    // sourced from config.ctl entry {source_index} //\n"));
        out.push_str(&format!("    \"layer\": {},\n", value("layer", json!("top"))));
        out.push_str(&format!("    \"output\": {},\n", value("output", json!(["*"]))));
        out.push_str(&format!("    \"position\": {},\n", value("position", json!("top"))));
        if let Some(height) = self.fields.get("height") {
            out.push_str(&format!("    \"height\": {},\n", jsonc::inline(height)));
        }
        out.push_str(&format!("    \"exclusive\": {},\n", value("exclusive", json!(true))));
        out.push_str(&format!("    \"passthrough\": {},\n", value("passthrough", json!(false))));
        out.push_str(&format!(
            "    \"gtk-layer-shell\": {},\n",
            value("gtk-layer-shell", json!(true))
        ));
        out.push_str(&format!(
            "    \"reload_style_on_change\": {},\n",
            value("reload_style_on_change", json!(true))
        ));
        out.push_str(&format!("    \"include\": {},\n", value("include", json!([]))));
        out.push_str("    // modules from config.ctl //\n");
        out.push_str(&format!("    \"modules-left\": {},\n", modules("modules-left")));
        out.push_str(&format!("    \"modules-center\": {},\n", modules("modules-center")));
        out.push_str(&format!("    \"modules-right\": {},\n", modules("modules-right")));
        out.push_str("    // sourced from modules based on config.ctl //\n");
        out.push_str("}\n");
        out
    }
}
