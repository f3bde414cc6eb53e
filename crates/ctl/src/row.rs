use std::fmt;
use tracing::warn;

/// One layout entry of `config.ctl`.
///
/// Serialized as `index|height|position|( left )|( center )|( right )`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtlRow {
    pub index:          u32,
    /// `None` when the field is empty or not a plain digit string.
    pub height:         Option<u32>,
    pub position:       String,
    pub modules_left:   Vec<String>,
    pub modules_center: Vec<String>,
    pub modules_right:  Vec<String>,
}

impl CtlRow {
    /// Parse a single control-file line.
    ///
    /// Blank lines, comments, and lines with fewer than six `|`-separated
    /// fields yield `None`. A non-numeric index is logged and also yields
    /// `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let fields: Vec<&str> = line.split('|').collect();
        if fields.len() < 6 {
            return None;
        }

        let index = match fields[0].trim().parse::<u32>() {
            Ok(i) => i,
            Err(e) => {
                warn!("Error parsing config.ctl line {line:?}: bad index {:?}: {e}", fields[0]);
                return None;
            }
        };

        Some(Self {
            index,
            height:         parse_height(fields[1]),
            position:       fields[2].to_string(),
            modules_left:   parse_modules(fields[3]),
            modules_center: parse_modules(fields[4]),
            modules_right:  parse_modules(fields[5]),
        })
    }

    /// Format the row the way `config.ctl` stores it.
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CtlRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|", self.index)?;
        if let Some(h) = self.height {
            write!(f, "{h}")?;
        }
        write!(
            f,
            "|{}|{}|{}|{}",
            self.position,
            ModuleList(&self.modules_left),
            ModuleList(&self.modules_center),
            ModuleList(&self.modules_right),
        )
    }
}

/// `( a b c )` for a populated list, `()` for an empty one.
struct ModuleList<'a>(&'a [String]);

impl fmt::Display for ModuleList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("()")
        } else {
            write!(f, "( {} )", self.0.join(" "))
        }
    }
}

fn parse_height(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Strip one layer of enclosing parentheses and split on whitespace.
fn parse_modules(field: &str) -> Vec<String> {
    let mut field = field.trim();
    if let Some(inner) = field.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        field = inner;
    }
    field.split_whitespace().map(str::to_string).collect()
}
