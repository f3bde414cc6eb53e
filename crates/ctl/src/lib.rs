//! `config.ctl` handling: the row model, the built-in theme module table,
//! row lookup, and the layout-table appender.

pub mod append;
pub mod lookup;
pub mod row;
pub mod table;

pub use append::{append_theme_layouts, max_index, theme_rows, AppendReport, DEFAULT_HEIGHT, DEFAULT_POSITION};
pub use lookup::{find_by_index, find_by_theme, read_by_index, read_by_theme};
pub use row::CtlRow;
pub use table::{ThemeModules, ThemeTable};
