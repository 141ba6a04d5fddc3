//! Constants used throughout the autodoc crate

use crate::detect::ScriptType;

/// Lower-cased file extensions (without the dot) and the script type they map to
pub const EXTENSION_TABLE: &[(&str, ScriptType)] = &[
    ("sh", ScriptType::Bash),
    ("bash", ScriptType::Bash),
    ("zsh", ScriptType::Zsh),
    ("ruby", ScriptType::Ruby),
    ("rb", ScriptType::Ruby),
    ("perl", ScriptType::Perl),
    ("pl", ScriptType::Perl),
    ("yml", ScriptType::Yaml),
    ("yaml", ScriptType::Yaml),
    ("json", ScriptType::Json),
];

/// Interpreter names looked for in a file's first line, in priority order
pub const SHEBANG_CANDIDATES: &[ScriptType] =
    &[ScriptType::Bash, ScriptType::Zsh, ScriptType::Ruby, ScriptType::Perl];

/// Directory, relative to the project root, that receives generated pages
pub const DEFAULT_SOURCE_DIR: &str = "doc/source";

/// Name of the per-project configuration file
pub const CONFIG_FILENAME: &str = ".autodoc/config.toml";

/// Spaces substituted for one tab
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Minimum length of a page title underline
pub const TITLE_UNDERLINE_MIN: usize = 23;

pub const DEFAULT_THEME: &str = "sphinx_rtd_theme";

pub const DEFAULT_RELEASE: &str = "0.1.0";

pub const DEFAULT_AUTHOR: &str = "Unknown";

/// Package path as seen from `doc/source/conf.py`
pub const DEFAULT_PACKAGE_PATH: &str = "../..";
