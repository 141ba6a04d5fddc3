//! Script type detection by extension with a shebang fallback
//!
//! Detection is a two step lookup. The lower-cased extension is checked
//! against [`EXTENSION_TABLE`]; a hit is returned without opening the file.
//! On a miss the first line of the file is read and the interpreter names in
//! [`SHEBANG_CANDIDATES`] are tried in order, the first one occurring
//! anywhere in the line winning.
//!
//! The shebang check is a plain substring test. A first line that merely
//! mentions an interpreter (`# not a ruby script`) is classified as that
//! interpreter, and matching is case-sensitive.

use crate::constants::{EXTENSION_TABLE, SHEBANG_CANDIDATES};
use crate::encoding::TextEncoding;
use crate::textio::read_first_line;
use serde::Serialize;
use std::fmt;
use std::io;
use std::path::Path;

/// The kinds of script that can be documented
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptType {
    Bash,
    Zsh,
    Ruby,
    Perl,
    Yaml,
    Json,
}

impl ScriptType {
    /// Label used in reports and in `code-block` directives
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptType::Bash => "bash",
            ScriptType::Zsh => "zsh",
            ScriptType::Ruby => "ruby",
            ScriptType::Perl => "perl",
            ScriptType::Yaml => "yaml",
            ScriptType::Json => "json",
        }
    }

    /// Look up a lower-cased extension, without its leading dot
    pub fn from_extension(ext: &str) -> Option<Self> {
        EXTENSION_TABLE.iter().find(|(e, _)| *e == ext).map(|(_, t)| *t)
    }

    /// First candidate interpreter named anywhere in `line`
    pub fn from_shebang(line: &str) -> Option<Self> {
        SHEBANG_CANDIDATES.iter().find(|t| line.contains(t.as_str())).copied()
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Determine the script type of `path`.
///
/// Returns `Ok(None)` when neither the extension nor the first line
/// identifies the file. I/O and decode failures on the shebang path are
/// returned as errors; callers that only want a best-effort answer should
/// filter them out themselves.
pub fn detect(path: impl AsRef<Path>, encoding: TextEncoding) -> io::Result<Option<ScriptType>> {
    let path = std::path::absolute(path.as_ref())?;

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if let Some(script_type) = ScriptType::from_extension(&ext) {
        log::trace!("{}: extension '{}' -> {}", path.display(), ext, script_type);
        return Ok(Some(script_type));
    }

    let first_line = read_first_line(&path, encoding)?;
    let found = ScriptType::from_shebang(&first_line);
    log::trace!("{}: first line {:?} -> {:?}", path.display(), first_line, found);
    Ok(found)
}
