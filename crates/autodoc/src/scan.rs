//! Discovery of documentable scripts under a directory

use crate::detect::{detect, ScriptType};
use crate::encoding::TextEncoding;
use crate::error::DocError;
use anyhow::Result;
use glob::Pattern;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A script found during a scan
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ScriptFile {
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub script_type: ScriptType,
}

/// Options controlling a scan
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub encoding: TextEncoding,
    /// Glob patterns matched against paths relative to the scan root
    pub exclude: Vec<Pattern>,
}

impl ScanOptions {
    /// Build options from exclude pattern strings
    pub fn new<S: AsRef<str>>(encoding: TextEncoding, exclude: &[S]) -> Result<Self, DocError> {
        let exclude = exclude
            .iter()
            .map(|p| {
                Pattern::new(p.as_ref()).map_err(|e| DocError::InvalidPattern {
                    pattern: p.as_ref().to_string(),
                    reason: e.msg.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { encoding, exclude })
    }

    fn is_excluded(&self, relative: &Path) -> bool {
        self.exclude.iter().any(|p| p.matches_path(relative))
    }
}

/// Find every file under `root` that [`detect`] classifies.
///
/// Symlinks are followed. Files that cannot be read are skipped, as are
/// entries the walk itself fails on. The result is sorted by path.
pub fn find_scripts(root: impl AsRef<Path>, opts: &ScanOptions) -> Result<Vec<ScriptFile>> {
    let root = std::path::absolute(root.as_ref())?;
    if !root.is_dir() {
        return Err(DocError::NotADirectory(root).into());
    }

    let mut scripts = Vec::new();

    for entry in WalkDir::new(&root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(&root).unwrap_or(path);
        if opts.is_excluded(relative) {
            log::debug!("Excluded: {}", relative.display());
            continue;
        }

        match detect(path, opts.encoding) {
            Ok(Some(script_type)) => {
                scripts.push(ScriptFile { path: path.to_path_buf(), script_type });
            }
            Ok(None) => {}
            Err(e) => log::debug!("Skipping {}: {}", path.display(), e),
        }
    }

    scripts.sort();
    scripts.dedup();
    Ok(scripts)
}
