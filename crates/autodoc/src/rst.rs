//! reStructuredText pages for scripts

use crate::constants::{DEFAULT_TAB_WIDTH, TITLE_UNDERLINE_MIN};
use crate::detect::{detect, ScriptType};
use crate::encoding::TextEncoding;
use crate::error::DocError;
use crate::scan::{find_scripts, ScanOptions};
use crate::textio::{read_lines, tabs_to_spaces, write_text, FileParts, WriteOptions};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Options for rendering script pages
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub encoding: TextEncoding,
    /// Convert tabs in the script body to `tab_width` spaces
    pub convert_tabs: bool,
    pub tab_width: usize,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self { encoding: TextEncoding::Utf8, convert_tabs: true, tab_width: DEFAULT_TAB_WIDTH }
    }
}

impl PageOptions {
    fn indent(&self) -> String {
        if self.convert_tabs {
            " ".repeat(self.tab_width)
        } else {
            "\t".to_string()
        }
    }
}

/// Render a script as a page with a title, a preamble and a code block
pub fn render_script_page<S: AsRef<str>>(
    name: &str,
    script_type: ScriptType,
    lines: &[S],
    opts: &PageOptions,
) -> String {
    let underline = "~".repeat(name.chars().count().max(TITLE_UNDERLINE_MIN));
    let mut page = format!(
        "{name}\n{underline}\n\n\
         Documentation/code for ``{name}`` {label} script shown below:\n\n\
         .. code-block:: {label}\n\n",
        name = name,
        underline = underline,
        label = script_type,
    );

    let indent = opts.indent();
    for line in lines {
        let body = line.as_ref().trim_end_matches(['\n', '\r']);
        if body.trim().is_empty() {
            page.push('\n');
            continue;
        }
        let body =
            if opts.convert_tabs { tabs_to_spaces(body, opts.tab_width) } else { body.to_string() };
        page.push_str(&indent);
        page.push_str(&body);
        page.push('\n');
    }

    page
}

/// Write the page for `script` to `outfile`, replacing any existing content
pub fn document_script(
    script: impl AsRef<Path>,
    outfile: impl AsRef<Path>,
    opts: &PageOptions,
) -> Result<ScriptType> {
    let script = script.as_ref();
    let outfile = outfile.as_ref();

    let script_type = detect(script, opts.encoding)
        .with_context(|| format!("Failed to detect script type of {}", script.display()))?
        .ok_or_else(|| DocError::UnknownScriptType(script.to_path_buf()))?;

    let parts = FileParts::new(script)?;
    let lines = read_lines(script, opts.encoding)
        .with_context(|| format!("Failed to read {}", script.display()))?;

    let page = render_script_page(&parts.file_name(), script_type, &lines, opts);
    write_text(outfile, &[page], &WriteOptions::overwrite())
        .with_context(|| format!("Failed to write {}", outfile.display()))?;

    log::debug!("Documented {} as {}", script.display(), outfile.display());
    Ok(script_type)
}

/// Outcome of a batch documentation run
#[derive(Debug, Default, Serialize)]
pub struct DocReport {
    /// Pages written in this run
    pub written: Vec<PathBuf>,
    /// Pages that already existed and were left alone
    pub skipped: Vec<PathBuf>,
    /// Scripts whose page could not be written, with the reason
    pub failed: Vec<(PathBuf, String)>,
}

impl DocReport {
    /// Number of scripts the run considered
    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len() + self.failed.len()
    }
}

/// Write one page per script found under `package_dir` into `source_dir`.
///
/// Pages are named `<stem>.rst`. An existing page is never overwritten;
/// delete it to have it regenerated. Scripts sharing a stem therefore only
/// get the first page written. A script that cannot be read or written is
/// recorded in [`DocReport::failed`] and the run carries on with the rest.
pub fn write_script_docs(
    package_dir: impl AsRef<Path>,
    source_dir: impl AsRef<Path>,
    page_opts: &PageOptions,
    scan_opts: &ScanOptions,
) -> Result<DocReport> {
    let source_dir = source_dir.as_ref();
    if !source_dir.is_dir() {
        return Err(DocError::NotADirectory(source_dir.to_path_buf()).into());
    }

    let scripts = find_scripts(package_dir, scan_opts)?;
    let mut report = DocReport::default();

    for script in scripts {
        let parts = FileParts::new(&script.path)?;
        let outfile = source_dir.join(format!("{}.rst", parts.stem));

        if outfile.exists() {
            log::warn!(
                "{}: documentation already exists, remove {} to regenerate it",
                parts.file_name(),
                outfile.display()
            );
            report.skipped.push(outfile);
            continue;
        }

        match document_script(&script.path, &outfile, page_opts) {
            Ok(_) => report.written.push(outfile),
            Err(e) => {
                log::warn!("{}: {:#}", script.path.display(), e);
                report.failed.push((script.path, format!("{:#}", e)));
            }
        }
    }

    Ok(report)
}
