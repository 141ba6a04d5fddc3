//! Line-oriented file reading and writing

use crate::encoding::TextEncoding;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Read a whole file as lines, each keeping its terminator
pub fn read_lines(path: impl AsRef<Path>, encoding: TextEncoding) -> io::Result<Vec<String>> {
    let bytes = fs::read(path.as_ref())?;
    let text = encoding.decode(&bytes)?;
    Ok(text.split_inclusive('\n').map(str::to_string).collect())
}

/// Read the first line of a file without its terminator.
///
/// Nothing past the first newline is read or decoded. An empty file yields
/// an empty string.
pub fn read_first_line(path: impl AsRef<Path>, encoding: TextEncoding) -> io::Result<String> {
    let mut reader = BufReader::new(File::open(path.as_ref())?);
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf)?;

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    encoding.decode(&buf)
}

/// How `write_text` opens its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Append,
    Overwrite,
}

/// Options for [`write_text`]
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    pub mode: WriteMode,
    /// Written before every line
    pub prepend: String,
    /// Written after every line
    pub append: String,
    /// Replace tabs in each line with this many spaces before writing
    pub tabs_to_spaces: Option<usize>,
}

impl WriteOptions {
    pub fn overwrite() -> Self {
        Self { mode: WriteMode::Overwrite, ..Default::default() }
    }
}

/// Write `lines` to `path`, creating the file if needed.
///
/// Tab conversion applies to the line bodies only; `prepend` and `append`
/// are written verbatim.
pub fn write_text<S: AsRef<str>>(
    path: impl AsRef<Path>,
    lines: &[S],
    opts: &WriteOptions,
) -> io::Result<()> {
    let mut file = match opts.mode {
        WriteMode::Append => OpenOptions::new().create(true).append(true).open(path.as_ref())?,
        WriteMode::Overwrite => File::create(path.as_ref())?,
    };

    for line in lines {
        let body = match opts.tabs_to_spaces {
            Some(width) => tabs_to_spaces(line.as_ref(), width),
            None => line.as_ref().to_string(),
        };
        file.write_all(opts.prepend.as_bytes())?;
        file.write_all(body.as_bytes())?;
        file.write_all(opts.append.as_bytes())?;
    }

    file.flush()
}

/// Replace every tab with `width` spaces
pub fn tabs_to_spaces(text: &str, width: usize) -> String {
    text.replace('\t', &" ".repeat(width))
}

/// Replace every run of `width` spaces with a tab
pub fn spaces_to_tabs(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }
    text.replace(&" ".repeat(width), "\t")
}

/// A path split into directory, stem and extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileParts {
    pub directory: PathBuf,
    pub stem: String,
    /// Includes the leading dot, or is empty
    pub extension: String,
}

impl FileParts {
    pub fn new(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = std::path::absolute(path.as_ref())?;
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        Ok(Self { directory, stem, extension })
    }

    /// Stem and extension joined back together
    pub fn file_name(&self) -> String {
        format!("{}{}", self.stem, self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_lines_keeps_terminators() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.sh");
        fs::write(&path, "one\ntwo\r\nthree").unwrap();

        let lines = read_lines(&path, TextEncoding::Utf8).unwrap();
        assert_eq!(lines, vec!["one\n", "two\r\n", "three"]);
    }

    #[test]
    fn test_read_lines_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty");
        fs::write(&path, "").unwrap();

        assert!(read_lines(&path, TextEncoding::Utf8).unwrap().is_empty());
    }

    #[test]
    fn test_read_lines_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = read_lines(temp.path().join("missing"), TextEncoding::Utf8).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_read_first_line() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("run");
        fs::write(&path, "#!/bin/bash\r\necho hi\n").unwrap();

        assert_eq!(read_first_line(&path, TextEncoding::Utf8).unwrap(), "#!/bin/bash");
    }

    #[test]
    fn test_read_first_line_ignores_rest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("run");
        // Invalid UTF-8 after the first line is never decoded
        fs::write(&path, b"#!/bin/sh\n\xff\xfe\n").unwrap();

        assert_eq!(read_first_line(&path, TextEncoding::Utf8).unwrap(), "#!/bin/sh");
    }

    #[test]
    fn test_read_first_line_no_newline() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("run");
        fs::write(&path, "single").unwrap();

        assert_eq!(read_first_line(&path, TextEncoding::Utf8).unwrap(), "single");
    }

    #[test]
    fn test_write_text_overwrite_and_append() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.rst");
        fs::write(&path, "old\n").unwrap();

        write_text(&path, &["first\n"], &WriteOptions::overwrite()).unwrap();
        write_text(&path, &["second\n"], &WriteOptions::default()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_write_text_prepend_append() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.txt");

        let opts = WriteOptions {
            prepend: "> ".to_string(),
            append: ";\n".to_string(),
            ..WriteOptions::overwrite()
        };
        write_text(&path, &["a", "b"], &opts).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "> a;\n> b;\n");
    }

    #[test]
    fn test_write_text_converts_body_tabs_only() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.txt");

        let opts = WriteOptions {
            prepend: "\t".to_string(),
            tabs_to_spaces: Some(2),
            ..WriteOptions::overwrite()
        };
        write_text(&path, &["if x;\tthen\n"], &opts).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "\tif x;  then\n");
    }

    #[test]
    fn test_tabs_to_spaces() {
        assert_eq!(tabs_to_spaces("\tfoo\tbar", 4), "    foo    bar");
        assert_eq!(tabs_to_spaces("\tfoo", 0), "foo");
        assert_eq!(tabs_to_spaces("no tabs", 4), "no tabs");
    }

    #[test]
    fn test_spaces_to_tabs() {
        assert_eq!(spaces_to_tabs("        foo", 4), "\t\tfoo");
        assert_eq!(spaces_to_tabs("   foo", 4), "   foo");
        assert_eq!(spaces_to_tabs("  foo", 0), "  foo");
    }

    #[test]
    fn test_file_parts() {
        let parts = FileParts::new("/opt/pkg/bin/deploy.sh").unwrap();
        assert_eq!(parts.directory, PathBuf::from("/opt/pkg/bin"));
        assert_eq!(parts.stem, "deploy");
        assert_eq!(parts.extension, ".sh");
        assert_eq!(parts.file_name(), "deploy.sh");
    }

    #[test]
    fn test_file_parts_no_extension() {
        let parts = FileParts::new("/opt/pkg/bin/run").unwrap();
        assert_eq!(parts.stem, "run");
        assert_eq!(parts.extension, "");
    }

    #[test]
    fn test_file_parts_multiple_dots() {
        let parts = FileParts::new("/tmp/backup.tar.sh").unwrap();
        assert_eq!(parts.stem, "backup.tar");
        assert_eq!(parts.extension, ".sh");
    }

    #[test]
    fn test_file_parts_relative_is_absolute() {
        let parts = FileParts::new("tools/run.pl").unwrap();
        assert!(parts.directory.is_absolute());
        assert!(parts.directory.ends_with("tools"));
    }
}
