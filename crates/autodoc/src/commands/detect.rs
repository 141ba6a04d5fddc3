//! Detect command implementation

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use autodoc::config::Config;
use autodoc::detect::{detect, ScriptType};
use autodoc::theme;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
struct Detection<'a> {
    path: &'a Path,
    #[serde(rename = "type")]
    script_type: Option<ScriptType>,
}

/// Classify each path, stopping at the first one that cannot be read
pub fn detect_files(config: &Config, paths: &[PathBuf], format: OutputFormat) -> Result<()> {
    let detections = detect_all(config, paths)?;
    println!("{}", render_detections(&detections, format)?);
    Ok(())
}

fn detect_all<'a>(config: &Config, paths: &'a [PathBuf]) -> Result<Vec<Detection<'a>>> {
    paths
        .iter()
        .map(|path| -> Result<Detection<'a>> {
            let script_type = detect(path, config.encoding)
                .with_context(|| format!("Failed to inspect {}", path.display()))?;
            Ok(Detection { path, script_type })
        })
        .collect()
}

fn render_detections(detections: &[Detection<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(detections)?),
        OutputFormat::Text => Ok(detections
            .iter()
            .map(|d| {
                let badge = match d.script_type {
                    Some(t) => theme::type_badge(t),
                    None => theme::unknown_badge(),
                };
                format!("{}: {}", d.path.display(), badge)
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_detect_all() {
        let temp = TempDir::new().unwrap();
        let script = temp.path().join("deploy.sh");
        let tool = temp.path().join("tool");
        let notes = temp.path().join("notes");
        fs::write(&script, "").unwrap();
        fs::write(&tool, "#!/usr/bin/perl\n").unwrap();
        fs::write(&notes, "hello world\n").unwrap();

        let paths = [script, tool, notes];
        let found: Vec<_> = detect_all(&Config::default(), &paths)
            .unwrap()
            .iter()
            .map(|d| d.script_type)
            .collect();
        assert_eq!(found, vec![Some(ScriptType::Bash), Some(ScriptType::Perl), None]);
    }

    #[test]
    fn test_detect_all_uses_configured_encoding() {
        let temp = TempDir::new().unwrap();
        let tool = temp.path().join("tool");
        fs::write(&tool, b"#!/usr/bin/perl \xe9\n").unwrap();
        let paths = [tool];

        assert!(detect_all(&Config::default(), &paths).is_err());

        let config = Config { encoding: autodoc::TextEncoding::Latin1, ..Default::default() };
        let found = detect_all(&config, &paths).unwrap();
        assert_eq!(found[0].script_type, Some(ScriptType::Perl));
    }

    #[test]
    fn test_render_text() {
        let script = PathBuf::from("/tmp/deploy.sh");
        let notes = PathBuf::from("/tmp/notes");
        let detections = [
            Detection { path: &script, script_type: Some(ScriptType::Bash) },
            Detection { path: &notes, script_type: None },
        ];

        let text = render_detections(&detections, OutputFormat::Text).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("/tmp/deploy.sh: "));
        assert!(lines[0].contains("bash"));
        assert!(lines[1].starts_with("/tmp/notes: "));
        assert!(lines[1].contains("unknown"));
    }

    #[test]
    fn test_render_json() {
        let run = PathBuf::from("/tmp/run");
        let notes = PathBuf::from("/tmp/notes");
        let detections = [
            Detection { path: &run, script_type: Some(ScriptType::Zsh) },
            Detection { path: &notes, script_type: None },
        ];

        let json = render_detections(&detections, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["path"], "/tmp/run");
        assert_eq!(value[0]["type"], "zsh");
        assert!(value[1]["type"].is_null());
    }

    #[test]
    fn test_detect_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let result =
            detect_files(&Config::default(), &[temp.path().join("missing")], OutputFormat::Text);
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Failed to inspect"));
    }
}
