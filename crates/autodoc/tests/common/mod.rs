// Test infrastructure and utilities for autodoc tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builder for a throwaway project directory
pub struct ProjectBuilder {
    files: Vec<(PathBuf, Vec<u8>)>,
    dirs: Vec<PathBuf>,
    config: Option<String>,
}

impl ProjectBuilder {
    pub fn new() -> Self {
        Self { files: Vec::new(), dirs: Vec::new(), config: None }
    }

    /// Add a file with the given contents, creating parent directories
    pub fn file(mut self, path: impl Into<PathBuf>, contents: impl AsRef<[u8]>) -> Self {
        self.files.push((path.into(), contents.as_ref().to_vec()));
        self
    }

    pub fn dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.push(path.into());
        self
    }

    /// Create the conventional `doc/source` page directory
    pub fn with_source_dir(self) -> Self {
        self.dir("doc/source")
    }

    /// Contents of `.autodoc/config.toml`
    pub fn config(mut self, toml: &str) -> Self {
        self.config = Some(toml.to_string());
        self
    }

    pub fn build(self) -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        for dir in &self.dirs {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
        for (path, contents) in &self.files {
            let full = root.join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(full, contents).unwrap();
        }
        if let Some(config) = &self.config {
            fs::create_dir_all(root.join(".autodoc")).unwrap();
            fs::write(root.join(".autodoc/config.toml"), config).unwrap();
        }

        temp
    }
}

impl Default for ProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A small package with one script of each detection path
pub fn sample_project() -> TempDir {
    ProjectBuilder::new()
        .with_source_dir()
        .file("bin/deploy.sh", "#!/bin/bash\n\techo deploying\n")
        .file("bin/run", "#!/usr/bin/env ruby\nputs 'hi'\n")
        .file("conf/settings.yml", "answer: 42\n")
        .file("README", "hello world\n")
        .build()
}

pub fn read(root: &Path, path: &str) -> String {
    fs::read_to_string(root.join(path)).unwrap()
}
