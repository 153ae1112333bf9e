use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tgf_deps::prelude::*;

/// Mock TgfReader for testing that records every path it is asked for
#[derive(Clone)]
pub struct MockTgfReader {
    pub content: String,
    pub should_fail: bool,
    pub requested_paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockTgfReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
            requested_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }

    pub fn requested_paths(&self) -> Vec<PathBuf> {
        self.requested_paths.lock().unwrap().clone()
    }
}

impl TgfReader for MockTgfReader {
    fn read_tgf(&self, path: &Path) -> Result<String> {
        self.requested_paths.lock().unwrap().push(path.to_path_buf());
        if self.should_fail {
            anyhow::bail!("Mock TGF read failure");
        }
        Ok(self.content.clone())
    }
}
