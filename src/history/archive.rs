use super::{ColumnSet, HistoryProvider};
use crate::session::{plan_stem, ExportData};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Reads prior sessions from a directory of exported session documents.
///
/// A file belongs to plan `N` when its stem is `N` or starts with `N_`.
/// Unreadable or malformed files are skipped with a warning, as are sessions
/// that placed no columns.
#[derive(Debug, Clone)]
pub struct ArchiveHistory {
    root: PathBuf,
}

impl ArchiveHistory {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn matching_files(&self, stem: &str) -> Vec<PathBuf> {
        let entries = match fs::read_dir(&self.root) {
            Ok(e) => e,
            Err(e) => {
                warn!("History archive {:?} unavailable: {}", self.root, e);
                return Vec::new();
            }
        };

        let prefix = format!("{}_", stem);
        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter(|path| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .is_some_and(|s| s == stem || s.starts_with(&prefix))
            })
            .collect();

        files.sort();
        files
    }
}

impl HistoryProvider for ArchiveHistory {
    fn load(&self, plan_name: &str) -> Vec<ColumnSet> {
        let stem = plan_stem(plan_name);
        let files = self.matching_files(stem);
        info!(
            "Loading history for '{}' from {:?} ({} candidate files)",
            stem,
            self.root,
            files.len()
        );

        let mut sessions = Vec::new();
        for path in files {
            match ExportData::load_from_file(&path) {
                Ok(doc) if doc.user_data.columns.is_empty() => {
                    debug!("Skipping {:?}: no columns placed", path);
                }
                Ok(doc) => sessions.push(doc.user_data.columns),
                Err(e) => warn!("Skipping unreadable session {:?}: {}", path, e),
            }
        }

        sessions
    }
}
