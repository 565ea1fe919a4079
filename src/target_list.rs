use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum ReplaceStatus {
    Pending,
    Processing,
    Replaced,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct TargetEntry {
    pub path: PathBuf,
    pub file_name: String,
    pub folder: String,
    pub status: ReplaceStatus,
}

impl TargetEntry {
    pub fn new(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let folder = path
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        Self {
            path,
            file_name,
            folder,
            status: ReplaceStatus::Pending,
        }
    }
}

/// Search results shown in the file list, with the replace status of each.
#[derive(Debug, Default)]
pub struct TargetList {
    entries: Vec<TargetEntry>,
}

impl TargetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list with `paths`, keeping the status of entries that
    /// were already present.
    pub fn refresh(&mut self, paths: Vec<PathBuf>) {
        let previous = std::mem::take(&mut self.entries);
        self.entries = paths
            .into_iter()
            .map(|path| {
                let status = previous
                    .iter()
                    .find(|entry| entry.path == path)
                    .map(|entry| entry.status.clone());
                let mut entry = TargetEntry::new(path);
                if let Some(status) = status {
                    entry.status = status;
                }
                entry
            })
            .collect();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[TargetEntry] {
        &self.entries
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|entry| entry.path.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|entry| entry.path == path)
    }

    pub fn set_status(&mut self, path: &Path, status: ReplaceStatus) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.path == path) {
            entry.status = status;
        }
    }

    pub fn reset_statuses(&mut self) {
        for entry in &mut self.entries {
            entry.status = ReplaceStatus::Pending;
        }
    }

    pub fn get_stats(&self) -> ListStats {
        let mut stats = ListStats {
            total: self.entries.len(),
            ..ListStats::default()
        };
        for entry in &self.entries {
            match entry.status {
                ReplaceStatus::Pending => stats.pending += 1,
                ReplaceStatus::Processing => stats.processing += 1,
                ReplaceStatus::Replaced => stats.replaced += 1,
                ReplaceStatus::Failed(_) => stats.failed += 1,
            }
        }
        stats
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStats {
    pub total: usize,
    pub pending: usize,
    pub processing: usize,
    pub replaced: usize,
    pub failed: usize,
}
