use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use thiserror::Error;

const IMAGE_EXTENSIONS: [&str; 9] = ["png", "jpg", "jpeg", "gif", "bmp", "ico", "tif", "tiff", "webp"];

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Watch path does not exist: {}", .0.display())]
    MissingPath(PathBuf),

    #[error("Watch path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Watcher error: {0}")]
    Notify(#[from] notify::Error),
}

/// Watches a directory tree and forwards paths of image files that were
/// created, modified or removed. Dropping the watcher stops it.
pub struct DirectoryWatcher {
    _watcher: RecommendedWatcher,
    root: PathBuf,
}

impl DirectoryWatcher {
    pub fn new<P: AsRef<Path>>(path: P, sender: mpsc::Sender<PathBuf>) -> Result<Self, WatchError> {
        let root = path.as_ref().to_path_buf();

        if !root.exists() {
            return Err(WatchError::MissingPath(root));
        }
        if !root.is_dir() {
            return Err(WatchError::NotADirectory(root));
        }

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    if !matches!(
                        event.kind,
                        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                    ) {
                        return;
                    }
                    for path in event.paths.into_iter().filter(|p| is_image_file(p)) {
                        log::debug!("📁 {:?} for {}", event.kind, path.display());
                        if sender.send(path).is_err() {
                            // Receiver is gone, the app no longer listens.
                            return;
                        }
                    }
                }
                Err(e) => {
                    log::error!("❌ Watch error: {:?}", e);
                }
            },
            notify::Config::default(),
        )?;

        watcher.watch(&root, RecursiveMode::Recursive)?;
        log::info!("🔎 Watching directory: {}", root.display());

        Ok(Self {
            _watcher: watcher,
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Image files by extension. Hidden files are skipped, which also covers the
/// replacer's temporary files.
pub fn is_image_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(true);
    if hidden {
        return false;
    }

    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("test.jpg")));
        assert!(is_image_file(Path::new("test.jpeg")));
        assert!(is_image_file(Path::new("test.png")));
        assert!(is_image_file(Path::new("icon.ico")));
        assert!(is_image_file(Path::new("TEST.JPG")));
        assert!(!is_image_file(Path::new("test.txt")));
        assert!(!is_image_file(Path::new("test")));
        assert!(!is_image_file(Path::new(".icon.png.3f2c.tmp")));
        assert!(!is_image_file(Path::new(".hidden.png")));
    }

    #[test]
    fn test_watcher_rejects_missing_and_file_paths() {
        let dir = TempDir::new().unwrap();
        let (sender, _receiver) = mpsc::channel();

        let missing = dir.path().join("missing");
        assert!(matches!(
            DirectoryWatcher::new(&missing, sender.clone()),
            Err(WatchError::MissingPath(_))
        ));

        let file = dir.path().join("file.png");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(
            DirectoryWatcher::new(&file, sender),
            Err(WatchError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_watcher_reports_new_image() {
        let dir = TempDir::new().unwrap();
        let (sender, receiver) = mpsc::channel();
        let watcher = DirectoryWatcher::new(dir.path(), sender).unwrap();
        assert_eq!(watcher.root(), dir.path());

        let created = dir.path().join("new.png");
        fs::write(&created, b"x").unwrap();

        let reported = receiver.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(reported.file_name(), created.file_name());
    }
}
