use image::DynamicImage;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::replacer::{replace_target, ReplaceOutcome};
use crate::transform::TransformOptions;

#[derive(Debug, Clone)]
pub enum BatchEvent {
    Started {
        total: usize,
    },
    Processing {
        index: usize,
        total: usize,
        path: PathBuf,
    },
    Replaced {
        path: PathBuf,
        outcome: ReplaceOutcome,
    },
    Failed {
        path: PathBuf,
        error: String,
    },
    Finished(BatchSummary),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub replaced: usize,
    pub failed: usize,
    pub cancelled: bool,
}

/// Replaces every target with `source`, one after another.
///
/// A failing target is reported and skipped; it never stops the batch.
/// `cancel` is checked before each target, finished targets stay replaced.
pub fn run_batch(
    source: &DynamicImage,
    targets: &[PathBuf],
    options: &TransformOptions,
    cancel: &AtomicBool,
    events: &mpsc::UnboundedSender<BatchEvent>,
) -> BatchSummary {
    let total = targets.len();
    let mut summary = BatchSummary {
        total,
        ..BatchSummary::default()
    };

    log::info!("🤖 Batch started for {} file(s)", total);
    let _ = events.send(BatchEvent::Started { total });

    for (index, path) in targets.iter().enumerate() {
        if cancel.load(Ordering::Relaxed) {
            log::info!("Batch cancelled after {} of {} file(s)", index, total);
            summary.cancelled = true;
            break;
        }

        let _ = events.send(BatchEvent::Processing {
            index,
            total,
            path: path.clone(),
        });

        match replace_target(source, path, options) {
            Ok(outcome) => {
                summary.replaced += 1;
                let _ = events.send(BatchEvent::Replaced {
                    path: path.clone(),
                    outcome,
                });
            }
            Err(e) => {
                summary.failed += 1;
                log::error!("❌ Failed to replace {}: {}", path.display(), e);
                let _ = events.send(BatchEvent::Failed {
                    path: path.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    log::info!(
        "✅ Batch finished: {} replaced, {} failed, {} total",
        summary.replaced,
        summary.failed,
        summary.total
    );
    let _ = events.send(BatchEvent::Finished(summary));
    summary
}

/// A batch running on the blocking pool.
pub struct BatchHandle {
    cancel: Arc<AtomicBool>,
}

impl BatchHandle {
    pub fn spawn(
        runtime: &Handle,
        source: Arc<DynamicImage>,
        targets: Vec<PathBuf>,
        options: TransformOptions,
        events: mpsc::UnboundedSender<BatchEvent>,
    ) -> Self {
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = cancel.clone();
        runtime.spawn_blocking(move || run_batch(&source, &targets, &options, &flag, &events));
        Self { cancel }
    }

    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use std::fs;
    use tempfile::TempDir;

    fn source() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 40, Rgba([0, 128, 255, 255])))
    }

    fn drain(receiver: &mut mpsc::UnboundedReceiver<BatchEvent>) -> Vec<BatchEvent> {
        let mut events = Vec::new();
        while let Ok(event) = receiver.try_recv() {
            events.push(event);
        }
        events
    }

    #[test]
    fn test_failing_target_does_not_stop_batch() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.png");
        let broken = dir.path().join("b.png");
        let last = dir.path().join("c.png");
        RgbImage::from_pixel(16, 16, Rgb([9, 9, 9])).save(&first).unwrap();
        fs::write(&broken, b"garbage").unwrap();
        RgbaImage::from_pixel(32, 8, Rgba([9, 9, 9, 9])).save(&last).unwrap();

        let (sender, mut receiver) = mpsc::unbounded_channel();
        let targets = vec![first.clone(), broken.clone(), last.clone()];
        let summary = run_batch(
            &source(),
            &targets,
            &TransformOptions::default(),
            &AtomicBool::new(false),
            &sender,
        );

        assert_eq!(
            summary,
            BatchSummary { total: 3, replaced: 2, failed: 1, cancelled: false }
        );
        assert_eq!(fs::read(&broken).unwrap(), b"garbage");
        assert_eq!(image::open(&last).unwrap().to_rgba8().dimensions(), (32, 8));

        let events = drain(&mut receiver);
        assert!(matches!(events.first(), Some(BatchEvent::Started { total: 3 })));
        assert!(matches!(events.last(), Some(BatchEvent::Finished(s)) if *s == summary));
        let failed: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                BatchEvent::Failed { path, .. } => Some(path.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(failed, vec![broken]);
    }

    #[test]
    fn test_cancelled_batch_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("icon.png");
        RgbImage::from_pixel(16, 16, Rgb([1, 2, 3])).save(&target).unwrap();
        let before = fs::read(&target).unwrap();

        let (sender, mut receiver) = mpsc::unbounded_channel();
        let summary = run_batch(
            &source(),
            &[target.clone()],
            &TransformOptions::default(),
            &AtomicBool::new(true),
            &sender,
        );

        assert!(summary.cancelled);
        assert_eq!(summary.replaced, 0);
        assert_eq!(fs::read(&target).unwrap(), before);
        assert!(!drain(&mut receiver)
            .iter()
            .any(|e| matches!(e, BatchEvent::Processing { .. })));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_spawned_batch_reports_finish() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("icon.png");
        RgbImage::from_pixel(24, 24, Rgb([0, 0, 0])).save(&target).unwrap();

        let (sender, mut receiver) = mpsc::unbounded_channel();
        let handle = BatchHandle::spawn(
            &Handle::current(),
            Arc::new(source()),
            vec![target],
            TransformOptions::default(),
            sender,
        );
        assert!(!handle.is_cancelled());

        let mut finished = None;
        while let Some(event) = receiver.recv().await {
            if let BatchEvent::Finished(summary) = event {
                finished = Some(summary);
                break;
            }
        }
        assert_eq!(finished.map(|s| s.replaced), Some(1));
    }
}
