use build_iconizer::batch::{BatchEvent, BatchHandle, BatchSummary};
use build_iconizer::config::AppConfig;
use build_iconizer::dir_watcher::DirectoryWatcher;
use build_iconizer::i18n::{tr, trf, Locale, Text};
use build_iconizer::replacer::{load_target, TargetInfo};
use build_iconizer::scanner::{scan, ScanError};
use build_iconizer::target_list::{ReplaceStatus, TargetList};
use build_iconizer::transform::{transform_with, ConformedImage, TransformError, TransformOptions};
use eframe::egui::{self, RichText};
use image::{DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::ui_theme::AppTheme;

const SOURCE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "bmp", "ico", "webp"];
const PREVIEW_SIZE: egui::Vec2 = egui::vec2(300.0, 250.0);
const MAX_LOGS: usize = 500;

/// Results of work dispatched to the blocking pool.
enum WorkerEvent {
    TargetLoaded {
        generation: u64,
        path: PathBuf,
        result: Result<(TargetInfo, egui::ColorImage), String>,
    },
    SourceLoaded {
        path: PathBuf,
        result: Result<Arc<DynamicImage>, String>,
    },
    PreviewReady {
        generation: u64,
        source_name: String,
        result: Result<ConformedImage, TransformError>,
    },
}

enum BatchKind {
    Single(PathBuf),
    All,
}

/// Hands out request numbers so only the answer to the latest request is used.
#[derive(Debug, Default)]
struct RequestTicket {
    current: u64,
    pending: bool,
}

impl RequestTicket {
    fn issue(&mut self) -> u64 {
        self.current += 1;
        self.pending = true;
        self.current
    }

    /// Drops whatever is in flight.
    fn invalidate(&mut self) {
        self.current += 1;
        self.pending = false;
    }

    fn settle(&mut self, generation: u64) -> bool {
        if generation != self.current {
            return false;
        }
        self.pending = false;
        true
    }

    fn is_pending(&self) -> bool {
        self.pending
    }
}

struct Primary {
    info: TargetInfo,
    texture: egui::TextureHandle,
}

pub struct BuildIconizerApp {
    config: AppConfig,
    config_path: PathBuf,

    // Search
    directory: Option<PathBuf>,
    targets: TargetList,
    status_text: String,

    // Selected target
    primary: Option<Primary>,
    primary_error: Option<String>,
    target_request: RequestTicket,

    // Replacement source
    source_path: Option<PathBuf>,
    source: Option<Arc<DynamicImage>>,
    source_loading: bool,
    preview_texture: Option<egui::TextureHandle>,
    preview_label: String,
    preview_request: RequestTicket,

    // Batch
    batch: Option<BatchHandle>,
    batch_kind: Option<BatchKind>,

    logs: Vec<String>,

    // Runtime
    runtime: tokio::runtime::Runtime,
    worker_sender: mpsc::UnboundedSender<WorkerEvent>,
    worker_receiver: mpsc::UnboundedReceiver<WorkerEvent>,
    batch_sender: mpsc::UnboundedSender<BatchEvent>,
    batch_receiver: mpsc::UnboundedReceiver<BatchEvent>,

    // Directory watching
    watcher: Option<DirectoryWatcher>,
    watch_sender: std_mpsc::Sender<PathBuf>,
    watch_receiver: std_mpsc::Receiver<PathBuf>,
    rescan_pending: bool,

    theme: AppTheme,
}

impl BuildIconizerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        config_path: PathBuf,
    ) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let (worker_sender, worker_receiver) = mpsc::unbounded_channel();
        let (batch_sender, batch_receiver) = mpsc::unbounded_channel();
        let (watch_sender, watch_receiver) = std_mpsc::channel();

        let theme = AppTheme::default();
        theme.apply_to_ctx(&cc.egui_ctx);

        let locale = config.locale;
        let mut app = Self {
            config,
            config_path,
            directory: None,
            targets: TargetList::new(),
            status_text: tr(locale, Text::PleaseSelectDirectory).to_string(),
            primary: None,
            primary_error: None,
            target_request: RequestTicket::default(),
            source_path: None,
            source: None,
            source_loading: false,
            preview_texture: None,
            preview_label: tr(locale, Text::NoSourceYet).to_string(),
            preview_request: RequestTicket::default(),
            batch: None,
            batch_kind: None,
            logs: Vec::new(),
            runtime,
            worker_sender,
            worker_receiver,
            batch_sender,
            batch_receiver,
            watcher: None,
            watch_sender,
            watch_receiver,
            rescan_pending: false,
            theme,
        };

        log::info!("Starting with locale {}", locale.code());

        if let Some(directory) = app.config.last_directory_path().filter(|p| p.is_dir()) {
            app.set_directory(directory);
            app.start_search();
        }
        if let Some(source) = app.config.last_source_path().filter(|p| p.is_file()) {
            app.load_source(source);
        }

        Ok(app)
    }

    fn t(&self, text: Text) -> &'static str {
        tr(self.config.locale, text)
    }

    fn tf(&self, text: Text, args: &[&dyn std::fmt::Display]) -> String {
        trf(self.config.locale, text, args)
    }

    fn push_log(&mut self, message: String) {
        log::info!("{}", message);
        let stamp = chrono::Local::now().format("%H:%M:%S");
        self.logs.push(format!("[{}] {}", stamp, message));
        if self.logs.len() > MAX_LOGS {
            let remove_count = self.logs.len() - MAX_LOGS;
            self.logs.drain(0..remove_count);
        }
    }

    fn save_config(&self) {
        if let Err(e) = self.config.save(&self.config_path) {
            log::error!("❌ Failed to save config: {}", e);
        }
    }

    fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            flatten_fill: self.config.flatten_fill,
            ..TransformOptions::default()
        }
    }

    fn is_busy(&self) -> bool {
        self.batch.is_some()
            || self.source_loading
            || self.target_request.is_pending()
            || self.preview_request.is_pending()
    }

    fn pick_directory(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title(self.t(Text::DirectoryDialogTitle))
            .pick_folder();

        match picked {
            Some(path) => {
                self.status_text = self.tf(Text::DirectorySelected, &[&path.display()]);
                self.set_directory(path);
                self.start_search();
            }
            None => self.status_text = self.t(Text::DirectoryCancelled).to_string(),
        }
    }

    fn set_directory(&mut self, path: PathBuf) {
        self.config.last_directory = Some(path.display().to_string());
        self.save_config();

        self.targets.clear();
        self.target_request.invalidate();
        self.clear_primary();
        self.primary_error = None;

        self.watcher = None;
        match DirectoryWatcher::new(&path, self.watch_sender.clone()) {
            Ok(watcher) => self.watcher = Some(watcher),
            Err(e) => {
                let message = self.tf(Text::WatchFailed, &[&e]);
                self.push_log(message);
            }
        }
        self.directory = Some(path);
    }

    /// Rescans without touching the status line.
    fn refresh_targets(&mut self) -> Result<usize, ScanError> {
        let Some(directory) = self.directory.clone() else {
            return Ok(0);
        };
        let found = scan(&directory, &self.config.file_filter)?;
        self.targets.refresh(found);

        let primary_gone = self
            .primary
            .as_ref()
            .map(|p| !self.targets.contains(&p.info.path))
            .unwrap_or(false);
        if primary_gone {
            self.clear_primary();
        }
        Ok(self.targets.len())
    }

    fn start_search(&mut self) {
        let Some(directory) = self.directory.clone() else {
            self.status_text = self.t(Text::NeedDirectory).to_string();
            return;
        };
        self.save_config();

        let filter = self.config.file_filter.trim().to_string();
        let filter = if filter.is_empty() { "*".to_string() } else { filter };

        self.status_text = match self.refresh_targets() {
            Ok(0) => self.tf(Text::NoFilesFound, &[&directory.display(), &filter]),
            Ok(count) => self.tf(Text::FilesFound, &[&directory.display(), &filter, &count]),
            Err(e) => self.tf(Text::SearchFailed, &[&e]),
        };
    }

    /// Drops the selected target together with any preview computed for it.
    fn clear_primary(&mut self) {
        self.primary = None;
        self.preview_request.invalidate();
        self.preview_texture = None;
    }

    fn select_target(&mut self, path: PathBuf) {
        let generation = self.target_request.issue();
        let sender = self.worker_sender.clone();

        self.runtime.spawn_blocking(move || {
            let result = load_target(&path)
                .map(|(info, image)| (info, to_color_image(&image.to_rgba8())))
                .map_err(|e| e.to_string());
            let _ = sender.send(WorkerEvent::TargetLoaded {
                generation,
                path,
                result,
            });
        });
    }

    fn pick_source(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title(self.t(Text::SourceDialogTitle))
            .add_filter("Images", &SOURCE_EXTENSIONS)
            .pick_file();

        match picked {
            Some(path) => self.load_source(path),
            None => self.preview_label = self.t(Text::SourceCancelled).to_string(),
        }
    }

    fn load_source(&mut self, path: PathBuf) {
        self.source_loading = true;
        self.source_path = Some(path.clone());
        self.preview_label = self.tf(Text::LoadingSource, &[&file_name(&path)]);

        let sender = self.worker_sender.clone();
        self.runtime.spawn_blocking(move || {
            let result = image::open(&path)
                .map(Arc::new)
                .map_err(|e| e.to_string());
            let _ = sender.send(WorkerEvent::SourceLoaded { path, result });
        });
    }

    fn request_preview(&mut self) {
        let Some(source) = self.source.clone() else {
            return;
        };
        let Some(primary) = &self.primary else {
            self.preview_request.invalidate();
            self.preview_texture = None;
            self.preview_label = self.t(Text::NeedPrimaryFirst).to_string();
            return;
        };

        let signature = primary.info.signature;
        let generation = self.preview_request.issue();
        let options = self.transform_options();
        let source_name = self
            .source_path
            .as_deref()
            .map(file_name)
            .unwrap_or_default();
        let sender = self.worker_sender.clone();

        self.runtime.spawn_blocking(move || {
            let result = transform_with(&source, &signature, &options);
            let _ = sender.send(WorkerEvent::PreviewReady {
                generation,
                source_name,
                result,
            });
        });
    }

    fn start_batch(&mut self, kind: BatchKind) {
        let Some(source) = self.source.clone() else {
            self.status_text = self.t(Text::NeedSource).to_string();
            return;
        };

        let paths = match &kind {
            BatchKind::Single(path) => vec![path.clone()],
            BatchKind::All => self.targets.paths(),
        };
        if paths.is_empty() {
            self.status_text = self.t(Text::NeedFiles).to_string();
            return;
        }

        for path in &paths {
            self.targets.set_status(path, ReplaceStatus::Pending);
        }

        self.batch = Some(BatchHandle::spawn(
            self.runtime.handle(),
            source,
            paths,
            self.transform_options(),
            self.batch_sender.clone(),
        ));
        self.batch_kind = Some(kind);
    }

    fn replace_selected(&mut self) {
        match (&self.primary, &self.source) {
            (Some(primary), Some(_)) => {
                let path = primary.info.path.clone();
                self.start_batch(BatchKind::Single(path));
            }
            _ => self.status_text = self.t(Text::NeedSourceAndPrimary).to_string(),
        }
    }

    fn cancel_batch(&mut self) {
        if let Some(batch) = &self.batch {
            batch.cancel();
        }
    }

    fn process_worker_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.worker_receiver.try_recv() {
            match event {
                WorkerEvent::TargetLoaded {
                    generation,
                    path,
                    result,
                } => {
                    if !self.target_request.settle(generation) {
                        continue;
                    }

                    match result {
                        Ok((info, image)) => {
                            let texture =
                                ctx.load_texture("primary", image, egui::TextureOptions::NEAREST);
                            self.primary = Some(Primary { info, texture });
                            self.primary_error = None;
                            self.request_preview();
                        }
                        Err(e) => {
                            log::error!("❌ Failed to inspect {}: {}", path.display(), e);
                            self.clear_primary();
                            self.primary_error = Some(self.tf(Text::InspectFailed, &[&e]));
                        }
                    }
                }
                WorkerEvent::SourceLoaded { path, result } => {
                    // A newer pick replaced this one while it was decoding.
                    if self.source_path.as_ref() != Some(&path) {
                        continue;
                    }
                    self.source_loading = false;

                    match result {
                        Ok(image) => {
                            self.push_log(format!(
                                "📥 Source {} ({}x{})",
                                path.display(),
                                image.width(),
                                image.height()
                            ));
                            self.source = Some(image);
                            self.config.last_source = Some(path.display().to_string());
                            self.save_config();
                            self.request_preview();
                        }
                        Err(e) => {
                            self.source = None;
                            self.preview_texture = None;
                            self.preview_label = self.tf(Text::SourceLoadFailed, &[&e]);
                            self.push_log(self.preview_label.clone());
                        }
                    }
                }
                WorkerEvent::PreviewReady {
                    generation,
                    source_name,
                    result,
                } => {
                    if !self.preview_request.settle(generation) {
                        continue;
                    }

                    match result {
                        Ok(conformed) => {
                            let placement = conformed.placement();
                            self.preview_texture = Some(ctx.load_texture(
                                "preview",
                                to_color_image(&conformed.to_rgba8()),
                                egui::TextureOptions::NEAREST,
                            ));
                            self.preview_label = self.tf(
                                Text::PreviewCaption,
                                &[
                                    &source_name,
                                    &placement.width,
                                    &placement.height,
                                    &conformed.width(),
                                    &conformed.height(),
                                    &conformed.color_mode(),
                                ],
                            );
                        }
                        Err(e) => {
                            log::error!("❌ Preview transform failed: {}", e);
                            self.preview_texture = None;
                            self.preview_label = self.tf(Text::TransformFailed, &[&e]);
                        }
                    }
                }
            }
        }
    }

    fn process_batch_events(&mut self) {
        while let Ok(event) = self.batch_receiver.try_recv() {
            match event {
                BatchEvent::Started { total } => {
                    self.status_text = self.tf(Text::BatchStarted, &[&total]);
                    self.push_log(self.status_text.clone());
                }
                BatchEvent::Processing { index, total, path } => {
                    self.targets.set_status(&path, ReplaceStatus::Processing);
                    self.status_text =
                        self.tf(Text::BatchProgress, &[&(index + 1), &total, &file_name(&path)]);
                }
                BatchEvent::Replaced { path, outcome } => {
                    self.targets.set_status(&path, ReplaceStatus::Replaced);
                    self.push_log(format!(
                        "✅ {} ({}x{} {}, {} bytes)",
                        path.display(),
                        outcome.signature.width,
                        outcome.signature.height,
                        outcome.signature.color_mode,
                        outcome.bytes_written
                    ));
                    if matches!(self.batch_kind, Some(BatchKind::Single(_))) {
                        self.status_text = self.tf(Text::ReplacedOne, &[&file_name(&path)]);
                    }
                }
                BatchEvent::Failed { path, error } => {
                    let message = self.tf(Text::ReplaceFailed, &[&file_name(&path), &error]);
                    self.targets.set_status(&path, ReplaceStatus::Failed(error));
                    if matches!(self.batch_kind, Some(BatchKind::Single(_))) {
                        self.status_text = message.clone();
                    }
                    self.push_log(message);
                }
                BatchEvent::Finished(summary) => self.finish_batch(summary),
            }
        }
    }

    fn finish_batch(&mut self, summary: BatchSummary) {
        let kind = self.batch_kind.take();
        self.batch = None;

        if matches!(kind, Some(BatchKind::All)) {
            self.status_text = if summary.cancelled {
                self.tf(Text::BatchCancelled, &[&summary.replaced, &summary.total])
            } else if summary.failed > 0 {
                self.tf(
                    Text::BatchFinishedWithErrors,
                    &[&summary.replaced, &summary.total, &summary.failed],
                )
            } else {
                self.tf(Text::BatchFinished, &[&summary.replaced, &summary.total])
            };
            self.push_log(self.status_text.clone());
        }

        self.rescan_pending = false;
        if let Err(e) = self.refresh_targets() {
            let message = self.tf(Text::SearchFailed, &[&e]);
            self.push_log(message);
        }
        if let Some(path) = self.primary.as_ref().map(|p| p.info.path.clone()) {
            self.select_target(path);
        }
    }

    fn process_watch_events(&mut self) {
        let mut changed = false;
        while self.watch_receiver.try_recv().is_ok() {
            changed = true;
        }
        if !(changed || self.rescan_pending) {
            return;
        }
        if self.batch.is_some() {
            self.rescan_pending = true;
            return;
        }

        self.rescan_pending = false;
        let before = self.targets.len();
        match self.refresh_targets() {
            Ok(count) if count != before => {
                let message = self.tf(Text::ListRefreshed, &[&count]);
                self.push_log(message);
            }
            Ok(_) => {}
            Err(e) => {
                let message = self.tf(Text::SearchFailed, &[&e]);
                self.push_log(message);
            }
        }
    }

    fn property_lines(&self, info: &TargetInfo) -> Vec<String> {
        let signature = info.signature;
        let alpha = if signature.has_alpha() {
            self.t(Text::Yes)
        } else {
            self.t(Text::No)
        };
        vec![
            self.tf(Text::PropPath, &[&info.path.display()]),
            self.tf(Text::PropFormat, &[&info.format_name().to_uppercase()]),
            self.tf(Text::PropWidth, &[&signature.width]),
            self.tf(Text::PropHeight, &[&signature.height]),
            self.tf(Text::PropMode, &[&signature.color_mode]),
            self.tf(Text::PropAlpha, &[&alpha]),
            self.tf(Text::PropSize, &[&format!("{:.2}", info.size_mb())]),
        ]
    }
}

impl eframe::App for BuildIconizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_worker_events(ctx);
        self.process_batch_events();
        self.process_watch_events();

        // Channels are only drained on repaint.
        if self.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(50));
        } else if self.watcher.is_some() {
            ctx.request_repaint_after(Duration::from_millis(500));
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(self.theme.spacing_medium);
            self.show_toolbar(ui);
            ui.add_space(self.theme.spacing_small);
        });

        egui::TopBottomPanel::bottom("activity")
            .resizable(true)
            .default_height(140.0)
            .show(ctx, |ui| {
                self.show_logs_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_row(ui);
            ui.separator();
            ui.columns(3, |columns| {
                self.show_file_list(&mut columns[0]);
                self.show_primary(&mut columns[1]);
                self.show_replacement(&mut columns[2]);
            });
        });
    }
}

impl BuildIconizerApp {
    fn show_toolbar(&mut self, ui: &mut egui::Ui) {
        let idle = self.batch.is_none();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(idle, egui::Button::new(format!("📁 {}", self.t(Text::SelectDirectory))))
                .clicked()
            {
                self.pick_directory();
            }
            if ui
                .add_enabled(
                    idle && self.directory.is_some(),
                    egui::Button::new(format!("🔍 {}", self.t(Text::StartSearch))),
                )
                .clicked()
            {
                self.start_search();
            }

            ui.separator();
            ui.label(RichText::new(self.t(Text::FilterLabel)).strong());
            let filter_hint = self.t(Text::FilterField);
            let filter_response = ui.add_enabled(
                idle,
                egui::TextEdit::singleline(&mut self.config.file_filter)
                    .desired_width(150.0)
                    .hint_text(filter_hint),
            );
            if filter_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.start_search();
            }

            ui.separator();
            if ui
                .add_enabled(idle, egui::Button::new(format!("🖼 {}", self.t(Text::PickSource))))
                .clicked()
            {
                self.pick_source();
            }

            ui.separator();
            let can_replace_one = idle && self.source.is_some() && self.primary.is_some();
            if ui
                .add_enabled(
                    can_replace_one,
                    egui::Button::new(
                        RichText::new(format!("💾 {}", self.t(Text::ReplaceOne)))
                            .color(egui::Color32::WHITE),
                    )
                    .fill(self.theme.danger),
                )
                .clicked()
            {
                self.replace_selected();
            }

            let can_replace_all = idle && self.source.is_some() && !self.targets.is_empty();
            if ui
                .add_enabled(
                    can_replace_all,
                    egui::Button::new(
                        RichText::new(format!("🔁 {}", self.t(Text::ReplaceAll)))
                            .color(egui::Color32::WHITE),
                    )
                    .fill(self.theme.danger),
                )
                .clicked()
            {
                self.start_batch(BatchKind::All);
            }

            if let Some(batch) = &self.batch {
                let label = format!("⏹ {}", self.t(Text::Cancel));
                if ui
                    .add_enabled(!batch.is_cancelled(), egui::Button::new(label))
                    .clicked()
                {
                    self.cancel_batch();
                }
            }

            ui.separator();
            if ui.button(format!("🚪 {}", self.t(Text::Quit))).clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }

    fn show_status_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if self.batch.is_some() {
                ui.spinner();
            }
            ui.label(RichText::new(&self.status_text).color(self.theme.text_primary));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut locale = self.config.locale;
                egui::ComboBox::from_label(self.t(Text::Language))
                    .selected_text(locale.label())
                    .show_ui(ui, |ui| {
                        for option in Locale::ALL {
                            ui.selectable_value(&mut locale, option, option.label());
                        }
                    });
                if locale != self.config.locale {
                    self.config.locale = locale;
                    self.save_config();
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Title(
                        self.t(Text::WindowTitle).to_string(),
                    ));
                }

                ui.add_space(self.theme.spacing_medium);
                let before = self.config.flatten_fill;
                ui.color_edit_button_srgb(&mut self.config.flatten_fill);
                ui.label(RichText::new(self.t(Text::FlattenFill)).color(self.theme.text_secondary));
                if self.config.flatten_fill != before {
                    self.save_config();
                    self.request_preview();
                }
            });
        });
    }

    fn show_file_list(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new(self.t(Text::FoundFiles)).strong());

        let stats = self.targets.get_stats();
        ui.label(
            RichText::new(format!(
                "{} | ✅ {} | ❌ {}",
                stats.total, stats.replaced, stats.failed
            ))
            .small()
            .color(self.theme.text_muted),
        );

        let mut clicked = None;
        self.theme.card_frame().show(ui, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("file_list")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for entry in self.targets.entries() {
                        let selected = self
                            .primary
                            .as_ref()
                            .map(|p| p.info.path == entry.path)
                            .unwrap_or(false);
                        let text = RichText::new(format!(
                            "{} {}",
                            AppTheme::status_icon(&entry.status),
                            entry.file_name
                        ))
                        .color(self.theme.status_color(&entry.status));

                        let mut response = ui.selectable_label(selected, text);
                        if let ReplaceStatus::Failed(reason) = &entry.status {
                            response = response.on_hover_text(reason);
                        }
                        ui.label(
                            RichText::new(&entry.folder)
                                .small()
                                .color(self.theme.text_muted),
                        );

                        if response.clicked() {
                            clicked = Some(entry.path.clone());
                        }
                    }
                });
        });

        if let Some(path) = clicked {
            if self.batch.is_none() {
                self.select_target(path);
            }
        }
    }

    fn show_primary(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new(self.t(Text::PrimaryHeading)).strong());
        self.show_image_box(ui, self.primary.as_ref().map(|p| &p.texture));
        ui.separator();

        match &self.primary {
            Some(primary) => {
                for line in self.property_lines(&primary.info) {
                    ui.label(line);
                }
            }
            None => {
                let text = self
                    .primary_error
                    .clone()
                    .unwrap_or_else(|| self.t(Text::ChooseFromList).to_string());
                ui.label(text);
            }
        }
    }

    fn show_replacement(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new(self.t(Text::ReplacementHeading)).strong());
        ui.horizontal(|ui| {
            if self.source_loading || self.preview_request.is_pending() {
                ui.spinner();
            }
            ui.label(&self.preview_label);
        });
        self.show_image_box(ui, self.preview_texture.as_ref());

        if let Some(path) = &self.source_path {
            ui.label(
                RichText::new(path.display().to_string())
                    .small()
                    .color(self.theme.text_muted),
            );
        }
    }

    fn show_image_box(&self, ui: &mut egui::Ui, texture: Option<&egui::TextureHandle>) {
        egui::Frame::none()
            .fill(self.theme.preview_backdrop)
            .rounding(self.theme.radius_medium)
            .show(ui, |ui| {
                ui.set_min_size(PREVIEW_SIZE);
                ui.set_max_size(PREVIEW_SIZE);
                if let Some(texture) = texture {
                    ui.centered_and_justified(|ui| {
                        ui.add(egui::Image::new(texture).fit_to_exact_size(PREVIEW_SIZE));
                    });
                }
            });
    }

    fn show_logs_panel(&mut self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new(self.t(Text::ActivityLog))
                .strong()
                .color(self.theme.text_primary),
        );
        egui::ScrollArea::vertical()
            .id_salt("activity_log")
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for line in &self.logs {
                    ui.label(
                        RichText::new(line)
                            .monospace()
                            .color(self.theme.text_secondary),
                    );
                }
            });
    }
}

fn to_color_image(rgba: &RgbaImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [rgba.width() as usize, rgba.height() as usize],
        rgba.as_raw(),
    )
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
