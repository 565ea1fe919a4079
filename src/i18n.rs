//! Enum-keyed UI strings.
//!
//! Every visible string is a [`Text`] variant; each locale maps every
//! variant to a template. Templates use `{}` placeholders that [`trf`]
//! fills in order.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    German,
    English,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::German, Locale::English];

    pub fn code(self) -> &'static str {
        match self {
            Locale::German => "de_DE",
            Locale::English => "en_US",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Locale::German => "Deutsch",
            Locale::English => "English",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    WindowTitle,
    SelectDirectory,
    DirectoryDialogTitle,
    StartSearch,
    FilterLabel,
    FilterField,
    PickSource,
    SourceDialogTitle,
    ReplaceOne,
    ReplaceAll,
    Cancel,
    Quit,
    Language,
    FlattenFill,
    FoundFiles,
    PrimaryHeading,
    ReplacementHeading,
    ActivityLog,
    ChooseFromList,
    NoSourceYet,
    PleaseSelectDirectory,
    DirectorySelected,
    DirectoryCancelled,
    SourceCancelled,
    FilesFound,
    NoFilesFound,
    SearchFailed,
    NeedDirectory,
    NeedPrimaryFirst,
    LoadingSource,
    SourceLoadFailed,
    PreviewCaption,
    TransformFailed,
    PropPath,
    PropFormat,
    PropWidth,
    PropHeight,
    PropMode,
    PropAlpha,
    PropSize,
    Yes,
    No,
    InspectFailed,
    NeedSourceAndPrimary,
    NeedSource,
    NeedFiles,
    BatchStarted,
    BatchProgress,
    BatchFinished,
    BatchFinishedWithErrors,
    BatchCancelled,
    ReplacedOne,
    ReplaceFailed,
    WatchFailed,
    ListRefreshed,
}

impl Text {
    pub const ALL: [Text; 55] = [
        Text::WindowTitle,
        Text::SelectDirectory,
        Text::DirectoryDialogTitle,
        Text::StartSearch,
        Text::FilterLabel,
        Text::FilterField,
        Text::PickSource,
        Text::SourceDialogTitle,
        Text::ReplaceOne,
        Text::ReplaceAll,
        Text::Cancel,
        Text::Quit,
        Text::Language,
        Text::FlattenFill,
        Text::FoundFiles,
        Text::PrimaryHeading,
        Text::ReplacementHeading,
        Text::ActivityLog,
        Text::ChooseFromList,
        Text::NoSourceYet,
        Text::PleaseSelectDirectory,
        Text::DirectorySelected,
        Text::DirectoryCancelled,
        Text::SourceCancelled,
        Text::FilesFound,
        Text::NoFilesFound,
        Text::SearchFailed,
        Text::NeedDirectory,
        Text::NeedPrimaryFirst,
        Text::LoadingSource,
        Text::SourceLoadFailed,
        Text::PreviewCaption,
        Text::TransformFailed,
        Text::PropPath,
        Text::PropFormat,
        Text::PropWidth,
        Text::PropHeight,
        Text::PropMode,
        Text::PropAlpha,
        Text::PropSize,
        Text::Yes,
        Text::No,
        Text::InspectFailed,
        Text::NeedSourceAndPrimary,
        Text::NeedSource,
        Text::NeedFiles,
        Text::BatchStarted,
        Text::BatchProgress,
        Text::BatchFinished,
        Text::BatchFinishedWithErrors,
        Text::BatchCancelled,
        Text::ReplacedOne,
        Text::ReplaceFailed,
        Text::WatchFailed,
        Text::ListRefreshed,
    ];
}

pub fn tr(locale: Locale, text: Text) -> &'static str {
    match locale {
        Locale::German => german(text),
        Locale::English => english(text),
    }
}

/// Translates and fills `{}` placeholders from `args` in order. Surplus
/// placeholders stay as they are, surplus arguments are ignored.
pub fn trf(locale: Locale, text: Text, args: &[&dyn Display]) -> String {
    let template = tr(locale, text);
    let mut out = String::with_capacity(template.len() + 16);
    let mut args = args.iter();
    let mut rest = template;

    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => out.push_str(&arg.to_string()),
            None => out.push_str("{}"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

fn german(text: Text) -> &'static str {
    match text {
        Text::WindowTitle => "BuildIconizer – Massen-Bildsynchronisation",
        Text::SelectDirectory => "Verzeichnis auswählen...",
        Text::DirectoryDialogTitle => "Wähle das Startverzeichnis",
        Text::StartSearch => "Suchen starten",
        Text::FilterLabel => "Filter:",
        Text::FilterField => "Dateifilter",
        Text::PickSource => "Ersatz-Datei auswählen",
        Text::SourceDialogTitle => "Wähle eine Ersatzdatei",
        Text::ReplaceOne => "Bild ersetzen (ACHTUNG!)",
        Text::ReplaceAll => "ALLE ERSETZEN",
        Text::Cancel => "Abbrechen",
        Text::Quit => "Beenden",
        Text::Language => "Sprache",
        Text::FlattenFill => "Hintergrund ohne Alpha:",
        Text::FoundFiles => "Gefundene Dateien:",
        Text::PrimaryHeading => "Primärbild & Details:",
        Text::ReplacementHeading => "Ersatzbild:",
        Text::ActivityLog => "Protokoll",
        Text::ChooseFromList => "Wähle eine Datei aus der Liste.",
        Text::NoSourceYet => "Ersatzbild noch nicht ausgewählt.",
        Text::PleaseSelectDirectory => "Bitte ein Startverzeichnis auswählen.",
        Text::DirectorySelected => "Verzeichnis ausgewählt: {}",
        Text::DirectoryCancelled => "Verzeichnisauswahl abgebrochen.",
        Text::SourceCancelled => "Ersatzbild: Auswahl abgebrochen.",
        Text::FilesFound => "Verzeichnis: {}\nFilter: {} | {} Dateien gefunden.",
        Text::NoFilesFound => "Verzeichnis: {}\nFilter: {} | Keine Dateien gefunden.",
        Text::SearchFailed => "Fehler bei der Suche: {}",
        Text::NeedDirectory => "Fehler: Zuerst ein Verzeichnis auswählen.",
        Text::NeedPrimaryFirst => "Primärbild muss zuerst ausgewählt werden.",
        Text::LoadingSource => "Ersatzbild wird geladen: {}",
        Text::SourceLoadFailed => "Ersatzbild konnte nicht geladen werden: {}",
        Text::PreviewCaption => {
            "Ersatzbild ({}) transformiert:\nGröße: {}x{} zentriert in {}x{} | Modus: {}"
        }
        Text::TransformFailed => "Ersatzbild: Transformation fehlgeschlagen ({})",
        Text::PropPath => "Pfad: {}",
        Text::PropFormat => "Format: {}",
        Text::PropWidth => "Breite: {} px (Zielbreite)",
        Text::PropHeight => "Höhe: {} px (Zielhöhe)",
        Text::PropMode => "Farbmodus: {} (Zielmodus)",
        Text::PropAlpha => "Alphakanal: {}",
        Text::PropSize => "Größe: {} MB",
        Text::Yes => "Ja",
        Text::No => "Nein",
        Text::InspectFailed => "Fehler beim Laden/Parsen des Bildes: {}",
        Text::NeedSourceAndPrimary => "Fehler: Primär- und Ersatzbild müssen ausgewählt sein.",
        Text::NeedSource => "Fehler: Zuerst ein Ersatzbild auswählen.",
        Text::NeedFiles => "Fehler: Zuerst Dateien suchen.",
        Text::BatchStarted => "🤖 START: Verarbeite {} Datei(en)...",
        Text::BatchProgress => "🤖 VERARBEITE ({}/{}): {}...",
        Text::BatchFinished => "✅ FERTIG: {} von {} Dateien erfolgreich ersetzt!",
        Text::BatchFinishedWithErrors => "⚠ FERTIG: {} von {} Dateien ersetzt, {} fehlgeschlagen.",
        Text::BatchCancelled => "⏹ ABGEBROCHEN: {} von {} Dateien ersetzt.",
        Text::ReplacedOne => "✅ ERFOLG: Datei ersetzt! Neuer Inhalt von '{}' gespeichert.",
        Text::ReplaceFailed => "❌ FEHLER beim Ersetzen von {}: {}",
        Text::WatchFailed => "Verzeichnisüberwachung nicht möglich: {}",
        Text::ListRefreshed => "Verzeichnis geändert, Liste aktualisiert ({} Dateien).",
    }
}

fn english(text: Text) -> &'static str {
    match text {
        Text::WindowTitle => "BuildIconizer – bulk image sync",
        Text::SelectDirectory => "Select directory...",
        Text::DirectoryDialogTitle => "Choose the start directory",
        Text::StartSearch => "Start search",
        Text::FilterLabel => "Filter:",
        Text::FilterField => "File filter",
        Text::PickSource => "Choose replacement file",
        Text::SourceDialogTitle => "Choose a replacement file",
        Text::ReplaceOne => "Replace image (CAUTION!)",
        Text::ReplaceAll => "REPLACE ALL",
        Text::Cancel => "Cancel",
        Text::Quit => "Quit",
        Text::Language => "Language",
        Text::FlattenFill => "Background without alpha:",
        Text::FoundFiles => "Found files:",
        Text::PrimaryHeading => "Primary image & details:",
        Text::ReplacementHeading => "Replacement image:",
        Text::ActivityLog => "Activity",
        Text::ChooseFromList => "Pick a file from the list.",
        Text::NoSourceYet => "No replacement image selected yet.",
        Text::PleaseSelectDirectory => "Please select a start directory.",
        Text::DirectorySelected => "Directory selected: {}",
        Text::DirectoryCancelled => "Directory selection cancelled.",
        Text::SourceCancelled => "Replacement image: selection cancelled.",
        Text::FilesFound => "Directory: {}\nFilter: {} | {} files found.",
        Text::NoFilesFound => "Directory: {}\nFilter: {} | No files found.",
        Text::SearchFailed => "Search failed: {}",
        Text::NeedDirectory => "Error: select a directory first.",
        Text::NeedPrimaryFirst => "Select a primary image first.",
        Text::LoadingSource => "Loading replacement image: {}",
        Text::SourceLoadFailed => "Could not load replacement image: {}",
        Text::PreviewCaption => {
            "Replacement ({}) transformed:\nSize: {}x{} centered in {}x{} | Mode: {}"
        }
        Text::TransformFailed => "Replacement image: transformation failed ({})",
        Text::PropPath => "Path: {}",
        Text::PropFormat => "Format: {}",
        Text::PropWidth => "Width: {} px (target width)",
        Text::PropHeight => "Height: {} px (target height)",
        Text::PropMode => "Color mode: {} (target mode)",
        Text::PropAlpha => "Alpha channel: {}",
        Text::PropSize => "Size: {} MB",
        Text::Yes => "Yes",
        Text::No => "No",
        Text::InspectFailed => "Failed to load/parse image: {}",
        Text::NeedSourceAndPrimary => "Error: primary and replacement image must be selected.",
        Text::NeedSource => "Error: choose a replacement image first.",
        Text::NeedFiles => "Error: search for files first.",
        Text::BatchStarted => "🤖 START: processing {} file(s)...",
        Text::BatchProgress => "🤖 PROCESSING ({}/{}): {}...",
        Text::BatchFinished => "✅ DONE: {} of {} files replaced successfully!",
        Text::BatchFinishedWithErrors => "⚠ DONE: {} of {} files replaced, {} failed.",
        Text::BatchCancelled => "⏹ CANCELLED: {} of {} files replaced.",
        Text::ReplacedOne => "✅ SUCCESS: file replaced! New content of '{}' saved.",
        Text::ReplaceFailed => "❌ ERROR replacing {}: {}",
        Text::WatchFailed => "Cannot watch directory: {}",
        Text::ListRefreshed => "Directory changed, list refreshed ({} files).",
    }
}
