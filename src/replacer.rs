use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs;
use std::io::{BufReader, Cursor};
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

use crate::color_mode::ColorMode;
use crate::palette::IndexedImage;
use crate::transform::{
    transform_with, ConformedImage, Placement, Raster, TargetSignature, TransformError,
    TransformOptions,
};

#[derive(Error, Debug)]
pub enum ReplaceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("PNG header error: {0}")]
    PngDecoding(#[from] png::DecodingError),

    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error("Unknown image format: {}", .0.display())]
    UnknownFormat(PathBuf),
}

/// Everything the UI and the replacer need to know about a file on disk.
#[derive(Debug, Clone)]
pub struct TargetInfo {
    pub path: PathBuf,
    pub format: ImageFormat,
    pub signature: TargetSignature,
    pub file_size: u64,
}

impl TargetInfo {
    pub fn format_name(&self) -> &'static str {
        self.format.extensions_str().first().copied().unwrap_or("?")
    }

    pub fn size_mb(&self) -> f64 {
        self.file_size as f64 / (1024.0 * 1024.0)
    }
}

#[derive(Debug, Clone)]
pub struct ReplaceOutcome {
    pub signature: TargetSignature,
    pub placement: Placement,
    pub format: ImageFormat,
    pub bytes_written: usize,
}

/// Reads a target's signature and container format.
pub fn inspect_target(path: &Path) -> Result<TargetInfo, ReplaceError> {
    load_target(path).map(|(info, _)| info)
}

/// Like [`inspect_target`], also handing back the decoded pixels.
pub fn load_target(path: &Path) -> Result<(TargetInfo, DynamicImage), ReplaceError> {
    let mut reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = match reader.format() {
        Some(format) => format,
        None => {
            let format = ImageFormat::from_path(path)
                .map_err(|_| ReplaceError::UnknownFormat(path.to_path_buf()))?;
            reader.set_format(format);
            format
        }
    };

    let image = reader.decode()?;

    // The decoder expands indexed PNGs to RGB(A); the header still knows.
    let color_mode = if format == ImageFormat::Png && png_is_indexed(path)? {
        ColorMode::Palette
    } else {
        ColorMode::of_image(&image)?
    };

    let info = TargetInfo {
        path: path.to_path_buf(),
        format,
        signature: TargetSignature::new(image.width(), image.height(), color_mode),
        file_size: fs::metadata(path)?.len(),
    };
    Ok((info, image))
}

fn png_is_indexed(path: &Path) -> Result<bool, ReplaceError> {
    let decoder = png::Decoder::new(BufReader::new(fs::File::open(path)?));
    let reader = decoder.read_info()?;
    Ok(reader.info().color_type == png::ColorType::Indexed)
}

/// Encodes a conformed image in `format`. Indexed rasters become real
/// indexed PNGs; other containers get the expanded RGB pixels.
pub fn encode(image: &ConformedImage, format: ImageFormat) -> Result<Vec<u8>, ReplaceError> {
    let mut bytes = Vec::new();
    match image.raster() {
        Raster::Direct(direct) => direct.write_to(&mut Cursor::new(&mut bytes), format)?,
        Raster::Indexed(indexed) if format == ImageFormat::Png => {
            write_indexed_png(indexed, &mut bytes)?
        }
        Raster::Indexed(indexed) => DynamicImage::ImageRgb8(indexed.to_rgb8())
            .write_to(&mut Cursor::new(&mut bytes), format)?,
    }
    Ok(bytes)
}

fn write_indexed_png(image: &IndexedImage, out: &mut Vec<u8>) -> Result<(), ReplaceError> {
    let mut encoder = png::Encoder::new(out, image.width(), image.height());
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(image.palette().iter().flatten().copied().collect::<Vec<u8>>());

    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.indices())?;
    writer.finish()?;
    Ok(())
}

/// Overwrites `path` with `source` conformed to the file's own signature.
///
/// The new content is fully encoded in memory and written to a sibling temp
/// file before being renamed over the target, so a failure at any step
/// leaves the original file as it was.
pub fn replace_target(
    source: &DynamicImage,
    path: &Path,
    options: &TransformOptions,
) -> Result<ReplaceOutcome, ReplaceError> {
    let target = inspect_target(path)?;
    let conformed = transform_with(source, &target.signature, options)?;
    let bytes = encode(&conformed, target.format)?;
    write_atomically(path, &bytes)?;

    log::info!(
        "Replaced {} ({}x{} {}, {})",
        path.display(),
        target.signature.width,
        target.signature.height,
        target.signature.color_mode,
        target.format_name()
    );

    Ok(ReplaceOutcome {
        signature: target.signature,
        placement: conformed.placement(),
        format: target.format,
        bytes_written: bytes.len(),
    })
}

/// Writes through symlinks to the file they point at and keeps its
/// permission bits.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), ReplaceError> {
    let resolved = fs::canonicalize(path)?;
    let permissions = fs::metadata(&resolved)?.permissions();
    let file_name = resolved
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("target");
    let temp_path = resolved.with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()));

    let result = fs::write(&temp_path, bytes)
        .and_then(|_| fs::set_permissions(&temp_path, permissions))
        .and_then(|_| fs::rename(&temp_path, &resolved));
    if let Err(e) = result {
        if temp_path.exists() {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                log::warn!("Failed to remove {}: {}", temp_path.display(), cleanup);
            }
        }
        return Err(e.into());
    }
    Ok(())
}
