//! Fit a source image into a target's exact size and color mode.
//!
//! The source is scaled uniformly until it touches the target bounds,
//! centered on a fully transparent RGBA canvas and then converted to the
//! target mode. Targets without alpha are flattened over an opaque fill
//! color (black unless configured otherwise) before the cast, grayscale uses
//! ITU-R BT.601 luma and palette targets use the 216-color web-safe cube.

use fast_image_resize as fr;
use image::imageops::{self, FilterType};
use image::{
    DynamicImage, GenericImageView, ImageBuffer, Luma, LumaA, Rgb, RgbImage, Rgba, RgbaImage,
};
use thiserror::Error;

use crate::color_mode::ColorMode;
use crate::palette::{quantize_web, IndexedImage};

/// Upper bound on target canvas size, so a corrupt header cannot make us
/// allocate gigabytes.
const MAX_TARGET_PIXELS: u64 = 16_384 * 16_384;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Invalid source image: {0}")]
    InvalidSourceImage(String),

    #[error("Invalid target signature: {width}x{height}")]
    InvalidTargetSignature { width: u32, height: u32 },

    #[error("Unsupported color mode: {0}")]
    UnsupportedColorMode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSignature {
    pub width: u32,
    pub height: u32,
    pub color_mode: ColorMode,
}

impl TargetSignature {
    pub fn new(width: u32, height: u32, color_mode: ColorMode) -> Self {
        Self {
            width,
            height,
            color_mode,
        }
    }

    pub fn has_alpha(&self) -> bool {
        self.color_mode.has_alpha()
    }

    pub fn validate(&self) -> Result<(), TransformError> {
        let pixels = self.width as u64 * self.height as u64;
        if self.width == 0 || self.height == 0 || pixels > MAX_TARGET_PIXELS {
            return Err(TransformError::InvalidTargetSignature {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformOptions {
    /// Opaque color transparent regions are composited over for targets
    /// without an alpha channel.
    pub flatten_fill: [u8; 3],
    pub filter: FilterType,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            flatten_fill: [0, 0, 0],
            filter: FilterType::Lanczos3,
        }
    }
}

/// Where the scaled source sits on the target canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

impl Placement {
    /// Uniform "fit inside" scaling: the scale factor is the smaller of the
    /// two axis ratios, so one side touches the bound and nothing is cropped.
    pub fn fit(source: (u32, u32), bounds: (u32, u32)) -> Self {
        let (source_width, source_height) = source;
        let (bound_width, bound_height) = bounds;

        let scale = (bound_width as f64 / source_width as f64)
            .min(bound_height as f64 / source_height as f64);

        let width = ((source_width as f64 * scale).round() as u32).clamp(1, bound_width);
        let height = ((source_height as f64 * scale).round() as u32).clamp(1, bound_height);

        Self {
            width,
            height,
            x: (bound_width - width) / 2,
            y: (bound_height - height) / 2,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Raster {
    Direct(DynamicImage),
    Indexed(IndexedImage),
}

/// Transform output: a raster whose size and mode equal the target's.
#[derive(Debug, Clone)]
pub struct ConformedImage {
    mode: ColorMode,
    raster: Raster,
    placement: Placement,
}

impl ConformedImage {
    pub fn color_mode(&self) -> ColorMode {
        self.mode
    }

    pub fn width(&self) -> u32 {
        match &self.raster {
            Raster::Direct(image) => image.width(),
            Raster::Indexed(image) => image.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match &self.raster {
            Raster::Direct(image) => image.height(),
            Raster::Indexed(image) => image.height(),
        }
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// RGBA view used for on-screen previews.
    pub fn to_rgba8(&self) -> RgbaImage {
        match &self.raster {
            Raster::Direct(image) => image.to_rgba8(),
            Raster::Indexed(image) => DynamicImage::ImageRgb8(image.to_rgb8()).to_rgba8(),
        }
    }
}

pub fn transform(
    source: &DynamicImage,
    target: &TargetSignature,
) -> Result<ConformedImage, TransformError> {
    transform_with(source, target, &TransformOptions::default())
}

pub fn transform_with(
    source: &DynamicImage,
    target: &TargetSignature,
    options: &TransformOptions,
) -> Result<ConformedImage, TransformError> {
    target.validate()?;

    let (source_width, source_height) = source.dimensions();
    if source_width == 0 || source_height == 0 {
        return Err(TransformError::InvalidSourceImage(format!(
            "zero-sized source ({}x{})",
            source_width, source_height
        )));
    }

    let placement = Placement::fit(
        (source_width, source_height),
        (target.width, target.height),
    );
    let resized = resize_rgba(
        &source.to_rgba8(),
        placement.width,
        placement.height,
        options.filter,
    );

    // The canvas starts fully transparent, so a straight pixel copy is the
    // same as compositing the resized source over it.
    let mut canvas = RgbaImage::new(target.width, target.height);
    imageops::replace(&mut canvas, &resized, placement.x as i64, placement.y as i64);

    log::debug!(
        "Scaled {}x{} -> {}x{} at ({}, {}) on {}x{} {}",
        source_width,
        source_height,
        placement.width,
        placement.height,
        placement.x,
        placement.y,
        target.width,
        target.height,
        target.color_mode
    );

    Ok(ConformedImage {
        mode: target.color_mode,
        raster: conform_canvas(&canvas, target.color_mode, options.flatten_fill),
        placement,
    })
}

/// Decodes `bytes` and transforms the result.
pub fn transform_bytes(
    bytes: &[u8],
    target: &TargetSignature,
) -> Result<ConformedImage, TransformError> {
    let source = image::load_from_memory(bytes)
        .map_err(|e| TransformError::InvalidSourceImage(e.to_string()))?;
    transform(&source, target)
}

/// Converts a whole image to `mode` without resizing. An image that is
/// already in `mode` is returned unchanged.
pub fn convert_mode(
    image: &DynamicImage,
    mode: ColorMode,
    flatten_fill: [u8; 3],
) -> Result<ConformedImage, TransformError> {
    let placement = Placement {
        width: image.width(),
        height: image.height(),
        x: 0,
        y: 0,
    };

    let raster = if ColorMode::of_image(image)? == mode {
        Raster::Direct(image.clone())
    } else {
        conform_canvas(&image.to_rgba8(), mode, flatten_fill)
    };

    Ok(ConformedImage {
        mode,
        raster,
        placement,
    })
}

fn conform_canvas(canvas: &RgbaImage, mode: ColorMode, fill: [u8; 3]) -> Raster {
    let (width, height) = canvas.dimensions();
    let direct = match mode {
        ColorMode::Rgba => DynamicImage::ImageRgba8(canvas.clone()),
        ColorMode::Rgb => DynamicImage::ImageRgb8(flatten(canvas, fill)),
        ColorMode::Grayscale => {
            let flat = flatten(canvas, fill);
            DynamicImage::ImageLuma8(ImageBuffer::from_fn(width, height, |x, y| {
                let Rgb([r, g, b]) = *flat.get_pixel(x, y);
                Luma([bt601_luma(r, g, b)])
            }))
        }
        ColorMode::GrayscaleAlpha => {
            DynamicImage::ImageLumaA8(ImageBuffer::from_fn(width, height, |x, y| {
                let Rgba([r, g, b, a]) = *canvas.get_pixel(x, y);
                LumaA([bt601_luma(r, g, b), a])
            }))
        }
        ColorMode::Palette => return Raster::Indexed(quantize_web(&flatten(canvas, fill))),
        ColorMode::Grayscale16 => {
            let flat = flatten(canvas, fill);
            DynamicImage::ImageLuma16(ImageBuffer::from_fn(width, height, |x, y| {
                let Rgb([r, g, b]) = *flat.get_pixel(x, y);
                Luma([widen(bt601_luma(r, g, b))])
            }))
        }
        ColorMode::GrayscaleAlpha16 => {
            DynamicImage::ImageLumaA16(ImageBuffer::from_fn(width, height, |x, y| {
                let Rgba([r, g, b, a]) = *canvas.get_pixel(x, y);
                LumaA([widen(bt601_luma(r, g, b)), widen(a)])
            }))
        }
        ColorMode::Rgb16 => {
            let flat = flatten(canvas, fill);
            DynamicImage::ImageRgb16(ImageBuffer::from_fn(width, height, |x, y| {
                let Rgb([r, g, b]) = *flat.get_pixel(x, y);
                Rgb([widen(r), widen(g), widen(b)])
            }))
        }
        ColorMode::Rgba16 => {
            DynamicImage::ImageRgba16(ImageBuffer::from_fn(width, height, |x, y| {
                let Rgba([r, g, b, a]) = *canvas.get_pixel(x, y);
                Rgba([widen(r), widen(g), widen(b), widen(a)])
            }))
        }
    };
    Raster::Direct(direct)
}

/// Composites every pixel over an opaque fill color.
fn flatten(canvas: &RgbaImage, fill: [u8; 3]) -> RgbImage {
    ImageBuffer::from_fn(canvas.width(), canvas.height(), |x, y| {
        let Rgba([r, g, b, a]) = *canvas.get_pixel(x, y);
        Rgb([
            blend(r, fill[0], a),
            blend(g, fill[1], a),
            blend(b, fill[2], a),
        ])
    })
}

fn blend(color: u8, fill: u8, alpha: u8) -> u8 {
    let alpha = alpha as u32;
    ((color as u32 * alpha + fill as u32 * (255 - alpha) + 127) / 255) as u8
}

/// ITU-R BT.601 luma in 16.16 fixed point.
fn bt601_luma(r: u8, g: u8, b: u8) -> u8 {
    ((19_595 * r as u32 + 38_470 * g as u32 + 7_471 * b as u32 + 32_768) >> 16) as u8
}

fn widen(value: u8) -> u16 {
    value as u16 * 257
}

fn resize_rgba(image: &RgbaImage, width: u32, height: u32, filter: FilterType) -> RgbaImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }

    match resize_with_fast_image_resize(image, width, height, filter) {
        Ok(resized) => resized,
        Err(err) => {
            log::warn!(
                "fast_image_resize failed, falling back to image::imageops::resize: {}",
                err
            );
            imageops::resize(image, width, height, filter)
        }
    }
}

/// Resize with alpha multiplied in before filtering and divided out
/// afterwards, so fully transparent pixels contribute no color.
fn resize_with_fast_image_resize(
    image: &RgbaImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<RgbaImage, String> {
    let src_image = fr::images::Image::from_vec_u8(
        image.width(),
        image.height(),
        image.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| format!("failed to build source buffer: {}", e))?;

    let mut dst_image = fr::images::Image::new(width, height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new()
        .resize_alg(to_resize_alg(filter))
        .use_alpha(true);

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| format!("resize failed: {}", e))?;

    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(width, height, dst_image.into_vec())
        .ok_or_else(|| "unexpected output buffer length".to_string())
}

fn to_resize_alg(filter: FilterType) -> fr::ResizeAlg {
    match filter {
        FilterType::Nearest => fr::ResizeAlg::Nearest,
        FilterType::Triangle => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
        FilterType::CatmullRom => fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom),
        FilterType::Gaussian => fr::ResizeAlg::Convolution(fr::FilterType::Gaussian),
        FilterType::Lanczos3 => fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn solid(width: u32, height: u32, color: [u8; 4]) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(color)))
    }

    #[test]
    fn test_square_source_fills_rgb_icon() {
        let source = solid(1024, 1024, [0, 0, 255, 255]);
        let target = TargetSignature::new(72, 72, ColorMode::Rgb);

        let output = transform(&source, &target).unwrap();

        assert_eq!((output.width(), output.height()), (72, 72));
        assert_eq!(output.color_mode(), ColorMode::Rgb);
        assert_eq!(
            output.placement(),
            Placement { width: 72, height: 72, x: 0, y: 0 }
        );
        let Raster::Direct(DynamicImage::ImageRgb8(rgb)) = output.raster() else {
            panic!("expected an RGB raster");
        };
        for pixel in rgb.pixels() {
            assert!(pixel[0] <= 1 && pixel[1] <= 1 && pixel[2] >= 254, "{:?}", pixel);
        }
    }

    #[test]
    fn test_transparent_source_flattens_to_black() {
        let source = solid(1024, 1024, [255, 255, 255, 0]);
        let target = TargetSignature::new(72, 72, ColorMode::Rgb);

        let output = transform(&source, &target).unwrap();
        let Raster::Direct(DynamicImage::ImageRgb8(rgb)) = output.raster() else {
            panic!("expected an RGB raster");
        };
        assert!(rgb.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn test_wide_source_is_letterboxed() {
        let source = solid(800, 400, [10, 200, 30, 255]);
        let target = TargetSignature::new(96, 96, ColorMode::Rgba);

        let output = transform(&source, &target).unwrap();

        assert_eq!(
            output.placement(),
            Placement { width: 96, height: 48, x: 0, y: 24 }
        );
        let Raster::Direct(DynamicImage::ImageRgba8(rgba)) = output.raster() else {
            panic!("expected an RGBA raster");
        };
        assert_eq!(rgba.dimensions(), (96, 96));
        for x in 0..96 {
            for y in (0..24).chain(72..96) {
                assert_eq!(rgba.get_pixel(x, y)[3], 0, "padding at ({x}, {y})");
            }
            for y in [24, 48, 71] {
                assert!(rgba.get_pixel(x, y)[3] > 250, "content at ({x}, {y})");
            }
        }
        let center = rgba.get_pixel(48, 48);
        assert!(center[1].abs_diff(200) <= 2, "{:?}", center);
    }

    #[test]
    fn test_small_source_is_upscaled_to_touch_bound() {
        let source = solid(10, 20, [255, 0, 0, 255]);
        let target = TargetSignature::new(64, 64, ColorMode::Rgba);

        let output = transform(&source, &target).unwrap();
        assert_eq!(
            output.placement(),
            Placement { width: 32, height: 64, x: 16, y: 0 }
        );
    }

    #[test]
    fn test_transparent_pixels_do_not_bleed_color() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_fn(64, 64, |x, _| {
            if x < 32 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 255, 0, 0])
            }
        }));
        let target = TargetSignature::new(16, 16, ColorMode::Rgba);

        let output = transform(&source, &target).unwrap();
        let rgba = output.to_rgba8();
        for pixel in rgba.pixels().filter(|p| p[3] > 0) {
            assert_eq!(pixel[1], 0, "green leaked into {:?}", pixel);
        }
    }

    #[test]
    fn test_nearest_filter_copies_pixels() {
        let mut checker = RgbaImage::new(2, 2);
        checker.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        checker.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        checker.put_pixel(0, 1, Rgba([0, 255, 0, 255]));
        checker.put_pixel(1, 1, Rgba([255, 255, 255, 255]));
        let source = DynamicImage::ImageRgba8(checker.clone());
        let target = TargetSignature::new(4, 4, ColorMode::Rgba);
        let options = TransformOptions {
            filter: FilterType::Nearest,
            ..TransformOptions::default()
        };

        let rgba = transform_with(&source, &target, &options).unwrap().to_rgba8();

        for (x, y, pixel) in rgba.enumerate_pixels() {
            assert_eq!(pixel, checker.get_pixel(x / 2, y / 2), "at ({}, {})", x, y);
        }
    }

    #[test]
    fn test_every_filter_has_a_matching_algorithm() {
        assert!(matches!(
            to_resize_alg(FilterType::Nearest),
            fr::ResizeAlg::Nearest
        ));
        assert!(matches!(
            to_resize_alg(FilterType::Gaussian),
            fr::ResizeAlg::Convolution(fr::FilterType::Gaussian)
        ));
        assert!(matches!(
            to_resize_alg(FilterType::Lanczos3),
            fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3)
        ));
    }

    #[test]
    fn test_grayscale_uses_bt601() {
        let source = solid(4, 4, [255, 0, 0, 255]);
        let target = TargetSignature::new(4, 4, ColorMode::Grayscale);

        let output = transform(&source, &target).unwrap();
        let Raster::Direct(DynamicImage::ImageLuma8(luma)) = output.raster() else {
            panic!("expected a grayscale raster");
        };
        assert!(luma.pixels().all(|p| p[0] == 76));
    }

    #[test]
    fn test_grayscale_alpha_keeps_alpha() {
        let source = solid(8, 8, [255, 255, 255, 128]);
        let target = TargetSignature::new(8, 8, ColorMode::GrayscaleAlpha);

        let output = transform(&source, &target).unwrap();
        let Raster::Direct(DynamicImage::ImageLumaA8(luma)) = output.raster() else {
            panic!("expected a grayscale+alpha raster");
        };
        assert!(luma.pixels().all(|p| p[0] == 255 && p[1] == 128));
    }

    #[test]
    fn test_custom_flatten_fill() {
        let source = solid(4, 2, [0, 0, 0, 255]);
        let target = TargetSignature::new(4, 4, ColorMode::Rgb);
        let options = TransformOptions {
            flatten_fill: [255, 255, 255],
            ..TransformOptions::default()
        };

        let output = transform_with(&source, &target, &options).unwrap();
        let Raster::Direct(DynamicImage::ImageRgb8(rgb)) = output.raster() else {
            panic!("expected an RGB raster");
        };
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(rgb.get_pixel(0, 1), &Rgb([0, 0, 0]));
        assert_eq!(rgb.get_pixel(3, 3), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_palette_target_produces_indexed_raster() {
        let source = solid(32, 32, [250, 10, 140, 255]);
        let target = TargetSignature::new(16, 16, ColorMode::Palette);

        let output = transform(&source, &target).unwrap();
        assert_eq!(output.color_mode(), ColorMode::Palette);
        let Raster::Indexed(indexed) = output.raster() else {
            panic!("expected an indexed raster");
        };
        assert_eq!(indexed.palette().len(), 216);
        assert!(indexed.indices().iter().all(|&i| i == 5 * 36 + 3));
    }

    #[test]
    fn test_sixteen_bit_targets_widen_values() {
        let source = solid(2, 2, [255, 0, 51, 255]);
        let target = TargetSignature::new(2, 2, ColorMode::Rgb16);

        let output = transform(&source, &target).unwrap();
        let Raster::Direct(DynamicImage::ImageRgb16(rgb)) = output.raster() else {
            panic!("expected a 16-bit RGB raster");
        };
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([65_535, 0, 51 * 257]));
    }

    #[test]
    fn test_undecodable_bytes_are_invalid_source() {
        let target = TargetSignature::new(16, 16, ColorMode::Rgba);
        match transform_bytes(b"definitely not an image", &target) {
            Err(TransformError::InvalidSourceImage(_)) => {}
            other => panic!("expected InvalidSourceImage, got {:?}", other.map(|o| o.width())),
        }
    }

    #[test]
    fn test_zero_sized_source_is_invalid() {
        let source = DynamicImage::ImageRgba8(RgbaImage::new(0, 10));
        let target = TargetSignature::new(16, 16, ColorMode::Rgba);
        assert!(matches!(
            transform(&source, &target),
            Err(TransformError::InvalidSourceImage(_))
        ));
    }

    #[test]
    fn test_zero_target_dimension_is_invalid() {
        let source = solid(4, 4, [0, 0, 0, 255]);
        for (width, height) in [(0, 16), (16, 0), (100_000, 100_000)] {
            let target = TargetSignature::new(width, height, ColorMode::Rgb);
            assert_eq!(
                transform(&source, &target).unwrap_err(),
                TransformError::InvalidTargetSignature { width, height }
            );
        }
    }

    #[test]
    fn test_convert_to_own_mode_is_identity() {
        let gray = DynamicImage::ImageLuma8(ImageBuffer::from_fn(5, 3, |x, y| {
            Luma([(x * 40 + y * 7) as u8])
        }));
        let converted = convert_mode(&gray, ColorMode::Grayscale, [0, 0, 0]).unwrap();
        let Raster::Direct(image) = converted.raster() else {
            panic!("expected a direct raster");
        };
        assert_eq!(image, &gray);

        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_fn(5, 3, |x, y| {
            Rgba([x as u8 * 50, y as u8 * 80, 7, (x * y) as u8 * 20])
        }));
        let converted = convert_mode(&rgba, ColorMode::Rgba, [0, 0, 0]).unwrap();
        assert_eq!(converted.to_rgba8(), rgba.to_rgba8());
    }

    #[test]
    fn test_palette_conversion_is_stable() {
        let source = DynamicImage::ImageRgb8(RgbImage::from_fn(12, 12, |x, y| {
            Rgb([(x * 21) as u8, (y * 21) as u8, 90])
        }));
        let first = convert_mode(&source, ColorMode::Palette, [0, 0, 0]).unwrap();
        let Raster::Indexed(first_indexed) = first.raster() else {
            panic!("expected an indexed raster");
        };
        let again = convert_mode(
            &DynamicImage::ImageRgb8(first_indexed.to_rgb8()),
            ColorMode::Palette,
            [0, 0, 0],
        )
        .unwrap();
        let Raster::Indexed(second_indexed) = again.raster() else {
            panic!("expected an indexed raster");
        };
        assert_eq!(first_indexed, second_indexed);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_output_matches_target_signature(
            source_width in 1u32..160,
            source_height in 1u32..160,
            target_width in 1u32..96,
            target_height in 1u32..96,
            mode_index in 0usize..ColorMode::ALL.len(),
        ) {
            let mode = ColorMode::ALL[mode_index];
            let source = solid(source_width, source_height, [120, 60, 30, 200]);
            let target = TargetSignature::new(target_width, target_height, mode);

            let output = transform(&source, &target).unwrap();

            prop_assert_eq!(output.width(), target_width);
            prop_assert_eq!(output.height(), target_height);
            prop_assert_eq!(output.color_mode(), mode);
        }

        #[test]
        fn prop_fit_preserves_aspect_and_stays_inside(
            source_width in 1u32..4000,
            source_height in 1u32..4000,
            bound_width in 1u32..512,
            bound_height in 1u32..512,
        ) {
            let placement = Placement::fit((source_width, source_height), (bound_width, bound_height));

            prop_assert!(placement.width <= bound_width && placement.height <= bound_height);
            prop_assert!(placement.width == bound_width || placement.height == bound_height);

            let expected_height = placement.width as f64 * source_height as f64 / source_width as f64;
            let expected_width = placement.height as f64 * source_width as f64 / source_height as f64;
            prop_assert!(
                (expected_height - placement.height as f64).abs() <= 1.0
                    || (expected_width - placement.width as f64).abs() <= 1.0
            );

            prop_assert_eq!(placement.x, (bound_width - placement.width) / 2);
            prop_assert_eq!(placement.y, (bound_height - placement.height) / 2);
        }
    }
}
