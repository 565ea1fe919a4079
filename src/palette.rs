use image::{Rgb, RgbImage};

/// Channel levels of the 6x6x6 web-safe cube.
const LEVELS: [u8; 6] = [0, 51, 102, 153, 204, 255];

/// An 8-bit indexed raster: one palette index per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    width: u32,
    height: u32,
    indices: Vec<u8>,
    palette: Vec<[u8; 3]>,
}

impl IndexedImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    pub fn palette(&self) -> &[[u8; 3]] {
        &self.palette
    }

    pub fn index_at(&self, x: u32, y: u32) -> u8 {
        self.indices[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Expands the indices back to their palette colors.
    pub fn to_rgb8(&self) -> RgbImage {
        let mut out = RgbImage::new(self.width, self.height);
        for (pixel, &index) in out.pixels_mut().zip(self.indices.iter()) {
            *pixel = Rgb(self.palette[index as usize]);
        }
        out
    }
}

/// The 216-entry web-safe palette, ordered `36 * r + 6 * g + b`.
pub fn web_palette() -> Vec<[u8; 3]> {
    let mut palette = Vec::with_capacity(216);
    for r in LEVELS {
        for g in LEVELS {
            for b in LEVELS {
                palette.push([r, g, b]);
            }
        }
    }
    palette
}

fn nearest_level(channel: u8) -> u8 {
    ((channel as u16 + 25) / 51) as u8
}

/// Maps every pixel to the nearest web-safe color. The cube is separable,
/// so the per-channel nearest level is also the euclidean nearest entry.
/// No dithering is applied; output is fully deterministic.
pub fn quantize_web(image: &RgbImage) -> IndexedImage {
    let indices = image
        .pixels()
        .map(|Rgb([r, g, b])| nearest_level(*r) * 36 + nearest_level(*g) * 6 + nearest_level(*b))
        .collect();

    IndexedImage {
        width: image.width(),
        height: image.height(),
        indices,
        palette: web_palette(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_216_distinct_entries() {
        let palette = web_palette();
        assert_eq!(palette.len(), 216);
        assert_eq!(palette[0], [0, 0, 0]);
        assert_eq!(palette[215], [255, 255, 255]);
        assert_eq!(palette[36 * 5], [255, 0, 0]);
    }

    #[test]
    fn test_nearest_level_boundaries() {
        assert_eq!(nearest_level(0), 0);
        assert_eq!(nearest_level(25), 0);
        assert_eq!(nearest_level(26), 1);
        assert_eq!(nearest_level(128), 3);
        assert_eq!(nearest_level(255), 5);
    }

    #[test]
    fn test_quantize_keeps_palette_colors_exact() {
        let image = RgbImage::from_fn(6, 6, |x, y| Rgb([LEVELS[x as usize], LEVELS[y as usize], 153]));
        let indexed = quantize_web(&image);
        assert_eq!(indexed.to_rgb8(), image);
    }

    #[test]
    fn test_quantize_snaps_to_nearest_entry() {
        let image = RgbImage::from_pixel(2, 1, Rgb([250, 10, 140]));
        let indexed = quantize_web(&image);
        assert_eq!(indexed.index_at(1, 0), 5 * 36 + 3);
        assert_eq!(indexed.to_rgb8().get_pixel(0, 0), &Rgb([255, 0, 153]));
    }
}
