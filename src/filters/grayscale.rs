//! Grayscale conversion filter.
//!
//! Uses ITU-R BT.601 luma coefficients by default; custom weights are
//! normalized automatically. For 3- and 4-channel input the color channels
//! are set to the luma value and alpha is preserved. Single-channel input
//! is already grayscale and is returned unchanged.

use ndarray::{Array3, ArrayView3};

/// ITU-R BT.601 luma coefficients
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Per-channel weights for luma computation.
#[derive(Clone, Copy, Debug)]
pub struct LumaWeights {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for LumaWeights {
    fn default() -> Self {
        Self {
            r: LUMA_R,
            g: LUMA_G,
            b: LUMA_B,
        }
    }
}

impl LumaWeights {
    /// ITU-R BT.601 luma (default)
    pub fn bt601() -> Self {
        Self::default()
    }

    /// Simple average (R+G+B)/3
    pub fn average() -> Self {
        Self {
            r: 1.0 / 3.0,
            g: 1.0 / 3.0,
            b: 1.0 / 3.0,
        }
    }

    /// Create custom weights (normalized automatically)
    pub fn custom(r: f32, g: f32, b: f32) -> Self {
        let sum = (r + g + b).abs().max(0.001);
        Self {
            r: r / sum,
            g: g / sum,
            b: b / sum,
        }
    }
}

/// Convert an image to grayscale using BT.601 luma weighting.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
///
/// # Returns
/// Grayscale image with the same dimensions and channel count
pub fn grayscale(input: ArrayView3<u8>) -> Array3<u8> {
    grayscale_weighted(input, LumaWeights::default())
}

/// Convert an image to grayscale with custom luma weights.
///
/// Each output pixel's color channels are set to the weighted luma,
/// rounded to the nearest sample value and clamped to 0-255. Alpha, if
/// present, is preserved. Single-channel input is returned unchanged.
pub fn grayscale_weighted(input: ArrayView3<u8>, weights: LumaWeights) -> Array3<u8> {
    let (height, width, channels) = input.dim();

    // Already single-channel: nothing to compute
    if channels == 1 {
        return input.to_owned();
    }

    let mut output = Array3::<u8>::zeros((height, width, channels));

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f32;
            let g = input[[y, x, 1]] as f32;
            let b = input[[y, x, 2]] as f32;

            let luma = (weights.r * r + weights.g * g + weights.b * b)
                .round()
                .clamp(0.0, 255.0) as u8;

            output[[y, x, 0]] = luma;
            output[[y, x, 1]] = luma;
            output[[y, x, 2]] = luma;
            if channels == 4 {
                output[[y, x, 3]] = input[[y, x, 3]];
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn test_grayscale_red_pixel() {
        let mut img = Array3::<u8>::zeros((1, 1, 3));
        img[[0, 0, 0]] = 255; // R

        let result = grayscale(img.view());

        // 0.299 * 255 = 76.245 -> 76
        assert_eq!(result[[0, 0, 0]], 76);
        assert_eq!(result[[0, 0, 1]], 76);
        assert_eq!(result[[0, 0, 2]], 76);
    }

    #[test]
    fn test_grayscale_green_and_blue_pixels() {
        let mut img = Array3::<u8>::zeros((1, 2, 3));
        img[[0, 0, 1]] = 255; // G
        img[[0, 1, 2]] = 255; // B

        let result = grayscale(img.view());

        // 0.587 * 255 = 149.685 -> 150
        assert_eq!(result[[0, 0, 0]], 150);
        // 0.114 * 255 = 29.07 -> 29
        assert_eq!(result[[0, 1, 0]], 29);
    }

    #[test]
    fn test_grayscale_white_stays_white() {
        let img = Array3::<u8>::from_elem((2, 2, 3), 255);
        let result = grayscale(img.view());
        assert!(result.iter().all(|&v| v == 255));
    }

    #[test]
    fn test_grayscale_preserves_alpha() {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 0]] = 200;
        img[[0, 0, 1]] = 100;
        img[[0, 0, 2]] = 50;
        img[[0, 0, 3]] = 137;

        let result = grayscale(img.view());
        assert_eq!(result[[0, 0, 3]], 137);
    }

    #[test]
    fn test_grayscale_preserves_shape() {
        for channels in [1, 3, 4] {
            let img = Array3::<u8>::from_elem((3, 5, channels), 99);
            let result = grayscale(img.view());
            assert_eq!(result.dim(), (3, 5, channels));
        }
    }

    #[test]
    fn test_grayscale_single_channel_unchanged() {
        let data: Vec<u8> = (0..12).map(|i| (i * 20) as u8).collect();
        let img = Array3::from_shape_vec((3, 4, 1), data).unwrap();
        let result = grayscale(img.view());
        assert_eq!(result, img);
    }

    #[test]
    fn test_grayscale_is_idempotent() {
        let mut img = Array3::<u8>::zeros((2, 2, 3));
        img[[0, 0, 0]] = 255;
        img[[0, 1, 1]] = 180;
        img[[1, 0, 2]] = 90;
        img[[1, 1, 0]] = 33;

        let once = grayscale(img.view());
        let twice = grayscale(once.view());
        assert_eq!(twice, once);
    }

    #[test]
    fn test_custom_weights_are_normalized() {
        let w = LumaWeights::custom(2.0, 2.0, 2.0);
        assert!((w.r + w.g + w.b - 1.0).abs() < 1e-5);

        // Normalized equal weights behave like the plain average
        let mut img = Array3::<u8>::zeros((1, 1, 3));
        img[[0, 0, 0]] = 30;
        img[[0, 0, 1]] = 60;
        img[[0, 0, 2]] = 90;
        let result = grayscale_weighted(img.view(), w);
        assert_eq!(result[[0, 0, 0]], 60);
    }
}
