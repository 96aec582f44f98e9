//! Shared numerics for the spatial filters.

/// Generate a normalized 1D Gaussian kernel.
///
/// The kernel has radius `ceil(3 * sigma)` and length `2 * radius + 1`;
/// weights are normalized to sum to 1.0. Deterministic for a given sigma.
/// Callers must pass a positive, finite sigma.
///
/// # Arguments
/// * `sigma` - Standard deviation of the Gaussian
///
/// # Returns
/// Normalized 1D kernel as Vec<f32>
pub fn gaussian_kernel_1d(sigma: f32) -> Vec<f32> {
    debug_assert!(sigma.is_finite() && sigma > 0.0);

    let radius = (sigma * 3.0).ceil() as usize;
    let size = 2 * radius + 1;

    let mut kernel: Vec<f32> = (0..size)
        .map(|i| {
            let x = i as f32 - radius as f32;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();

    // Normalize
    let sum: f32 = kernel.iter().sum();
    for v in kernel.iter_mut() {
        *v /= sum;
    }

    kernel
}
