//! Image transform engine for the Advanced Image Processing Toolkit plugin.
//!
//! A pure, synchronous core behind the plugin's method channel: decode an
//! encoded image, apply grayscale or Gaussian blur, re-encode, and return
//! bytes or a structured error. The platform adapters own the transport and
//! marshal each call into an [`OperationRequest`]; the engine holds no
//! state between calls, so independent calls may run concurrently.
//!
//! ## Image Format
//! Decoded buffers carry one of three channel configurations:
//! - **Grayscale**: (height, width, 1) - single channel
//! - **RGB**: (height, width, 3) - 3 color channels
//! - **RGBA**: (height, width, 4) - 3 color channels + alpha
//!
//! Samples are 8-bit (0-255). Channel count is fixed per buffer, and every
//! transform preserves dimensions and channel count.
//!
//! ## Call Contract
//! - `applyGrayscale` with `imageData` bytes
//! - `applyBlur` with `imageData` bytes and a positive `sigma`
//!
//! Results come back as PNG bytes; failures come back as a
//! [`ProcessingError`] with a stable code string for the adapters.

pub mod buffer;
pub mod codec;
pub mod dispatch;
pub mod error;
pub mod filters;

pub use buffer::ImageBuffer;
pub use dispatch::{dispatch, Operation, OperationRequest, OperationResult};
pub use error::ProcessingError;
