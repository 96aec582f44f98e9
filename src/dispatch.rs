//! Operation dispatcher: the call contract the platform adapters consume.
//!
//! Each call is one synchronous pass: validate the method name and its
//! arguments, decode the input bytes, run the matching transform, and
//! re-encode the result. Every failure maps to one
//! [`ProcessingError`](crate::error::ProcessingError) kind and the call is
//! terminal after a single result; there are no retries and no partial
//! results. Results are re-encoded as PNG, the engine's lossless
//! interchange format.

use image::ImageFormat;
use tracing::debug;

use crate::buffer::ImageBuffer;
use crate::codec;
use crate::error::ProcessingError;
use crate::filters::{blur, grayscale};

/// Method name for grayscale conversion.
pub const METHOD_GRAYSCALE: &str = "applyGrayscale";
/// Method name for Gaussian blur.
pub const METHOD_BLUR: &str = "applyBlur";

/// The closed set of operations the engine implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Grayscale,
    Blur,
}

impl Operation {
    /// Resolve a boundary method name to an operation.
    pub fn from_method(name: &str) -> Option<Self> {
        match name {
            METHOD_GRAYSCALE => Some(Self::Grayscale),
            METHOD_BLUR => Some(Self::Blur),
            _ => None,
        }
    }

    /// The boundary method name for this operation.
    pub fn method(self) -> &'static str {
        match self {
            Self::Grayscale => METHOD_GRAYSCALE,
            Self::Blur => METHOD_BLUR,
        }
    }
}

/// One call across the boundary: a method name plus its arguments.
///
/// Arguments are optional because the boundary delivers an untyped map;
/// presence is validated by [`dispatch`], not by the adapters.
#[derive(Debug, Clone)]
pub struct OperationRequest {
    pub method: String,
    pub image_data: Option<Vec<u8>>,
    pub sigma: Option<f64>,
}

impl OperationRequest {
    /// Well-formed grayscale request.
    pub fn grayscale(image_data: Vec<u8>) -> Self {
        Self {
            method: METHOD_GRAYSCALE.to_string(),
            image_data: Some(image_data),
            sigma: None,
        }
    }

    /// Well-formed blur request.
    pub fn blur(image_data: Vec<u8>, sigma: f64) -> Self {
        Self {
            method: METHOD_BLUR.to_string(),
            image_data: Some(image_data),
            sigma: Some(sigma),
        }
    }
}

/// Outcome of a dispatched call: encoded PNG bytes or a structured error.
pub type OperationResult = Result<Vec<u8>, ProcessingError>;

/// Validate, decode, transform, and re-encode one request.
///
/// Failure order: unknown method (`UnsupportedOperation`), then missing
/// arguments (`InvalidArgument`), then undecodable bytes (`Decode`), then
/// transform parameters (`InvalidParameter`), then serialization
/// (`Encode`).
pub fn dispatch(request: OperationRequest) -> OperationResult {
    let op = Operation::from_method(&request.method)
        .ok_or_else(|| ProcessingError::UnsupportedOperation(request.method.clone()))?;

    let bytes = request
        .image_data
        .ok_or_else(|| ProcessingError::InvalidArgument("imageData is required".into()))?;
    let sigma = match op {
        Operation::Blur => request
            .sigma
            .ok_or_else(|| ProcessingError::InvalidArgument("sigma is required".into()))?
            as f32,
        Operation::Grayscale => 0.0,
    };

    let buffer = codec::decode(&bytes)?;
    debug!(
        method = op.method(),
        width = buffer.width(),
        height = buffer.height(),
        channels = buffer.channels(),
        "Dispatching operation"
    );

    let transformed = match op {
        Operation::Grayscale => grayscale::grayscale(buffer.view()),
        Operation::Blur => blur::gaussian_blur(buffer.view(), sigma)?,
    };

    codec::encode(ImageBuffer::from_array(transformed)?, ImageFormat::Png)
}
