use log::debug;
use ndarray::{Array2, Array4, Ix2};
use ort::{session::Session, value::Tensor};

use crate::error::ChessEyeError;

/// Per-square piece classifier.
///
/// Takes the sliced board as a `[64, S, S, 3]` batch with values in
/// `[0, 1]` and returns a `[64, 13]` matrix of class scores. Implementations
/// must be deterministic and must not depend on earlier calls.
pub trait Classifier {
    fn classify(&mut self, squares: Array4<f32>) -> Result<Array2<f32>, ChessEyeError>;
}

/// Any closure with the right signature is a classifier, which keeps
/// stubs in tests to one line.
impl<F> Classifier for F
where
    F: FnMut(Array4<f32>) -> Result<Array2<f32>, ChessEyeError>,
{
    fn classify(&mut self, squares: Array4<f32>) -> Result<Array2<f32>, ChessEyeError> {
        self(squares)
    }
}

/// Inference engine ONNX Runtime dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Tract,
    Candle,
}

impl Backend {
    /// Install this backend as the process-wide ONNX Runtime API. Only the
    /// first installation takes effect.
    fn install(self) {
        match self {
            Backend::Tract => ort::set_api(ort_tract::api()),
            Backend::Candle => ort::set_api(ort_candle::api()),
        };
    }
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tract" => Ok(Backend::Tract),
            "candle" => Ok(Backend::Candle),
            other => Err(format!("unknown backend {other:?}, expected tract or candle")),
        }
    }
}

/// Classifier backed by an ONNX export of the square model.
///
/// The model's first input receives the square batch and its first output
/// is read as the score matrix.
pub struct OnnxClassifier {
    session: Session,
}

impl OnnxClassifier {
    /// Initialize from a local `.onnx` file path
    pub fn from_file(path: &str, backend: Backend) -> Result<Self, ChessEyeError> {
        backend.install();
        let session = Session::builder()?.commit_from_file(path)?;
        debug!("loaded square classifier from {path} ({backend:?})");

        Ok(Self { session })
    }

    /// Initialize from raw bytes
    pub fn from_memory(model_bytes: &[u8], backend: Backend) -> Result<Self, ChessEyeError> {
        backend.install();
        let session = Session::builder()?.commit_from_memory(model_bytes)?;

        Ok(Self { session })
    }
}

impl Classifier for OnnxClassifier {
    fn classify(&mut self, squares: Array4<f32>) -> Result<Array2<f32>, ChessEyeError> {
        let outputs = self
            .session
            .run(ort::inputs![Tensor::from_array(squares)?])?;

        let scores = outputs[0]
            .try_extract_array::<f32>()?
            .into_dimensionality::<Ix2>()?
            .to_owned();
        Ok(scores)
    }
}
