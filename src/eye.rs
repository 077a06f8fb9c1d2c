use image::{DynamicImage, RgbImage};
use log::debug;

use crate::{
    board::{assemble_board, orient_board, placement_fen},
    classifier::Classifier,
    config::Config,
    error::ChessEyeError,
    labels::decode_predictions,
    tensor::{decode_board_image, extract_squares, normalize_board_image},
    types::{DecodedSquare, Detection, Orientation, Report, SquareLabel},
};

/// Photograph-to-position pipeline.
///
/// Owns the classifier handle for its whole lifetime; create one per
/// thread (or per request) when serving concurrently.
pub struct ChessEye<C> {
    classifier: C,
    config: Config,
}

impl<C: Classifier> ChessEye<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            config: Config::default(),
        }
    }

    pub fn with_config(classifier: C, config: Config) -> Result<Self, ChessEyeError> {
        config.validate()?;
        Ok(Self { classifier, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Recognise the position in an encoded PNG or JPEG photograph.
    pub fn detect_bytes(
        &mut self,
        bytes: &[u8],
        orientation: Orientation,
    ) -> Result<Detection, ChessEyeError> {
        let image = decode_board_image(bytes, &self.config)?;
        self.detect_normalized(&image, orientation)
    }

    /// Recognise the position in an already decoded photograph.
    pub fn detect_image(
        &mut self,
        image: DynamicImage,
        orientation: Orientation,
    ) -> Result<Detection, ChessEyeError> {
        let image = normalize_board_image(image, &self.config);
        self.detect_normalized(&image, orientation)
    }

    fn detect_normalized(
        &mut self,
        image: &RgbImage,
        orientation: Orientation,
    ) -> Result<Detection, ChessEyeError> {
        // 1. Slice
        let squares = extract_squares(image, self.config.channel_order)?;

        // 2. Run inference
        let predictions = self.classifier.classify(squares)?;

        // 3. Decode labels
        let decoded: Vec<DecodedSquare> =
            decode_predictions(predictions.view(), self.config.confidence_threshold)?;
        let labels: Vec<SquareLabel> = decoded.iter().map(|s| s.label).collect();
        debug!(
            "{} of 64 squares occupied",
            labels.iter().filter(|l| !l.is_empty()).count()
        );

        // 4. Assemble and orient
        let board = orient_board(&assemble_board(&labels)?, orientation);
        let fen = placement_fen(&board);
        debug!("detected {fen} ({orientation} perspective)");

        Ok(Detection {
            squares: decoded,
            board,
            fen,
        })
    }

    /// Piece-placement string for an encoded photograph.
    pub fn fen(&mut self, bytes: &[u8], orientation: Orientation) -> Result<String, ChessEyeError> {
        Ok(self.detect_bytes(bytes, orientation)?.fen)
    }

    /// Like [`ChessEye::fen`], but folds any failure into an error payload.
    pub fn report(&mut self, bytes: &[u8], orientation: Orientation) -> Report {
        match self.fen(bytes, orientation) {
            Ok(fen) => Report::Position { fen },
            Err(err) => Report::Error {
                error: format!("Unable to detect position: {err}"),
            },
        }
    }
}
