//! Tunable pipeline parameters.
//!
//! Defaults reproduce the behaviour the bundled classifier was trained
//! against: a 400×400 board, BGR pixel order and a 0.95 confidence floor.

use std::path::Path;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::error::ChessEyeError;

/// Side length, in pixels, of the normalized board image.
pub const BOARD_SIZE: u32 = 400;

/// Squares whose best class probability is below this value are read as
/// empty. Heuristic, not calibrated against labelled data.
pub const CONFIDENCE_THRESHOLD: f32 = 0.95;

/// Channel order of the tensor handed to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelOrder {
    Rgb,
    #[default]
    Bgr,
}

/// Interpolation used when resizing the input photograph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeFilter {
    Nearest,
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub board_size: u32,
    pub confidence_threshold: f32,
    pub channel_order: ChannelOrder,
    pub resize_filter: ResizeFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            confidence_threshold: CONFIDENCE_THRESHOLD,
            channel_order: ChannelOrder::default(),
            resize_filter: ResizeFilter::default(),
        }
    }
}

impl Config {
    /// Load a JSON config; missing fields fall back to their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ChessEyeError> {
        let text = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ChessEyeError> {
        if self.board_size == 0 || self.board_size % 8 != 0 {
            return Err(ChessEyeError::Config(format!(
                "board_size must be a positive multiple of 8, got {}",
                self.board_size
            )));
        }
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ChessEyeError::Config(format!(
                "confidence_threshold must be within [0, 1], got {}",
                self.confidence_threshold
            )));
        }
        Ok(())
    }

    /// Side length of one square cell.
    pub fn square_size(&self) -> u32 {
        self.board_size / 8
    }
}
