use crate::band_reducer::check_sample_scale;
use crate::error::{InvalidArgument, Result};

// --- Bar Config ---
pub const DEFAULT_BAR_COUNT: usize = 8;
pub const BYTE_SAMPLE_SCALE: f32 = 256.0; // 8-bit analyser bins divide by 256, not 255

// --- Logging ---
pub const LOG_INTERVAL_FRAMES: u32 = 200; // Frames between bar value dumps

/// Display-side settings for a [`FrameDriver`](crate::FrameDriver).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VizConfig {
    /// Number of bars the spectrum is split into.
    pub bar_count: usize,
    /// Value an averaged sample is divided by before the loudness curve.
    pub sample_scale: f32,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            bar_count: DEFAULT_BAR_COUNT,
            sample_scale: BYTE_SAMPLE_SCALE,
        }
    }
}

impl VizConfig {
    pub fn with_bar_count(mut self, bar_count: usize) -> Self {
        self.bar_count = bar_count;
        self
    }

    pub fn with_sample_scale(mut self, sample_scale: f32) -> Self {
        self.sample_scale = sample_scale;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.bar_count == 0 {
            return Err(InvalidArgument::ZeroBarCount.into());
        }
        check_sample_scale(self.sample_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VizError;

    #[test]
    fn test_default_config_is_valid() {
        let config = VizConfig::default();
        assert_eq!(config.bar_count, 8);
        assert_eq!(config.sample_scale, 256.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            VizConfig::default().with_bar_count(0).validate(),
            Err(VizError::InvalidArgument(InvalidArgument::ZeroBarCount))
        );
        assert_eq!(
            VizConfig::default().with_sample_scale(0.0).validate(),
            Err(VizError::InvalidArgument(InvalidArgument::NonPositiveScale))
        );
        assert!(VizConfig::default()
            .with_sample_scale(f32::NAN)
            .validate()
            .is_err());
    }
}
