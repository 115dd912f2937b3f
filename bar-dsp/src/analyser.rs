#[allow(unused_imports)]
use micromath::F32Ext;

use crate::{process_frame, BIN_COUNT, FFT_SIZE};

/// Settings for [`ByteFrequencyAnalyser`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyserConfig {
    /// Weight of the previous frame, 0.0 (no smoothing) to 1.0 (frozen).
    pub smoothing_time_constant: f32,
    /// Level mapped to byte 0.
    pub min_decibels: f32,
    /// Level mapped to byte 255.
    pub max_decibels: f32,
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self {
            smoothing_time_constant: 0.8,
            min_decibels: -100.0,
            max_decibels: -30.0,
        }
    }
}

impl AnalyserConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(0.0..=1.0).contains(&self.smoothing_time_constant) {
            return Err("Smoothing time constant must be between 0 and 1");
        }
        if !(self.min_decibels < self.max_decibels) {
            return Err("min_decibels must be below max_decibels");
        }
        Ok(())
    }
}

/// Convert a linear magnitude to decibels. Zero maps to negative infinity.
pub fn linear_to_decibels(value: f32) -> f32 {
    if value > 0.0 {
        20.0 * value.log10()
    } else {
        f32::NEG_INFINITY
    }
}

/// Turns PCM frames into time-smoothed 8-bit frequency bins.
///
/// Each call to [`process`](Self::process) runs one FFT frame, blends the
/// magnitudes with the previous frame and maps the result onto 0-255 through
/// a decibel window, the way a browser analyser node fills a `Uint8Array`.
pub struct ByteFrequencyAnalyser {
    config: AnalyserConfig,
    smoothed: [f32; BIN_COUNT],
    bytes: [u8; BIN_COUNT],
}

impl ByteFrequencyAnalyser {
    pub fn new(config: AnalyserConfig) -> Result<Self, &'static str> {
        config.validate()?;
        Ok(Self {
            config,
            smoothed: [0.0; BIN_COUNT],
            bytes: [0; BIN_COUNT],
        })
    }

    pub fn config(&self) -> &AnalyserConfig {
        &self.config
    }

    /// Feed one frame of exactly [`FFT_SIZE`] samples.
    pub fn process(&mut self, samples: &[i16]) -> Result<&[u8; BIN_COUNT], &'static str> {
        let magnitude = process_frame(samples)?;
        let tau = self.config.smoothing_time_constant;
        let scale = 1.0 / FFT_SIZE as f32;

        for i in 0..BIN_COUNT {
            let blended = tau * self.smoothed[i] + (1.0 - tau) * magnitude[i] * scale;
            self.smoothed[i] = if blended.is_finite() { blended } else { 0.0 };
            self.bytes[i] = self.to_byte(self.smoothed[i]);
        }
        Ok(&self.bytes)
    }

    /// Bins produced by the latest [`process`](Self::process) call.
    pub fn byte_frequency_data(&self) -> &[u8; BIN_COUNT] {
        &self.bytes
    }

    /// Smoothed linear magnitudes behind the byte bins.
    pub fn smoothed_magnitudes(&self) -> &[f32; BIN_COUNT] {
        &self.smoothed
    }

    /// Forget the smoothing history.
    pub fn reset(&mut self) {
        self.smoothed = [0.0; BIN_COUNT];
        self.bytes = [0; BIN_COUNT];
    }

    fn to_byte(&self, value: f32) -> u8 {
        let range = self.config.max_decibels - self.config.min_decibels;
        let db = linear_to_decibels(value);
        let scaled = 255.0 / range * (db - self.config.min_decibels);
        scaled.clamp(0.0, 255.0) as u8
    }
}
