#![no_std]

use microdsp::common::{apply_window_function, real_fft, WindowFunctionType::Hann};
use microfft::Complex32;
#[allow(unused_imports)]
use micromath::F32Ext;

pub mod analyser;

pub use analyser::{AnalyserConfig, ByteFrequencyAnalyser};

// --- Frame Config ---
pub const FFT_SIZE: usize = 1024; // PCM samples per frame
pub const BIN_COUNT: usize = FFT_SIZE / 2; // Magnitude bins per frame, DC up to just below Nyquist

/// Maps a signed 16-bit sample onto `-1.0..=1.0`.
pub fn normalize_sample(sample: i16) -> f32 {
    sample as f32 / i16::MAX as f32
}

/// Normalizes as many samples as fit in `normalized_samples`.
pub fn normalize_samples(samples: &[i16], normalized_samples: &mut [f32]) {
    for (normalized, &sample) in normalized_samples.iter_mut().zip(samples) {
        *normalized = normalize_sample(sample);
    }
}

pub fn apply_hann_window(samples: &mut [f32]) {
    apply_window_function(Hann, samples);
}

/// In-place real FFT; returns the `BIN_COUNT` packed complex bins.
pub fn compute_fft(samples: &mut [f32; FFT_SIZE]) -> &mut [Complex32] {
    real_fft(samples)
}

/// Magnitude of each complex bin.
///
/// The real FFT packs the Nyquist component into the imaginary part of bin 0,
/// so bin 0 reports the DC term alone.
pub fn compute_magnitude(fft_output: &[Complex32]) -> Result<[f32; BIN_COUNT], &'static str> {
    if fft_output.len() != BIN_COUNT {
        return Err("FFT output must contain exactly 512 complex numbers");
    }
    let mut magnitude = [0.0; BIN_COUNT];
    magnitude[0] = fft_output[0].re.abs();
    for (value, component) in magnitude.iter_mut().zip(fft_output).skip(1) {
        *value = (component.re * component.re + component.im * component.im).sqrt();
    }
    Ok(magnitude)
}

/// Windowed magnitude spectrum of one frame of PCM samples.
pub fn process_frame(samples: &[i16]) -> Result<[f32; BIN_COUNT], &'static str> {
    if samples.len() != FFT_SIZE {
        return Err("Input must contain exactly 1024 samples");
    }

    let mut frame = [0.0; FFT_SIZE];
    normalize_samples(samples, &mut frame);
    apply_hann_window(&mut frame);
    compute_magnitude(compute_fft(&mut frame))
}
