use bar_dsp::{
    apply_hann_window, normalize_samples, process_frame, AnalyserConfig, ByteFrequencyAnalyser,
    BIN_COUNT, FFT_SIZE,
};
use rand::Rng;
use wavegen::{sine, wf};

const SAMPLE_RATE_HZ: f32 = 48_000.0;
const BIN_WIDTH_HZ: f32 = SAMPLE_RATE_HZ / FFT_SIZE as f32; // 46.875 Hz
const TOLERANCE: f32 = 1e-3;

fn sine_f32(frequency: f32, amplitude: f32, len: usize) -> Vec<f32> {
    let waveform = wf!(f32, SAMPLE_RATE_HZ, sine!(frequency, amplitude));
    waveform.iter().take(len).collect()
}

fn sine_i16(frequency: f32, amplitude: f32, len: usize) -> Vec<i16> {
    sine_f32(frequency, amplitude, len)
        .into_iter()
        .map(|s| (s * i16::MAX as f32) as i16)
        .collect()
}

fn peak_bin(values: &[f32]) -> usize {
    values
        .iter()
        .enumerate()
        .fold((0, f32::NEG_INFINITY), |best, (i, &v)| if v > best.1 { (i, v) } else { best })
        .0
}

#[test]
fn test_normalize_samples_real_world() {
    let expected = sine_f32(440.0, 0.8, FFT_SIZE);
    let sine = sine_i16(440.0, 0.8, FFT_SIZE);
    let mut normalized_samples = [0.0; FFT_SIZE];
    normalize_samples(&sine, &mut normalized_samples);
    for (i, &normalized) in normalized_samples.iter().enumerate() {
        assert!(
            (normalized - expected[i]).abs() < TOLERANCE,
            "Expected {}, got {} at index {}",
            expected[i],
            normalized,
            i
        );
    }
}

#[test]
fn test_apply_hann_window_tapers_edges() {
    let mut samples = [1.0f32; FFT_SIZE];
    apply_hann_window(&mut samples);
    assert!(samples[0].abs() < 1e-2);
    assert!((samples[FFT_SIZE / 2] - 1.0).abs() < 1e-2);
    assert!(samples.iter().all(|&s| (-1e-2..=1.01).contains(&s)));
}

#[test]
fn test_process_frame_finds_tone_bin() {
    for &bin in &[16usize, 64, 171, 400] {
        let frequency = bin as f32 * BIN_WIDTH_HZ;
        let output = process_frame(&sine_i16(frequency, 0.5, FFT_SIZE)).unwrap();
        assert_eq!(output.len(), BIN_COUNT);
        assert_eq!(peak_bin(&output), bin, "tone at {} Hz", frequency);
    }
}

#[test]
fn test_analyser_smooths_rise_and_decay() {
    let tone = sine_i16(64.0 * BIN_WIDTH_HZ, 0.01, FFT_SIZE * 6);
    let silence = [0i16; FFT_SIZE];
    let mut analyser = ByteFrequencyAnalyser::new(AnalyserConfig::default()).unwrap();

    let mut rising = Vec::new();
    for frame in tone.chunks_exact(FFT_SIZE) {
        rising.push(analyser.process(frame).unwrap()[64]);
    }
    assert!(rising.windows(2).all(|w| w[0] <= w[1]), "{:?}", rising);
    assert!(rising[5] > rising[0], "{:?}", rising);

    let mut falling = Vec::new();
    for _ in 0..6 {
        falling.push(analyser.process(&silence).unwrap()[64]);
    }
    assert!(falling.windows(2).all(|w| w[0] >= w[1]), "{:?}", falling);
    assert!(falling[5] < rising[5], "{:?}", falling);
}

#[test]
fn test_analyser_without_smoothing_is_memoryless() {
    let config = AnalyserConfig {
        smoothing_time_constant: 0.0,
        ..AnalyserConfig::default()
    };
    let mut analyser = ByteFrequencyAnalyser::new(config).unwrap();
    let tone = sine_i16(64.0 * BIN_WIDTH_HZ, 0.5, FFT_SIZE);
    assert_eq!(analyser.process(&tone).unwrap()[64], 255);
    assert!(analyser.process(&[0i16; FFT_SIZE]).unwrap().iter().all(|&b| b == 0));
}

#[test]
fn test_analyser_with_noise() {
    let mut rng = rand::rng();
    let noise: Vec<i16> = (0..FFT_SIZE).map(|_| rng.random_range(-1000..=1000)).collect();
    let config = AnalyserConfig {
        smoothing_time_constant: 0.0,
        ..AnalyserConfig::default()
    };
    let mut analyser = ByteFrequencyAnalyser::new(config).unwrap();
    let bytes = analyser.process(&noise).unwrap();

    let average = bytes.iter().map(|&b| b as f32).sum::<f32>() / BIN_COUNT as f32;
    assert!((50.0..200.0).contains(&average), "average byte {}", average);
    assert!(analyser.smoothed_magnitudes().iter().all(|m| m.is_finite()));
}
