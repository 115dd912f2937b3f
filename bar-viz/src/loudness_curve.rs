#[allow(unused_imports)]
use micromath::F32Ext;

/// Maps a normalized band average onto a perceived loudness value.
pub trait LoudnessCurve {
    fn adjust(&self, normalized: f32) -> f32;
}

/// Perceived loudness follows the log10 of the amplitude; this undoes a
/// linear scale with `10^v / 10 - 0.1`.
///
/// `0.0` maps to `0.0` and `1.0` to `0.9`. Inputs outside `[0, 1]` are not
/// clamped.
pub fn adjust_amplitude(value: f32) -> f32 {
    (10.0f32.powf(value) / 10.0) - 0.1
}

/// The default curve, see [`adjust_amplitude`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerOfTen;

impl LoudnessCurve for PowerOfTen {
    fn adjust(&self, normalized: f32) -> f32 {
        adjust_amplitude(normalized)
    }
}

/// Leaves the normalized average untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Linear;

impl LoudnessCurve for Linear {
    fn adjust(&self, normalized: f32) -> f32 {
        normalized
    }
}

impl<F> LoudnessCurve for F
where
    F: Fn(f32) -> f32,
{
    fn adjust(&self, normalized: f32) -> f32 {
        self(normalized)
    }
}
