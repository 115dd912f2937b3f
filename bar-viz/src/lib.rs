#![cfg_attr(not(feature = "std"), no_std)]
//! Log-scaled frequency bars.
//!
//! [`range_builder`] splits a linear spectrum into bars whose widths grow
//! exponentially, [`band_reducer`] turns one frame of samples into one
//! loudness value per bar, and [`frame_driver`] ties both to a spectrum
//! source that is refreshed once per display frame.
extern crate alloc;

pub mod band_reducer;
pub mod config;
pub mod error;
pub mod frame_driver;
pub mod loudness_curve;
pub mod range_builder;

pub use band_reducer::{compute_bar_value, reduce_band, BandReducer};
pub use config::VizConfig;
pub use error::{ErrorKind, InvalidArgument, Result, VizError};
pub use frame_driver::{FrameDriver, SpectrumSource};
pub use loudness_curve::{adjust_amplitude, Linear, LoudnessCurve, PowerOfTen};
pub use range_builder::{build_ranges, BoundaryTable};
