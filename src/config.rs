use clap::Parser;
use std::ops::RangeInclusive;

use crate::{
    family::CATALOG,
    util::{math::Coefficients, trace::DEFAULT_TRACE_SIZE},
};

/// Range accepted by the trace size and frame rate dialogs.
pub const SETTING_RANGE: RangeInclusive<u32> = 1..=60;

pub const DEFAULT_FPS: u32 = 10;

#[derive(Parser, Debug)]
#[command(name = "polyplot", version, about = "Plot polynomial curve families with fading traces")]
pub struct Args {
    /// Number of past curves kept per family (1-60)
    #[arg(long, default_value_t = DEFAULT_TRACE_SIZE as u32)]
    pub trace_size: u32,

    /// Redraw rate in frames per second (1-60)
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Curve family shown at startup, e.g. `ax2+bx+c` (repeatable)
    #[arg(long = "show", value_name = "NAME")]
    pub show: Vec<String>,

    /// Initial x² coefficient
    #[arg(short, default_value_t = 1, allow_negative_numbers = true)]
    pub a: i32,

    /// Initial x coefficient
    #[arg(short, default_value_t = 1, allow_negative_numbers = true)]
    pub b: i32,

    /// Initial constant term
    #[arg(short, default_value_t = 1, allow_negative_numbers = true)]
    pub c: i32,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Trace size must be within 1..=60, got {0}")]
    TraceSizeOutOfRange(u32),
    #[error("Frame rate must be within 1..=60, got {0}")]
    FrameRateOutOfRange(u32),
    #[error("Unknown curve family `{0}`")]
    UnknownFamily(String),
}

/// Validated startup settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "persistence", derive(serde::Deserialize, serde::Serialize))]
pub struct Settings {
    pub trace_size: usize,
    pub fps: u32,
    pub visible: Vec<String>,
    pub coefficients: Coefficients,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trace_size: DEFAULT_TRACE_SIZE,
            fps: DEFAULT_FPS,
            visible: Vec::new(),
            coefficients: Coefficients::default(),
        }
    }
}

impl std::convert::TryFrom<Args> for Settings {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if !SETTING_RANGE.contains(&args.trace_size) {
            return Err(ConfigError::TraceSizeOutOfRange(args.trace_size));
        }
        if !SETTING_RANGE.contains(&args.fps) {
            return Err(ConfigError::FrameRateOutOfRange(args.fps));
        }
        if let Some(unknown) = args
            .show
            .iter()
            .find(|name| !CATALOG.iter().any(|(known, _)| *known == name.as_str()))
        {
            return Err(ConfigError::UnknownFamily(unknown.clone()));
        }

        let coefficients = Coefficients {
            a: args.a,
            b: args.b,
            c: args.c,
        };

        Ok(Self {
            trace_size: args.trace_size as usize,
            fps: args.fps,
            visible: args.show,
            coefficients: coefficients.clamped(),
        })
    }
}
