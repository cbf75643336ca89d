//! Per-strip configuration read from the host page.
//!
//! A marquee viewport may carry `data-speed` and `data-direction`
//! attributes. Strict parsers report what was wrong; the lenient
//! [`MarqueeConfig::from_attributes`] logs and falls back to defaults so a
//! malformed attribute never prevents a strip from running.

use crate::constants::{
    DEFAULT_BASE_SPEED, HOVER_DAMPING_RATIO, MAX_FRAME_MS, REFERENCE_FRAME_MS, VELOCITY_SMOOTHING,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("speed must be a positive finite number, got {0}")]
    InvalidSpeed(f64),
    #[error("direction must be non-zero, got {0}")]
    ZeroDirection(f64),
}

/// Scroll direction of a strip. `Forward` moves content to the left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }
}

/// Smoothing and timing parameters shared by every strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    pub smoothing: f64,
    pub hover_ratio: f64,
    pub reference_frame_ms: f64,
    pub max_frame_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            smoothing: VELOCITY_SMOOTHING,
            hover_ratio: HOVER_DAMPING_RATIO,
            reference_frame_ms: REFERENCE_FRAME_MS,
            max_frame_ms: MAX_FRAME_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueeConfig {
    /// Pixels per reference frame when idle.
    pub base_speed: f64,
    pub direction: Direction,
    pub tuning: Tuning,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            base_speed: DEFAULT_BASE_SPEED,
            direction: Direction::Forward,
            tuning: Tuning::default(),
        }
    }
}

impl MarqueeConfig {
    pub fn new(base_speed: f64, direction: Direction) -> Self {
        Self {
            base_speed,
            direction,
            ..Self::default()
        }
    }

    /// Build a config from raw attribute values, substituting defaults for
    /// anything missing or malformed.
    pub fn from_attributes(speed: Option<&str>, direction: Option<&str>) -> Self {
        let mut cfg = Self::default();
        if let Some(raw) = speed {
            match parse_speed(raw) {
                Ok(s) => cfg.base_speed = s,
                Err(e) => log::warn!("[marquee] data-speed: {}; using {}", e, cfg.base_speed),
            }
        }
        if let Some(raw) = direction {
            match parse_direction(raw) {
                Ok(d) => cfg.direction = d,
                Err(e) => log::warn!("[marquee] data-direction: {}; using forward", e),
            }
        }
        cfg
    }
}

fn parse_number(raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::NotANumber(raw.to_string()))
}

pub fn parse_speed(raw: &str) -> Result<f64, ConfigError> {
    let v = parse_number(raw)?;
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(ConfigError::InvalidSpeed(v))
    }
}

/// Only the sign of the attribute matters: `-1`, `-2.5` are both reverse.
pub fn parse_direction(raw: &str) -> Result<Direction, ConfigError> {
    let v = parse_number(raw)?;
    if v.is_nan() || v == 0.0 {
        return Err(ConfigError::ZeroDirection(v));
    }
    Ok(if v < 0.0 {
        Direction::Reverse
    } else {
        Direction::Forward
    })
}
