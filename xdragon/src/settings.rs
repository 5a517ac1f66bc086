use crate::curve::MAX_DEPTH;
use crate::draw::{Color, DrawFlags, Point};
use crate::error::{DragonError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DEPTH: u32 = 14;
pub const DEFAULT_THETA: f64 = std::f64::consts::FRAC_PI_2;
pub const DEFAULT_SEGMENT_LENGTH: f64 = 3.0;
pub const DEFAULT_CYCLE_DURATION_MS: f64 = 15_000.0;

pub const LIGHT_BLUE: &str = "#1538a1";
pub const LIGHT_RED: &str = "#c60c0e";
pub const DARK_RED: &str = "#52030a";
pub const DARK_BLUE: &str = "#0f1747";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub main: [Color; 2],
    pub phase: [Color; 2],
}

impl Palette {
    pub fn main_color(&self, copy: usize) -> Color {
        self.main[copy % 2]
    }

    pub fn phase_color(&self, copy: usize) -> Color {
        self.phase[copy % 2]
    }
}

impl Default for Palette {
    fn default() -> Self {
        let hex = |s: &str| Color::from_hex(s).unwrap_or_else(|_| Color::rgb(0.0, 1.0, 0.0));
        Palette {
            main: [hex(LIGHT_BLUE), hex(LIGHT_RED)],
            phase: [hex(DARK_RED), hex(DARK_BLUE)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragonSettings {
    pub depth: u32,
    pub theta: f64,
    pub segment_length: f64,
    pub cycle_duration_ms: f64,
    pub palette: Palette,
    pub origin: Option<(f64, f64)>,
    pub draw_main: bool,
    pub draw_phase: bool,
}

impl Default for DragonSettings {
    fn default() -> Self {
        DragonSettings {
            depth: DEFAULT_DEPTH,
            theta: DEFAULT_THETA,
            segment_length: DEFAULT_SEGMENT_LENGTH,
            cycle_duration_ms: DEFAULT_CYCLE_DURATION_MS,
            palette: Palette::default(),
            origin: None,
            draw_main: true,
            draw_phase: true,
        }
    }
}

impl DragonSettings {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.depth > MAX_DEPTH {
            return Err(DragonError::DepthTooLarge {
                depth: self.depth,
                max: MAX_DEPTH,
            });
        }
        if !(self.segment_length.is_finite() && self.segment_length > 0.0) {
            return Err(DragonError::InvalidSegmentLength(self.segment_length));
        }
        if !(self.cycle_duration_ms.is_finite() && self.cycle_duration_ms > 0.0) {
            return Err(DragonError::InvalidDuration(self.cycle_duration_ms));
        }
        if !self.theta.is_finite() {
            return Err(DragonError::InvalidSetting {
                key: "theta",
                reason: format!("must be finite, got {}", self.theta),
            });
        }
        if let Some((x, y)) = self.origin {
            if !(x.is_finite() && y.is_finite()) {
                return Err(DragonError::InvalidSetting {
                    key: "origin",
                    reason: format!("must be finite, got ({}, {})", x, y),
                });
            }
        }
        Ok(())
    }

    pub fn draw_flags(&self) -> DrawFlags {
        let mut flags = DrawFlags::empty();
        flags.set(DrawFlags::MAIN, self.draw_main);
        flags.set(DrawFlags::PHASE, self.draw_phase);
        flags
    }

    pub fn origin_point(&self) -> Option<Point> {
        self.origin.map(Point::from)
    }
}
