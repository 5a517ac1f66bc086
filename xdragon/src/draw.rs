use crate::error::DragonError;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use xmath::Vector2;

pub type Point = Vector2<f64>;

bitflags! {
    pub struct DrawFlags: u32 {
        const MAIN = 0x0001;
        const PHASE = 0x0002;
    }
}

impl Default for DrawFlags {
    fn default() -> Self {
        DrawFlags::all()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn rgb(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    pub fn from_hex(s: &str) -> Result<Color, DragonError> {
        let invalid = || DragonError::InvalidColor(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if !(digits.len() == 6 || digits.len() == 8)
            || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(invalid());
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| invalid())
        };
        Ok(Color {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if digits.len() == 8 { channel(6)? } else { 1.0 },
        })
    }

    pub fn to_hex(&self) -> String {
        let byte = |v: f32| (v.max(0.0).min(1.0) * 255.0).round() as u8;
        if byte(self.a) == 255 {
            format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                byte(self.a)
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = DragonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// `width`/`height` are the backing pixel dimensions, `display_size` is the size the host
/// actually shows. The driver copies the latter into the former whenever they differ.
pub trait DrawSurface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn display_size(&self) -> (u32, u32);

    fn set_size(&mut self, width: u32, height: u32);

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn stroke_path(&mut self, points: &[Point], color: Color);

    fn end_frame(&mut self) {}
}

pub fn reconcile_size<S: DrawSurface + ?Sized>(surface: &mut S) -> bool {
    let (width, height) = surface.display_size();
    if surface.width() != width || surface.height() != height {
        surface.set_size(width, height);
        true
    } else {
        false
    }
}
