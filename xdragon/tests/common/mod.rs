#![allow(dead_code)]

use xdragon::{Color, DrawSurface, Point, StopHandle};

#[derive(Debug, Clone)]
pub struct Stroke {
    pub points: Vec<Point>,
    pub color: Color,
}

#[derive(Default)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub display: (u32, u32),
    pub resizes: usize,
    pub clears: usize,
    pub current: Vec<Stroke>,
    pub frames: Vec<Vec<Stroke>>,
    pub stop_after: Option<(usize, StopHandle)>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> RecordingSurface {
        RecordingSurface {
            display: (width, height),
            ..RecordingSurface::default()
        }
    }

    pub fn last_frame(&self) -> &[Stroke] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn display_size(&self) -> (u32, u32) {
        self.display
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.resizes += 1;
    }

    fn clear_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {
        self.clears += 1;
    }

    fn stroke_path(&mut self, points: &[Point], color: Color) {
        self.current.push(Stroke {
            points: points.to_vec(),
            color,
        });
    }

    fn end_frame(&mut self) {
        let strokes = std::mem::take(&mut self.current);
        self.frames.push(strokes);
        if let Some((n, stop)) = &self.stop_after {
            if self.frames.len() >= *n {
                stop.stop();
            }
        }
    }
}
