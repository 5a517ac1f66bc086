use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use xdragon::{Color, DragonError, DrawSurface, Point, StopHandle};

fn to_svg_paint(color: Color) -> (String, f32) {
    let opaque = Color { a: 1.0, ..color };
    (opaque.to_hex(), color.a)
}

pub struct SvgSurface {
    out_dir: PathBuf,
    width: u32,
    height: u32,
    display: (u32, u32),
    every: u64,
    frame: u64,
    written: u64,
    stroke_width: f32,
    background: Color,
    body: String,
    stop: Option<StopHandle>,
    error: Option<std::io::Error>,
}

impl SvgSurface {
    pub fn create(
        out_dir: &Path,
        width: u32,
        height: u32,
        every: u64,
    ) -> xdragon::Result<SvgSurface> {
        if width == 0 || height == 0 {
            return Err(DragonError::surface(format!(
                "surface size must be non-zero, got {}x{}",
                width, height
            )));
        }
        std::fs::create_dir_all(out_dir).map_err(|err| {
            DragonError::surface(format!("cannot create {}: {}", out_dir.display(), err))
        })?;
        Ok(SvgSurface {
            out_dir: out_dir.to_path_buf(),
            width: 0,
            height: 0,
            display: (width, height),
            every: every.max(1),
            frame: 0,
            written: 0,
            stroke_width: 1.0,
            background: Color::rgb(0.0, 0.0, 0.0),
            body: String::new(),
            stop: None,
            error: None,
        })
    }

    pub fn set_stop_handle(&mut self, stop: StopHandle) {
        self.stop = Some(stop);
    }

    pub fn set_stroke_width(&mut self, stroke_width: f32) {
        self.stroke_width = stroke_width;
    }

    pub fn set_background(&mut self, background: Color) {
        self.background = background;
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }

    fn frame_path(&self) -> PathBuf {
        self.out_dir.join(format!("frame_{:06}.svg", self.frame))
    }

    fn document(&self) -> String {
        let (fill, opacity) = to_svg_paint(self.background);
        let mut doc = String::with_capacity(self.body.len() + 256);
        let _ = writeln!(
            doc,
            "<svg width='{w}' height='{h}' viewBox='0 0 {w} {h}' xmlns='http://www.w3.org/2000/svg'>",
            w = self.width,
            h = self.height
        );
        let _ = writeln!(
            doc,
            "<rect width='100%' height='100%' fill='{}' fill-opacity='{}'/>",
            fill, opacity
        );
        doc.push_str(&self.body);
        doc.push_str("</svg>\n");
        doc
    }
}

impl DrawSurface for SvgSurface {
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
        self.body.clear();
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let full = x <= 0.0
            && y <= 0.0
            && width >= self.width as f64
            && height >= self.height as f64;
        if full {
            self.body.clear();
        } else {
            let (fill, opacity) = to_svg_paint(self.background);
            let _ = writeln!(
                self.body,
                "<rect x='{:.2}' y='{:.2}' width='{:.2}' height='{:.2}' fill='{}' fill-opacity='{}'/>",
                x, y, width, height, fill, opacity
            );
        }
    }

    fn stroke_path(&mut self, points: &[Point], color: Color) {
        if points.is_empty() {
            return;
        }
        let (stroke, opacity) = to_svg_paint(color);
        let _ = write!(
            self.body,
            "<polyline fill='none' stroke='{}' stroke-opacity='{}' stroke-width='{}' points='",
            stroke, opacity, self.stroke_width
        );
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                self.body.push(' ');
            }
            let _ = write!(self.body, "{:.2},{:.2}", p.x, p.y);
        }
        self.body.push_str("'/>\n");
    }

    fn end_frame(&mut self) {
        if self.frame % self.every == 0 {
            let path = self.frame_path();
            match std::fs::write(&path, self.document()) {
                Ok(()) => {
                    self.written += 1;
                    debug!(path = %path.display(), "wrote frame");
                }
                Err(err) => {
                    error!(path = %path.display(), error = %err, "failed to write frame");
                    self.error = Some(err);
                    if let Some(stop) = &self.stop {
                        stop.stop();
                    }
                }
            }
        }
        self.frame += 1;
    }
}
