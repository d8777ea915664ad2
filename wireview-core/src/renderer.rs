/// Wireframe frame renderer: projects scene geometry and draws its edges
use nalgebra::{Matrix4, Point3, Vector4};

use crate::buffer::{Color, PixelBuffer};
use crate::config::RendererConfig;
use crate::error::{Error, Result};
use crate::geometry::BoundingBox;
use crate::model::MeshModel;
use crate::projection::perspective_divide;
use crate::raster::{self, ScreenPoint};
use crate::scene::Scene;
use crate::surface::DisplaySurface;

/// Projected points farther than this from the origin are not rasterized
pub const MAX_SCREEN_COORD: f32 = (1 << 20) as f32;

/// Counters for the most recent `render` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub faces_drawn: usize,
    pub lines_drawn: usize,
    pub skipped_primitives: usize,
}

/// Owns the pixel buffer and draws scenes into it
pub struct WireframeRenderer {
    config: RendererConfig,
    buffer: PixelBuffer,
    stats: FrameStats,
}

impl WireframeRenderer {
    pub fn new(config: RendererConfig) -> Self {
        let mut buffer = PixelBuffer::new(config.width, config.height);
        buffer.clear(config.background);
        Self {
            config,
            buffer,
            stats: FrameStats::default(),
        }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    pub fn last_frame(&self) -> FrameStats {
        self.stats
    }

    /// Recreate the pixel buffer at a new size, cleared to the background
    pub fn resize(&mut self, width: usize, height: usize) {
        self.config.width = width;
        self.config.height = height;
        self.buffer.resize(width, height, self.config.background);
    }

    pub fn clear(&mut self) {
        self.buffer.clear(self.config.background);
    }

    pub fn clear_with(&mut self, color: Color) {
        self.buffer.clear(color);
    }

    pub fn draw_line(&mut self, p1: ScreenPoint, p2: ScreenPoint, color: Color) {
        raster::draw_line(&mut self.buffer, p1, p2, color);
        self.stats.lines_drawn += 1;
    }

    /// Hand the finished frame to a display surface
    pub fn present<S: DisplaySurface>(&self, surface: &mut S) -> std::result::Result<(), S::Error> {
        surface.present(&self.buffer)
    }

    /// Draw one frame of `scene` on top of the current buffer contents.
    ///
    /// Triangles always come from model 0; the bounding box and normal
    /// overlays follow the scene's active model.
    pub fn render(&mut self, scene: &Scene) {
        self.stats = FrameStats::default();

        let Some(model) = scene.model(0) else {
            return;
        };
        let chain = scene.active_camera().clip_to_screen();

        if scene.show_axis {
            self.draw_axis(model, &chain);
        }

        if scene.show_bounding_box {
            if let Some(active) = scene.active_model() {
                self.draw_bounding_box(active, &chain);
            }
        }

        let color = self.config.wire_color;
        for face in 0..model.face_count() {
            match project_face(model, face, &chain) {
                Ok([a, b, c]) => {
                    self.draw_line(a, b, color);
                    self.draw_line(b, c, color);
                    self.draw_line(c, a, color);
                    self.stats.faces_drawn += 1;
                }
                Err(err) => self.skip(model, &err),
            }
        }

        if self.config.draw_normals {
            if let Some(active) = scene.active_model() {
                self.draw_normals(active, &chain);
            }
        }

        log::trace!("Rendered frame: {:?}", self.stats);
    }

    fn skip(&mut self, model: &MeshModel, err: &Error) {
        match err {
            Error::DegenerateW { .. } | Error::CoordinateOverflow { .. } => {
                log::debug!("Skipping primitive of `{}`: {}", model.name(), err)
            }
            _ => log::warn!("Skipping primitive of `{}`: {}", model.name(), err),
        }
        self.stats.skipped_primitives += 1;
    }

    /// Screen-space cross through the buffer center, then the model's
    /// world axes through the camera
    fn draw_axis(&mut self, model: &MeshModel, chain: &Matrix4<f32>) {
        let (w, h) = (self.width() as i64, self.height() as i64);
        if w > 0 && h > 0 {
            let (cx, cy) = (w / 2, h / 2);
            let len = i64::from(self.config.screen_axis_length.max(0));
            // Arms are axis-aligned, so clamping their ends to the buffer
            // keeps the same visible pixels.
            let x0 = (cx - len).clamp(0, w - 1) as i32;
            let x1 = (cx + len).clamp(0, w - 1) as i32;
            let y0 = (cy - len).clamp(0, h - 1) as i32;
            let y1 = (cy + len).clamp(0, h - 1) as i32;
            let color = self.config.axis_color;
            for i in 0..3 {
                let (row, column) = ((cy + i) as i32, (cx + i) as i32);
                self.draw_line(ScreenPoint::new(x0, row), ScreenPoint::new(x1, row), color);
                self.draw_line(ScreenPoint::new(column, y0), ScreenPoint::new(column, y1), color);
            }
        }

        let world_chain = chain * model.world_matrix();
        let origin = project(&world_chain, &Vector4::new(0.0, 0.0, 0.0, 1.0));
        let axes = [
            Vector4::new(1.0, 0.0, 0.0, 1.0),
            Vector4::new(0.0, 1.0, 0.0, 1.0),
            Vector4::new(0.0, 0.0, 1.0, 1.0),
        ];
        let color = self.config.overlay_color;
        for axis in &axes {
            let tip = project(&world_chain, axis);
            match (&origin, &tip) {
                (Ok(from), Ok(to)) => self.draw_line(*from, *to, color),
                (Err(err), _) | (_, Err(err)) => self.skip(model, err),
            }
        }
    }

    fn draw_bounding_box(&mut self, model: &MeshModel, chain: &Matrix4<f32>) {
        let full_chain = chain * model.model_matrix();
        let corners = model
            .bounding_box()
            .corners()
            .map(|corner| project(&full_chain, &corner.to_homogeneous()));

        let color = self.config.overlay_color;
        for (a, b) in BoundingBox::EDGES {
            match (&corners[a], &corners[b]) {
                (Ok(from), Ok(to)) => self.draw_line(*from, *to, color),
                (Err(err), _) | (_, Err(err)) => self.skip(model, err),
            }
        }
    }

    /// Short segment from each face vertex along its normal
    fn draw_normals(&mut self, model: &MeshModel, chain: &Matrix4<f32>) {
        let full_chain = chain * model.model_matrix();
        let scale = self.config.normal_scale;
        let color = self.config.overlay_color;
        for face in 0..model.face_count() {
            for corner in 0..3 {
                let segment = model.face_vertex(face, corner).and_then(|vertex| {
                    let normal = model.face_normal(face, corner)?;
                    let tip: Point3<f32> = vertex + normal * scale;
                    Ok((
                        project(&full_chain, &vertex.to_homogeneous())?,
                        project(&full_chain, &tip.to_homogeneous())?,
                    ))
                });
                match segment {
                    Ok((from, to)) => self.draw_line(from, to, color),
                    Err(err) => self.skip(model, &err),
                }
            }
        }
    }
}

/// Transform, divide by w and truncate to integer screen coordinates
fn project(chain: &Matrix4<f32>, point: &Vector4<f32>) -> Result<ScreenPoint> {
    let clip = chain * point;
    let ndc = perspective_divide(&clip).ok_or(Error::DegenerateW { w: clip.w })?;
    if ndc.x.abs() > MAX_SCREEN_COORD || ndc.y.abs() > MAX_SCREEN_COORD {
        return Err(Error::CoordinateOverflow { x: ndc.x, y: ndc.y });
    }
    Ok(ScreenPoint::new(ndc.x as i32, ndc.y as i32))
}

/// Screen positions of a face's three vertices under model then camera
fn project_face(model: &MeshModel, face: usize, chain: &Matrix4<f32>) -> Result<[ScreenPoint; 3]> {
    let mut points = [ScreenPoint::origin(); 3];
    for (corner, slot) in points.iter_mut().enumerate() {
        let vertex = model.face_vertex(face, corner)?;
        *slot = project(chain, &model.transform(&vertex.to_homogeneous()))?;
    }
    Ok(points)
}
