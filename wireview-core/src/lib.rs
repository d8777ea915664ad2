/// Wireview Core Library - software wireframe rendering
///
/// Per-model local/world transform state, camera projection, and an integer
/// line rasterizer that draws triangle edges and overlays into a CPU-side
/// RGB float buffer for an external display surface.

pub mod buffer;
pub mod config;
pub mod error;
pub mod geometry;
pub mod model;
pub mod projection;
pub mod raster;
pub mod renderer;
pub mod scene;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use buffer::{Color, PixelBuffer};
pub use config::{RendererConfig, MAX_AXIS_LENGTH};
pub use error::{Error, Result};
pub use geometry::{BoundingBox, Face, Vertex};
pub use model::MeshModel;
pub use projection::{perspective_divide, Camera, ProjectionMode};
pub use raster::{draw_line, LinePixels, ScreenPoint, SlopeRegime};
pub use renderer::{FrameStats, WireframeRenderer};
pub use scene::Scene;
pub use surface::DisplaySurface;
pub use transform::{RotationState, Transform, TransformState};
