/// Error type shared by the viewer core
use thiserror::Error;

/// Recoverable conditions raised by scene lookups, mesh index checks and
/// configuration loading.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("face {face} references vertex {index}, but the model has {count} vertices (indices are 1-based)")]
    VertexIndexOutOfRange { face: usize, index: usize, count: usize },

    #[error("face {face} references normal {index}, but the model has {count} normals (indices are 1-based)")]
    NormalIndexOutOfRange { face: usize, index: usize, count: usize },

    #[error("face {face} has no corner {corner} (faces are triangles)")]
    CornerOutOfRange { face: usize, corner: usize },

    #[error("face {face} does not exist (model has {count} faces)")]
    FaceIndexOutOfRange { face: usize, count: usize },

    #[error("model {index} does not exist (scene has {count} models)")]
    ModelIndexOutOfRange { index: usize, count: usize },

    #[error("camera {index} does not exist (scene has {count} cameras)")]
    CameraIndexOutOfRange { index: usize, count: usize },

    #[error("homogeneous w component {w} is too close to zero")]
    DegenerateW { w: f32 },

    #[error("projected point ({x}, {y}) is too far outside the viewport")]
    CoordinateOverflow { x: f32, y: f32 },

    #[error("invalid renderer configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_mention_one_based_indices() {
        let err = Error::VertexIndexOutOfRange { face: 3, index: 0, count: 8 };
        let message = err.to_string();
        assert!(message.contains("face 3"));
        assert!(message.contains("1-based"));
    }
}
