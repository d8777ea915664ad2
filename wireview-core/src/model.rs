/// Mesh models: immutable geometry plus replaceable transform state
use nalgebra::{Matrix4, Point3, Vector3, Vector4};

use crate::error::{Error, Result};
use crate::geometry::{BoundingBox, Face, Vertex};
use crate::transform::TransformState;

/// Initial model center, the middle of a 1880x1320 viewport
pub const DEFAULT_MODEL_CENTER: [f32; 3] = [940.0, 660.0, 0.0];

/// A triangle mesh with its local and world transforms
#[derive(Debug, Clone)]
pub struct MeshModel {
    name: String,
    vertices: Vec<Vertex>,
    normals: Vec<Vector3<f32>>,
    faces: Vec<Face>,
    bounds: BoundingBox,
    transform: TransformState,
    center: Point3<f32>,
}

impl MeshModel {
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<Vertex>,
        normals: Vec<Vector3<f32>>,
        faces: Vec<Face>,
    ) -> Self {
        let bounds = BoundingBox::from_vertices(&vertices);
        Self {
            name: name.into(),
            vertices,
            normals,
            faces,
            bounds,
            transform: TransformState::identity(),
            center: Point3::from(DEFAULT_MODEL_CENTER),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn normals(&self) -> &[Vector3<f32>] {
        &self.normals
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face(&self, index: usize) -> Result<&Face> {
        self.faces.get(index).ok_or(Error::FaceIndexOutOfRange {
            face: index,
            count: self.faces.len(),
        })
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Tracking point used by overlays; see `translate_local`
    pub fn center(&self) -> Point3<f32> {
        self.center
    }

    pub fn transform_state(&self) -> &TransformState {
        &self.transform
    }

    /// Vertex at `corner` of face `face`, resolving its 1-based index
    pub fn face_vertex(&self, face: usize, corner: usize) -> Result<Vertex> {
        let index = self
            .face(face)?
            .vertex_index(corner)
            .ok_or(Error::CornerOutOfRange { face, corner })?;
        index
            .checked_sub(1)
            .and_then(|i| self.vertices.get(i))
            .copied()
            .ok_or(Error::VertexIndexOutOfRange {
                face,
                index,
                count: self.vertices.len(),
            })
    }

    /// Normal at `corner` of face `face`, resolving its 1-based index
    pub fn face_normal(&self, face: usize, corner: usize) -> Result<Vector3<f32>> {
        let index = self
            .face(face)?
            .normal_index(corner)
            .ok_or(Error::CornerOutOfRange { face, corner })?;
        index
            .checked_sub(1)
            .and_then(|i| self.normals.get(i))
            .copied()
            .ok_or(Error::NormalIndexOutOfRange {
                face,
                index,
                count: self.normals.len(),
            })
    }

    /// Replace the local translation.
    ///
    /// The model center moves by dx in x and by dy + dz in y; z is left
    /// untouched. Existing scenes depend on this offset.
    pub fn translate_local(&mut self, dx: f32, dy: f32, dz: f32) {
        self.transform = self.transform.with_local_translation(dx, dy, dz);
        self.center.x += dx;
        self.center.y += dy;
        self.center.y += dz;
    }

    pub fn scale_local(&mut self, scale: f32) {
        self.transform = self.transform.with_local_scale(scale);
    }

    pub fn rotate_local_x(&mut self, degrees: f32) {
        self.transform = self.transform.with_local_rotation_x(degrees);
    }

    pub fn rotate_local_y(&mut self, degrees: f32) {
        self.transform = self.transform.with_local_rotation_y(degrees);
    }

    pub fn rotate_local_z(&mut self, degrees: f32) {
        self.transform = self.transform.with_local_rotation_z(degrees);
    }

    pub fn translate_world(&mut self, dx: f32, dy: f32, dz: f32) {
        self.transform = self.transform.with_world_translation(dx, dy, dz);
    }

    pub fn scale_world(&mut self, scale: f32) {
        self.transform = self.transform.with_world_scale(scale);
    }

    pub fn rotate_world_x(&mut self, degrees: f32) {
        self.transform = self.transform.with_world_rotation_x(degrees);
    }

    pub fn rotate_world_y(&mut self, degrees: f32) {
        self.transform = self.transform.with_world_rotation_y(degrees);
    }

    pub fn rotate_world_z(&mut self, degrees: f32) {
        self.transform = self.transform.with_world_rotation_z(degrees);
    }

    /// Apply world and local transforms to a homogeneous point.
    /// The result is not divided by w.
    pub fn transform(&self, point: &Vector4<f32>) -> Vector4<f32> {
        self.transform.transform(point)
    }

    pub fn model_matrix(&self) -> Matrix4<f32> {
        self.transform.matrix()
    }

    /// World translate-scale followed by the world rotations
    pub fn world_matrix(&self) -> Matrix4<f32> {
        self.transform.world().matrix()
    }

    /// Create an indexed cube mesh for testing
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;
        let vertices = vec![
            Point3::new(-h, -h, h),
            Point3::new(h, -h, h),
            Point3::new(h, h, h),
            Point3::new(-h, h, h),
            Point3::new(-h, -h, -h),
            Point3::new(h, -h, -h),
            Point3::new(h, h, -h),
            Point3::new(-h, h, -h),
        ];
        let normals = vec![
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
        ];
        let faces = vec![
            // Front
            Face::new([1, 2, 3], [1; 3]),
            Face::new([1, 3, 4], [1; 3]),
            // Back
            Face::new([5, 8, 7], [2; 3]),
            Face::new([5, 7, 6], [2; 3]),
            // Top
            Face::new([8, 4, 3], [3; 3]),
            Face::new([8, 3, 7], [3; 3]),
            // Bottom
            Face::new([5, 6, 2], [4; 3]),
            Face::new([5, 2, 1], [4; 3]),
            // Right
            Face::new([6, 7, 3], [5; 3]),
            Face::new([6, 3, 2], [5; 3]),
            // Left
            Face::new([5, 1, 4], [6; 3]),
            Face::new([5, 4, 8], [6; 3]),
        ];

        Self::new("cube", vertices, normals, faces)
    }
}
