/// Geometry primitives for wireframe rendering
use nalgebra::Point3;

/// A model-space vertex position
pub type Vertex = Point3<f32>;

/// A triangle face referencing vertices and normals of its model
///
/// Indices are 1-based, as delivered by the mesh loader. Index 0 is never
/// valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub vertex_indices: [usize; 3],
    pub normal_indices: [usize; 3],
}

impl Face {
    pub fn new(vertex_indices: [usize; 3], normal_indices: [usize; 3]) -> Self {
        Self {
            vertex_indices,
            normal_indices,
        }
    }

    /// 1-based vertex index at `corner` (0, 1 or 2)
    pub fn vertex_index(&self, corner: usize) -> Option<usize> {
        self.vertex_indices.get(corner).copied()
    }

    pub fn normal_index(&self, corner: usize) -> Option<usize> {
        self.normal_indices.get(corner).copied()
    }
}

/// Axis-aligned bounds of a vertex set in model space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl BoundingBox {
    /// Corner pairs joined by the 12 box edges: bottom ring, uprights, top ring
    pub const EDGES: [(usize, usize); 12] = [
        (0, 2),
        (0, 4),
        (2, 6),
        (4, 6),
        (0, 1),
        (2, 3),
        (6, 7),
        (4, 5),
        (1, 3),
        (1, 5),
        (3, 7),
        (5, 7),
    ];

    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self { min, max }
    }

    /// Bounds of the given vertices; a degenerate box at the origin when empty
    pub fn from_vertices(vertices: &[Vertex]) -> Self {
        let Some(first) = vertices.first() else {
            return Self::new(Point3::origin(), Point3::origin());
        };

        vertices.iter().skip(1).fold(Self::new(*first, *first), |bounds, v| Self {
            min: bounds.min.inf(v),
            max: bounds.max.sup(v),
        })
    }

    /// The 8 corners, indexed so that EDGES connects them into a box
    ///
    /// Order: (max,min,max) (max,max,max) (min,min,max) (min,max,max)
    ///        (max,min,min) (max,max,min) (min,min,min) (min,max,min)
    pub fn corners(&self) -> [Point3<f32>; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(lo.x, hi.y, hi.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
        ]
    }

    pub fn center(&self) -> Point3<f32> {
        nalgebra::center(&self.min, &self.max)
    }
}
