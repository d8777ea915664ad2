/// Scene: models, cameras and display toggles read by the renderer
use crate::error::{Error, Result};
use crate::model::MeshModel;
use crate::projection::Camera;

#[derive(Debug, Clone)]
pub struct Scene {
    models: Vec<MeshModel>,
    cameras: Vec<Camera>,
    active_model: usize,
    active_camera: usize,
    pub show_axis: bool,
    pub show_bounding_box: bool,
}

impl Scene {
    /// A scene always has at least one camera
    pub fn new(camera: Camera) -> Self {
        Self {
            models: Vec::new(),
            cameras: vec![camera],
            active_model: 0,
            active_camera: 0,
            show_axis: false,
            show_bounding_box: false,
        }
    }

    /// Add a model and make it active; returns its index
    pub fn add_model(&mut self, model: MeshModel) -> usize {
        self.models.push(model);
        self.active_model = self.models.len() - 1;
        self.active_model
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn model(&self, index: usize) -> Option<&MeshModel> {
        self.models.get(index)
    }

    pub fn model_mut(&mut self, index: usize) -> Option<&mut MeshModel> {
        self.models.get_mut(index)
    }

    pub fn active_model_index(&self) -> usize {
        self.active_model
    }

    pub fn active_model(&self) -> Option<&MeshModel> {
        self.models.get(self.active_model)
    }

    pub fn active_model_mut(&mut self) -> Option<&mut MeshModel> {
        self.models.get_mut(self.active_model)
    }

    pub fn set_active_model(&mut self, index: usize) -> Result<()> {
        if index >= self.models.len() {
            return Err(Error::ModelIndexOutOfRange {
                index,
                count: self.models.len(),
            });
        }
        self.active_model = index;
        Ok(())
    }

    /// Add a camera; returns its index. The active camera is unchanged.
    pub fn add_camera(&mut self, camera: Camera) -> usize {
        self.cameras.push(camera);
        self.cameras.len() - 1
    }

    pub fn active_camera(&self) -> &Camera {
        &self.cameras[self.active_camera]
    }

    pub fn active_camera_mut(&mut self) -> &mut Camera {
        &mut self.cameras[self.active_camera]
    }

    pub fn set_active_camera(&mut self, index: usize) -> Result<()> {
        if index >= self.cameras.len() {
            return Err(Error::CameraIndexOutOfRange {
                index,
                count: self.cameras.len(),
            });
        }
        self.active_camera = index;
        Ok(())
    }
}
