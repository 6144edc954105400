//! Mesh drawer trait - the seam between the scene graph and a renderer
//!
//! The scene graph never talks to a GPU. Whatever actually submits geometry
//! (a Vulkan pipeline, a software rasterizer, a test recorder) implements
//! [`MeshDrawer`] and receives fully composed matrices from the traversal.

use crate::foundation::math::{Mat3, Mat4};

/// A drawable mesh capability
///
/// Implementors receive one call per frame per node that owns them, with
/// every ancestor transform already folded into the matrices. Rendering
/// side effects and their failure modes are the implementor's concern; the
/// traversal neither observes nor handles them.
pub trait MeshDrawer {
    /// Issue the draw call for one node
    ///
    /// # Arguments
    /// * `mvp` - Full model-view-projection matrix for this node
    /// * `model_view` - Model-view matrix (world composed with the camera view)
    /// * `normal_matrix` - Normal transform derived from `model_view`
    /// * `model` - This node's world matrix (ancestor locals composed in order)
    fn draw(&self, mvp: &Mat4, model_view: &Mat4, normal_matrix: &Mat3, model: &Mat4);
}
