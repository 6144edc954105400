//! # Scene Engine
//!
//! A minimal hierarchical scene graph with recursive draw traversal.
//!
//! Each [`scene::SceneNode`] owns a TRS transform, an optional drawable,
//! and its children. Drawing the root once per frame propagates the
//! accumulated projection, view, and normal matrices depth-first through
//! the tree and issues one [`scene::MeshDrawer::draw`] call per drawable,
//! parent before children.
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_engine::prelude::*;
//!
//! // A pivot node with no drawable groups its children.
//! let root = SceneNode::new(None, Transform::identity(), None);
//! let _child = SceneNode::new(
//!     None,
//!     Transform::from_position(Vec3::new(2.0, 0.0, 0.0)),
//!     Some(&root),
//! );
//!
//! let projection = Mat4::perspective(45.0_f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);
//! let view = Mat4::look_at(
//!     Vec3::new(0.0, 2.0, 8.0),
//!     Vec3::zeros(),
//!     Vec3::y(),
//! );
//!
//! root.borrow().draw(&projection, &view, &Mat3::identity(), None);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod scene;

/// Common imports for scene graph users
pub mod prelude {
    pub use crate::config::{Config, ConfigError};
    pub use crate::foundation::math::{
        normal_matrix, Mat3, Mat4, Mat4Ext, Quat, Transform, Vec3, Vec4,
    };
    pub use crate::scene::{MeshDrawer, NodeRef, SceneNode};
}
