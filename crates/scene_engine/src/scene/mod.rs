//! Scene graph module
//!
//! A minimal hierarchical scene graph: nodes own a TRS transform, an
//! optional drawable, and their children. The only control flow is the
//! once-per-frame depth-first draw traversal that composes matrices
//! top-down and issues one draw call per drawable, parent before children.
//!
//! ```text
//! root ── draw(projection, view, normal, None)
//!  ├── pivot (no drawable, contributes its transform)
//!  │    └── mesh node ── MeshDrawer::draw(mvp, model_view, normal, model)
//!  └── mesh node
//! ```
//!
//! There are no spatial queries, no culling, and no cached matrices; every
//! draw recomputes the full chain from the current transforms.

mod mesh_drawer;
mod node;

pub use mesh_drawer::MeshDrawer;
pub use node::{NodeRef, SceneNode};
