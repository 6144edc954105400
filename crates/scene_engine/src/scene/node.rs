//! Scene node - the hierarchy element of the scene graph
//!
//! A [`SceneNode`] owns an optional drawable, a TRS transform, and its
//! children. Drawing a node walks its subtree depth-first, composing the
//! accumulated matrices top-down and issuing one draw call per drawable.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::foundation::math::{normal_matrix, Mat3, Mat4, Transform};
use crate::scene::MeshDrawer;

/// Shared handle to a scene node
///
/// Children are held through this handle; a parent's list of `NodeRef`s is
/// the only ownership edge in the graph.
pub type NodeRef = Rc<RefCell<SceneNode>>;

/// A node in the scene graph
///
/// Composes a local TRS transform, an optional drawable, a non-owning
/// back-reference to its parent, and an ordered list of owned children.
/// Insertion order is traversal order. Nodes without a drawable act as
/// grouping/pivot nodes: they contribute their transform and still traverse
/// into their children.
pub struct SceneNode {
    /// Drawable capability, absent for grouping/pivot nodes
    drawable: Option<Rc<dyn MeshDrawer>>,

    /// Local TRS transform, evaluated fresh on every draw
    transform: Transform,

    /// Back-reference to the owning node, set once at construction
    parent: Weak<RefCell<SceneNode>>,

    /// Exclusively-owned children in traversal order
    children: Vec<NodeRef>,
}

impl SceneNode {
    /// Create a node and, if a parent is given, register it as that
    /// parent's next child
    ///
    /// Registration happens exactly once, here; there is no removal or
    /// reparenting operation, so a parent's child list is precisely the
    /// nodes constructed with it as their parent.
    pub fn new(
        drawable: Option<Rc<dyn MeshDrawer>>,
        transform: Transform,
        parent: Option<&NodeRef>,
    ) -> NodeRef {
        let node = Rc::new(RefCell::new(Self {
            drawable,
            transform,
            parent: parent.map_or_else(Weak::new, Rc::downgrade),
            children: Vec::new(),
        }));

        if let Some(parent) = parent {
            parent.borrow_mut().add_child(Rc::clone(&node));
            log::debug!(
                "Registered child node (parent now has {} children)",
                parent.borrow().children.len()
            );
        }

        node
    }

    /// Append a child; only reachable from construction
    fn add_child(&mut self, child: NodeRef) {
        self.children.push(child);
    }

    /// Draw this node and its subtree in pre-order
    ///
    /// `mvp`, `model_view`, and `normal` are the matrices accumulated from
    /// the ancestors; `parent_model` is the ancestors' composed world matrix,
    /// absent only at the root. Each level re-derives the normal matrix from
    /// its updated model-view, so the incoming `normal` is consumed only by
    /// drawables further up the call chain.
    ///
    /// Every matrix is recomputed from the current transforms on each call;
    /// nothing is cached between frames.
    #[allow(unused_variables)]
    pub fn draw(&self, mvp: &Mat4, model_view: &Mat4, normal: &Mat3, parent_model: Option<&Mat4>) {
        let local = self.transform.to_matrix();

        // Accumulated × local; matrix multiplication is non-commutative and
        // this order is what puts ancestors before descendants.
        let model = match parent_model {
            Some(parent_model) => parent_model * local,
            None => local,
        };

        let updated_model_view = model_view * model;
        let updated_normal = normal_matrix(&updated_model_view);
        let updated_mvp = mvp * updated_model_view;

        if let Some(drawable) = &self.drawable {
            drawable.draw(&updated_mvp, &updated_model_view, &updated_normal, &model);
        }

        for child in &self.children {
            child
                .borrow()
                .draw(&updated_mvp, &updated_model_view, &updated_normal, Some(&model));
        }
    }

    /// Get the local transform
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Get the local transform mutably (for per-frame animation)
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Replace the local transform
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Get the children in traversal order
    pub fn children(&self) -> &[NodeRef] {
        &self.children
    }

    /// Get the parent, if this node has one and it is still alive
    pub fn parent(&self) -> Option<NodeRef> {
        self.parent.upgrade()
    }

    /// Whether this node owns a drawable
    pub fn has_drawable(&self) -> bool {
        self.drawable.is_some()
    }
}
