//! Scene graph and hierarchical scene organization.
//!
//! A scene is a tree of [`SceneGraphNode`]s. Transform nodes
//! ([`Translation`], [`Rotation`]) copy the incoming [`Camera`], apply
//! their local transform to the copy and recurse into their children with
//! it; leaf renderables (see
//! [`renderables`](super::renderables)) issue the actual draw sequence.
//! Because the camera is copied on every descent, a transform applied in
//! one subtree is invisible to siblings and to the caller.
//!
//! Children are exclusively owned and rendered in insertion order, every
//! time. Re-rendering an unchanged tree visits the same nodes in the same
//! order with the same camera values.

use num_traits::Float;

use crate::backend::BackendError;
use crate::camera::Camera;
use crate::math::{Quaternion, Radians, Scalar, Vector};

/// One node of the scene graph.
pub trait SceneGraphNode<T: Scalar + Float> {
    /// Renders this node and its children under the provided camera.
    ///
    /// The camera is borrowed immutably: a node that wants a different
    /// view for its children clones it first. The only failures are the
    /// ones a leaf's draw sequence reports; traversal itself introduces
    /// none.
    fn render(&self, camera: &Camera<T>) -> Result<(), BackendError>;

    /// Appends the provided child to this node's ordered child list.
    fn add(&mut self, child: Box<dyn SceneGraphNode<T>>);

    /// Whether this node can be selected directly. Transform and grouping
    /// nodes report false.
    fn is_pickable(&self) -> bool;
}

/// The ordered children of a node, rendered in insertion order.
///
/// Nodes with children hold one of these rather than inheriting child
/// bookkeeping; ownership is exclusive, so the tree shape is enforced by
/// construction.
pub struct ChildList<T> {
    nodes: Vec<Box<dyn SceneGraphNode<T>>>,
}

impl<T: Scalar + Float> ChildList<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn add(&mut self, child: Box<dyn SceneGraphNode<T>>) {
        self.nodes.push(child);
    }

    /// Renders every child with the provided camera, in insertion order,
    /// stopping at the first failure.
    pub fn render_each(&self, camera: &Camera<T>) -> Result<(), BackendError> {
        for child in &self.nodes {
            child.render(camera)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn SceneGraphNode<T>> {
        self.nodes.iter().map(|node| node.as_ref())
    }
}

impl<T: Scalar + Float> Default for ChildList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A node that only groups its children; rendering passes the camera
/// through unchanged.
pub struct Group<T> {
    children: ChildList<T>,
}

impl<T: Scalar + Float> Group<T> {
    pub fn new() -> Self {
        Self {
            children: ChildList::new(),
        }
    }
}

impl<T: Scalar + Float> Default for Group<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar + Float> SceneGraphNode<T> for Group<T> {
    fn render(&self, camera: &Camera<T>) -> Result<(), BackendError> {
        self.children.render_each(camera)
    }

    fn add(&mut self, child: Box<dyn SceneGraphNode<T>>) {
        self.children.add(child);
    }

    fn is_pickable(&self) -> bool {
        false
    }
}

/// A node that renders its children through a camera moved by a fixed
/// offset.
pub struct Translation<T> {
    offset: Vector<T, 3>,
    children: ChildList<T>,
}

impl<T: Scalar + Float> Translation<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::from_vector(Vector::new([x, y, z]))
    }

    pub fn from_vector(offset: Vector<T, 3>) -> Self {
        Self {
            offset,
            children: ChildList::new(),
        }
    }

    pub fn offset(&self) -> &Vector<T, 3> {
        &self.offset
    }
}

impl<T: Scalar + Float> SceneGraphNode<T> for Translation<T> {
    fn render(&self, camera: &Camera<T>) -> Result<(), BackendError> {
        let mut translated = camera.clone();
        translated.translate(&self.offset);
        self.children.render_each(&translated)
    }

    fn add(&mut self, child: Box<dyn SceneGraphNode<T>>) {
        self.children.add(child);
    }

    fn is_pickable(&self) -> bool {
        false
    }
}

/// A node that renders its children through a camera turned by a fixed
/// rotation.
pub struct Rotation<T> {
    rotation: Quaternion<T>,
    children: ChildList<T>,
}

impl<T: Scalar + Float> Rotation<T> {
    pub fn new(angle: Radians<T>, axis: Vector<T, 3>) -> Self {
        Self::from_quaternion(Quaternion::new(axis, angle))
    }

    pub fn from_quaternion(rotation: Quaternion<T>) -> Self {
        Self {
            rotation,
            children: ChildList::new(),
        }
    }

    pub fn rotation(&self) -> &Quaternion<T> {
        &self.rotation
    }
}

impl<T: Scalar + Float> SceneGraphNode<T> for Rotation<T> {
    fn render(&self, camera: &Camera<T>) -> Result<(), BackendError> {
        let mut rotated = camera.clone();
        rotated.rotate(&self.rotation);
        self.children.render_each(&rotated)
    }

    fn add(&mut self, child: Box<dyn SceneGraphNode<T>>) {
        self.children.add(child);
    }

    fn is_pickable(&self) -> bool {
        false
    }
}

/// A whole scene: a camera plus the ordered roots of the graph.
pub struct Scene<T: Scalar> {
    camera: Camera<T>,
    roots: Vec<Box<dyn SceneGraphNode<T>>>,
}

impl<T: Scalar + Float> Scene<T> {
    pub fn new(camera: Camera<T>) -> Self {
        Self {
            camera,
            roots: Vec::new(),
        }
    }

    pub fn add(&mut self, node: Box<dyn SceneGraphNode<T>>) {
        self.roots.push(node);
    }

    /// Renders every root with this scene's camera, in insertion order.
    pub fn render(&self) -> Result<(), BackendError> {
        for node in &self.roots {
            node.render(&self.camera)?;
        }
        Ok(())
    }

    pub fn camera(&self) -> &Camera<T> {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera<T> {
        &mut self.camera
    }
}
