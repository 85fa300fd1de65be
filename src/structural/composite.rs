// Composite: leaves and groups share one interface, and a group forwards
// every call to its children in insertion order.

use std::fmt;

use itertools::Itertools;

pub trait Graphic {
    /// Appends what this graphic draws to `canvas`.
    fn draw(&self, canvas: &mut Vec<String>);

    fn leaf_count(&self) -> usize {
        1
    }

    fn render(&self) -> Vec<String> {
        let mut canvas = Vec::new();
        self.draw(&mut canvas);
        canvas
    }
}

pub struct Ellipse;

impl Graphic for Ellipse {
    fn draw(&self, canvas: &mut Vec<String>) {
        canvas.push("Ellipse".to_string());
    }
}

pub struct Rectangle;

impl Graphic for Rectangle {
    fn draw(&self, canvas: &mut Vec<String>) {
        canvas.push("Rectangle".to_string());
    }
}

/// Owns its children; removing one hands ownership back to the caller.
#[derive(Default)]
pub struct CompositeGraphic {
    children: Vec<Box<dyn Graphic>>,
}

impl CompositeGraphic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `graphic` as the last child and returns its position.
    pub fn add(&mut self, graphic: impl Graphic + 'static) -> usize {
        self.children.push(Box::new(graphic));
        self.children.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Graphic>> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Graphic for CompositeGraphic {
    fn draw(&self, canvas: &mut Vec<String>) {
        for child in &self.children {
            child.draw(canvas);
        }
    }

    fn leaf_count(&self) -> usize {
        self.children.iter().map(|child| child.leaf_count()).sum()
    }
}

// ============================================================================
// Enum-based tree
// ============================================================================

/// Closed-world variant: the set of node kinds is fixed, so no boxing.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphicNode {
    Ellipse,
    Rectangle,
    Group(Vec<GraphicNode>),
}

impl GraphicNode {
    pub fn group(children: impl IntoIterator<Item = GraphicNode>) -> Self {
        GraphicNode::Group(children.into_iter().collect())
    }
}

impl Graphic for GraphicNode {
    fn draw(&self, canvas: &mut Vec<String>) {
        match self {
            GraphicNode::Ellipse => Ellipse.draw(canvas),
            GraphicNode::Rectangle => Rectangle.draw(canvas),
            GraphicNode::Group(children) => children.iter().for_each(|child| child.draw(canvas)),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            GraphicNode::Group(children) => children.iter().map(Graphic::leaf_count).sum(),
            _ => 1,
        }
    }
}

impl fmt::Display for GraphicNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GraphicNode::Ellipse => write!(f, "Ellipse"),
            GraphicNode::Rectangle => write!(f, "Rectangle"),
            GraphicNode::Group(children) => write!(f, "[{}]", children.iter().join(", ")),
        }
    }
}
