//! SVG canvas handed to render layers

use std::fmt;

use svg::Document;
use svg::Node;
use svg::node::element::{Circle, Line, Rectangle, Text};

use crate::types::{BoundingBox, Dimensions, Position, Px};

/// Canvas sized to a solved layout, backed by an SVG document
pub struct Surface {
    document: Document,
    size: Dimensions,
    stroke: String,
    nodes: usize,
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("size", &self.size)
            .field("stroke", &self.stroke)
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl Surface {
    pub fn new(size: Dimensions) -> Self {
        let document = Document::new()
            .set("width", size.width.0)
            .set("height", size.height.0)
            .set("viewBox", format!("0 0 {} {}", size.width, size.height));
        Self {
            document,
            size,
            stroke: "black".to_string(),
            nodes: 0,
        }
    }

    /// Stroke colour used by the outline helpers
    pub fn with_stroke(mut self, color: impl Into<String>) -> Self {
        self.stroke = color.into();
        self
    }

    pub fn size(&self) -> Dimensions {
        self.size
    }

    /// Number of nodes added so far
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Append any SVG node
    pub fn add<N>(&mut self, node: N)
    where
        N: Into<Box<dyn Node>>,
    {
        self.document.append(node);
        self.nodes += 1;
    }

    pub fn circle(&mut self, center: Position, radius: Px, class: &str) {
        let circle = Circle::new()
            .set("class", class)
            .set("cx", center.x.0)
            .set("cy", center.y.0)
            .set("r", radius.0)
            .set("fill", "none")
            .set("stroke", self.stroke.as_str());
        self.add(circle);
    }

    pub fn line(&mut self, from: Position, to: Position, class: &str) {
        let line = Line::new()
            .set("class", class)
            .set("x1", from.x.0)
            .set("y1", from.y.0)
            .set("x2", to.x.0)
            .set("y2", to.y.0)
            .set("stroke", self.stroke.as_str());
        self.add(line);
    }

    pub fn rect(&mut self, bounds: BoundingBox, class: &str) {
        let rect = Rectangle::new()
            .set("class", class)
            .set("x", bounds.left().0)
            .set("y", bounds.top().0)
            .set("width", bounds.size.width.0)
            .set("height", bounds.size.height.0)
            .set("fill", "none")
            .set("stroke", self.stroke.as_str());
        self.add(rect);
    }

    /// Text anchored at its start, baseline at `at`
    pub fn label(&mut self, at: Position, text: &str, class: &str) {
        let label = Text::new(text)
            .set("class", class)
            .set("x", at.x.0)
            .set("y", at.y.0)
            .set("fill", self.stroke.as_str());
        self.add(label);
    }

    /// Serialize the document
    pub fn finish(self) -> String {
        self.document.to_string()
    }
}
