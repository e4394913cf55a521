//! Prototype: shapes that copy themselves without the caller knowing their type.

use std::fmt;

/// Fields every shape carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeBase {
    pub x: i32,
    pub y: i32,
    pub color: Option<String>,
}

pub trait Shape: fmt::Debug {
    fn base(&self) -> &ShapeBase;
    fn base_mut(&mut self) -> &mut ShapeBase;

    /// Returns an independent copy of the concrete shape behind the trait object.
    fn clone_shape(&self) -> Box<dyn Shape>;

    fn describe(&self) -> String;
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_shape()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rectangle {
    pub base: ShapeBase,
    pub width: i32,
    pub height: i32,
}

impl Shape for Rectangle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!(
            "Rectangle at ({}, {}) {}x{} color={}",
            self.base.x,
            self.base.y,
            self.width,
            self.height,
            self.base.color.as_deref().unwrap_or("none")
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Circle {
    pub base: ShapeBase,
    pub radius: i32,
}

impl Shape for Circle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!(
            "Circle at ({}, {}) r={} color={}",
            self.base.x,
            self.base.y,
            self.radius,
            self.base.color.as_deref().unwrap_or("none")
        )
    }
}

/// Holds a heterogeneous list of shapes seeded with prototypes and their copies.
#[derive(Debug, Clone)]
pub struct ShapeGallery {
    shapes: Vec<Box<dyn Shape>>,
}

impl Default for ShapeGallery {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeGallery {
    pub fn new() -> Self {
        let circle = Circle {
            base: ShapeBase {
                x: 10,
                y: 10,
                color: None,
            },
            radius: 20,
        };
        let another_circle = circle.clone_shape();

        let rectangle = Rectangle {
            width: 10,
            height: 20,
            ..Default::default()
        };
        let another_rectangle = rectangle.clone_shape();

        Self {
            shapes: vec![
                Box::new(circle),
                another_circle,
                Box::new(rectangle),
                another_rectangle,
            ],
        }
    }

    pub fn shapes(&self) -> &[Box<dyn Shape>] {
        &self.shapes
    }

    /// Copies every shape through the trait object only.
    pub fn copies(&self) -> Vec<Box<dyn Shape>> {
        self.shapes.iter().map(|shape| shape.clone_shape()).collect()
    }
}
