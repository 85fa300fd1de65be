// Bridge: shapes and colours vary independently; a shape holds a colour
// instead of inheriting one.

use std::rc::Rc;

pub trait Color {
    fn fill(&self) -> String;
}

pub struct Red;
impl Color for Red {
    fn fill(&self) -> String {
        "Coloring the shape with Red color".to_string()
    }
}

pub struct Blue;
impl Color for Blue {
    fn fill(&self) -> String {
        "Coloring the shape with Blue color".to_string()
    }
}

pub trait Shape {
    fn draw(&self) -> String;
}

pub struct Square {
    color: Rc<dyn Color>,
}

impl Square {
    pub fn new(color: Rc<dyn Color>) -> Self {
        Self { color }
    }
}

impl Shape for Square {
    fn draw(&self) -> String {
        format!("Drawing Square. {}", self.color.fill())
    }
}

pub struct Circle {
    color: Rc<dyn Color>,
}

impl Circle {
    pub fn new(color: Rc<dyn Color>) -> Self {
        Self { color }
    }
}

impl Shape for Circle {
    fn draw(&self) -> String {
        format!("Drawing Circle. {}", self.color.fill())
    }
}
