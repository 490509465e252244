use eframe::egui::{self, Pos2};
use ecolor::Color32;

use super::r#trait::Draw;

pub const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(225, 25, 25);

/// A filled circle on top of a key.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub pos: Pos2,
    pub radius: f32,
    pub color: Color32,
}

impl Marker {
    pub fn new(pos: Pos2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            color: HIGHLIGHT_COLOR,
        }
    }
}

impl Draw for Marker {
    fn draw(&self, painter: &egui::Painter) {
        painter.circle_filled(self.pos, self.radius, self.color);
    }
}

/// Text, horizontally centred on `pos`, hanging down from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub pos: Pos2,
    pub size: f32,
    pub color: Color32,
}

impl Label {
    pub fn new(text: String, pos: Pos2, size: f32) -> Self {
        Self {
            text,
            pos,
            size,
            color: HIGHLIGHT_COLOR,
        }
    }
}

impl Draw for Label {
    fn draw(&self, painter: &egui::Painter) {
        painter.text(
            self.pos,
            egui::Align2::CENTER_TOP,
            &self.text,
            egui::FontId::proportional(self.size),
            self.color,
        );
    }
}
