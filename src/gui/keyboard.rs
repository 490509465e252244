use eframe::egui;
use ecolor::Color32;

use crate::layout::KeyboardLayout;

use super::r#trait::Draw;

const NATURAL_KEY_COLOR: Color32 = Color32::from_rgb(225, 225, 225);
const RAISED_KEY_COLOR: Color32 = Color32::BLACK;

impl Draw for KeyboardLayout<'_> {
    fn draw(&self, painter: &egui::Painter) {
        for key in self.draw_plan() {
            painter.rect_filled(
                key.rect,
                egui::CornerRadius::default(),
                if key.raised {
                    RAISED_KEY_COLOR
                } else {
                    NATURAL_KEY_COLOR
                },
            );
        }
    }
}
