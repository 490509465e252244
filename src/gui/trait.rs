use eframe::egui;

/// Something that paints itself. Implementors only read their own state.
pub trait Draw {
    fn draw(&self, painter: &egui::Painter);
}
