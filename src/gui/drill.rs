use eframe::egui::{self, pos2, vec2, Pos2, Rect};
use ecolor::Color32;
use rand::Rng;

use crate::{
    layout::KeyboardLayout,
    pitch::PitchTable,
    task::{IntervalTask, IntervalTaskStream},
    timer::{format_elapsed, SessionTimer},
};

use super::{
    overlay::{Label, Marker},
    r#trait::Draw,
};

const BACKGROUND_COLOR: Color32 = Color32::WHITE;
const ADVANCE_KEY: egui::Key = egui::Key::Space;
const MARKER_RADIUS: f32 = 10.0;
/// in units of the canvas height
const LABEL_FONT_SIZE: f32 = 68.0 / 180.0;
/// in units of the canvas height
const LABEL_TOP: f32 = 2.0 / 5.0;

/// How the canvas is split up: the keyboard on the left, and a square on the right that holds
/// the label.
///
/// Both regions stay inside the canvas. If the canvas is narrower than it is high, the label
/// square takes the whole width and the keyboard shrinks to nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneRegions {
    pub keyboard: Rect,
    pub label_pos: Pos2,
    pub label_size: f32,
}

impl SceneRegions {
    pub fn new(canvas: Rect) -> Self {
        let w = canvas.width().max(0.0);
        let h = canvas.height().max(0.0);
        let side = h.min(w);
        Self {
            keyboard: Rect::from_min_size(canvas.min, vec2(w - side, h)),
            label_pos: pos2(canvas.left() + w - side / 2.0, canvas.top() + LABEL_TOP * h),
            label_size: LABEL_FONT_SIZE * side,
        }
    }
}

/// The whole drill: the keyboard, two markers on the keys of the current task, and the name of
/// the interval between them.
pub struct DrillWindow<R: Rng> {
    layout: KeyboardLayout<'static>,
    tasks: IntervalTaskStream<'static, R>,
    task: IntervalTask,
    markers: [Marker; 2],
    label: Label,
    canvas: Rect,
    timer: SessionTimer,
    finished: bool,
}

impl<R: Rng> DrillWindow<R> {
    pub fn new(table: &'static PitchTable, rng: R, canvas: Rect) -> Self {
        let regions = SceneRegions::new(canvas);
        let layout = KeyboardLayout::from_rect(table, regions.keyboard);
        let mut tasks = IntervalTaskStream::new(table, rng);
        let task = tasks.next_task();
        let markers = markers_for(&layout, &task);
        let label = Label::new(
            task.interval.label().into(),
            regions.label_pos,
            regions.label_size,
        );
        log::debug!("first task: {} to {} ({})", task.start, task.end, task.interval);
        Self {
            layout,
            tasks,
            task,
            markers,
            label,
            canvas,
            timer: SessionTimer::start(),
            finished: false,
        }
    }

    pub fn task(&self) -> &IntervalTask {
        &self.task
    }

    pub fn markers(&self) -> &[Marker; 2] {
        &self.markers
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn layout(&self) -> &KeyboardLayout<'static> {
        &self.layout
    }

    /// Replaces the current task, markers and label by the next ones.
    pub fn advance(&mut self) {
        self.task = self.tasks.next_task();
        self.markers = markers_for(&self.layout, &self.task);
        self.label.text = self.task.interval.label().into();
        log::debug!(
            "next task: {} to {} ({})",
            self.task.start,
            self.task.end,
            self.task.interval
        );
    }

    /// Fits everything into `canvas`. Does nothing if the canvas did not change.
    pub fn resize(&mut self, canvas: Rect) {
        if canvas == self.canvas {
            return;
        }
        log::trace!("canvas resized from {:?} to {:?}", self.canvas, canvas);
        self.canvas = canvas;
        let regions = SceneRegions::new(canvas);
        self.layout.resize(
            regions.keyboard.width(),
            regions.keyboard.height(),
            regions.keyboard.min,
        );
        self.markers = markers_for(&self.layout, &self.task);
        self.label.pos = regions.label_pos;
        self.label.size = regions.label_size;
    }

    /// Writes the session duration. Returns it the first time, and `None` afterwards.
    fn finish(&mut self) -> Option<String> {
        if self.finished {
            return None {};
        }
        self.finished = true;
        let elapsed = format_elapsed(self.timer.elapsed());
        log::info!("session finished after {}", elapsed);
        println!("{}", elapsed);
        Some(elapsed)
    }

    /// One frame: input, then geometry, then painting.
    fn run_frame(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(ADVANCE_KEY)) {
            self.advance();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(BACKGROUND_COLOR))
            .show(ctx, |ui| {
                self.resize(ui.max_rect());
                self.draw(ui.painter());
            });

        if ctx.input(|i| i.viewport().close_requested()) {
            self.finish();
        }
    }
}

/// The markers never get wider than a raised key.
fn markers_for(layout: &KeyboardLayout, task: &IntervalTask) -> [Marker; 2] {
    let radius = MARKER_RADIUS.min(layout.raised_key_width()).max(0.0);
    [
        Marker::new(layout.marker_anchor(&task.start), radius),
        Marker::new(layout.marker_anchor(&task.end), radius),
    ]
}

impl<R: Rng> Draw for DrillWindow<R> {
    fn draw(&self, painter: &egui::Painter) {
        painter.rect_filled(self.canvas, egui::CornerRadius::default(), BACKGROUND_COLOR);
        self.layout.draw(painter);
        for m in &self.markers {
            m.draw(painter);
        }
        if self.label.size > 0.0 {
            self.label.draw(painter);
        }
    }
}

impl<R: Rng> eframe::App for DrillWindow<R> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn canvas(w: f32, h: f32) -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(w, h))
    }

    #[test]
    fn test_scene_regions() {
        let regions = SceneRegions::new(canvas(1800.0, 180.0));
        assert_eq!(regions.keyboard, canvas(1620.0, 180.0));
        assert_relative_eq!(regions.label_pos.x, 1710.0);
        assert_relative_eq!(regions.label_pos.y, 72.0, max_relative = 1e-6);
        assert_relative_eq!(regions.label_size, 68.0, max_relative = 1e-6);
    }

    #[test]
    fn test_markers_follow_task() {
        let table = PitchTable::standard();
        let mut drill = DrillWindow::new(table, StdRng::seed_from_u64(1), canvas(1800.0, 180.0));

        for _ in 0..50 {
            let task = *drill.task();
            let layout = drill.layout();
            assert_eq!(drill.markers()[0].pos, layout.marker_anchor(&task.start));
            assert_eq!(drill.markers()[1].pos, layout.marker_anchor(&task.end));
            assert_eq!(drill.label().text, task.interval.label());
            drill.advance();
        }
    }

    #[test]
    fn test_resize() {
        let table = PitchTable::standard();
        let mut drill = DrillWindow::new(table, StdRng::seed_from_u64(2), canvas(1800.0, 180.0));
        let task = *drill.task();

        drill.resize(canvas(1000.0, 100.0));
        assert_eq!(*drill.task(), task);
        assert_eq!(drill.layout().rect(), canvas(900.0, 100.0));
        assert_eq!(
            drill.markers()[0].pos,
            drill.layout().marker_anchor(&task.start)
        );
        assert_relative_eq!(drill.label().pos.x, 950.0);
        assert_relative_eq!(drill.label().pos.y, 40.0, max_relative = 1e-6);

        let markers = drill.markers().clone();
        drill.resize(canvas(1000.0, 100.0));
        assert_eq!(drill.markers(), &markers);
    }

    #[test]
    fn test_marker_radius_shrinks_with_keys() {
        let table = PitchTable::standard();
        let drill = DrillWindow::new(table, StdRng::seed_from_u64(3), canvas(1800.0, 180.0));
        assert_eq!(drill.markers()[0].radius, MARKER_RADIUS);

        let drill = DrillWindow::new(table, StdRng::seed_from_u64(3), canvas(620.0, 100.0));
        assert_relative_eq!(drill.markers()[0].radius, 5.0, max_relative = 1e-6);
    }

    #[test]
    fn test_narrow_canvas_keeps_markers_inside() {
        let table = PitchTable::standard();
        let mut drill = DrillWindow::new(table, StdRng::seed_from_u64(4), canvas(1800.0, 180.0));

        for (w, h) in [(150.0, 180.0), (180.0, 180.0), (0.0, 0.0), (100.0, 0.0)] {
            let c = canvas(w, h);
            drill.resize(c);
            let layout_rect = drill.layout().rect();
            assert!(layout_rect.width() >= 0.0, "{}x{}", w, h);
            assert!(drill.layout().natural_key_width() >= 0.0);
            for m in drill.markers() {
                assert!(m.radius >= 0.0);
                assert!(c.contains(m.pos), "marker at {:?} outside {:?}", m.pos, c);
            }
            assert!(c.contains(drill.label().pos));
            assert!(drill.label().size >= 0.0);
        }

        let regions = SceneRegions::new(canvas(150.0, 180.0));
        assert_eq!(regions.keyboard.width(), 0.0);
        assert_eq!(regions.label_pos.x, 75.0);

        // back to a sane size, everything is where it belongs again
        drill.resize(canvas(1800.0, 180.0));
        let task = *drill.task();
        assert_eq!(drill.layout().rect(), canvas(1620.0, 180.0));
        assert_eq!(drill.markers()[0].pos, drill.layout().marker_anchor(&task.start));
        assert_eq!(drill.markers()[0].radius, MARKER_RADIUS);
    }

    fn frame_input(screen: Rect, events: Vec<egui::Event>, close: bool) -> egui::RawInput {
        let mut input = egui::RawInput {
            screen_rect: Some(screen),
            events,
            ..Default::default()
        };
        if close {
            input.viewports.insert(
                egui::ViewportId::ROOT,
                egui::ViewportInfo {
                    events: vec![egui::ViewportEvent::Close],
                    ..Default::default()
                },
            );
        }
        input
    }

    fn space_pressed() -> egui::Event {
        egui::Event::Key {
            key: egui::Key::Space,
            physical_key: None {},
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_frames() {
        let table = PitchTable::standard();
        let ctx = egui::Context::default();
        // a repeated pass would see the same key press twice
        ctx.options_mut(|o| o.max_passes = std::num::NonZeroUsize::MIN);
        let screen = canvas(1800.0, 180.0);
        let mut drill = DrillWindow::new(table, StdRng::seed_from_u64(5), screen);
        let mut shadow = IntervalTaskStream::new(table, StdRng::seed_from_u64(5));
        assert_eq!(*drill.task(), shadow.next_task());

        // without input nothing changes
        let before = *drill.task();
        let _ = ctx.run(frame_input(screen, vec![], false), |ctx| drill.run_frame(ctx));
        assert_eq!(*drill.task(), before);

        // space moves on to the next task of the stream, markers and label follow
        for _ in 0..5 {
            let _ = ctx.run(frame_input(screen, vec![space_pressed()], false), |ctx| {
                drill.run_frame(ctx)
            });
            let task = *drill.task();
            assert_eq!(task, shadow.next_task());
            assert_eq!(drill.label().text, task.interval.label());
            assert_eq!(drill.markers()[1].pos, drill.layout().marker_anchor(&task.end));
        }

        // closing reports the session time once
        assert!(!drill.finished);
        let _ = ctx.run(frame_input(screen, vec![], true), |ctx| drill.run_frame(ctx));
        assert!(drill.finished);
        assert_eq!(drill.finish(), None {});
    }

    #[test]
    fn test_finish_once() {
        let table = PitchTable::standard();
        let mut drill = DrillWindow::new(table, StdRng::seed_from_u64(6), canvas(1800.0, 180.0));
        let elapsed = drill.finish();
        assert!(elapsed.is_some_and(|e| e.starts_with("0:00:")));
        assert_eq!(drill.finish(), None {});
    }
}
