//! Geometry of the on-screen piano keyboard.
//!
//! Natural keys are laid out in contiguous slots of equal width across the whole keyboard.
//! Raised keys sit on the boundary between two natural slots. Everything here is a pure function
//! of the bounding box, so it can be recomputed on every resize.

use std::collections::HashMap;

use eframe::egui::{pos2, vec2, Pos2, Rect};

use crate::pitch::{Pitch, PitchTable};

/// Anchors of natural keys are this far down the keyboard (in units of its height), below the
/// raised keys.
const NATURAL_ANCHOR_HEIGHT: f32 = 4.0 / 5.0;
/// Anchors of raised keys are this far down the keyboard (in units of its height).
const RAISED_ANCHOR_HEIGHT: f32 = 2.0 / 5.0;
/// Natural keys are drawn this much narrower than their slot, which leaves a visible seam.
const NATURAL_KEY_INSET: f32 = 1.0 / 11.0;
/// in units of the natural key width
const RAISED_KEY_DRAW_WIDTH: f32 = 2.0 / 3.0;
/// in units of the keyboard height
const RAISED_KEY_DRAW_HEIGHT: f32 = 2.0 / 3.0;

/// Where the raised keys of one octave group sit, relative to the previous one. Applied
/// cumulatively, starting on the C of the group, this gives the slots after C, D, F, G and A.
const RAISED_KEY_STEPS: [usize; 5] = [0, 1, 2, 1, 1];
/// Index of the first C among the naturals. The keyboard starts on A, H.
const FIRST_GROUP_START: usize = 2;
const NATURALS_PER_OCTAVE: usize = 7;

/// For every raised key, in ascending order, the index of the natural slot that the raised key
/// follows. The raised key is centred on the right edge of that slot.
///
/// The first raised key (A sharp of the partial lowest octave) follows slot 0. After that, every
/// group of seven naturals starting at C contributes five raised keys.
pub fn raised_key_slots(natural_count: usize) -> Vec<usize> {
    let mut slots = vec![];
    if natural_count < 2 {
        return slots;
    }
    slots.push(0);
    for group_start in (FIRST_GROUP_START..natural_count - 1).step_by(NATURALS_PER_OCTAVE) {
        let mut cursor = group_start;
        for step in RAISED_KEY_STEPS {
            cursor += step;
            slots.push(cursor);
        }
    }
    slots
}

/// One key as it is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyShape {
    pub pitch: Pitch,
    pub rect: Rect,
    pub raised: bool,
}

/// The keyboard, fitted into a bounding box.
///
/// Width and height must be positive.
pub struct KeyboardLayout<'a> {
    table: &'a PitchTable,
    origin: Pos2,
    width: f32,
    height: f32,
    natural_key_width: f32,
    raised_key_width: f32,
    /// for every natural key, its slot; for every raised key, the slot it follows.
    slots: HashMap<Pitch, usize>,
}

impl<'a> KeyboardLayout<'a> {
    pub fn new(table: &'a PitchTable, width: f32, height: f32, origin: Pos2) -> Self {
        let mut slots = HashMap::with_capacity(table.len());

        for (i, p) in table.naturals().enumerate() {
            slots.insert(*p, i);
        }

        let raised_slots = raised_key_slots(table.natural_count());
        if raised_slots.len() != table.raised_count() {
            panic!(
                "keyboard with {} natural keys has room for {} raised keys, but there are {}",
                table.natural_count(),
                raised_slots.len(),
                table.raised_count()
            );
        }
        for (p, slot) in table.raised().zip(raised_slots) {
            slots.insert(*p, slot);
        }

        let natural_key_width = width / table.natural_count() as f32;
        Self {
            table,
            origin,
            width,
            height,
            natural_key_width,
            raised_key_width: natural_key_width / 2.0,
            slots,
        }
    }

    pub fn from_rect(table: &'a PitchTable, rect: Rect) -> Self {
        Self::new(table, rect.width(), rect.height(), rect.min)
    }

    /// Fit the keyboard into a new bounding box. Calling this twice with the same arguments
    /// gives the same geometry as calling it once.
    pub fn resize(&mut self, width: f32, height: f32, origin: Pos2) {
        self.origin = origin;
        self.width = width;
        self.height = height;
        self.natural_key_width = width / self.table.natural_count() as f32;
        self.raised_key_width = self.natural_key_width / 2.0;
    }

    pub fn table(&self) -> &'a PitchTable {
        self.table
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, vec2(self.width, self.height))
    }

    pub fn natural_key_width(&self) -> f32 {
        self.natural_key_width
    }

    pub fn raised_key_width(&self) -> f32 {
        self.raised_key_width
    }

    fn slot(&self, pitch: &Pitch) -> usize {
        *self
            .slots
            .get(pitch)
            .unwrap_or_else(|| panic!("pitch {} is not on the keyboard", pitch))
    }

    /// The full slot of the `i`-th natural key, without the seam.
    pub fn natural_slot(&self, i: usize) -> Rect {
        Rect::from_min_size(
            pos2(
                self.origin.x + i as f32 * self.natural_key_width,
                self.origin.y,
            ),
            vec2(self.natural_key_width, self.height),
        )
    }

    /// The point where a marker for `pitch` goes: horizontally centred on the key, low on natural
    /// keys and high on raised ones.
    ///
    /// Panics if `pitch` is not on the keyboard.
    pub fn marker_anchor(&self, pitch: &Pitch) -> Pos2 {
        let slot = self.slot(pitch) as f32;
        if pitch.is_raised() {
            pos2(
                self.origin.x + slot * self.natural_key_width + self.natural_key_width,
                self.origin.y + RAISED_ANCHOR_HEIGHT * self.height,
            )
        } else {
            pos2(
                self.origin.x + slot * self.natural_key_width + self.natural_key_width / 2.0,
                self.origin.y + NATURAL_ANCHOR_HEIGHT * self.height,
            )
        }
    }

    /// All keys in drawing order: first the natural keys, then the raised keys on top of them.
    pub fn draw_plan(&self) -> Vec<KeyShape> {
        let w = self.natural_key_width;
        let naturals = self.table.naturals().map(|p| {
            let slot = self.slot(p) as f32;
            KeyShape {
                pitch: *p,
                rect: Rect::from_min_size(
                    pos2(self.origin.x + slot * w, self.origin.y),
                    vec2((1.0 - NATURAL_KEY_INSET) * w, self.height),
                ),
                raised: false,
            }
        });
        let raised = self.table.raised().map(|p| {
            let slot = self.slot(p) as f32;
            KeyShape {
                pitch: *p,
                rect: Rect::from_min_size(
                    pos2(
                        self.origin.x + slot * w + (1.0 - RAISED_KEY_DRAW_WIDTH / 2.0) * w,
                        self.origin.y,
                    ),
                    vec2(RAISED_KEY_DRAW_WIDTH * w, RAISED_KEY_DRAW_HEIGHT * self.height),
                ),
                raised: true,
            }
        });
        naturals.chain(raised).collect()
    }
}
