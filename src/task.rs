use rand::{seq::SliceRandom, Rng};

use crate::{
    interval::Interval,
    pitch::{Pitch, PitchTable},
};

/// Two keys and the name of the interval between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTask {
    pub start: Pitch,
    pub end: Pitch,
    pub interval: Interval,
}

/// Where an interval of `distance` semitones from `start` ends: downwards, unless that would fall
/// off the bottom of the keyboard.
pub fn end_index(start: usize, distance: usize) -> usize {
    match start.checked_sub(distance) {
        Some(end) => end,
        None {} => start + distance,
    }
}

impl IntervalTask {
    /// The task starting on the `start`-th key of `table`.
    ///
    /// Panics if either end of the interval is not on the keyboard.
    pub fn new(table: &PitchTable, start: usize, interval: Interval) -> Self {
        let end = end_index(start, interval.semitones());
        let lookup = |i| {
            table.pitch_at(i).unwrap_or_else(|| {
                panic!(
                    "interval {} from key {} ends on key {}, but there are only {} keys",
                    interval,
                    start,
                    end,
                    table.len()
                )
            })
        };
        Self {
            start: lookup(start),
            end: lookup(end),
            interval,
        }
    }
}

/// An endless supply of random [IntervalTask]s.
///
/// Start keys are uniformly distributed over the keyboard, intervals uniformly over
/// [Interval::ALL]. To start over, make a new stream.
pub struct IntervalTaskStream<'a, R: Rng> {
    table: &'a PitchTable,
    rng: R,
}

impl<'a, R: Rng> IntervalTaskStream<'a, R> {
    /// The keyboard must have more than twelve keys, otherwise an octave might not fit.
    pub fn new(table: &'a PitchTable, rng: R) -> Self {
        if table.len() <= Interval::Oktave.semitones() {
            panic!(
                "a keyboard with {} keys is too small for interval tasks",
                table.len()
            );
        }
        Self { table, rng }
    }

    pub fn next_task(&mut self) -> IntervalTask {
        let start = self.rng.gen_range(0..self.table.len());
        let interval = *Interval::ALL
            .choose(&mut self.rng)
            .unwrap_or_else(|| panic!("the interval table is empty"));
        IntervalTask::new(self.table, start, interval)
    }
}

impl<R: Rng> Iterator for IntervalTaskStream<'_, R> {
    type Item = IntervalTask;

    fn next(&mut self) -> Option<IntervalTask> {
        Some(self.next_task())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None {})
    }
}
