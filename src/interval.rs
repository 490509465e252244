use std::fmt;

/// The intervals up to an octave, one per semitone distance. Labels use the German
/// abbreviations: k = klein, g = groß, r = rein, u = übermäßig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    KleineSekunde,
    GrosseSekunde,
    KleineTerz,
    GrosseTerz,
    ReineQuarte,
    Tritonus,
    ReineQuinte,
    KleineSexte,
    GrosseSexte,
    KleineSeptime,
    GrosseSeptime,
    Oktave,
}

impl Interval {
    /// ascending by size
    pub const ALL: [Interval; 12] = [
        Interval::KleineSekunde,
        Interval::GrosseSekunde,
        Interval::KleineTerz,
        Interval::GrosseTerz,
        Interval::ReineQuarte,
        Interval::Tritonus,
        Interval::ReineQuinte,
        Interval::KleineSexte,
        Interval::GrosseSexte,
        Interval::KleineSeptime,
        Interval::GrosseSeptime,
        Interval::Oktave,
    ];

    pub fn semitones(&self) -> usize {
        *self as usize + 1
    }

    pub fn from_semitones(semitones: usize) -> Option<Self> {
        semitones
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interval::KleineSekunde => "k2",
            Interval::GrosseSekunde => "g2",
            Interval::KleineTerz => "k3",
            Interval::GrosseTerz => "g3",
            Interval::ReineQuarte => "r4",
            Interval::Tritonus => "u4",
            Interval::ReineQuinte => "r5",
            Interval::KleineSexte => "k6",
            Interval::GrosseSexte => "g6",
            Interval::KleineSeptime => "k7",
            Interval::GrosseSeptime => "g7",
            Interval::Oktave => "r8",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
