use std::{error::Error, fmt, str::FromStr, sync::LazyLock};

use num_integer::Integer;

/// The twelve semitone names of an octave, in ascending order, starting at C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Semitone {
    C,
    Cis,
    D,
    Dis,
    E,
    F,
    Fis,
    G,
    Gis,
    A,
    Ais,
    H,
}

impl Semitone {
    pub const ALL: [Semitone; 12] = [
        Semitone::C,
        Semitone::Cis,
        Semitone::D,
        Semitone::Dis,
        Semitone::E,
        Semitone::F,
        Semitone::Fis,
        Semitone::G,
        Semitone::Gis,
        Semitone::A,
        Semitone::Ais,
        Semitone::H,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Semitone::C => "c",
            Semitone::Cis => "cis",
            Semitone::D => "d",
            Semitone::Dis => "dis",
            Semitone::E => "e",
            Semitone::F => "f",
            Semitone::Fis => "fis",
            Semitone::G => "g",
            Semitone::Gis => "gis",
            Semitone::A => "a",
            Semitone::Ais => "ais",
            Semitone::H => "h",
        }
    }

    /// Position within the octave, 0 for C up to 11 for H.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Raised semitones are the ones drawn as black keys. Their names are exactly the ones
    /// ending in "is".
    pub fn is_raised(&self) -> bool {
        self.name().ends_with("is")
    }
}

/// Octaves in the German (Helmholtz) naming. The lowest one is only partially on the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Octave {
    Subkontra,
    Kontra,
    Grosses,
    Kleines,
    Eingestrichenes,
    Zweigestrichenes,
    Dreigestrichenes,
    Viergestrichenes,
    Fuenfgestrichenes,
}

impl Octave {
    pub const ALL: [Octave; 9] = [
        Octave::Subkontra,
        Octave::Kontra,
        Octave::Grosses,
        Octave::Kleines,
        Octave::Eingestrichenes,
        Octave::Zweigestrichenes,
        Octave::Dreigestrichenes,
        Octave::Viergestrichenes,
        Octave::Fuenfgestrichenes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Octave::Subkontra => "subkontra",
            Octave::Kontra => "kontra",
            Octave::Grosses => "grosses",
            Octave::Kleines => "kleines",
            Octave::Eingestrichenes => "eingestrichenes",
            Octave::Zweigestrichenes => "zweigestrichenes",
            Octave::Dreigestrichenes => "dreigestrichenes",
            Octave::Viergestrichenes => "viergestrichenes",
            Octave::Fuenfgestrichenes => "fuenfgestrichenes",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// A pitch is an octave together with a semitone name. The derived ordering compares the octave
/// first, which is the order of keys on the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pitch {
    pub octave: Octave,
    pub semitone: Semitone,
}

impl Pitch {
    pub const fn new(octave: Octave, semitone: Semitone) -> Self {
        Self { octave, semitone }
    }

    pub fn is_raised(&self) -> bool {
        self.semitone.is_raised()
    }

    /// The number of semitones above subkontra C. This is not the index on the keyboard, see
    /// [PitchTable::index_of] for that.
    fn absolute_semitones(&self) -> usize {
        12 * self.octave.index() + self.semitone.index()
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.octave.name(), self.semitone.name())
    }
}

#[derive(Debug, PartialEq)]
pub enum PitchNameErr {
    MissingSeparator(String),
    UnknownOctave(String),
    UnknownSemitone(String),
}

impl fmt::Display for PitchNameErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PitchNameErr::MissingSeparator(s) => write!(
                f,
                "pitch name '{}' is not of the form '<octave>_<semitone>'",
                s
            ),
            PitchNameErr::UnknownOctave(s) => write!(f, "unknown octave name '{}'", s),
            PitchNameErr::UnknownSemitone(s) => write!(f, "unknown semitone name '{}'", s),
        }
    }
}

impl Error for PitchNameErr {}

impl FromStr for Pitch {
    type Err = PitchNameErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (octave, semitone) = s
            .rsplit_once('_')
            .ok_or_else(|| PitchNameErr::MissingSeparator(s.into()))?;
        let octave = Octave::ALL
            .into_iter()
            .find(|o| o.name() == octave)
            .ok_or_else(|| PitchNameErr::UnknownOctave(octave.into()))?;
        let semitone = Semitone::ALL
            .into_iter()
            .find(|n| n.name() == semitone)
            .ok_or_else(|| PitchNameErr::UnknownSemitone(semitone.into()))?;
        Ok(Pitch::new(octave, semitone))
    }
}

/// The ordered list of all keys on the keyboard.
///
/// The table is built once (see [PitchTable::standard]) and handed to the components that need
/// it, i.e. [crate::layout::KeyboardLayout] and [crate::task::IntervalTaskStream].
#[derive(Debug)]
pub struct PitchTable {
    pitches: Vec<Pitch>,
    /// absolute semitone number of the lowest pitch
    lowest: usize,
    natural_count: usize,
}

static STANDARD: LazyLock<PitchTable> = LazyLock::new(|| {
    PitchTable::new(
        Pitch::new(Octave::Subkontra, Semitone::A),
        Pitch::new(Octave::Fuenfgestrichenes, Semitone::C),
    )
});

impl PitchTable {
    /// All chromatic pitches from `lowest` to `highest`, both included.
    fn new(lowest: Pitch, highest: Pitch) -> Self {
        let lowest = lowest.absolute_semitones();
        let pitches: Vec<Pitch> = (lowest..=highest.absolute_semitones())
            .map(|n| {
                let (octave, semitone) = n.div_rem(&12);
                Pitch::new(Octave::ALL[octave], Semitone::ALL[semitone])
            })
            .collect();
        let natural_count = pitches.iter().filter(|p| !p.is_raised()).count();
        Self {
            pitches,
            lowest,
            natural_count,
        }
    }

    /// The 88 keys of a standard piano, subkontra A to fünfgestrichenes C.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    pub fn all_pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    pub fn natural_count(&self) -> usize {
        self.natural_count
    }

    pub fn raised_count(&self) -> usize {
        self.pitches.len() - self.natural_count
    }

    pub fn is_raised(&self, pitch: &Pitch) -> bool {
        pitch.is_raised()
    }

    pub fn contains(&self, pitch: &Pitch) -> bool {
        self.try_index_of(pitch).is_some()
    }

    fn try_index_of(&self, pitch: &Pitch) -> Option<usize> {
        pitch
            .absolute_semitones()
            .checked_sub(self.lowest)
            .filter(|&i| i < self.pitches.len())
    }

    /// Position of `pitch` on the keyboard, counting all keys from the lowest.
    ///
    /// Panics if `pitch` is not on the keyboard.
    pub fn index_of(&self, pitch: &Pitch) -> usize {
        self.try_index_of(pitch)
            .unwrap_or_else(|| panic!("pitch {} is not on the keyboard", pitch))
    }

    pub fn pitch_at(&self, index: usize) -> Option<Pitch> {
        self.pitches.get(index).copied()
    }

    /// Looks up a pitch by its name, like `eingestrichenes_c`.
    ///
    /// Panics on malformed names and on pitches that are not on the keyboard. Use
    /// `str::parse::<Pitch>` if the name comes from outside.
    pub fn by_name(&self, name: &str) -> Pitch {
        let pitch = name
            .parse::<Pitch>()
            .unwrap_or_else(|e| panic!("invalid pitch lookup: {}", e));
        if !self.contains(&pitch) {
            panic!("pitch {} is not on the keyboard", pitch);
        }
        pitch
    }

    pub fn naturals(&self) -> impl Iterator<Item = &Pitch> + '_ {
        self.pitches.iter().filter(|p| !p.is_raised())
    }

    pub fn raised(&self) -> impl Iterator<Item = &Pitch> + '_ {
        self.pitches.iter().filter(|p| p.is_raised())
    }
}
