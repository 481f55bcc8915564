use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Cells survive on 3 or 4 neighbors, and need exactly three to be born.
pub const WEAK_CELLS: RuleSet = RuleSet::new(0b1000, 0b1_1000);

/// Rules of Conway's Game of Life.
pub const TOUGH_CELLS: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
/// where bit `i` of either half is set when a cell with `i` live neighbors is born (resp.
/// survives).
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
///
/// b0s0:                 0000_0000_0000_0000_0000_0000_0000_0000
/// b012345678s012345678: 0000_0001_1111_1111_0000_0001_1111_1111
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        TOUGH_CELLS
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored.
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    /// Build a `RuleSet` from lists of neighbor counts. Counts above 8 can never occur and are
    /// ignored.
    pub fn from_counts(become_alive: &[u8], stay_alive: &[u8]) -> Self {
        let mask = |counts: &[u8]| {
            counts
                .iter()
                .filter(|&&n| n <= 8)
                .fold(0u16, |m, &n| m | 1 << n)
        };

        Self::new(mask(become_alive), mask(stay_alive))
    }

    pub const fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub const fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// Whether a live cell with `n` live neighbors stays alive.
    pub const fn stays_alive(&self, n: u8) -> bool {
        n <= 8 && self.survivals() & (1 << n) != 0
    }

    /// Whether a dead cell with `n` live neighbors becomes alive.
    pub const fn becomes_alive(&self, n: u8) -> bool {
        n <= 8 && self.births() & (1 << n) != 0
    }
}

fn write_counts(f: &mut fmt::Formatter<'_>, mask: u16) -> fmt::Result {
    for n in 0..=8 {
        if mask & (1 << n) != 0 {
            write!(f, "{n}")?;
        }
    }

    Ok(())
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        write_counts(f, self.births())?;
        write!(f, "/S")?;
        write_counts(f, self.survivals())
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleSet({self})")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("Invalid rule character '{got}'")]
    InvalidChar { got: char },

    #[error("Neighbor count {got} is out of range, expected 0-8")]
    OutOfRange { got: u32 },

    #[error("Neighbor count '{got}' appears before any 'b' or 's'")]
    MissingSection { got: char },

    #[error("Rule names no neighbor counts")]
    NoCounts,
}

/// Parses rulestrings of the form `b3/s23`. Sections may come in either order, in any case, and
/// the separating `/` is optional.
impl FromStr for RuleSet {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum State {
            Start,
            Birth,
            Survival,
        }

        let mut state = State::Start;
        let (mut b, mut s_mask) = (0u16, 0u16);
        let mut counts = 0;

        for c in s.trim().chars() {
            match c {
                'b' | 'B' => {
                    state = State::Birth;
                }
                's' | 'S' => {
                    state = State::Survival;
                }
                '/' => {}
                n => {
                    let n = n.to_digit(10).ok_or(RuleError::InvalidChar { got: c })?;

                    if n > 8 {
                        return Err(RuleError::OutOfRange { got: n });
                    }

                    match state {
                        State::Start => return Err(RuleError::MissingSection { got: c }),
                        State::Birth => b |= 1 << n,
                        State::Survival => s_mask |= 1 << n,
                    }

                    counts += 1;
                }
            }
        }

        if counts == 0 {
            return Err(RuleError::NoCounts);
        }

        Ok(RuleSet::new(b, s_mask))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("Invalid choice \"{got}\", expected 1 (weak cells) or 2 (tough cells)")]
    InvalidChoice { got: String },
}

/// The named rule sets a user can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulePreset {
    /// Survive on 3 or 4 neighbors, born on 3
    WeakCells,
    /// Survive on 2 or 3 neighbors, born on 3
    ToughCells,
}

impl RulePreset {
    pub const fn rule_set(self) -> RuleSet {
        match self {
            RulePreset::WeakCells => WEAK_CELLS,
            RulePreset::ToughCells => TOUGH_CELLS,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RulePreset::WeakCells => "Weak cells",
            RulePreset::ToughCells => "Tough cells",
        }
    }
}

impl FromStr for RulePreset {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "weak" | "weak cells" => Ok(RulePreset::WeakCells),
            "2" | "tough" | "tough cells" => Ok(RulePreset::ToughCells),
            _ => Err(ChoiceError::InvalidChoice { got: s.to_string() }),
        }
    }
}

/// Resolve a rule selection token: a preset choice first, then a rulestring like `b36/s23`.
///
/// Anything that is neither is an invalid choice.
pub fn choose_rules(token: &str) -> Result<RuleSet, ChoiceError> {
    if token.trim().is_empty() {
        return Err(ChoiceError::InvalidChoice {
            got: token.to_string(),
        });
    }

    if let Ok(preset) = token.parse::<RulePreset>() {
        return Ok(preset.rule_set());
    }

    token
        .parse::<RuleSet>()
        .map_err(|_| ChoiceError::InvalidChoice {
            got: token.to_string(),
        })
}
