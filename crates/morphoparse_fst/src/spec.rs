//! The per-object-type knobs the generic driver needs: what the compiled
//! regex is named, which verification substring signals success, and
//! whether word boundaries are added/stripped around `apply` batches.

/// Direction of a `flookup` application: `up` reads surface forms and
/// produces underlying analyses; `down` does the reverse (`flookup -i`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// The `flookup` flag for this direction: empty for `up`, `-i` for `down`.
    pub const fn flookup_flag(self) -> Option<&'static str> {
        match self {
            Direction::Up => None,
            Direction::Down => Some("-i"),
        }
    }
}

/// The substring `flookup` prints in place of an output for an input with
/// no analysis.
pub const FLOOKUP_NO_OUTPUT: &str = "+?";

/// Default word boundary symbol, used unless a [`crate::FstConfig`] overrides it.
pub const DEFAULT_WORD_BOUNDARY_SYMBOL: &str = "#";

/// Describes one FST object type's compile/verify behavior.
#[derive(Debug, Clone)]
pub struct FstSpec {
    /// The foma `regex <name>;` identifier, e.g. `"phonology"`.
    pub object_type: String,
    /// Whether `apply` adds/strips word boundary symbols by default.
    pub boundaries: bool,
    /// The substring expected in the compiler's log on success.
    pub verification_substring: String,
}

impl FstSpec {
    /// A `regex`-script verification substring: `"defined <object_type>: "`.
    pub fn regex_verification(object_type: impl Into<String>) -> String {
        format!("defined {}: ", object_type.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flookup_flags_match_direction() {
        assert_eq!(Direction::Up.flookup_flag(), None);
        assert_eq!(Direction::Down.flookup_flag(), Some("-i"));
    }
}
