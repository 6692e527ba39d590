use std::fmt::Display;

use crate::predicate::Predicate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Conjunction {
    And,
    Or,
}

impl Conjunction {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Conjunction::And => "AND",
            Conjunction::Or => "OR",
        }
    }
}

impl Display for Conjunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Звено цепочки: первое — голый предикат, остальные — с союзом.
#[derive(Clone, Copy, Debug)]
pub enum ClauseEntry<'a> {
    First(&'a Predicate),
    Chained(Conjunction, &'a Predicate),
}

impl<'a> ClauseEntry<'a> {
    #[inline]
    pub fn predicate(&self) -> &'a Predicate {
        match self {
            ClauseEntry::First(p) | ClauseEntry::Chained(_, p) => p,
        }
    }

    #[inline]
    pub fn conjunction(&self) -> Option<Conjunction> {
        match self {
            ClauseEntry::First(_) => None,
            ClauseEntry::Chained(c, _) => Some(*c),
        }
    }
}
