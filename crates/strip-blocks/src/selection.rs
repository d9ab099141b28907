//! Choosing which blocks to remove.
//!
//! A [`Selection`] records what the caller asked for; [`Selection::resolve`]
//! validates it and produces a [`SelectionSet`] of 1-based ordinals. Sets are
//! kept symbolic (an explicit list or an interval) and only intersected with
//! the real block count at removal time, so `--range 1 1000000000` is as
//! cheap as `--first 1`.

use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// The three mutually exclusive ways of naming blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Exactly these ordinals. Order and duplicates do not matter.
    Indices(Vec<i64>),
    /// Ordinals `1..=n`. A count of zero or less selects nothing.
    First(i64),
    /// Ordinals `start..=end`.
    Range { start: i64, end: i64 },
}

impl Selection {
    /// Validates the selection and turns it into a set of ordinals.
    ///
    /// # Errors
    /// Returns `Error::InvalidRange` when a range has `start > end`.
    pub fn resolve(&self) -> Result<SelectionSet> {
        match self {
            Self::Indices(indices) => Ok(SelectionSet::Explicit(indices.iter().copied().collect())),
            Self::First(count) => Ok(SelectionSet::Interval { start: 1, end: *count }),
            Self::Range { start, end } => {
                if start > end {
                    return Err(Error::InvalidRange {
                        start: *start,
                        end: *end,
                    });
                }
                Ok(SelectionSet::Interval {
                    start: *start,
                    end: *end,
                })
            }
        }
    }
}

/// A resolved set of 1-based ordinals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionSet {
    Explicit(BTreeSet<i64>),
    /// Inclusive bounds; empty when `end < start`.
    Interval { start: i64, end: i64 },
}

impl SelectionSet {
    /// The set that selects nothing.
    pub fn empty() -> Self {
        Self::Explicit(BTreeSet::new())
    }

    pub fn contains(&self, ordinal: i64) -> bool {
        match self {
            Self::Explicit(set) => set.contains(&ordinal),
            Self::Interval { start, end } => (*start..=*end).contains(&ordinal),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Explicit(set) => set.is_empty(),
            Self::Interval { start, end } => end < start,
        }
    }

    /// Ordinals of this set that name one of `count` blocks, ascending.
    pub fn within(&self, count: usize) -> Vec<usize> {
        if count == 0 {
            return Vec::new();
        }
        let upper = i64::try_from(count).unwrap_or(i64::MAX);

        match self {
            Self::Explicit(set) => set
                .range(1..=upper)
                .filter_map(|&ordinal| usize::try_from(ordinal).ok())
                .collect(),
            Self::Interval { start, end } => {
                let lo = (*start).max(1);
                let hi = (*end).min(upper);
                (lo..=hi)
                    .filter_map(|ordinal| usize::try_from(ordinal).ok())
                    .collect()
            }
        }
    }

    /// Explicitly requested ordinals that do not name one of `count` blocks.
    ///
    /// Intervals report nothing here: they are routinely wider than the
    /// document and that is not worth flagging.
    pub fn ignored(&self, count: usize) -> Vec<i64> {
        let upper = i64::try_from(count).unwrap_or(i64::MAX);

        match self {
            Self::Explicit(set) => set
                .iter()
                .copied()
                .filter(|&ordinal| ordinal < 1 || ordinal > upper)
                .collect(),
            Self::Interval { .. } => Vec::new(),
        }
    }
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<i64> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::Explicit(iter.into_iter().collect())
    }
}
