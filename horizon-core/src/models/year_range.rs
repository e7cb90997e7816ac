use serde::{Deserialize, Serialize};

/// Inclusive span of calendar years backing a year distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Number of yearly slots.
    pub fn len(&self) -> usize {
        (self.end - self.start + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }

    /// Slot index for `year`, if it lies inside the range.
    pub fn offset_of(&self, year: i32) -> Option<usize> {
        self.contains(year).then(|| (year - self.start) as usize)
    }

    /// Year stored at slot `offset`.
    pub fn year_at(&self, offset: usize) -> i32 {
        self.start + offset as i32
    }

    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }
}
