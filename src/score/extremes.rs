use ordered_float::NotNan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rank {
    Highest,
    Lowest,
}

impl Rank {
    /// Strict comparison: an equal candidate never displaces the holder.
    fn beats(self, candidate: NotNan<f64>, holder: NotNan<f64>) -> bool {
        match self {
            Self::Highest => candidate > holder,
            Self::Lowest => candidate < holder,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScoredFrame {
    pub(crate) index: usize,
    pub(crate) score: NotNan<f64>,
}

/// Running selection of the `capacity` most extreme frames seen so far.
///
/// Slots stay ordered from most to least extreme. Ties keep the earliest frame.
#[derive(Debug)]
pub(crate) struct Extremes {
    rank: Rank,
    capacity: usize,
    slots: Vec<ScoredFrame>,
}

impl Extremes {
    pub(crate) fn new(rank: Rank, capacity: usize) -> Self {
        Self {
            rank,
            capacity,
            slots: Vec::with_capacity(capacity + 1),
        }
    }

    pub(crate) fn push(&mut self, frame: ScoredFrame) {
        let rank = self.rank;
        let position = self
            .slots
            .iter()
            .position(|held| rank.beats(frame.score, held.score))
            .unwrap_or_else(|| self.slots.len());
        if position < self.capacity {
            self.slots.insert(position, frame);
            self.slots.truncate(self.capacity);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn into_vec(self) -> Vec<ScoredFrame> {
        self.slots
    }
}
