use crate::problem::{driver::DriverIdx, minutes::Minutes};

/// Minutes committed to each driver of a roster during one run.
///
/// Values only ever grow. A tracker belongs to a single run and is dropped
/// with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverTimeTracker {
    committed: Vec<Minutes>,
}

impl DriverTimeTracker {
    pub(crate) fn new(drivers: usize) -> Self {
        Self {
            committed: vec![Minutes::ZERO; drivers],
        }
    }

    /// Grows the tracker to `drivers` entries, new entries start at zero.
    pub(crate) fn ensure_len(&mut self, drivers: usize) {
        if self.committed.len() < drivers {
            self.committed.resize(drivers, Minutes::ZERO);
        }
    }

    #[inline]
    pub fn committed(&self, driver: DriverIdx) -> Minutes {
        self.committed[driver.get()]
    }

    #[inline]
    pub fn fits(&self, driver: DriverIdx, duration: Minutes, ceiling: Minutes) -> bool {
        self.committed(driver) + duration <= ceiling
    }

    pub fn commit(&mut self, driver: DriverIdx, duration: Minutes) {
        self.committed[driver.get()] += duration;
    }

    pub fn iter_idx(&self) -> impl Iterator<Item = (DriverIdx, Minutes)> + '_ {
        DriverIdx::range(self.committed.len()).zip(self.committed.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}
