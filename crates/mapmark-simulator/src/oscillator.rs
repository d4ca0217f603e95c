//! Back-and-forth traversal of a fixed path.

use mapmark_core::{SimulationError, Vec3};

/// Walks a path forward, then backward, forever.
///
/// From a fresh state the first call to [`next_point`](Self::next_point)
/// returns the first point. On reaching either end the direction flips, so
/// a four point path yields indices `0, 1, 2, 3, 2, 1, 0, 1, ...`. A single
/// point path keeps returning that point.
#[derive(Debug, Clone, PartialEq)]
pub struct IconOscillator {
    path: Vec<Vec3>,
    cursor: Option<usize>,
    reversing: bool,
}

impl IconOscillator {
    pub fn new(path: Vec<Vec3>) -> Result<Self, SimulationError> {
        if path.is_empty() {
            return Err(SimulationError::EmptyPath);
        }
        Ok(Self {
            path,
            cursor: None,
            reversing: false,
        })
    }

    /// Advances the cursor and returns the point under it.
    pub fn next_point(&mut self) -> Vec3 {
        let last = self.path.len() - 1;
        let next = match self.cursor {
            None => 0,
            Some(0) if self.reversing => {
                self.reversing = false;
                1.min(last)
            }
            Some(i) if self.reversing => i - 1,
            Some(i) if i == last => {
                self.reversing = true;
                i.saturating_sub(1)
            }
            Some(i) => i + 1,
        };
        self.cursor = Some(next);
        self.path[next]
    }

    /// Index of the last returned point, `None` before the first call.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_reversing(&self) -> bool {
        self.reversing
    }

    pub fn path(&self) -> &[Vec3] {
        &self.path
    }
}
