use std::collections::VecDeque;

use bevy::prelude::*;

use crate::motion::TrailTint;

/// A single recorded position in the trail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub tint: TrailTint,
    pub position: Vec2,
}

/// Bounded history of recent player positions, oldest first.
///
/// Entries are only appended when the position differs from the
/// newest entry. Once the trail grows past its maximum length the
/// oldest entry is evicted.
#[derive(Resource, Clone, Debug)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
    max_len: usize,
    /// Bumped on every change so renderers can skip unchanged frames.
    generation: u64,
}

impl Default for Trail {
    fn default() -> Self {
        Self::with_capacity(50)
    }
}

impl Trail {
    pub fn with_capacity(max_len: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(max_len + 1),
            max_len,
            generation: 0,
        }
    }

    /// Append `position` if the player moved since the last entry.
    /// Returns whether the trail changed.
    pub fn record(&mut self, position: Vec2, tint: TrailTint) -> bool {
        if self.max_len == 0 {
            return false;
        }
        if self.last().is_some_and(|last| last.position == position) {
            return false;
        }

        self.points.push_back(TrailPoint { tint, position });
        self.evict();
        self.generation += 1;
        true
    }

    /// Change the maximum length, evicting the oldest entries when shrinking.
    pub fn set_max_len(&mut self, max_len: usize) {
        if max_len == self.max_len {
            return;
        }
        self.max_len = max_len;
        if self.evict() {
            self.generation += 1;
        }
    }

    pub fn clear(&mut self) {
        if !self.points.is_empty() {
            self.points.clear();
            self.generation += 1;
        }
    }

    fn evict(&mut self) -> bool {
        let mut evicted = false;
        while self.points.len() > self.max_len {
            self.points.pop_front();
            evicted = true;
        }
        evicted
    }

    /// Opacity for the entry at `index`: newest is fully opaque,
    /// older entries fade linearly toward transparent.
    pub fn fade(&self, index: usize) -> f32 {
        let len = self.points.len();
        if len == 0 || index >= len {
            return 0.0;
        }
        (index + 1) as f32 / len as f32
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn last(&self) -> Option<&TrailPoint> {
        self.points.back()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
