//! Queue ordering: the author order and a shuffled permutation of it.
//!
//! Both orders hold library indices. Exactly one of them is active and
//! positions handed out by the controller always refer to the active one.

use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayQueue {
    original: Vec<usize>,
    shuffled: Vec<usize>,
    shuffled_active: bool,
}

impl PlayQueue {
    /// Queue over `len` tracks in author order.
    pub fn new(len: usize) -> Self {
        let original: Vec<usize> = (0..len).collect();
        Self {
            shuffled: original.clone(),
            original,
            shuffled_active: false,
        }
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// The order currently used for navigation.
    pub fn active(&self) -> &[usize] {
        if self.shuffled_active {
            &self.shuffled
        } else {
            &self.original
        }
    }

    /// Library index of the track at `position` in the active order.
    pub fn track_at(&self, position: usize) -> Option<usize> {
        self.active().get(position).copied()
    }

    /// Position of library index `track` in the active order.
    pub fn position_of(&self, track: usize) -> Option<usize> {
        self.active().iter().position(|&t| t == track)
    }

    /// Replace the shuffled order with a fresh permutation of the original.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.shuffled = self.original.clone();
        self.shuffled.shuffle(rng);
    }

    pub fn set_shuffled(&mut self, on: bool) {
        self.shuffled_active = on;
    }
}
