//! RNG module - brick queue with a fixed lookahead
//!
//! The queue always holds the brick the next draw will return plus `LOOKAHEAD` bricks
//! behind it. Every draw removes the head and appends exactly one fresh brick, so the
//! preview never runs dry.
//!
//! Two randomizers are available:
//! - **Uniform** (default): each new brick is drawn uniformly from the seven kinds, with
//!   replacement. Streaks of the same brick are possible.
//! - **SevenBag**: bricks are dealt from shuffled bags holding one of each kind.
//!
//! Randomness comes from a small seeded LCG, so the same seed always deals the same
//! sequence.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::shapes::{brick, Brick};
use crate::types::{BrickKind, LOOKAHEAD};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// How fresh bricks are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RandomizerKind {
    /// Uniform over the seven kinds, with replacement
    #[default]
    Uniform,
    /// One of each kind per shuffled bag of seven
    SevenBag,
}

#[derive(Debug, Clone)]
struct Randomizer {
    kind: RandomizerKind,
    rng: SimpleRng,
    bag: [BrickKind; 7],
    bag_index: usize,
}

impl Randomizer {
    fn new(kind: RandomizerKind, seed: u32) -> Self {
        Self {
            kind,
            rng: SimpleRng::new(seed),
            bag: BrickKind::ALL,
            // Empty bag: the first bag draw shuffles a fresh one.
            bag_index: BrickKind::ALL.len(),
        }
    }

    fn draw(&mut self) -> BrickKind {
        match self.kind {
            RandomizerKind::Uniform => {
                let idx = self.rng.next_range(BrickKind::ALL.len() as u32) as usize;
                BrickKind::ALL[idx]
            }
            RandomizerKind::SevenBag => {
                if self.bag_index >= self.bag.len() {
                    self.bag = BrickKind::ALL;
                    self.rng.shuffle(&mut self.bag);
                    self.bag_index = 0;
                }
                let kind = self.bag[self.bag_index];
                self.bag_index += 1;
                kind
            }
        }
    }
}

/// Unbounded brick sequence with a visible head and a `LOOKAHEAD` window
#[derive(Debug, Clone)]
pub struct BrickQueue {
    queue: VecDeque<&'static Brick>,
    randomizer: Randomizer,
}

impl BrickQueue {
    /// Uniform queue pre-filled with `LOOKAHEAD + 1` bricks
    pub fn new(seed: u32) -> Self {
        Self::with_randomizer(RandomizerKind::Uniform, seed)
    }

    pub fn with_randomizer(kind: RandomizerKind, seed: u32) -> Self {
        let mut randomizer = Randomizer::new(kind, seed);
        let queue = (0..=LOOKAHEAD).map(|_| brick(randomizer.draw())).collect();
        Self { queue, randomizer }
    }

    /// Queue that deals `preset` first, then continues with uniform draws
    ///
    /// Used for puzzle setups and reproducible tests.
    pub fn with_preset(preset: &[BrickKind], seed: u32) -> Self {
        let mut randomizer = Randomizer::new(RandomizerKind::Uniform, seed);
        let mut queue: VecDeque<&'static Brick> = preset.iter().map(|&kind| brick(kind)).collect();
        while queue.len() < LOOKAHEAD + 1 {
            queue.push_back(brick(randomizer.draw()));
        }
        Self { queue, randomizer }
    }

    /// Remove and return the head, appending one fresh brick to the tail
    pub fn next(&mut self) -> &'static Brick {
        let fresh = brick(self.randomizer.draw());
        self.queue.push_back(fresh);
        // Never empty after the push above.
        self.queue.pop_front().unwrap_or(fresh)
    }

    /// The brick the next call to [`BrickQueue::next`] will return
    pub fn peek_next(&self) -> &'static Brick {
        self.queue[0]
    }

    /// Up to `count` upcoming bricks, starting with [`BrickQueue::peek_next`]
    pub fn peek_queue(&self, count: usize) -> Vec<&'static Brick> {
        self.queue.iter().take(count).copied().collect()
    }

    /// The `LOOKAHEAD` preview window
    pub fn lookahead(&self) -> ArrayVec<&'static Brick, LOOKAHEAD> {
        self.queue.iter().take(LOOKAHEAD).copied().collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for BrickQueue {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_range_stays_in_range() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_queue_prefilled() {
        let queue = BrickQueue::new(1);
        assert_eq!(queue.len(), LOOKAHEAD + 1);
        assert_eq!(queue.lookahead().len(), LOOKAHEAD);
    }

    #[test]
    fn test_next_returns_peeked_brick() {
        let mut queue = BrickQueue::new(7);
        for _ in 0..50 {
            let peeked = queue.peek_next();
            let drawn = queue.next();
            assert!(std::ptr::eq(peeked, drawn));
            assert_eq!(queue.len(), LOOKAHEAD + 1);
        }
    }

    #[test]
    fn test_preview_shifts_by_one_per_draw() {
        let mut queue = BrickQueue::new(3);
        let before: Vec<BrickKind> = queue.peek_queue(5).iter().map(|b| b.kind()).collect();
        queue.next();
        let after: Vec<BrickKind> = queue.peek_queue(5).iter().map(|b| b.kind()).collect();
        assert_eq!(&before[1..], &after[..4]);
    }

    #[test]
    fn test_peek_queue_clamps_to_length() {
        let queue = BrickQueue::new(3);
        assert_eq!(queue.peek_queue(2).len(), 2);
        assert_eq!(queue.peek_queue(100).len(), LOOKAHEAD + 1);
        assert!(queue.peek_queue(0).is_empty());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = BrickQueue::new(42);
        let mut b = BrickQueue::new(42);
        for _ in 0..100 {
            assert_eq!(a.next().kind(), b.next().kind());
        }
    }

    #[test]
    fn test_uniform_draws_every_kind() {
        let mut queue = BrickQueue::new(2024);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[queue.next().id() as usize - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_preset_is_dealt_first() {
        let preset = [BrickKind::O, BrickKind::I, BrickKind::T];
        let mut queue = BrickQueue::with_preset(&preset, 9);
        assert_eq!(queue.len(), LOOKAHEAD + 1);
        for kind in preset {
            assert_eq!(queue.next().kind(), kind);
        }
    }

    #[test]
    fn test_long_preset_keeps_every_entry() {
        let preset = [BrickKind::Z; 8];
        let mut queue = BrickQueue::with_preset(&preset, 9);
        assert_eq!(queue.len(), 8);
        for _ in 0..8 {
            assert_eq!(queue.next().kind(), BrickKind::Z);
        }
        assert_eq!(queue.len(), 8);
    }

    #[test]
    fn test_seven_bag_deals_each_kind_once_per_bag() {
        let mut queue = BrickQueue::with_randomizer(RandomizerKind::SevenBag, 5);
        for _ in 0..3 {
            let mut drawn: Vec<BrickKind> = (0..7).map(|_| queue.next().kind()).collect();
            drawn.sort_by_key(|k| k.id());
            assert_eq!(drawn, BrickKind::ALL.to_vec());
        }
    }
}
