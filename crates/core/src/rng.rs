//! RNG module - bag randomizer
//!
//! Deals shapes so that none repeats until every shape of the cycle has been
//! dealt once. A shape is drawn uniformly at random; if it was already dealt in
//! the current cycle it is rejected and redrawn.
//!
//! Also provides a simple LCG so a seed reproduces a whole game.

use crate::types::Shape;

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Bag randomizer over a configured shape set
#[derive(Debug, Clone)]
pub struct Bag {
    /// Shapes taking part in each cycle, in bag-index order
    shapes: Vec<Shape>,
    /// Which shapes were dealt in the current cycle, by `Shape::index`
    dealt: [bool; 7],
    rng: SimpleRng,
}

impl Bag {
    /// Bag dealing all seven shapes
    pub fn new(seed: u32) -> Self {
        Self::with_shapes(&Shape::ALL, seed)
    }

    /// Bag dealing only `shapes` (duplicates are ignored)
    ///
    /// Panics if `shapes` is empty; configuration validation rejects that.
    pub fn with_shapes(shapes: &[Shape], seed: u32) -> Self {
        assert!(!shapes.is_empty(), "bag needs at least one shape");
        let enabled = Shape::ALL
            .iter()
            .copied()
            .filter(|s| shapes.contains(s))
            .collect();
        Self {
            shapes: enabled,
            dealt: [false; 7],
            rng: SimpleRng::new(seed),
        }
    }

    /// Whether every shape of the cycle has been dealt
    pub fn cycle_complete(&self) -> bool {
        self.shapes.iter().all(|s| self.dealt[s.index()])
    }

    /// Deal the next shape
    pub fn next(&mut self) -> Shape {
        if self.cycle_complete() {
            self.dealt = [false; 7];
        }

        loop {
            let pick = self.rng.next_range(self.shapes.len() as u32) as usize;
            let shape = self.shapes[pick];
            if !self.dealt[shape.index()] {
                self.dealt[shape.index()] = true;
                return shape;
            }
        }
    }

    /// Shapes not dealt yet in the current cycle
    pub fn remaining(&self) -> impl Iterator<Item = Shape> + '_ {
        self.shapes.iter().copied().filter(|s| !self.dealt[s.index()])
    }

    pub fn dealt(&self) -> &[bool; 7] {
        &self.dealt
    }
}
