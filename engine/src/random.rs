//! Randomness seam for the controller.
//!
//! Every random decision the game makes (tumbling faces, the final roll, which
//! message to show) goes through [`Randomness`], so a scripted source can replay
//! a game exactly.

use rand::rngs::ThreadRng;
use rand::{Rng, RngExt};

use beerdice_types::Face;

pub trait Randomness {
    /// A uniformly random die face.
    fn face(&mut self) -> Face;

    /// A uniformly random index in `0..len`. Returns 0 when `len` is 0.
    fn pick(&mut self, len: usize) -> usize;
}

/// [`Randomness`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngRandomness<R> {
    rng: R,
}

impl<R: Rng> RngRandomness<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngRandomness<ThreadRng> {
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> Randomness for RngRandomness<R> {
    fn face(&mut self) -> Face {
        Face::ALL[self.rng.random_range(0..Face::ALL.len())]
    }

    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}
