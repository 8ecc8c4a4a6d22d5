//! Single-zero roulette wheel.

use rand::{Rng, RngCore};
use redline_types::{is_red, WHEEL_POCKETS};

/// Source of red-wager outcomes.
pub trait Wheel {
    /// Spin once. Returns true if the ball lands on red.
    fn spin(&mut self) -> bool;
}

impl<W: Wheel + ?Sized> Wheel for &mut W {
    fn spin(&mut self) -> bool {
        (**self).spin()
    }
}

/// Wheel with 37 equiprobable pockets, driven by an injected generator.
pub struct RouletteWheel<R> {
    rng: R,
}

impl<R: RngCore> RouletteWheel<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a pocket uniformly from 0..=36.
    pub fn draw_pocket(&mut self) -> u8 {
        self.rng.gen_range(0..WHEEL_POCKETS)
    }
}

impl<R: RngCore> Wheel for RouletteWheel<R> {
    fn spin(&mut self) -> bool {
        is_red(self.draw_pocket())
    }
}
