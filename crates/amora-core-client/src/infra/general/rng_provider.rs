// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use rand::rngs::OsRng;
use rand::RngCore;

/// Source of randomness for feed seeding and shuffling. Abstracted so
/// tests can pin the sequence.
pub trait RngProvider: Send + Sync {
    fn rng(&self) -> Box<dyn RngCore + Send>;
}

#[derive(Default)]
pub struct OsRngProvider {}

impl RngProvider for OsRngProvider {
    fn rng(&self) -> Box<dyn RngCore + Send> {
        Box::new(OsRng)
    }
}

/// Hands out identical step RNGs, so every draw sequence is predictable.
#[cfg(feature = "test")]
pub struct StepRngProvider {
    initial: u64,
    increment: u64,
}

#[cfg(feature = "test")]
impl StepRngProvider {
    pub fn new(initial: u64, increment: u64) -> Self {
        Self { initial, increment }
    }
}

#[cfg(feature = "test")]
impl Default for StepRngProvider {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

#[cfg(feature = "test")]
impl RngProvider for StepRngProvider {
    fn rng(&self) -> Box<dyn RngCore + Send> {
        Box::new(rand::rngs::mock::StepRng::new(self.initial, self.increment))
    }
}
