//! Deterministic random number generation for synthetic seed data.
//!
//! RULE: seed generation never touches a platform RNG. Every dataset is
//! drawn from a SeedRng derived from one master seed, so the same seed
//! always yields the same rows.
//!
//! Each dataset gets its own stream, seeded from
//! (master_seed XOR slot_index * golden-ratio constant). Adding a dataset
//! never shifts the rows of an existing one.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for one dataset.
pub struct SeedRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl SeedRng {
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Uniform float in [lo, hi).
    pub fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Uniform float in [lo, hi) rounded to `step` (e.g. 0.5 for raise %).
    pub fn stepped(&mut self, lo: f64, hi: f64, step: f64) -> f64 {
        (self.range_f64(lo, hi) / step).round() * step
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Pick one element. `items` must be non-empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let index = self.next_u64_below(items.len() as u64) as usize;
        &items[index]
    }
}

/// All dataset RNGs for one generation run, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_slot(&self, slot: SeedSlot) -> SeedRng {
        SeedRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable dataset slot assignments.
/// NEVER reorder or remove entries — only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum SeedSlot {
    Employees = 0,
    Customers = 1,
}

impl SeedSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Employees => "employees",
            Self::Customers => "customers",
        }
    }
}
