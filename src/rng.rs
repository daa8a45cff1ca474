//! # Random Sources
//!
//! Thread-local random number generation for the engine and its operators.
//!
//! Every thread that touches randomness (the driver thread and each worker in
//! the offspring pool) lazily constructs its own generator on first use,
//! seeded from the operating system's entropy source. Generators are never
//! shared across threads, so no locking happens on the hot path.
//!
//! Two draw shapes are provided: [`ThreadLocalRng::uniform_int`] samples the
//! closed range `lo..=hi`, while [`ThreadLocalRng::uniform_real`] samples the
//! half-open range `lo..hi`.

use std::cell::RefCell;

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

thread_local! {
    static THREAD_RNG: RefCell<StdRng> = RefCell::new(StdRng::from_entropy());
}

/// Handle to the calling thread's lazily-initialized random number generator.
pub struct ThreadLocalRng;

impl ThreadLocalRng {
    /// Samples a value from the given range using the current thread's generator.
    pub fn gen_range<T, R>(range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        THREAD_RNG.with(|rng| rng.borrow_mut().gen_range(range))
    }

    /// Draws a uniform value from the closed range `lower..=upper`.
    pub fn uniform_int<T>(lower: T, upper: T) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        if upper < lower {
            return lower;
        }
        Self::gen_range(lower..=upper)
    }

    /// Draws a uniform value from the half-open range `lower..upper`.
    ///
    /// Returns `lower` when the range is empty.
    pub fn uniform_real<T>(lower: T, upper: T) -> T
    where
        T: SampleUniform + PartialOrd + Copy,
    {
        if !(lower < upper) {
            return lower;
        }
        Self::gen_range(lower..upper)
    }

    /// Replaces the calling thread's generator with one derived from `seed`.
    ///
    /// Runs are reproducible only when the solver also runs single-threaded,
    /// since each worker thread owns an independent generator.
    pub fn reseed(seed: u64) {
        THREAD_RNG.with(|rng| *rng.borrow_mut() = StdRng::seed_from_u64(seed));
    }
}

/// Element types that know which uniform draw shape applies to them.
///
/// Integers sample the closed range `lower..=upper`; floating-point values
/// sample the half-open range `lower..upper`.
pub trait UniformDraw: Copy + PartialOrd {
    /// Draws a uniform value between the given bounds.
    fn draw_between(lower: Self, upper: Self) -> Self;
}

macro_rules! impl_uniform_draw_integral {
    ($($t:ty),*) => {
        $(impl UniformDraw for $t {
            fn draw_between(lower: Self, upper: Self) -> Self {
                ThreadLocalRng::uniform_int(lower, upper)
            }
        })*
    };
}

macro_rules! impl_uniform_draw_real {
    ($($t:ty),*) => {
        $(impl UniformDraw for $t {
            fn draw_between(lower: Self, upper: Self) -> Self {
                ThreadLocalRng::uniform_real(lower, upper)
            }
        })*
    };
}

impl_uniform_draw_integral!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_uniform_draw_real!(f32, f64);
