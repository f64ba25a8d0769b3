use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Picks the swap partner for each position during a shuffle.
pub trait SwapSource {
    /// Returns the partner for position `i`, an index in `0..len`. `len` is never zero.
    fn swap_partner(&mut self, i: usize, len: usize) -> usize;
}

/// Uniform swap partners drawn from a `rand` generator
#[derive(Debug, Clone)]
pub struct RandomSwaps<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSwaps<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSwaps<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RandomSwaps<StdRng> {
    /// Deterministic source, same seed gives the same shuffles
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> SwapSource for RandomSwaps<R> {
    fn swap_partner(&mut self, _i: usize, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed sequence of swap partners, cycling when exhausted.
///
/// Each value is reduced modulo the requested length, so any sequence is valid
/// for any input. An empty sequence swaps every position with itself.
#[derive(Debug, Clone, Default)]
pub struct FixedSwaps {
    picks: Vec<usize>,
    cursor: usize,
}

impl FixedSwaps {
    pub fn new(picks: Vec<usize>) -> Self {
        Self {
            picks,
            cursor: 0,
        }
    }

    /// Every position swaps with itself, leaving input order untouched
    pub fn identity() -> Self {
        Self::default()
    }
}

impl SwapSource for FixedSwaps {
    fn swap_partner(&mut self, i: usize, len: usize) -> usize {
        if self.picks.is_empty() {
            return i;
        }
        let pick = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        pick % len
    }
}

/// Shuffle in place: every position, first to last, swaps with a partner drawn
/// from the full range.
pub fn shuffle<T, S: SwapSource + ?Sized>(items: &mut [T], swaps: &mut S) {
    let len = items.len();
    for i in 0..len {
        let j = swaps.swap_partner(i, len);
        items.swap(i, j);
    }
}

/// Randomized permutation of a word's letters. May equal the input.
pub fn scramble<S: SwapSource + ?Sized>(word: &str, swaps: &mut S) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    shuffle(&mut letters, swaps);
    letters.into_iter().collect()
}

/// Randomized ordering of a word list.
pub fn shuffle_words<W, S>(words: &[W], swaps: &mut S) -> Vec<String>
where
    W: AsRef<str>,
    S: SwapSource + ?Sized,
{
    let mut pool: Vec<String> = words.iter().map(|w| w.as_ref().to_string()).collect();
    shuffle(&mut pool, swaps);
    pool
}
