//! # Caching Module
//!
//! Memoizing wrappers for fitness evaluation. The fitness contract makes the
//! score a pure function of the genome, so results can be cached keyed by the
//! genome itself. This pays off when the same genome recurs across selection
//! passes or when the fitness function is expensive.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::evolution::FitnessFunction;
use crate::genome::Genome;

/// A wrapper around a fitness function that caches evaluations keyed by
/// genome behind a mutex.
#[derive(Debug, Clone)]
pub struct CachedFitness<F> {
    /// The wrapped fitness function.
    fitness: F,
    /// The cache of fitness evaluations.
    cache: Arc<Mutex<HashMap<Genome, f64>>>,
}

impl<F> CachedFitness<F>
where
    F: FitnessFunction,
{
    /// Creates a new cached wrapper around the given fitness function.
    pub fn new(fitness: F) -> Self {
        Self {
            fitness,
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates a cached wrapper with a pre-populated cache.
    pub fn with_cache(fitness: F, cache: HashMap<Genome, f64>) -> Self {
        Self {
            fitness,
            cache: Arc::new(Mutex::new(cache)),
        }
    }

    /// Returns a reference to the wrapped fitness function.
    pub fn inner(&self) -> &F {
        &self.fitness
    }

    /// Returns the number of cached evaluations.
    pub fn cache_size(&self) -> usize {
        self.cache.lock().unwrap().len()
    }

    /// Clears the cache.
    pub fn clear_cache(&self) {
        self.cache.lock().unwrap().clear();
    }
}

impl<F> FitnessFunction for CachedFitness<F>
where
    F: FitnessFunction,
{
    fn score(&self, genome: &Genome) -> f64 {
        let mut cache = self.cache.lock().unwrap();

        if let Some(score) = cache.get(genome) {
            return *score;
        }

        let score = self.fitness.score(genome);
        cache.insert(genome.clone(), score);
        score
    }
}

/// A per-thread cache of fitness evaluations.
///
/// Reads and writes touch only the current thread's map, so no locking is
/// involved. In the single-threaded engine this behaves as a plain cache
/// without the mutex of [`CachedFitness`].
#[derive(Debug, Default)]
pub struct ThreadLocalCache {
    cache: thread_local::ThreadLocal<RefCell<HashMap<Genome, f64>>>,
}

impl ThreadLocalCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a cached score if the current thread has one.
    pub fn get(&self, genome: &Genome) -> Option<f64> {
        self.cache
            .get()
            .and_then(|cell| cell.try_borrow().ok())
            .and_then(|cache| cache.get(genome).copied())
    }

    /// Records a score in the current thread's cache.
    pub fn insert(&self, genome: Genome, score: f64) {
        let cell = self.cache.get_or(|| RefCell::new(HashMap::new()));
        if let Ok(mut cache) = cell.try_borrow_mut() {
            cache.insert(genome, score);
        }
    }

    /// Clears the current thread's cache.
    pub fn clear(&self) {
        if let Some(cell) = self.cache.get() {
            if let Ok(mut cache) = cell.try_borrow_mut() {
                cache.clear();
            }
        }
    }

    /// Number of scores cached by the current thread.
    pub fn len(&self) -> usize {
        self.cache
            .get()
            .and_then(|cell| cell.try_borrow().ok())
            .map_or(0, |cache| cache.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A wrapper around a fitness function backed by a [`ThreadLocalCache`].
#[derive(Debug, Clone)]
pub struct ThreadLocalCachedFitness<F> {
    /// The wrapped fitness function.
    fitness: F,
    /// The per-thread cache of fitness evaluations.
    cache: Arc<ThreadLocalCache>,
}

impl<F> ThreadLocalCachedFitness<F>
where
    F: FitnessFunction,
{
    /// Creates a new thread-local cached wrapper around the given fitness
    /// function.
    pub fn new(fitness: F) -> Self {
        Self {
            fitness,
            cache: Arc::new(ThreadLocalCache::new()),
        }
    }

    /// Returns a reference to the wrapped fitness function.
    pub fn inner(&self) -> &F {
        &self.fitness
    }

    /// Returns the number of evaluations cached by the current thread.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    /// Clears the current thread's cache.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

impl<F> FitnessFunction for ThreadLocalCachedFitness<F>
where
    F: FitnessFunction,
{
    fn score(&self, genome: &Genome) -> f64 {
        if let Some(score) = self.cache.get(genome) {
            return score;
        }

        let score = self.fitness.score(genome);
        self.cache.insert(genome.clone(), score);
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts how often the underlying score is actually computed.
    #[derive(Debug, Clone)]
    struct CountingFitness {
        evaluations: Arc<AtomicUsize>,
    }

    impl CountingFitness {
        fn new() -> Self {
            Self {
                evaluations: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn evaluations(&self) -> usize {
            self.evaluations.load(Ordering::SeqCst)
        }
    }

    impl FitnessFunction for CountingFitness {
        fn score(&self, genome: &Genome) -> f64 {
            self.evaluations.fetch_add(1, Ordering::SeqCst);
            genome.len() as f64
        }
    }

    #[test]
    fn test_cached_fitness_evaluates_once_per_genome() {
        let fitness = CountingFitness::new();
        let cached = CachedFitness::new(fitness.clone());

        let genome = Genome::new(vec![1, 2, 3]);
        let first = cached.score(&genome);
        let second = cached.score(&genome);
        assert_eq!(first, second);
        assert_eq!(fitness.evaluations(), 1);

        let other = Genome::new(vec![1, 2]);
        cached.score(&other);
        assert_eq!(fitness.evaluations(), 2);
        assert_eq!(cached.cache_size(), 2);

        cached.clear_cache();
        assert_eq!(cached.cache_size(), 0);
        cached.score(&genome);
        assert_eq!(fitness.evaluations(), 3);
    }

    #[test]
    fn test_with_cache_seeds_scores() {
        let fitness = CountingFitness::new();
        let genome = Genome::new(vec![1, 2, 3]);

        let mut seeded = HashMap::new();
        seeded.insert(genome.clone(), 0.25);
        let cached = CachedFitness::with_cache(fitness.clone(), seeded);

        assert_eq!(cached.score(&genome), 0.25);
        assert_eq!(fitness.evaluations(), 0);
    }

    #[test]
    fn test_thread_local_cached_fitness_evaluates_once_per_genome() {
        let fitness = CountingFitness::new();
        let cached = ThreadLocalCachedFitness::new(fitness.clone());

        let genome = Genome::new(vec![4, 5]);
        let first = cached.score(&genome);
        let second = cached.score(&genome);
        assert_eq!(first, second);
        assert_eq!(fitness.evaluations(), 1);
        assert_eq!(cached.cache_size(), 1);

        cached.clear_cache();
        assert_eq!(cached.cache_size(), 0);
        cached.score(&genome);
        assert_eq!(fitness.evaluations(), 2);
    }
}
