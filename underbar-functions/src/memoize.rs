//! # Memoization
//!
//! [`Memoized`] caches results by argument. The cache lives as long as the
//! wrapper and is never evicted.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

/// Cache hit and miss counts since the wrapper was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    pub hits: usize,
    pub misses: usize,
}

/// A function whose results are cached per argument.
///
/// The cache is not borrowed while the function runs, but the function
/// itself is: calling the same `Memoized` from inside its own function
/// panics.
pub struct Memoized<F, A, R> {
    func: RefCell<F>,
    cache: RefCell<HashMap<A, R>>,
    stats: Cell<MemoStats>,
}

impl<F, A, R> Memoized<F, A, R> {
    pub fn new(func: F) -> Self {
        Memoized {
            func: RefCell::new(func),
            cache: RefCell::new(HashMap::new()),
            stats: Cell::new(MemoStats::default()),
        }
    }

    /// Number of distinct arguments cached.
    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn stats(&self) -> MemoStats {
        self.stats.get()
    }

    /// Drops every cached result. Counters are kept.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }

    fn record(&self, update: impl FnOnce(&mut MemoStats)) {
        let mut stats = self.stats.get();
        update(&mut stats);
        self.stats.set(stats);
    }
}

impl<F, A, R> Memoized<F, A, R>
where
    F: FnMut(&A) -> R,
    A: Eq + Hash + Clone,
    R: Clone,
{
    /// The cached result for `arg`, computed and stored on the first call
    /// with an equal argument.
    pub fn call(&self, arg: &A) -> R {
        let hit = self.cache.borrow().get(arg).cloned();
        if let Some(result) = hit {
            self.record(|stats| stats.hits += 1);
            return result;
        }

        let computed = (self.func.borrow_mut())(arg);
        self.record(|stats| stats.misses += 1);

        let mut cache = self.cache.borrow_mut();
        let result = cache.entry(arg.clone()).or_insert(computed).clone();
        trace!(cached = cache.len(), "memoize: cache miss");
        result
    }
}

/// Wraps `f` so each distinct argument is computed once.
///
/// # Example
/// ```
/// use underbar_functions::memoize;
///
/// let square = memoize(|n: &u64| n * n);
/// assert_eq!(square(&12), 144);
/// assert_eq!(square(&12), 144);
/// ```
pub fn memoize<F, A, R>(f: F) -> impl Fn(&A) -> R
where
    F: FnMut(&A) -> R,
    A: Eq + Hash + Clone,
    R: Clone,
{
    let memoized = Memoized::new(f);
    move |arg: &A| memoized.call(arg)
}
