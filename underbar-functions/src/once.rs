//! # Run Once
//!
//! [`Once`] calls its function the first time it is called and hands back a
//! clone of that first result forever after, ignoring later arguments.

use std::cell::{OnceCell, RefCell};

use tracing::trace;

/// A function that runs at most once.
///
/// If the function panics nothing is stored, so the next call tries again.
pub struct Once<F, R> {
    func: RefCell<F>,
    result: OnceCell<R>,
}

impl<F, R> Once<F, R> {
    pub fn new(func: F) -> Self {
        Once {
            func: RefCell::new(func),
            result: OnceCell::new(),
        }
    }

    pub fn has_run(&self) -> bool {
        self.result.get().is_some()
    }

    pub fn call<A>(&self, arg: A) -> R
    where
        F: FnMut(A) -> R,
        R: Clone,
    {
        self.result
            .get_or_init(|| {
                let result = (self.func.borrow_mut())(arg);
                trace!("once: first call completed");
                result
            })
            .clone()
    }
}

/// Wraps `f` so it runs on the first call only.
///
/// # Example
/// ```
/// use underbar_functions::once;
///
/// let init = once(|n: i32| n * 10);
/// assert_eq!(init(1), 10);
/// assert_eq!(init(2), 10);
/// ```
pub fn once<F, A, R>(f: F) -> impl Fn(A) -> R
where
    F: FnMut(A) -> R,
    R: Clone,
{
    let wrapped = Once::new(f);
    move |arg| wrapped.call(arg)
}
