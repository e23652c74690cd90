//! Reducers: the fold protocol the drive consumes.
//!
//! A reducer folds inputs into an accumulator through three operations:
//! `init` produces the seed, `step` folds one input, `complete` finalizes.
//! Transducers wrap a downstream reducer in a new one; the wrapping
//! reducer delegates `init` and `complete` downstream and reshapes `step`.

use crate::step::{cont, Step};

/// A reducing function from `In` inputs into an `Acc` accumulator.
///
/// The accumulator is threaded through `step` by value; a step that wants
/// to end the run returns [`Step::Reduced`]. Methods take `&mut self`
/// because a wrapped reducer owns the mutable state of one run (counters,
/// prior values, flags); the transducer value that produced it stays
/// untouched.
pub trait Reducer<Acc, In> {
    /// The seed accumulator, or `None` when this reducer carries no seed.
    ///
    /// Wrapping reducers delegate to the reducer they wrap.
    fn init(&mut self) -> Option<Acc>;

    /// Fold one input into the accumulator.
    fn step(&mut self, result: Acc, input: In) -> Step<Acc>;

    /// Finalize the accumulator. Called exactly once per successful run.
    fn complete(&mut self, result: Acc) -> Acc;
}

/// Bare step functions are seedless reducers.
///
/// `init` returns `None`, so driving one through
/// [`transduce`](crate::transduce) without a caller-supplied seed fails
/// with [`MissingInit`](crate::TransduceError::MissingInit); use
/// [`transduce_init`](crate::transduce_init) or a seeded [`FnReducer`].
impl<F, Acc, In> Reducer<Acc, In> for F
where
    F: FnMut(Acc, In) -> Step<Acc>,
{
    fn init(&mut self) -> Option<Acc> {
        None
    }

    #[inline]
    fn step(&mut self, result: Acc, input: In) -> Step<Acc> {
        self(result, input)
    }

    fn complete(&mut self, result: Acc) -> Acc {
        result
    }
}

/// A base reducer built from a seed and a step function.
///
/// `init` yields the stored seed and `complete` is the identity.
///
/// # Examples
///
/// ```
/// use conduce::{cont, mapping, transduce, FnReducer};
///
/// let upcase = mapping(|c: char| c.to_ascii_uppercase());
/// let concat = FnReducer::new(String::new(), |mut s: String, c: char| {
///     s.push(c);
///     cont(s)
/// });
/// let shouted = transduce(&upcase, concat, "this".chars()).unwrap();
/// assert_eq!(shouted, "THIS");
/// ```
pub struct FnReducer<Acc, F> {
    seed: Option<Acc>,
    f: F,
}

impl<Acc, F> FnReducer<Acc, F> {
    /// Build a reducer from a seed and a step function.
    pub fn new(seed: Acc, f: F) -> Self {
        FnReducer { seed: Some(seed), f }
    }
}

impl<Acc, In, F> Reducer<Acc, In> for FnReducer<Acc, F>
where
    F: FnMut(Acc, In) -> Step<Acc>,
{
    fn init(&mut self) -> Option<Acc> {
        self.seed.take()
    }

    #[inline]
    fn step(&mut self, result: Acc, input: In) -> Step<Acc> {
        (self.f)(result, input)
    }

    fn complete(&mut self, result: Acc) -> Acc {
        result
    }
}

/// The reducer that appends into a vector, used by the collectors.
pub(crate) fn push_reducer<T>() -> impl FnMut(Vec<T>, T) -> Step<Vec<T>> {
    |mut acc, x| {
        acc.push(x);
        cont(acc)
    }
}
