//! The transducer family.
//!
//! Every constructor here returns a small configuration value implementing
//! [`Transducer`]. Applying one wraps a downstream reducer in a new reducer
//! that carries this stage's behavior; stateful stages (counters, flags,
//! prior values) keep that state on the wrapped reducer, so the transducer
//! value itself can be applied again for any number of independent runs.

use crate::drive::reduce_preserving;
use crate::handler::{Handler, IndexedHandler};
use crate::reducer::Reducer;
use crate::step::{cont, Step};
use crate::transducer::{Compose, Transducer};
use std::collections::HashMap;
use std::hash::Hash;

/// Transform each element with a handler.
///
/// # Examples
///
/// ```
/// use conduce::{mapping, to_vec};
///
/// let shifted = mapping(|x: i32| x + 10);
/// assert_eq!(to_vec(&shifted, vec![1, 2, 3]), vec![11, 12, 13]);
/// ```
///
/// A function path works as the handler too:
///
/// ```
/// use conduce::{mapping, to_vec};
///
/// assert_eq!(to_vec(&mapping(i32::abs), vec![-1, 2, -3]), vec![1, 2, 3]);
/// ```
pub struct Mapping<H> {
    handler: H,
}

/// Build a [`Mapping`] transducer.
pub fn mapping<In, H>(handler: H) -> Mapping<H>
where
    H: Handler<In>,
{
    Mapping { handler }
}

struct MappingReducer<R, H> {
    next: R,
    handler: H,
}

impl<H, In, Out> Transducer<In, Out> for Mapping<H>
where
    H: Handler<In, Out = Out> + Clone,
{
    fn apply<Acc, R>(&self, next: R) -> impl Reducer<Acc, In>
    where
        R: Reducer<Acc, Out>,
    {
        MappingReducer {
            next,
            handler: self.handler.clone(),
        }
    }
}

impl<Acc, In, Out, R, H> Reducer<Acc, In> for MappingReducer<R, H>
where
    R: Reducer<Acc, Out>,
    H: Handler<In, Out = Out>,
{
    fn init(&mut self) -> Option<Acc> {
        self.next.init()
    }

    #[inline]
    fn step(&mut self, result: Acc, input: In) -> Step<Acc> {
        self.next.step(result, self.handler.process(input))
    }

    fn complete(&mut self, result: Acc) -> Acc {
        self.next.complete(result)
    }
}

/// Pass through only the elements matching a predicate.
///
/// # Examples
///
/// ```
/// use conduce::{filtering, to_vec};
///
/// let evens = filtering(|x: &i32| x % 2 == 0);
/// assert_eq!(to_vec(&evens, vec![1, 2, 3, 4, 5]), vec![2, 4]);
/// ```
pub struct Filtering<P> {
    predicate: P,
}

/// Build a [`Filtering`] transducer.
pub fn filtering<T, P>(predicate: P) -> Filtering<P>
where
    P: for<'a> Handler<&'a T, Out = bool>,
{
    Filtering { predicate }
}

struct FilteringReducer<R, P> {
    next: R,
    predicate: P,
}

impl<P, In> Transducer<In, In> for Filtering<P>
where
    P: for<'a> Handler<&'a In, Out = bool> + Clone,
{
    fn apply<Acc, R>(&self, next: R) -> impl Reducer<Acc, In>
    where
        R: Reducer<Acc, In>,
    {
        FilteringReducer {
            next,
            predicate: self.predicate.clone(),
        }
    }
}

impl<Acc, In, R, P> Reducer<Acc, In> for FilteringReducer<R, P>
where
    R: Reducer<Acc, In>,
    P: for<'a> Handler<&'a In, Out = bool>,
{
    fn init(&mut self) -> Option<Acc> {
        self.next.init()
    }

    #[inline]
    fn step(&mut self, result: Acc, input: In) -> Step<Acc> {
        if self.predicate.process(&input) {
            self.next.step(result, input)
        } else {
            cont(result)
        }
    }

    fn complete(&mut self, result: Acc) -> Acc {
        self.next.complete(result)
    }
}

/// Dual of [`filtering`]: pass through only the elements the predicate
/// rejects.
pub struct Removing<P> {
    predicate: P,
}

/// Build a [`Removing`] transducer.
///
/// ```
/// use conduce::{removing, to_vec};
///
/// let odds = removing(|x: &i32| x % 2 == 0);
/// assert_eq!(to_vec(&odds, vec![1, 2, 3, 4, 5]), vec![1, 3, 5]);
/// ```
pub fn removing<T, P>(predicate: P) -> Removing<P>
where
    P: for<'a> Handler<&'a T, Out = bool>,
{
    Removing { predicate }
}

struct RemovingReducer<R, P> {
    next: R,
    predicate: P,
}

impl<P, In> Transducer<In, In> for Removing<P>
where
    P: for<'a> Handler<&'a In, Out = bool> + Clone,
{
    fn apply<Acc, R>(&self, next: R) -> impl Reducer<Acc, In>
    where
        R: Reducer<Acc, In>,
    {
        RemovingReducer {
            next,
            predicate: self.predicate.clone(),
        }
    }
}

impl<Acc, In, R, P> Reducer<Acc, In> for RemovingReducer<R, P>
where
    R: Reducer<Acc, In>,
    P: for<'a> Handler<&'a In, Out = bool>,
{
    fn init(&mut self) -> Option<Acc> {
        self.next.init()
    }

    #[inline]
    fn step(&mut self, result: Acc, input: In) -> Step<Acc> {
        if self.predicate.process(&input) {
            cont(result)
        } else {
            self.next.step(result, input)
        }
    }

    fn complete(&mut self, result: Acc) -> Acc {
        self.next.complete(result)
    }
}

/// Map each element through a handler, dropping `None` results.
///
/// ```
/// use conduce::{keeping, to_vec};
///
/// let tens = keeping(|x: i32| if x % 2 == 0 { Some(x * 10) } else { None });
/// assert_eq!(to_vec(&tens, vec![1, 2, 3, 4]), vec![20, 40]);
/// ```
pub struct Keeping<H> {
    handler: H,
}

/// Build a [`Keeping`] transducer.
pub fn keeping<In, Out, H>(handler: H) -> Keeping<H>
where
    H: Handler<In, Out = Option<Out>>,
{
    Keeping { handler }
}

struct KeepingReducer<R, H> {
    next: R,
    handler: H,
}

impl<H, In, Out> Transducer<In, Out> for Keeping<H>
where
    H: Handler<In, Out = Option<Out>> + Clone,
{
    fn apply<Acc, R>(&self, next: R) -> impl Reducer<Acc, In>
    where
        R: Reducer<Acc, Out>,
    {
        KeepingReducer {
            next,
            handler: self.handler.clone(),
        }
    }
}

impl<Acc, In, Out, R, H> Reducer<Acc, In> for KeepingReducer<R, H>
where
    R: Reducer<Acc, Out>,
    H: Handler<In, Out = Option<Out>>,
{
    fn init(&mut self) -> Option<Acc> {
        self.next.init()
    }

    #[inline]
    fn step(&mut self, result: Acc, input: In) -> Step<Acc> {
        match self.handler.process(input) {
            Some(output) => self.next.step(result, output),
            None => cont(result),
        }
    }

    fn complete(&mut self, result: Acc) -> Acc {
        self.next.complete(result)
    }
}

/// Like [`keeping`], but the handler also receives each element's
/// zero-based position.
///
/// ```
/// use conduce::{keep_indexed, to_vec};
///
/// let at_odd_positions = keep_indexed(|i: usize, x: i32| {
///     if i % 2 == 1 {
///         Some(x)
///     } else {
///         None
///     }
/// });
/// assert_eq!(to_vec(&at_odd_positions, vec![10, 20, 30, 40]), vec![20, 40]);
/// ```
pub struct KeepIndexed<H> {
    handler: H,
}

/// Build a [`KeepIndexed`] transducer.
pub fn keep_indexed<In, Out, H>(handler: H) -> KeepIndexed<H>
where
    H: IndexedHandler<In, Out = Option<Out>>,
{
    KeepIndexed { handler }
}

struct KeepIndexedReducer<R, H> {
    next: R,
    handler: H,
    index: usize,
}

impl<H, In, Out> Transducer<In, Out> for KeepIndexed<H>
where
    H: IndexedHandler<In, Out = Option<Out>> + Clone,
{
    fn apply<Acc, R>(&self, next: R) -> impl Reducer<Acc, In>
    where
        R: Reducer<Acc, Out>,
    {
        KeepIndexedReducer {
            next,
            handler: self.handler.clone(),
            index: 0,
        }
    }
}

impl<Acc, In, Out, R, H> Reducer<Acc, In> for KeepIndexedReducer<R, H>
where
    R: Reducer<Acc, Out>,
    H: IndexedHandler<In, Out = Option<Out>>,
{
    fn init(&mut self) -> Option<Acc> {
        self.next.init()
    }

    #[inline]
    fn step(&mut self, result: Acc, input: In) -> Step<Acc> {
        let index = self.index;
        self.index += 1;
        match self.handler.process(index, input) {
            Some(output) => self.next.step(result, output),
            None => cont(result),
        }
    }

    fn complete(&mut self, result: Acc) -> Acc {
        self.next.complete(result)
    }
}

/// Forward the first `n` elements, then terminate the run.
///
/// The n-th element is forwarded; the element after it triggers
/// termination without being forwarded, so a drive pulls at most `n + 1`
/// items from its source. `taking(0)` terminates on the very first step.
///
/// # Examples
///
/// ```
/// use conduce::{taking, to_vec};
///
/// // The source never ends; taking does.
/// assert_eq!(to_vec(&taking(5), 10..), vec![10, 11, 12, 13, 14]);
/// ```
pub struct Taking {
    n: usize,
}

/// Build a [`Taking`] transducer.
pub fn taking(n: usize) -> Taking {
    Taking { n }
}

struct TakingReducer<R> {
    next: R,
    remaining: usize,
}

impl<In> Transducer<In, In> for Taking {
    fn apply<Acc, R>(&self, next: R) -> impl Reducer<Acc, In>
    where
        R: Reducer<Acc, In>,
    {
        TakingReducer {
            next,
            remaining: self.n,
        }
    }
}

impl<Acc, In, R> Reducer<Acc, In> for TakingReducer<R>
where
    R: Reducer<Acc, In>,
{
    fn init(&mut self) -> Option<Acc> {
        self.next.init()
    }

    #[inline]
    fn step(&mut self, result: Acc, input: In) -> Step<Acc> {
        if self.remaining == 0 {
            return Step::Reduced(result);
        }
        self.remaining -= 1;
        self.next.step(result, input)
    }

    fn complete(&mut self, result: Acc) -> Acc {
        self.next.complete(result)
    }
}

/// Swallow the first `n` elements, forward the rest.
///
/// ```
/// use conduce::{dropping, to_vec};
///
/// assert_eq!(to_vec(&dropping(15), 1..=20), vec![16, 17, 18, 19, 20]);
/// ```
pub struct Dropping {
    n: usize,
}

/// Build a [`Dropping`] transducer.
pub fn dropping(n: usize) -> Dropping {
    Dropping { n }
}

struct DroppingReducer<R> {
    next: R,
    remaining: usize,
}

impl<In> Transducer<In, In> for Dropping {
    fn apply<Acc, R>(&self, next: R) -> impl Reducer<Acc, In>
    where
        R: Reducer<Acc, In>,
    {
        DroppingReducer {
            next,
            remaining: self.n,
        }
    }
}

impl<Acc, In, R> Reducer<Acc, In> for DroppingReducer<R>
where
    R: Reducer<Acc, In>,
{
    fn init(&mut self) -> Option<Acc> {
        self.next.init()
    }

    #[inline]
    fn step(&mut self, result: Acc, input: In) -> Step<Acc> {
        if self.remaining > 0 {
            self.remaining -= 1;
            cont(result)
        } else {
            self.next.step(result, input)
        }
    }

    fn complete(&mut self, result: Acc) -> Acc {
        self.next.complete(result)
    }
}

/// Forward elements while the predicate holds; the first failing element
/// terminates the run without being forwarded.
///
/// ```
/// use conduce::{take_while, to_vec};
///
/// let small = take_while(|x: &i32| *x < 4);
/// assert_eq!(to_vec(&small, 1..100), vec![1, 2, 3]);
/// ```
pub struct TakeWhile<P> {
    predicate: P,
}

/// Build a [`TakeWhile`] transducer.
pub fn take_while<T, P>(predicate: P) -> TakeWhile<P>
where
    P: for<'a> Handler<&'a T, Out = bool>,
{
    TakeWhile { predicate }
}

struct TakeWhileReducer<R, P> {
    next: R,
    predicate: P,
}

impl<P, In> Transducer<In, In> for TakeWhile<P>
where
    P: for<'a> Handler<&'a In, Out = bool> + Clone,
{
    fn apply<Acc, R>(&self, next: R) -> impl Reducer<Acc, In>
    where
        R: Reducer<Acc, In>,
    {
        TakeWhileReducer {
            next,
            predicate: self.predicate.clone(),
        }
    }
}

impl<Acc, In, R, P> Reducer<Acc, In> for TakeWhileReducer<R, P>
where
    R: Reducer<Acc, In>,
    P: for<'a> Handler<&'a In, Out = bool>,
{
    fn init(&mut self) -> Option<Acc> {
        self.next.init()
    }

    #[inline]
    fn step(&mut self, result: Acc, input: In) -> Step<Acc> {
        if self.predicate.process(&input) {
            self.next.step(result, input)
        } else {
            Step::Reduced(result)
        }
    }

    fn complete(&mut self, result: Acc) -> Acc {
        self.next.complete(result)
    }
}

/// Swallow elements while the predicate holds; once it fails, forward that
/// element and everything after it.
///
/// ```
/// use conduce::{drop_while, to_vec};
///
/// let skip_small = drop_while(|x: &i32| *x < 4);
/// assert_eq!(to_vec(&skip_small, vec![1, 2, 3, 4, 1, 2]), vec![4, 1, 2]);
/// ```
pub struct DropWhile<P> {
    predicate: P,
}

/// Build a [`DropWhile`] transducer.
pub fn drop_while<T, P>(predicate: P) -> DropWhile<P>
where
    P: for<'a> Handler<&'a T, Out = bool>,
{
    DropWhile { predicate }
}

struct DropWhileReducer<R, P> {
    next: R,
    predicate: P,
    done_dropping: bool,
}

impl<P, In> Transducer<In, In> for DropWhile<P>
where
    P: for<'a> Handler<&'a In, Out = bool> + Clone,
{
    fn apply<Acc, R>(&self, next: R) -> impl Reducer<Acc, In>
    where
        R: Reducer<Acc, In>,
    {
        DropWhileReducer {
            next,
            predicate: self.predicate.clone(),
            done_dropping: false,
        }
    }
}

impl<Acc, In, R, P> Reducer<Acc, In> for DropWhileReducer<R, P>
where
    R: Reducer<Acc, In>,
    P: for<'a> Handler<&'a In, Out = bool>,
{
    fn init(&mut self) -> Option<Acc> {
        self.next.init()
    }

    #[inline]
    fn step(&mut self, result: Acc, input: In) -> Step<Acc> {
        if !self.done_dropping && self.predicate.process(&input) {
            cont(result)
        } else {
            self.done_dropping = true;
            self.next.step(result, input)
        }
    }

    fn complete(&mut self, result: Acc) -> Acc {
        self.next.complete(result)
    }
}

/// Forward every n-th element: positions n, 2n, 3n, ... counting from one.
///
/// `take_nth(1)` passes everything through.
///
/// ```
/// use conduce::{take_nth, to_vec};
///
/// assert_eq!(to_vec(&take_nth(2), 1..=6), vec![2, 4, 6]);
/// ```
pub struct TakeNth {
    n: usize,
}

/// Build a [`TakeNth`] transducer.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn take_nth(n: usize) -> TakeNth {
    assert!(n > 0, "take_nth period must be greater than 0");
    TakeNth { n }
}

struct TakeNthReducer<R> {
    next: R,
    n: usize,
    count: usize,
}

impl<In> Transducer<In, In> for TakeNth {
    fn apply<Acc, R>(&self, next: R) -> impl Reducer<Acc, In>
    where
        R: Reducer<Acc, In>,
    {
        TakeNthReducer {
            next,
            n: self.n,
            count: 0,
        }
    }
}

impl<Acc, In, R> Reducer<Acc, In> for TakeNthReducer<R>
where
    R: Reducer<Acc, In>,
{
    fn init(&mut self) -> Option<Acc> {
        self.next.init()
    }

    #[inline]
    fn step(&mut self, result: Acc, input: In) -> Step<Acc> {
        self.count += 1;
        if self.count % self.n == 0 {
            self.next.step(result, input)
        } else {
            cont(result)
        }
    }

    fn complete(&mut self, result: Acc) -> Acc {
        self.next.complete(result)
    }
}

/// Swallow consecutive duplicate elements, compared by value equality.
///
/// ```
/// use conduce::{dedupe, to_vec};
///
/// assert_eq!(to_vec(&dedupe(), vec![1, 1, 2, 2, 3, 1]), vec![1, 2, 3, 1]);
/// ```
pub struct Dedupe;

/// Build a [`Dedupe`] transducer.
pub fn dedupe() -> Dedupe {
    Dedupe
}

struct DedupeReducer<R, In> {
    next: R,
    prior: Option<In>,
}

impl<In> Transducer<In, In> for Dedupe
where
    In: PartialEq + Clone,
{
    fn apply<Acc, R>(&self, next: R) -> impl Reducer<Acc, In>
    where
        R: Reducer<Acc, In>,
    {
        DedupeReducer { next, prior: None }
    }
}

impl<Acc, In, R> Reducer<Acc, In> for DedupeReducer<R, In>
where
    R: Reducer<Acc, In>,
    In: PartialEq + Clone,
{
    fn init(&mut self) -> Option<Acc> {
        self.next.init()
    }

    #[inline]
    fn step(&mut self, result: Acc, input: In) -> Step<Acc> {
        if self.prior.as_ref() == Some(&input) {
            cont(result)
        } else {
            self.prior = Some(input.clone());
            self.next.step(result, input)
        }
    }

    fn complete(&mut self, result: Acc) -> Acc {
        self.next.complete(result)
    }
}

/// Substitute elements found in a replacement map; misses pass through
/// unchanged.
///
/// # Examples
///
/// ```
/// use conduce::{replace, to_vec};
/// use std::collections::HashMap;
///
/// let spelled = replace(HashMap::from([(1, 10), (2, 20)]));
/// assert_eq!(to_vec(&spelled, vec![1, 2, 3]), vec![10, 20, 3]);
/// ```
pub struct Replacing<T> {
    replacements: HashMap<T, T>,
}

/// Build a [`Replacing`] transducer from a replacement map.
pub fn replace<T>(replacements: HashMap<T, T>) -> Replacing<T>
where
    T: Eq + Hash,
{
    Replacing { replacements }
}

/// Build a [`Replacing`] transducer from an ordered sequence, keyed by
/// position: the element at index `i` replaces inputs equal to `i`.
///
/// Only meaningful when the inputs are small non-negative integers.
pub fn replace_indexed<T, S>(values: S) -> Replacing<T>
where
    T: Eq + Hash + From<usize>,
    S: IntoIterator<Item = T>,
{
    Replacing {
        replacements: values
            .into_iter()
            .enumerate()
            .map(|(i, value)| (T::from(i), value))
            .collect(),
    }
}

struct ReplacingReducer<R, T> {
    next: R,
    replacements: HashMap<T, T>,
}

impl<T> Transducer<T, T> for Replacing<T>
where
    T: Eq + Hash + Clone,
{
    fn apply<Acc, R>(&self, next: R) -> impl Reducer<Acc, T>
    where
        R: Reducer<Acc, T>,
    {
        ReplacingReducer {
            next,
            replacements: self.replacements.clone(),
        }
    }
}

impl<Acc, T, R> Reducer<Acc, T> for ReplacingReducer<R, T>
where
    R: Reducer<Acc, T>,
    T: Eq + Hash + Clone,
{
    fn init(&mut self) -> Option<Acc> {
        self.next.init()
    }

    #[inline]
    fn step(&mut self, result: Acc, input: T) -> Step<Acc> {
        let output = match self.replacements.get(&input) {
            Some(replacement) => replacement.clone(),
            None => input,
        };
        self.next.step(result, output)
    }

    fn complete(&mut self, result: Acc) -> Acc {
        self.next.complete(result)
    }
}

/// Flatten one level: each element must itself be iterable, and its items
/// are fed downstream one by one.
///
/// An inner run is driven with [`reduce_preserving`], so a `Reduced`
/// raised downstream stops the inner iteration and the outer drive alike.
///
/// # Examples
///
/// ```
/// use conduce::{cat, to_vec};
///
/// let flat = cat();
/// assert_eq!(to_vec(&flat, vec![vec![1, 2], vec![3, 4]]), vec![1, 2, 3, 4]);
/// ```
pub struct Cat;

/// Build a [`Cat`] transducer.
pub fn cat() -> Cat {
    Cat
}

struct CatReducer<R> {
    next: R,
}

impl<In> Transducer<In, In::Item> for Cat
where
    In: IntoIterator,
{
    fn apply<Acc, R>(&self, next: R) -> impl Reducer<Acc, In>
    where
        R: Reducer<Acc, In::Item>,
    {
        CatReducer { next }
    }
}

impl<Acc, In, R> Reducer<Acc, In> for CatReducer<R>
where
    In: IntoIterator,
    R: Reducer<Acc, In::Item>,
{
    fn init(&mut self) -> Option<Acc> {
        self.next.init()
    }

    #[inline]
    fn step(&mut self, result: Acc, input: In) -> Step<Acc> {
        reduce_preserving(&mut self.next, result, input)
    }

    fn complete(&mut self, result: Acc) -> Acc {
        self.next.complete(result)
    }
}

/// Map each element to an iterable, then flatten one level.
///
/// Defined as [`mapping`] composed with [`cat`].
///
/// # Examples
///
/// ```
/// use conduce::{mapcat, to_vec};
///
/// let runs = mapcat(|n: i32| 0..n);
/// assert_eq!(to_vec(&runs, vec![1, 2, 3]), vec![0, 0, 1, 0, 1, 2]);
/// ```
pub fn mapcat<In, Iter, H>(handler: H) -> Compose<Mapping<H>, Cat, Iter>
where
    H: Handler<In, Out = Iter>,
    Iter: IntoIterator,
{
    Compose::new(mapping(handler), cat())
}
