//! The drive: pull items from a source and push them through a wrapped
//! reducer chain.
//!
//! [`transduce`] and [`transduce_init`] are the two entry points; they
//! differ only in where the seed accumulator comes from. Both honor the
//! [`Reduced`](crate::Step::Reduced) marker by never stepping again once a
//! step returns it, and both finalize through `complete` exactly once.
//!
//! Any `IntoIterator` is a source. Strings drive as sequences of
//! characters through [`str::chars`].

use crate::error::TransduceError;
use crate::reducer::Reducer;
use crate::step::Step;
use crate::transducer::Transducer;

/// Drive a source through a transducer into a reducer, seeding from the
/// reducer chain's own `init`.
///
/// Fails with [`TransduceError::MissingInit`] when the chain supplies no
/// seed, which is the case for bare step closures; seed those through
/// [`transduce_init`].
///
/// # Examples
///
/// ```
/// use conduce::{cont, mapping, transduce, FnReducer};
///
/// let incr = mapping(|x: i32| x + 1);
/// let append = FnReducer::new(Vec::new(), |mut acc: Vec<i32>, x: i32| {
///     acc.push(x);
///     cont(acc)
/// });
/// assert_eq!(transduce(&incr, append, vec![1, 2, 3]).unwrap(), vec![2, 3, 4]);
/// ```
pub fn transduce<In, Out, Acc, R, S>(
    transducer: &impl Transducer<In, Out>,
    reducer: R,
    source: S,
) -> Result<Acc, TransduceError>
where
    R: Reducer<Acc, Out>,
    S: IntoIterator<Item = In>,
{
    let mut wrapped = transducer.apply(reducer);
    let seed = wrapped.init().ok_or(TransduceError::MissingInit)?;
    Ok(run(&mut wrapped, seed, source))
}

/// Drive a source through a transducer into a reducer with a caller
/// supplied seed.
///
/// # Examples
///
/// ```
/// use conduce::{cont, filtering, transduce_init};
///
/// let evens = filtering(|x: &i32| x % 2 == 0);
/// let total = transduce_init(&evens, |acc: i32, x: i32| cont(acc + x), 0, 1..=10);
/// assert_eq!(total, 30);
/// ```
pub fn transduce_init<In, Out, Acc, R, S>(
    transducer: &impl Transducer<In, Out>,
    reducer: R,
    init: Acc,
    source: S,
) -> Acc
where
    R: Reducer<Acc, Out>,
    S: IntoIterator<Item = In>,
{
    let mut wrapped = transducer.apply(reducer);
    run(&mut wrapped, init, source)
}

/// The fold loop shared by both entry points.
fn run<Acc, In, R, S>(wrapped: &mut R, mut acc: Acc, source: S) -> Acc
where
    R: Reducer<Acc, In>,
    S: IntoIterator<Item = In>,
{
    for input in source {
        match wrapped.step(acc, input) {
            Step::Continue(next) => acc = next,
            Step::Reduced(finished) => {
                acc = finished;
                break;
            }
        }
    }
    wrapped.complete(acc)
}

/// Fold a source into a reducer, keeping the termination tag intact.
///
/// This is the inner drive used at nesting boundaries such as
/// [`cat`](crate::cat): unlike the top-level drive it neither unwraps a
/// `Reduced` nor calls `complete`, so the marker crosses the boundary
/// exactly once and the outer drive terminates too.
pub fn reduce_preserving<Acc, In, R, S>(reducer: &mut R, init: Acc, source: S) -> Step<Acc>
where
    R: Reducer<Acc, In>,
    S: IntoIterator<Item = In>,
{
    let mut acc = init;
    for input in source {
        match reducer.step(acc, input) {
            Step::Continue(next) => acc = next,
            finished @ Step::Reduced(_) => return finished,
        }
    }
    Step::Continue(acc)
}
