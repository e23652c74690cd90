//! Terminal conveniences over the drive.
//!
//! Each collector pairs [`transduce_init`](crate::transduce_init) with a
//! ready-made reducer for a common sink.

use crate::drive::transduce_init;
use crate::reducer::push_reducer;
use crate::step::{cont, reduced};
use crate::transducer::Transducer;

/// Drive a source through a transducer and collect the output into a
/// vector.
///
/// # Examples
///
/// ```
/// use conduce::{mapping, to_vec};
///
/// let lengths = mapping(|w: &str| w.len());
/// assert_eq!(to_vec(&lengths, vec!["ox", "okapi"]), vec![2, 5]);
/// ```
pub fn to_vec<In, Out, S>(transducer: &impl Transducer<In, Out>, source: S) -> Vec<Out>
where
    S: IntoIterator<Item = In>,
{
    transduce_init(transducer, push_reducer(), Vec::new(), source)
}

/// Sum the output of a transducer.
///
/// ```
/// use conduce::{mapping, sum};
///
/// let squares = mapping(|n: i32| n * n);
/// assert_eq!(sum(&squares, 1..=4), 30);
/// ```
pub fn sum<In, Out, S>(transducer: &impl Transducer<In, Out>, source: S) -> Out
where
    Out: std::ops::Add<Output = Out> + Default,
    S: IntoIterator<Item = In>,
{
    transduce_init(transducer, |acc: Out, x: Out| cont(acc + x), Out::default(), source)
}

/// Count the elements a transducer lets through.
///
/// ```
/// use conduce::{count, dedupe};
///
/// assert_eq!(count(&dedupe(), vec![7, 7, 8, 8, 9]), 3);
/// ```
pub fn count<In, Out, S>(transducer: &impl Transducer<In, Out>, source: S) -> usize
where
    S: IntoIterator<Item = In>,
{
    transduce_init(transducer, |acc: usize, _x: Out| cont(acc + 1), 0, source)
}

/// The first element a transducer lets through, terminating the drive as
/// soon as it arrives.
///
/// ```
/// use conduce::{filtering, first};
///
/// let big = filtering(|n: &i32| *n > 10);
/// assert_eq!(first(&big, vec![2, 9, 33, 5]), Some(33));
/// assert_eq!(first(&big, vec![2, 9]), None);
/// ```
pub fn first<In, Out, S>(transducer: &impl Transducer<In, Out>, source: S) -> Option<Out>
where
    S: IntoIterator<Item = In>,
{
    transduce_init(
        transducer,
        |_acc: Option<Out>, x: Out| reduced(Some(x)),
        None,
        source,
    )
}
