//! # Conduce: composable transducers
//!
//! A transducer is an algorithmic transformation decoupled from both its
//! source (where elements come from) and its sink (how results are
//! accumulated). Instead of chaining collections:
//!
//! ```text
//! data -> map -> [intermediate] -> filter -> [intermediate] -> result
//! ```
//!
//! transducers compose the operations first and execute in a single pass:
//!
//! ```text
//! (map . filter) -> data -> result
//! ```
//!
//! - **No intermediate allocations**: nothing is materialized between
//!   stages.
//! - **Early termination**: stages like [`taking`] stop the whole drive
//!   through the [`Step::Reduced`] marker, including across the nesting
//!   boundary of [`cat`].
//! - **Reusable pipelines**: a transducer value holds configuration only;
//!   each drive gets a fresh reducer chain, so one pipeline can run any
//!   number of times over any kind of source or sink.
//!
//! ## Usage
//!
//! ```rust
//! use conduce::{compose, filtering, mapping, taking, to_vec};
//!
//! let odd_squares = compose!(
//!     mapping(|n: u32| n * n),
//!     filtering(|n: &u32| n % 2 == 1),
//!     taking(4),
//! );
//!
//! // The source is unbounded; taking ends the drive.
//! let result = to_vec(&odd_squares, 1..);
//! assert_eq!(result, vec![1, 9, 25, 49]);
//! ```
//!
//! Sinks other than vectors go through [`transduce`] with a reducer, or
//! [`transduce_init`] with a bare step function and a seed:
//!
//! ```rust
//! use conduce::{cont, mapping, transduce_init};
//!
//! let doubled_sum = transduce_init(
//!     &mapping(|x: i32| x * 2),
//!     |acc: i32, x: i32| cont(acc + x),
//!     0,
//!     1..=3,
//! );
//! assert_eq!(doubled_sum, 12);
//! ```
//!
//! Handlers passed to [`mapping`], [`filtering`] and friends may be
//! closures, function paths such as `i32::abs`, or custom values
//! implementing [`Handler`]; the shape is resolved once per pipeline by
//! monomorphization, never per element.

pub mod collectors;
pub mod drive;
pub mod error;
pub mod handler;
pub mod reducer;
pub mod step;
pub mod transducer;
pub mod transforms;

pub use error::TransduceError;
pub use handler::{Handler, IndexedHandler};
pub use reducer::{FnReducer, Reducer};
pub use step::{cont, reduced, Step};
pub use transducer::{Compose, Identity, Transducer};

pub use transforms::{
    cat, dedupe, drop_while, dropping, filtering, keep_indexed, keeping, mapcat, mapping, removing,
    replace, replace_indexed, take_nth, take_while, taking, Cat, Dedupe, DropWhile, Dropping,
    Filtering, KeepIndexed, Keeping, Mapping, Removing, Replacing, TakeNth, TakeWhile, Taking,
};

pub use collectors::{count, first, sum, to_vec};
pub use drive::{reduce_preserving, transduce, transduce_init};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_smoke() {
        // Multiples of four removed, then every third survivor.
        let pipeline = compose!(removing(|n: &i32| n % 4 == 0), take_nth(3));
        assert_eq!(to_vec(&pipeline, 1..=20), vec![3, 7, 11, 15, 19]);
    }

    #[test]
    fn test_unbounded_source_terminates() {
        // An infinite source is fine as long as something raises Reduced.
        assert_eq!(to_vec(&taking(2), 1u64..), vec![1, 2]);
    }

    #[test]
    fn test_identity_composes_neutrally() {
        let words = vec!["ox", "okapi", "ant", "gibbon"];

        let plain = filtering(|w: &&str| w.len() > 3);
        let wrapped_left = Identity.compose(filtering(|w: &&str| w.len() > 3));
        let wrapped_right = filtering(|w: &&str| w.len() > 3).compose(Identity);

        assert_eq!(to_vec(&plain, words.clone()), vec!["okapi", "gibbon"]);
        assert_eq!(
            to_vec(&wrapped_left, words.clone()),
            to_vec(&plain, words.clone())
        );
        assert_eq!(to_vec(&wrapped_right, words.clone()), to_vec(&plain, words));
    }

    #[test]
    fn test_stateful_stages_compose() {
        let pipeline = compose!(dedupe(), mapping(|n: i32| n * 3), taking(4));
        let result = to_vec(&pipeline, vec![1, 1, 2, 2, 3, 3, 4, 4, 5]);
        assert_eq!(result, vec![3, 6, 9, 12]);
    }
}
