//! Property-based tests for the algebraic laws the transducers obey,
//! using randomly generated sources.

use conduce::*;
use proptest::prelude::*;
use std::cell::Cell;

// Law: driving through the empty composition equals a plain fold.
proptest! {
    #[test]
    fn test_empty_composition_is_a_plain_fold(vec in prop::collection::vec(any::<i32>(), 0..100)) {
        let folded = transduce_init(
            &compose!(),
            |acc: i64, x: i32| cont(acc + i64::from(x)),
            0i64,
            vec.clone(),
        );

        let expected: i64 = vec.into_iter().map(i64::from).sum();
        prop_assert_eq!(folded, expected);
    }
}

// Law: composition is associative.
proptest! {
    #[test]
    fn test_composition_associativity(vec in prop::collection::vec(any::<i32>(), 0..100)) {
        let left = mapping(|x: i32| x.saturating_add(1))
            .compose(filtering(|x: &i32| x % 2 == 0))
            .compose(mapping(|x: i32| x.saturating_mul(3)));
        let result1 = to_vec(&left, vec.clone());

        let right_inner = filtering(|x: &i32| x % 2 == 0)
            .compose(mapping(|x: i32| x.saturating_mul(3)));
        let right = mapping(|x: i32| x.saturating_add(1)).compose(right_inner);
        let result2 = to_vec(&right, vec.clone());

        let flat = compose!(
            mapping(|x: i32| x.saturating_add(1)),
            filtering(|x: &i32| x % 2 == 0),
            mapping(|x: i32| x.saturating_mul(3)),
        );
        let result3 = to_vec(&flat, vec);

        prop_assert_eq!(&result1, &result2);
        prop_assert_eq!(&result1, &result3);
    }
}

// Law: mapping(f) then mapping(g) fuses to mapping(g after f).
proptest! {
    #[test]
    fn test_map_fusion(vec in prop::collection::vec(any::<i32>(), 0..100)) {
        let f = |x: i32| x.saturating_add(1);
        let g = |x: i32| x.saturating_mul(2);

        let chained = mapping(f).compose(mapping(g));
        let fused = mapping(move |x: i32| g(f(x)));

        prop_assert_eq!(to_vec(&chained, vec.clone()), to_vec(&fused, vec));
    }
}

// Law: filter-then-map applies f only to passing items; map-then-filter
// selects on the mapped value.
proptest! {
    #[test]
    fn test_filter_map_interchange(vec in prop::collection::vec(any::<i32>(), 0..100)) {
        let filter_then_map = filtering(|x: &i32| x % 2 == 0)
            .compose(mapping(|x: i32| x.saturating_mul(3)));
        let expected1: Vec<i32> = vec
            .iter()
            .copied()
            .filter(|x| x % 2 == 0)
            .map(|x| x.saturating_mul(3))
            .collect();
        prop_assert_eq!(to_vec(&filter_then_map, vec.clone()), expected1);

        let map_then_filter = mapping(|x: i32| x.saturating_mul(3))
            .compose(filtering(|x: &i32| x % 2 == 0));
        let expected2: Vec<i32> = vec
            .iter()
            .copied()
            .map(|x| x.saturating_mul(3))
            .filter(|x| x % 2 == 0)
            .collect();
        prop_assert_eq!(to_vec(&map_then_filter, vec), expected2);
    }
}

// Law: taking(n) yields exactly the first n items, in order.
proptest! {
    #[test]
    fn test_taking_prefix(vec in prop::collection::vec(any::<i32>(), 0..100), n in 0usize..100) {
        let result = to_vec(&taking(n), vec.clone());
        let expected: Vec<i32> = vec.into_iter().take(n).collect();
        prop_assert_eq!(result, expected);
    }
}

// Law: taking(n) pulls at most n + 1 items from the source.
proptest! {
    #[test]
    fn test_taking_pull_budget(vec in prop::collection::vec(any::<i32>(), 0..100), n in 0usize..100) {
        let pulled = Cell::new(0usize);
        let source = vec.iter().copied().inspect(|_| pulled.set(pulled.get() + 1));

        let _ = to_vec(&taking(n), source);
        prop_assert!(pulled.get() <= n + 1);
        prop_assert!(pulled.get() <= vec.len());
    }
}

// Law: the outputs of taking(n) and dropping(n) concatenate back into the
// source.
proptest! {
    #[test]
    fn test_take_drop_complement(vec in prop::collection::vec(any::<i32>(), 0..100), n in 0usize..100) {
        let mut head = to_vec(&taking(n), vec.clone());
        let tail = to_vec(&dropping(n), vec.clone());
        head.extend(tail);
        prop_assert_eq!(head, vec);
    }
}

// Law: take_while and drop_while split the source at the first failing
// element.
proptest! {
    #[test]
    fn test_take_drop_while_complement(vec in prop::collection::vec(0i32..100, 0..100)) {
        let mut head = to_vec(&take_while(|x: &i32| *x < 50), vec.clone());
        let tail = to_vec(&drop_while(|x: &i32| *x < 50), vec.clone());
        head.extend(tail);
        prop_assert_eq!(head, vec);
    }
}

// Law: cat flattens exactly one level.
proptest! {
    #[test]
    fn test_cat_flattens(vecs in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..10), 0..20)) {
        let result = to_vec(&cat(), vecs.clone());
        let expected: Vec<i32> = vecs.into_iter().flatten().collect();
        prop_assert_eq!(result, expected);
    }
}

// Law: a take downstream of cat terminates at the k-th forwarded element
// no matter which inner iterable holds it.
proptest! {
    #[test]
    fn test_reduced_propagates_through_cat(
        vecs in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..10), 0..20),
        k in 0usize..50,
    ) {
        let pipeline = Transducer::<Vec<i32>, i32>::compose(cat(), taking(k));
        let result = to_vec(&pipeline, vecs.clone());
        let expected: Vec<i32> = vecs.into_iter().flatten().take(k).collect();
        prop_assert_eq!(result, expected);
    }
}

// Law: mapcat agrees with mapping composed with cat.
proptest! {
    #[test]
    fn test_mapcat_is_map_then_cat(vec in prop::collection::vec(0i32..8, 0..30)) {
        let direct = mapcat(|x: i32| 0..x);
        let composed = mapping(|x: i32| 0..x).compose(cat());
        prop_assert_eq!(to_vec(&direct, vec.clone()), to_vec(&composed, vec));
    }
}

// Law: dedupe removes exactly the consecutive duplicates.
proptest! {
    #[test]
    fn test_dedupe_matches_vec_dedup(vec in prop::collection::vec(0i32..5, 0..100)) {
        let result = to_vec(&dedupe(), vec.clone());
        let mut expected = vec;
        expected.dedup();
        prop_assert_eq!(result, expected);
    }
}

// Law: take_nth keeps the elements at positions n, 2n, 3n, ...
proptest! {
    #[test]
    fn test_take_nth_positions(vec in prop::collection::vec(any::<i32>(), 0..100), n in 1usize..10) {
        let result = to_vec(&take_nth(n), vec.clone());
        let expected: Vec<i32> = vec
            .into_iter()
            .enumerate()
            .filter(|(i, _)| (i + 1) % n == 0)
            .map(|(_, x)| x)
            .collect();
        prop_assert_eq!(result, expected);
    }
}

// Law: removing(p) equals filtering(not p).
proptest! {
    #[test]
    fn test_removing_is_negated_filtering(vec in prop::collection::vec(any::<i32>(), 0..100)) {
        let removed = to_vec(&removing(|x: &i32| x % 3 == 0), vec.clone());
        let filtered = to_vec(&filtering(|x: &i32| x % 3 != 0), vec);
        prop_assert_eq!(removed, filtered);
    }
}

// Law: keeping with a total handler is mapping.
proptest! {
    #[test]
    fn test_keeping_total_is_mapping(vec in prop::collection::vec(any::<i32>(), 0..100)) {
        let kept = to_vec(&keeping(|x: i32| Some(x.saturating_mul(2))), vec.clone());
        let mapped = to_vec(&mapping(|x: i32| x.saturating_mul(2)), vec);
        prop_assert_eq!(kept, mapped);
    }
}

// Law: a reused transducer value gives identical results on every run.
proptest! {
    #[test]
    fn test_stateful_pipeline_reuse(vec in prop::collection::vec(0i32..10, 0..50), n in 0usize..20) {
        let pipeline = compose!(dedupe(), taking(n));
        let first_run = to_vec(&pipeline, vec.clone());
        let second_run = to_vec(&pipeline, vec);
        prop_assert_eq!(first_run, second_run);
    }
}
