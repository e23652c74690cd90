//! Smaller complement laws, checked with quickcheck.

use conduce::*;
use quickcheck_macros::quickcheck;
use std::collections::HashMap;

#[quickcheck]
fn filtering_and_removing_partition_the_source(vec: Vec<i32>) -> bool {
    let kept = count(&filtering(|x: &i32| x % 2 == 0), vec.clone());
    let dropped = count(&removing(|x: &i32| x % 2 == 0), vec.clone());
    kept + dropped == vec.len()
}

#[quickcheck]
fn replace_with_empty_map_is_identity(vec: Vec<i32>) -> bool {
    to_vec(&replace(HashMap::new()), vec.clone()) == vec
}

#[quickcheck]
fn take_nth_one_is_identity(vec: Vec<i32>) -> bool {
    to_vec(&take_nth(1), vec.clone()) == vec
}

#[quickcheck]
fn sum_matches_iterator_sum(vec: Vec<i16>) -> bool {
    let total: i64 = sum(&mapping(i64::from), vec.clone());
    total == vec.into_iter().map(i64::from).sum::<i64>()
}

#[quickcheck]
fn dropping_len_or_more_yields_nothing(vec: Vec<i32>, extra: u8) -> bool {
    let n = vec.len() + usize::from(extra);
    to_vec(&dropping(n), vec).is_empty()
}

#[quickcheck]
fn first_agrees_with_iterator_find(vec: Vec<i32>) -> bool {
    let found = first(&filtering(|x: &i32| *x > 0), vec.clone());
    found == vec.into_iter().find(|x| *x > 0)
}

#[quickcheck]
fn dedupe_is_idempotent(vec: Vec<u8>) -> bool {
    let once = to_vec(&dedupe(), vec);
    let twice = to_vec(&dedupe(), once.clone());
    once == twice
}
