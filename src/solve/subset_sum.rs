//! Subset-Sum by reachable-sum dynamic programming.
//!
//! Numbers are processed in order. For each one, every sum reachable before it
//! was seen is extended by its value; a sum is recorded with the first number
//! that reaches it and never overwritten. Following the recorded numbers back
//! from the target yields a subset, each number used at most once.

use std::collections::HashMap;

use log::debug;
use num_bigint::BigUint;

use crate::certificate::{Solution, Subset};
use crate::ssp::SubsetSum;

/// Finds a subset of the numbers summing exactly to the target.
///
/// Sums above the target are never recorded. A zero target is reached by the
/// empty subset.
///
/// # Panics
///
/// Panics if the instance has no numbers.
pub fn solve(ssp: &SubsetSum) -> Solution<Subset> {
    assert!(!ssp.is_empty(), "Cannot solve a Subset-Sum instance without numbers");
    let values: Vec<BigUint> = ssp.numbers().iter().map(|n| n.value()).collect();
    let target = ssp.target_value();
    debug!("subset-sum: {} numbers, target {}", values.len(), target);

    // sum -> number that first reached it (`None` for the empty sum).
    let mut reached: HashMap<BigUint, Option<usize>> = HashMap::new();
    let mut order: Vec<BigUint> = vec![BigUint::ZERO];
    reached.insert(BigUint::ZERO, None);

    for (i, value) in values.iter().enumerate() {
        let known = order.len();
        for k in 0..known {
            let sum = &order[k] + value;
            if sum > target || reached.contains_key(&sum) {
                continue;
            }
            reached.insert(sum.clone(), Some(i));
            order.push(sum);
        }
        if reached.contains_key(&target) {
            break;
        }
    }
    debug!("subset-sum: {} reachable sums", order.len());

    if !reached.contains_key(&target) {
        return Solution::Unsolvable;
    }

    let mut used = vec![false; values.len()];
    let mut chosen = Vec::new();
    let mut sum = target;
    while let Some(&Some(i)) = reached.get(&sum) {
        used[i] = true;
        chosen.push(ssp.numbers()[i].id.clone());
        sum -= &values[i];
    }
    assert_eq!(sum, BigUint::ZERO, "Reconstruction must end at the empty sum");

    Solution::Certificate(Subset { chosen, used })
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::id::NumberId;
    use crate::ssp::SspNumber;

    #[test]
    fn test_first_writer_wins() {
        let ssp = SubsetSum::from_values(&[1, 2, 3], 3);
        let subset = solve(&ssp).into_certificate().unwrap();
        assert_eq!(subset.chosen, [NumberId::named("1"), NumberId::named("0")]);
        assert_eq!(subset.used, [true, true, false]);
        assert!(ssp.is_solved_by(&subset.used));
    }

    #[test]
    fn test_each_number_used_once() {
        let ssp = SubsetSum::from_values(&[2, 5], 4);
        assert!(solve(&ssp).is_unsolvable());
    }

    #[test]
    fn test_zero_target() {
        let ssp = SubsetSum::from_values(&[4, 7], 0);
        let subset = solve(&ssp).into_certificate().unwrap();
        assert!(subset.chosen.is_empty());
        assert_eq!(subset.used, [false, false]);
    }

    #[test]
    fn test_wide_numbers() {
        // 25-digit values overflow every machine integer.
        let mut ssp = SubsetSum::new([vec![2], vec![0; 23], vec![2]].concat());
        let one = [vec![1], vec![0; 23], vec![1]].concat();
        let other = [vec![0], vec![0; 23], vec![5]].concat();
        ssp.add_number(SspNumber::new(NumberId::named("a"), one.clone()));
        ssp.add_number(SspNumber::new(NumberId::named("b"), other));
        ssp.add_number(SspNumber::new(NumberId::named("c"), one));
        let subset = solve(&ssp).into_certificate().unwrap();
        assert_eq!(subset.used, [true, false, true]);
    }

    #[test]
    fn test_unreachable_target() {
        let ssp = SubsetSum::from_values(&[3, 6, 9], 10);
        assert!(solve(&ssp).is_unsolvable());
    }
}
