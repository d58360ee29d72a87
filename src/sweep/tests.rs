//! Scenario and randomized property tests for the sweep.

use super::*;
use qtty::{Quantity, Second};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type TestInterval = Interval<Second>;

const OPS: [BooleanOp; 3] = [BooleanOp::Union, BooleanOp::Intersection, BooleanOp::Difference];

/// Helper to create intervals more concisely in tests.
fn iv(start: f64, end: f64) -> TestInterval {
    Interval::from_f64(start, end)
}

/// Random canonical operand on integer coordinates in `[0, 40]`.
///
/// Lengths start at 0, so single-point intervals are common. Gaps between
/// consecutive intervals are at least 1, so closed intervals never touch.
fn random_operand(rng: &mut StdRng) -> Vec<TestInterval> {
    let count = rng.gen_range(0..6);
    let mut cursor = rng.gen_range(0..4) as f64;
    let mut intervals = Vec::with_capacity(count);
    for _ in 0..count {
        let length = rng.gen_range(0..5) as f64;
        intervals.push(iv(cursor, cursor + length));
        cursor += length + rng.gen_range(1..4) as f64;
    }
    intervals
}

fn member(intervals: &[TestInterval], x: f64) -> bool {
    intervals.iter().any(|i| i.contains(Quantity::new(x)))
}

fn assert_strictly_canonical(result: &[TestInterval], context: &str) {
    for w in result.windows(2) {
        assert!(
            w[0].end().value() < w[1].start().value(),
            "{context}: {} and {} overlap or touch",
            w[0],
            w[1]
        );
    }
    assert!(is_canonical(result), "{context}");
}

mod scenarios {
    use super::*;

    #[test]
    fn identical_operands() {
        let a = vec![iv(1.0, 5.0), iv(6.0, 9.0)];
        assert_eq!(boolean(BooleanOp::Union, &a, &a), a);
        assert_eq!(boolean(BooleanOp::Intersection, &a, &a), a);
        assert!(boolean(BooleanOp::Difference, &a, &a).is_empty());
    }

    #[test]
    fn partial_overlap() {
        let left = [iv(1.0, 3.0)];
        let right = [iv(2.0, 4.0)];
        assert_eq!(boolean(BooleanOp::Union, &left, &right), vec![iv(1.0, 4.0)]);
        assert_eq!(boolean(BooleanOp::Intersection, &left, &right), vec![iv(2.0, 3.0)]);
        assert_eq!(boolean(BooleanOp::Difference, &left, &right), vec![iv(1.0, 2.0)]);
        assert_eq!(boolean(BooleanOp::Difference, &right, &left), vec![iv(3.0, 4.0)]);
    }

    #[test]
    fn difference_punches_holes() {
        let left = [iv(0.0, 10.0)];
        let right = [iv(3.0, 4.0), iv(6.0, 7.0)];
        assert_eq!(
            boolean(BooleanOp::Difference, &left, &right),
            vec![iv(0.0, 3.0), iv(4.0, 6.0), iv(7.0, 10.0)]
        );
    }

    #[test]
    fn empty_left_operand() {
        let right = [iv(1.0, 2.0)];
        assert_eq!(boolean(BooleanOp::Union, &[], &right), vec![iv(1.0, 2.0)]);
        assert!(boolean(BooleanOp::Intersection, &[], &right).is_empty());
        assert!(boolean(BooleanOp::Difference, &[], &right).is_empty());
    }

    #[test]
    fn shared_boundaries() {
        let left = [iv(0.0, 5.0)];
        let right = [iv(5.0, 9.0)];
        assert_eq!(boolean(BooleanOp::Union, &left, &right), vec![iv(0.0, 9.0)]);
        assert!(boolean(BooleanOp::Intersection, &left, &right).is_empty());
        assert_eq!(boolean(BooleanOp::Difference, &left, &right), vec![iv(0.0, 5.0)]);
        assert_eq!(boolean(BooleanOp::Difference, &right, &left), vec![iv(5.0, 9.0)]);
    }

    #[test]
    fn union_bridges_gaps() {
        let left = [iv(0.0, 2.0), iv(4.0, 6.0), iv(8.0, 10.0)];
        let right = [iv(1.0, 9.0)];
        assert_eq!(boolean(BooleanOp::Union, &left, &right), vec![iv(0.0, 10.0)]);
        assert_eq!(
            boolean(BooleanOp::Intersection, &left, &right),
            vec![iv(1.0, 2.0), iv(4.0, 6.0), iv(8.0, 9.0)]
        );
        assert_eq!(
            boolean(BooleanOp::Difference, &right, &left),
            vec![iv(2.0, 4.0), iv(6.0, 8.0)]
        );
    }

    #[test]
    fn nested_boundaries_at_same_start() {
        let left = [iv(0.0, 10.0)];
        let right = [iv(0.0, 4.0)];
        assert_eq!(boolean(BooleanOp::Difference, &left, &right), vec![iv(4.0, 10.0)]);
        assert_eq!(boolean(BooleanOp::Intersection, &left, &right), vec![iv(0.0, 4.0)]);
    }

    #[test]
    fn nested_boundaries_at_same_end() {
        let left = [iv(0.0, 10.0)];
        let right = [iv(6.0, 10.0)];
        assert_eq!(boolean(BooleanOp::Difference, &left, &right), vec![iv(0.0, 6.0)]);
        assert_eq!(boolean(BooleanOp::Union, &right, &left), vec![iv(0.0, 10.0)]);
    }

    #[test]
    fn boundary_events_cover_every_endpoint() {
        let left = [iv(0.0, 2.0), iv(4.0, 4.0)];
        let right = [iv(2.0, 3.0)];
        let events = boundary_events(&left, &right);
        assert_eq!(events.len(), 2 * (left.len() + right.len()));
        assert_eq!(events.iter().filter(|e| e.operand == Operand::Left).count(), 4);
        // Left exit at 2 is paired with the right entry that precedes it.
        assert_eq!(
            events[1],
            BoundaryEvent {
                operand: Operand::Right,
                index: 0,
                endpoint: crate::intervals::Endpoint::Start,
                coincident_next: true,
            }
        );
    }

    #[test]
    fn inputs_are_left_untouched() {
        let left = vec![iv(0.0, 3.0), iv(5.0, 8.0)];
        let right = vec![iv(2.0, 6.0)];
        let (left_before, right_before) = (left.clone(), right.clone());
        for op in OPS {
            let _ = boolean(op, &left, &right);
        }
        assert_eq!(left, left_before);
        assert_eq!(right, right_before);
    }
}

mod checked {
    use super::*;

    #[test]
    fn default_config_matches_unchecked() {
        let left = [iv(0.0, 10.0)];
        let right = [iv(3.0, 4.0)];
        for op in OPS {
            assert_eq!(
                boolean_with(&SweepConfig::default(), op, &left, &right),
                Ok(boolean(op, &left, &right))
            );
        }
    }

    #[test]
    fn strict_rejects_touching_left_operand() {
        let left = [iv(0.0, 2.0), iv(2.0, 4.0)];
        let right = [iv(1.0, 3.0)];
        assert_eq!(
            boolean_with(&SweepConfig::strict(), BooleanOp::Union, &left, &right),
            Err(IntervalError::NotCanonical {
                operand: Operand::Left,
                index: 1
            })
        );
    }

    #[test]
    fn strict_rejects_unsorted_right_operand() {
        let left = [iv(0.0, 2.0)];
        let right = [iv(5.0, 6.0), iv(1.0, 3.0)];
        assert_eq!(
            boolean_with(&SweepConfig::strict(), BooleanOp::Intersection, &left, &right),
            Err(IntervalError::NotCanonical {
                operand: Operand::Right,
                index: 1
            })
        );
    }

    #[test]
    fn strict_accepts_canonical_operands() {
        let left = [iv(0.0, 2.0), iv(4.0, 6.0)];
        let right = [iv(1.0, 5.0)];
        assert_eq!(
            boolean_with(&SweepConfig::strict(), BooleanOp::Union, &left, &right),
            Ok(vec![iv(0.0, 6.0)])
        );
    }

    #[test]
    fn raw_output_keeps_touching_results() {
        let config = SweepConfig {
            coalesce_touching: false,
            ..SweepConfig::default()
        };
        let left = [iv(0.0, 10.0)];
        let right = [iv(5.0, 5.0)];
        assert_eq!(
            boolean_with(&config, BooleanOp::Difference, &left, &right),
            Ok(vec![iv(0.0, 5.0), iv(5.0, 10.0)])
        );
        assert_eq!(
            boolean(BooleanOp::Difference, &left, &right),
            vec![iv(0.0, 10.0)]
        );
    }
}

mod properties {
    use super::*;

    const SEED: u64 = 0x5eed_1e55;
    const ROUNDS: usize = 500;

    #[test]
    fn coverage_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(SEED);
        for round in 0..ROUNDS {
            let left = random_operand(&mut rng);
            let right = random_operand(&mut rng);
            for op in OPS {
                let result = boolean(op, &left, &right);
                let context = format!("round {round}: {op:?} of {left:?} and {right:?} gave {result:?}");
                assert_strictly_canonical(&result, &context);

                // Quarter offsets never land on an integer boundary.
                for step in -2..100 {
                    let x = step as f64 * 0.5 + 0.25;
                    let expected = op.apply(member(&left, x), member(&right, x));
                    assert_eq!(member(&result, x), expected, "{context} at {x}");
                }
            }
        }
    }

    #[test]
    fn commutative_ops_commute() {
        let mut rng = StdRng::seed_from_u64(SEED ^ 1);
        for round in 0..ROUNDS {
            let a = random_operand(&mut rng);
            let b = random_operand(&mut rng);
            for op in OPS.into_iter().filter(|op| op.is_commutative()) {
                assert_eq!(
                    boolean(op, &a, &b),
                    boolean(op, &b, &a),
                    "round {round}: {op:?} of {a:?} and {b:?}"
                );
            }
        }
    }

    #[test]
    fn single_points_on_boundaries_commute() {
        let wide = [iv(0.0, 5.0), iv(8.0, 12.0)];
        let points = [iv(5.0, 5.0), iv(8.0, 8.0), iv(12.0, 12.0)];
        for op in OPS.into_iter().filter(|op| op.is_commutative()) {
            assert_eq!(boolean(op, &wide, &points), boolean(op, &points, &wide), "{op:?}");
        }
        assert_eq!(boolean(BooleanOp::Intersection, &wide, &points), points.to_vec());
    }

    #[test]
    fn difference_does_not_commute() {
        assert!(!BooleanOp::Difference.is_commutative());
        let a = [iv(0.0, 4.0)];
        let b = [iv(2.0, 6.0)];
        assert_ne!(
            boolean(BooleanOp::Difference, &a, &b),
            boolean(BooleanOp::Difference, &b, &a)
        );
    }

    #[test]
    fn idempotence() {
        let mut rng = StdRng::seed_from_u64(SEED ^ 2);
        for _ in 0..ROUNDS {
            let a = random_operand(&mut rng);
            assert_eq!(boolean(BooleanOp::Union, &a, &a), a);
            assert_eq!(boolean(BooleanOp::Intersection, &a, &a), a);
            assert!(boolean(BooleanOp::Difference, &a, &a).is_empty());
        }
    }

    #[test]
    fn empty_operand_identities() {
        let mut rng = StdRng::seed_from_u64(SEED ^ 3);
        for _ in 0..ROUNDS {
            let a = random_operand(&mut rng);
            assert_eq!(boolean(BooleanOp::Union, &a, &[]), a);
            assert!(boolean(BooleanOp::Intersection, &a, &[]).is_empty());
            assert_eq!(boolean(BooleanOp::Difference, &a, &[]), a);
        }
    }

    #[test]
    fn difference_and_intersection_partition_left() {
        let mut rng = StdRng::seed_from_u64(SEED ^ 4);
        for _ in 0..ROUNDS {
            let a = random_operand(&mut rng);
            let b = random_operand(&mut rng);
            let kept = boolean(BooleanOp::Difference, &a, &b);
            let shared = boolean(BooleanOp::Intersection, &a, &b);
            assert!(boolean(BooleanOp::Intersection, &kept, &shared)
                .iter()
                .all(|i| i.is_degenerate()));
        }
    }
}
