//! Property tests for stream equivalence and ordering

use proptest::prelude::*;
use segsieve_core::{is_prime_u64, partition};
use segsieve_engine::{is_prime, primes_upto, range_sieve, sieve, Primes, SieveError};

fn strictly_increasing(values: &[u64]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

proptest! {
    #[test]
    fn prop_primes_upto_equals_sieve(n in 0i64..20_000, width in 1u64..3_000) {
        let primes = Primes::builder().segment_width(width).build().unwrap();
        let chunked: Vec<u64> = primes.primes_upto(n).unwrap().collect();
        let full: Vec<u64> = sieve(n).unwrap().collect();
        prop_assert_eq!(chunked, full);
    }

    #[test]
    fn prop_range_sieve_matches_trial_division(lower in 0i64..50_000, len in 0i64..3_000) {
        let upper = lower + len;
        let primes: Vec<u64> = range_sieve(lower, upper).unwrap().collect();
        let expected: Vec<u64> = (lower as u64..upper as u64)
            .filter(|&x| is_prime_u64(x))
            .collect();

        prop_assert!(strictly_increasing(&primes));
        prop_assert_eq!(primes, expected);
    }

    #[test]
    fn prop_ranges_over_partition_concatenate_to_sieve(n in 0u64..10_000, width in 1u64..1_500) {
        let mut stitched = Vec::new();
        for segment in partition(n, width) {
            stitched.extend(range_sieve(segment.lower() as i64, segment.upper() as i64).unwrap());
        }
        prop_assert_eq!(stitched, sieve(n as i64).unwrap().collect::<Vec<_>>());
    }

    #[test]
    fn prop_every_streamed_value_is_prime_and_below_bound(n in 0i64..30_000) {
        let primes: Vec<u64> = primes_upto(n).unwrap().collect();
        prop_assert!(strictly_increasing(&primes));
        for &p in &primes {
            prop_assert!(is_prime(p as i64).unwrap());
            prop_assert!((p as i64) < n);
        }
    }

    #[test]
    fn prop_twin_pairs_are_valid(n in 0i64..30_000, width in 1u64..5_000) {
        let primes = Primes::builder().segment_width(width).build().unwrap();
        for pair in primes.twin_primes(n).unwrap() {
            prop_assert_eq!(pair.upper, pair.lower + 2);
            prop_assert!(is_prime_u64(pair.lower));
            prop_assert!(is_prime_u64(pair.upper));
            prop_assert!((pair.upper as i64) < n);
        }
    }

    #[test]
    fn prop_negative_inputs_are_rejected(n in i64::MIN..0) {
        let expected = SieveError::NegativeInteger { value: n as i128 };
        prop_assert_eq!(sieve(n).unwrap_err(), expected.clone());
        prop_assert_eq!(primes_upto(n).unwrap_err(), expected.clone());
        prop_assert_eq!(is_prime(n).unwrap_err(), expected);
    }

    #[test]
    fn prop_reversed_range_is_rejected(a in 0i64..1_000_000, b in 0i64..1_000_000) {
        prop_assume!(a != b);
        let (lower, upper) = if a > b { (a, b) } else { (b, a) };
        let is_order_error = matches!(
            range_sieve(lower, upper),
            Err(SieveError::LowerGreaterThanUpper { .. })
        );
        prop_assert!(is_order_error);
    }
}
