use primetable::{
    PrimalityOracle, RangeError, is_prime,
    sieve::{SieveBuilder, to_index, to_number},
};

fn is_prime_by_trial_division(n: u64) -> bool {
    n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

#[test]
fn agrees_with_trial_division_for_every_number_in_range() {
    for max_number in [0u64, 1, 2, 3, 7, 17, 18, 71, 101, 1_000, 4_096] {
        let oracle = PrimalityOracle::new(max_number).unwrap();
        for n in 0..=max_number {
            assert_eq!(
                oracle.check(n),
                Ok(is_prime_by_trial_division(n)),
                "n = {} with max_number = {}",
                n,
                max_number
            );
        }
    }
}

#[test]
fn index_map_round_trips_over_a_table() {
    let table = SieveBuilder::new(999).unwrap().build();
    for i in 0..table.size() {
        assert_eq!(to_index(to_number(i)), i);
    }
    assert_eq!(to_number(table.size() - 1), 999);
}

#[test]
fn rebuilding_yields_identical_tables() {
    for max_number in [17u64, 71, 2_048] {
        let first = SieveBuilder::new(max_number).unwrap().build();
        let second = SieveBuilder::new(max_number).unwrap().build();
        assert_eq!(first.bits(), second.bits());
    }
}

#[test]
fn range_violation_at_seventeen() {
    let oracle = PrimalityOracle::new(17).unwrap();
    assert_eq!(
        oracle.check(18),
        Err(RangeError {
            number: 18,
            max_number: 17
        })
    );
}

#[test]
fn global_query_matches_a_fresh_oracle() {
    let fresh = PrimalityOracle::new(primetable::DEFAULT_MAX_NUMBER).unwrap();
    for n in 0..=primetable::DEFAULT_MAX_NUMBER + 5 {
        assert_eq!(is_prime(n), fresh.check(n));
    }
}

#[test]
fn prime_count_matches_known_values() {
    assert_eq!(PrimalityOracle::new(10).unwrap().prime_count(), 4);
    assert_eq!(PrimalityOracle::new(100).unwrap().prime_count(), 25);
    assert_eq!(PrimalityOracle::new(1_000).unwrap().prime_count(), 168);
    assert_eq!(PrimalityOracle::new(10_000).unwrap().prime_count(), 1_229);
}
