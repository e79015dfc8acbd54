mod common;

use rand::{thread_rng, Rng, RngCore, SeedableRng};

use twister::mersenne::mt19937_64::{CANONICAL_N, M, REFERENCE_N};
use twister::mersenne::recovery;
use twister::report::{fraction, fraction_line, fraction_report};
use twister::Mt19937_64;

const SEED: u64 = 143439545;

#[test]
fn reference_first_value() {
    let mut rng = Mt19937_64::new(SEED);

    assert_eq!(rng.extract().unwrap(), 0x1fdb_a4d6_c1ad_7888);
}

#[test]
fn reference_report() {
    let expected = common::read_res("mt19937_64_143439545.txt");
    let mut rng = Mt19937_64::new(SEED);

    assert_eq!(fraction_report(&mut rng, 1000).unwrap(), expected);
}

#[test]
fn second_twist_boundary() {
    let mut rng = Mt19937_64::new(SEED);
    let outputs: Vec<u64> = rng.by_ref().take(REFERENCE_N + 2).collect();

    assert_eq!(outputs[REFERENCE_N - 1], 5828514153163982841);
    // a fresh twist, not a replay of the first cycle
    assert_eq!(outputs[REFERENCE_N], 10192536368796217315);
    assert_eq!(outputs[REFERENCE_N + 1], 15510242329333690731);
    assert_ne!(outputs[REFERENCE_N], outputs[0]);

    let lines = common::read_res_lines("mt19937_64_143439545.txt");
    assert_eq!(lines[REFERENCE_N], fraction_line(REFERENCE_N, outputs[REFERENCE_N]));
}

#[test]
fn determinism() {
    let seed = thread_rng().next_u64();
    let mut left = Mt19937_64::new(seed);
    let mut right = Mt19937_64::new(seed);

    for _ in 0..3 * REFERENCE_N {
        assert_eq!(left.extract(), right.extract());
    }

    let mut forked = left.clone();
    assert_eq!(forked.next(), left.next());
}

#[test]
fn canonical_register_diverges_at_wrapped_tap() {
    let reference: Vec<u64> = Mt19937_64::new(SEED).take(M + 1).collect();
    let canonical: Vec<u64> = Mt19937_64::<CANONICAL_N>::seeded(SEED).take(M + 1).collect();

    // slots below M read MT[i + M] without wrapping, so both registers agree there
    assert_eq!(reference[..M], canonical[..M]);
    assert_ne!(reference[M], canonical[M]);
}

#[test]
fn rand_helpers() {
    let mut rng: Mt19937_64 = SeedableRng::seed_from_u64(SEED);

    for _ in 0..1000 {
        let x: f64 = rng.gen();
        assert!((0.0..1.0).contains(&x));
        assert!(rng.gen_range(10, 20) >= 10);
    }

    let mut bytes = [0_u8; 37];
    rng.fill_bytes(&mut bytes);
    assert!(bytes.iter().any(|&b| b != 0));
}

#[test]
fn fractions_in_unit_interval() {
    let mut rng = Mt19937_64::new(SEED);

    for value in rng.by_ref().take(2000) {
        let x = fraction(value);
        assert!(x >= 0.0 && x <= 1.0);
    }
}

#[test]
fn clone_from_outputs() {
    let mut rng = Mt19937_64::new(thread_rng().next_u64());
    let mut cloned = recovery::clone(&mut rng).unwrap();

    let expected: Vec<u64> = rng.take(1000).collect();
    let actual: Vec<u64> = cloned.by_ref().take(1000).collect();
    assert_eq!(actual, expected);
}
