//! End-to-end `encode` tests and run invariants.

use super::*;
use crate::reference::naive;
use crate::synth::synth_set;
use proptest::prelude::*;

const XS: [f64; 13] = [
    0., 1., 1., 0., 3., 4., 4., 3., 5., 6., 5.5, 9., 99.,
];
const YS: [f64; 13] = [
    0., 0., 1., 1., 3., 3., 4., 4., 1., 1., 3., 10., 11.,
];
const CLASSES: [i64; 13] = [0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3];

#[test]
fn square_at_two_digits() {
    let out = encode(&XS[..4], &YS[..4], &CLASSES[..4], 2).unwrap();
    assert_eq!(
        out,
        vec!["LINESTRING (0.00 0.00, 1.00 0.00, 1.00 1.00, 0.00 1.00)".to_string()]
    );
}

#[test]
fn square_at_one_and_zero_digits() {
    let one = encode(&XS[..4], &YS[..4], &CLASSES[..4], 1).unwrap();
    assert_eq!(one, vec!["LINESTRING (0.0 0.0, 1.0 0.0, 1.0 1.0, 0.0 1.0)".to_string()]);
    let zero = encode(&XS[..4], &YS[..4], &CLASSES[..4], 0).unwrap();
    assert_eq!(zero, vec!["LINESTRING (0 0, 1 0, 1 1, 0 1)".to_string()]);
}

#[test]
fn four_runs_in_order() {
    let out = encode(&XS, &YS, &CLASSES, 2).unwrap();
    assert_eq!(
        out,
        vec![
            "LINESTRING (0.00 0.00, 1.00 0.00, 1.00 1.00, 0.00 1.00)",
            "LINESTRING (3.00 3.00, 4.00 3.00, 4.00 4.00, 3.00 4.00)",
            "LINESTRING (5.00 1.00, 6.00 1.00, 5.50 3.00)",
            "LINESTRING (9.00 10.00, 99.00 11.00)",
        ]
    );
}

#[test]
fn short_x_reports_12_13_13() {
    let err = encode(&XS[..12], &YS, &CLASSES, 3).unwrap_err();
    assert_eq!(
        err,
        EncodeError::LengthMismatch {
            x: 12,
            y: 13,
            classes: 13
        }
    );
    assert!(err.to_string().contains("Array lengths mismatch 12 13 13"));
}

#[test]
fn negative_precision_fails() {
    let err = encode(&XS, &YS, &CLASSES, -1).unwrap_err();
    assert_eq!(err, EncodeError::InvalidPrecision { precision: -1 });
}

#[test]
fn empty_input_is_empty_output() {
    assert_eq!(encode(&[], &[], &[], 2).unwrap(), Vec::<String>::new());
}

#[test]
fn same_label_after_gap_is_a_new_run() {
    let out = encode(&[0., 1., 2., 3.], &[0., 1., 2., 3.], &[1, 1, 2, 1], 0).unwrap();
    assert_eq!(
        out,
        vec!["LINESTRING (0 0, 1 1)", "LINESTRING (2 2)", "LINESTRING (3 3)"]
    );
}

#[test]
fn matches_naive_on_seeded_sets() {
    for seed in 0..20 {
        let s = synth_set(seed, 5, 200);
        for precision in [0, 1, 2, 6] {
            let fast = encode(&s.x, &s.y, &s.classes, precision).unwrap();
            let slow = naive(&s.x, &s.y, &s.classes, precision).unwrap();
            assert_eq!(fast, slow, "seed {seed} precision {precision}");
        }
    }
}

/// Fixed-point text from an independent `format(v, ".{p}f")` formatter.
const FIXED_POINT_CASES: &[(f64, i64, &str)] = &[
    (1e22, 0, "10000000000000000000000"),
    (1e22, 2, "10000000000000000000000.00"),
    (123456789.125, 2, "123456789.12"),
    (5e-324, 0, "0"),
    (5e-324, 2, "0.00"),
    (-1e-7, 2, "-0.00"),
    (0.1, 1, "0.1"),
    (0.1, 20, "0.10000000000000000555"),
    (-2.5, 0, "-2"),
    (1e-5, 4, "0.0000"),
    (1e-5, 5, "0.00001"),
    (987654.4449, 3, "987654.445"),
    (9007199254740992.0, 1, "9007199254740992.0"),
    (
        f64::MAX,
        0,
        "17976931348623157081452742373170435679807056752584499659891747680315726078002853876058955\
         86327668781715404589535143824642343213268894641827684675467035375169860499105765512820762\
         45490090389328944075868508455133942304583236903222948165808559332123348274797826204144723\
         168738177180919299881250404026184124858368",
    ),
    (
        -1.5e300,
        0,
        "-1500000000000000078757140382806630373056702871662238732373781173267703686983362293679557\
         06262067179606555666574932581726541378485304064586346718827718006047427258080138986370560\
         67453506921821350890534298524561999176216785584514613201119791141702137418688881832300852\
         64257173504208294580298189100810240",
    ),
];

#[test]
fn fixed_point_matches_independent_formatter() {
    for &(v, p, expected) in FIXED_POINT_CASES {
        let out = encode(&[v], &[0.0], &[0], p).unwrap();
        let zero = if p == 0 {
            "0".to_string()
        } else {
            format!("0.{}", "0".repeat(p as usize))
        };
        assert_eq!(
            out,
            vec![format!("LINESTRING ({expected} {zero})")],
            "value {v:e} precision {p}"
        );
    }
}

#[test]
fn repeated_calls_are_identical() {
    let s = synth_set(451, 5, 200);
    let a = encode(&s.x, &s.y, &s.classes, 2).unwrap();
    let b = encode(&s.x, &s.y, &s.classes, 2).unwrap();
    assert_eq!(a, b);
}

/// Any finite magnitude, subnormals and signed zeros included.
fn coordinate() -> impl Strategy<Value = f64> {
    (prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO)
        .prop_filter("finite", |v| v.is_finite())
}

fn point_stream() -> impl Strategy<Value = (Vec<f64>, Vec<f64>, Vec<i64>)> {
    (0usize..32).prop_flat_map(|n| {
        (
            prop::collection::vec(coordinate(), n),
            prop::collection::vec(coordinate(), n),
            prop::collection::vec(0i64..4, n),
        )
    })
}

/// Count of fractional digits in a rendered number, `None` if no point.
fn fraction_digits(num: &str) -> Option<usize> {
    num.split_once('.').map(|(_, frac)| frac.len())
}

proptest! {
    #[test]
    fn output_count_is_run_count((x, y, c) in point_stream(), p in 0i64..8) {
        let out = encode(&x, &y, &c, p).unwrap();
        prop_assert_eq!(out.len(), count_runs(&c));
        prop_assert!(out.len() <= c.len());
        prop_assert_eq!(out.is_empty(), c.is_empty());
    }

    #[test]
    fn runs_partition_the_index_range(c in prop::collection::vec(-2i64..2, 0..80)) {
        let mut next = 0usize;
        let mut prev_label: Option<i64> = None;
        for r in runs(&c) {
            prop_assert_eq!(r.start, next);
            prop_assert!(r.end > r.start);
            let label = c[r.start];
            prop_assert!(c[r.clone()].iter().all(|&v| v == label));
            prop_assert_ne!(Some(label), prev_label);
            prev_label = Some(label);
            next = r.end;
        }
        prop_assert_eq!(next, c.len());
    }

    #[test]
    fn every_number_has_exact_digits((x, y, c) in point_stream(), p in 0usize..7) {
        let out = encode(&x, &y, &c, p as i64).unwrap();
        for wkt in &out {
            let body = wkt
                .strip_prefix("LINESTRING (")
                .and_then(|s| s.strip_suffix(')'))
                .unwrap();
            for pair in body.split(", ") {
                for num in pair.split(' ') {
                    if p == 0 {
                        prop_assert_eq!(fraction_digits(num), None);
                    } else {
                        prop_assert_eq!(fraction_digits(num), Some(p));
                    }
                }
            }
        }
    }

    #[test]
    fn agrees_with_naive((x, y, c) in point_stream(), p in 0i64..10) {
        prop_assert_eq!(
            encode(&x, &y, &c, p).unwrap(),
            naive(&x, &y, &c, p).unwrap()
        );
    }
}
