use std::{sync::Arc, thread};

use assert_approx_eq::assert_approx_eq;
use rand::Rng;

use monotone_cubic::{HermiteSpline, SplineError};

fn random_samples(rng: &mut impl Rng, size: usize) -> (Vec<f64>, Vec<f64>) {
    let mut xs = Vec::with_capacity(size);
    let mut x = rng.gen_range(-10.0..10.0);
    for _ in 0..size {
        xs.push(x);
        x += rng.gen_range(0.05..2.0);
    }
    let ys = (0..size).map(|_| rng.gen_range(-5.0..5.0)).collect();
    (xs, ys)
}

#[test]
fn interpolates_knots() {
    let mut rng = rand::thread_rng();

    for _ in 0..50 {
        let size = rng.gen_range(2..30);
        let (xs, ys) = random_samples(&mut rng, size);
        let spline = HermiteSpline::monotone(&xs, &ys).unwrap();

        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_eq!(*y, spline.interpolate(*x).unwrap());
        }
    }
}

#[test]
fn no_overshoot_on_monotone_runs() {
    let eps = 1e-9;
    let mut rng = rand::thread_rng();

    for _ in 0..50 {
        let size = rng.gen_range(3..30);
        let (xs, ys) = random_samples(&mut rng, size);
        let spline = HermiteSpline::monotone(&xs, &ys).unwrap();

        for i in 0..xs.len() - 2 {
            let increasing = ys[i] <= ys[i + 1] && ys[i + 1] <= ys[i + 2];
            let decreasing = ys[i] >= ys[i + 1] && ys[i + 1] >= ys[i + 2];
            if !increasing && !decreasing {
                continue;
            }

            let steps = 200;
            let step = (xs[i + 2] - xs[i]) / steps as f64;
            let mut previous = spline.interpolate(xs[i]).unwrap();
            for s in 1..=steps {
                let x = (xs[i] + step * s as f64).min(xs[i + 2]);
                let value = spline.interpolate(x).unwrap();
                if increasing {
                    assert!(value >= previous - eps, "dip at x = {} in increasing run {}", x, i);
                    assert!(value <= ys[i + 2] + eps);
                } else {
                    assert!(value <= previous + eps, "bump at x = {} in decreasing run {}", x, i);
                    assert!(value >= ys[i + 2] - eps);
                }
                previous = value;
            }
        }
    }
}

#[test]
fn continuous_at_knots() {
    let eps = 1e-6;
    let mut rng = rand::thread_rng();
    let (xs, ys) = random_samples(&mut rng, 20);
    let spline = HermiteSpline::monotone(&xs, &ys).unwrap();

    for i in 1..xs.len() - 1 {
        let delta = 1e-9;
        assert_approx_eq!(spline.interpolate(xs[i] - delta).unwrap(), ys[i], eps);
        assert_approx_eq!(spline.interpolate(xs[i] + delta).unwrap(), ys[i], eps);
    }
}

#[test]
fn last_knot_is_returned_exactly() {
    let xs = vec![0.0, 0.3, 0.7, 1.0];
    let ys = vec![0.1, 0.2, 0.9, 0.123456789];
    let spline = HermiteSpline::monotone(&xs, &ys).unwrap();

    assert_eq!(0.123456789, spline.interpolate(1.0).unwrap());
    assert_eq!(0.123456789, spline.batch_interpolate(&[0.5, 1.0]).unwrap()[1]);
}

#[test]
fn sine_table() {
    let xs: Vec<f64> = (0..=10).map(|i| i as f64 / 10.0).collect();
    let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
    let spline = HermiteSpline::monotone(&xs, &ys).unwrap();

    assert_eq!(0.0, spline.interpolate(0.0).unwrap());
    assert_eq!(1.0_f64.sin(), spline.interpolate(1.0).unwrap());
    assert_approx_eq!(spline.interpolate(0.05).unwrap(), 0.05_f64.sin(), 1e-3);

    let x_vector: Vec<f64> = (0..100).map(|i| i as f64 / 100.0).collect();
    for (x, y) in x_vector.iter().zip(spline.batch_interpolate(&x_vector).unwrap()) {
        assert_approx_eq!(y, x.sin(), 1e-3);
    }
}

#[test]
fn flat_table() {
    let spline = HermiteSpline::monotone(&[0.0, 1.0, 2.0, 3.0], &[5.0, 5.0, 5.0, 5.0]).unwrap();

    assert_eq!(&[0.0; 4], spline.knots().tangents());
    for i in 0..=300 {
        assert_eq!(5.0, spline.interpolate(i as f64 / 100.0).unwrap());
    }
}

#[test]
fn rejects_unordered_abscissae() {
    let result = HermiteSpline::monotone(&[0.0, 1.0, 0.5], &[0.0, 1.0, 2.0]);

    assert_eq!(Err(SplineError::NotStrictlyIncreasing { index: 1 }), result);
    assert!(result.unwrap_err().is_invalid_input());
}

#[test]
fn shared_between_threads() {
    let xs: Vec<f64> = (0..50).map(|i| i as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|x| x.sqrt()).collect();
    let spline = Arc::new(HermiteSpline::monotone(&xs, &ys).unwrap());
    let expected: Vec<f64> = (0..490).map(|i| spline.interpolate(i as f64 / 10.0).unwrap()).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let spline = Arc::clone(&spline);
            thread::spawn(move || {
                (0..490).map(|i| spline.interpolate(i as f64 / 10.0).unwrap()).collect::<Vec<f64>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(expected, handle.join().unwrap());
    }
}

#[test]
fn rejects_non_finite_and_overflowing_samples() {
    let cases: Vec<(Vec<f64>, Vec<f64>)> = vec![
        (vec![0.0, f64::INFINITY], vec![1.0, 2.0]),
        (vec![-1e308, 1e308], vec![1.0, 2.0]),
        (vec![0.0, 1.0, 2.0], vec![0.0, f64::NAN, 1.0]),
        (vec![0.0, 1.0], vec![-1e308, 1e308]),
    ];

    for (xs, ys) in cases {
        let err = HermiteSpline::monotone(&xs, &ys).unwrap_err();
        assert!(matches!(err, SplineError::NonFinite { .. }), "{:?} accepted for xs = {:?}", err, xs);
        assert!(err.is_invalid_input());
    }
}

#[test]
fn rejects_non_finite_tangents() {
    let result = HermiteSpline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], &[1.0, f64::INFINITY, 1.0]);

    assert_eq!(Err(SplineError::NonFinite { name: "ms", index: 1 }), result);
}

#[test]
fn huge_but_finite_samples_stay_finite() {
    let xs = vec![-1e300, 0.0, 1e300];
    let ys = vec![-1e300, 0.0, 1e300];
    let spline = HermiteSpline::monotone(&xs, &ys).unwrap();

    for (x, y) in xs.iter().zip(ys.iter()) {
        assert_eq!(*y, spline.interpolate(*x).unwrap());
    }
    assert!(spline.interpolate(5e299).unwrap().is_finite());
}
