extern crate monotone_cubic;

use monotone_cubic::{HermiteSpline, Limiter, MonotoneOptions};
use tracing_subscriber::EnvFilter;

/// Step-like data: averaged tangents alone dip below the first plateau, the limited curve does not.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let xs = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let ys = vec![0.0, 0.1, 10.0, 10.0, 10.5, 20.0];

    let raw_options = MonotoneOptions::default().with_limiter(Limiter::None);
    let raw = HermiteSpline::monotone_with(&xs, &ys, &raw_options).unwrap();
    let limited = HermiteSpline::monotone(&xs, &ys).unwrap();

    let (x_min, x_max) = limited.domain();
    let number_of_steps = 50;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;raw;limited");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!(
            "{:.2};{:.3};{:.3}",
            x,
            raw.interpolate_clamped(x),
            limited.interpolate_clamped(x)
        );
    }
}
