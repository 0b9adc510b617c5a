extern crate monotone_cubic;

use std::{
    env,
    error::Error,
    fs::File,
    io::{self, BufWriter, Write},
};

use monotone_cubic::HermiteSpline;
use tracing_subscriber::EnvFilter;

/// Samples sin(x) on [0, 1] at 11 knots and writes the interpolated curve at 100 points as
/// `x;y` lines, to the file given as first argument or to stdout.
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let xs: Vec<f64> = (0..=10).map(|i| i as f64 / 10.0).collect();
    let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
    let spline = HermiteSpline::monotone(&xs, &ys)?;

    let mut out: Box<dyn Write> = match env::args().nth(1) {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    let number_of_points = 100;
    writeln!(out, "x;y")?;
    for i in 0..number_of_points {
        let x = i as f64 / number_of_points as f64;
        writeln!(out, "{:.4};{:.6}", x, spline.interpolate(x)?)?;
    }
    out.flush()?;
    Ok(())
}
