use std::io::{self, Write};

use log::debug;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::args::Kwargs;
use crate::error::Result;
use crate::range::{RangeSpec, Shape};

pub type Matrix = Vec<Vec<f64>>;

pub fn gen_normal<R: Rng + ?Sized>(rng: &mut R, shape: Shape) -> Matrix {
    (0..shape.rows)
        .map(|_| {
            (0..shape.columns)
                .map(|_| rng.sample::<f64, _>(StandardNormal))
                .collect()
        })
        .collect()
}

/// Generates a standard-normal matrix shaped by `params` (`start`, `step`,
/// `end`) and the width of `sample`, prints it and returns it as JSON.
pub fn condd<S, R>(sample: &[S], params: &Kwargs, rng: &mut R) -> Result<String>
where
    S: AsRef<[f64]>,
    R: Rng + ?Sized,
{
    condd_to(&mut io::stdout().lock(), sample, params, rng)
}

pub fn condd_to<W, S, R>(out: &mut W, sample: &[S], params: &Kwargs, rng: &mut R) -> Result<String>
where
    W: Write + ?Sized,
    S: AsRef<[f64]>,
    R: Rng + ?Sized,
{
    let range = RangeSpec::from_kwargs(params)?;
    let shape = Shape::infer(sample, &range)?;
    debug!("condd: {range:?} -> {shape:?}");

    writeln!(out, "{} rows {} columns", shape.rows, shape.columns)?;
    let resp = gen_normal(rng, shape);
    writeln!(out, "{resp:?}")?;
    Ok(serde_json::to_string(&resp)?)
}
