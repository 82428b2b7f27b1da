use std::io::{self, Write};

use log::debug;
use rand::Rng;

use crate::args::Kwargs;
use crate::error::{Error, Result};
use crate::matrix::{condd_to, Matrix};

pub const CONDD: &str = "condd";

/// Invokes a matrix function by name and decodes its JSON result.
pub fn call<S, R>(name: &str, sample: &[S], params: &Kwargs, rng: &mut R) -> Result<Matrix>
where
    S: AsRef<[f64]>,
    R: Rng + ?Sized,
{
    call_to(&mut io::stdout().lock(), name, sample, params, rng)
}

pub fn call_to<W, S, R>(out: &mut W, name: &str, sample: &[S], params: &Kwargs, rng: &mut R) -> Result<Matrix>
where
    W: Write + ?Sized,
    S: AsRef<[f64]>,
    R: Rng + ?Sized,
{
    debug!("call {name}: {} sample rows, params {params}", sample.len());
    let text = match name {
        CONDD => condd_to(out, sample, params, rng)?,
        _ => return Err(Error::UnknownFunction(name.to_owned())),
    };
    decode(&text)
}

/// Parses an array of arrays of numbers. Surrounding whitespace and single
/// quotes are stripped first.
pub fn decode(text: &str) -> Result<Matrix> {
    let text = text.trim().trim_matches('\'');
    Ok(serde_json::from_str(text)?)
}
