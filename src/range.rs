use crate::args::Kwargs;
use crate::error::{Error, Result};

const WHOLE_TOLERANCE: f64 = 1e-9;

/// Upper bound on `rows * columns`; empty rows count as one cell each.
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSpec {
    pub start: f64,
    pub step: f64,
    pub end: f64,
}

impl RangeSpec {
    pub const fn new(start: f64, step: f64, end: f64) -> Self {
        Self { start, step, end }
    }

    pub fn to_kwargs(&self) -> Kwargs {
        [("start", self.start), ("step", self.step), ("end", self.end)]
            .into_iter()
            .collect()
    }

    /// Reads `start`, `step` and `end` from keyword arguments. Integers and
    /// floats are both accepted.
    pub fn from_kwargs(params: &Kwargs) -> Result<Self> {
        let get = |name: &str| -> Result<f64> {
            let value = params
                .get(name)
                .ok_or_else(|| Error::MissingConfiguration(name.to_owned()))?;
            value.as_f64().ok_or_else(|| Error::InvalidParameter {
                name: name.to_owned(),
                value: value.clone(),
            })
        };
        Ok(Self::new(get("start")?, get("step")?, get("end")?))
    }

    /// `(end - start) / step + 1`. The quotient must be a non-negative whole
    /// number.
    pub fn rows(&self) -> Result<usize> {
        if self.step == 0.0 {
            return Err(Error::ZeroStep);
        }
        let quotient = (self.end - self.start) / self.step;
        let whole = quotient.round();
        if !quotient.is_finite() || (quotient - whole).abs() > WHOLE_TOLERANCE {
            return Err(Error::FractionalRows(quotient));
        }
        if whole < 0.0 {
            return Err(Error::NegativeRows(quotient));
        }
        if whole >= usize::MAX as f64 {
            return Err(Error::TooManyRows(quotient));
        }
        (whole as usize)
            .checked_add(1)
            .ok_or(Error::TooManyRows(quotient))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl Shape {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Rows come from the range, columns from the width of the first sample
    /// row minus one. The rest of the sample is ignored.
    pub fn infer<S: AsRef<[f64]>>(sample: &[S], range: &RangeSpec) -> Result<Self> {
        let rows = range.rows()?;
        let first = sample
            .first()
            .ok_or_else(|| Error::InvalidShape("sample has no rows".to_owned()))?;
        let columns = first
            .as_ref()
            .len()
            .checked_sub(1)
            .ok_or_else(|| Error::InvalidShape("first sample row is empty".to_owned()))?;
        if rows.saturating_mul(columns.max(1)) > MAX_CELLS {
            return Err(Error::TooLarge { rows, columns });
        }
        Ok(Self::new(rows, columns))
    }
}
