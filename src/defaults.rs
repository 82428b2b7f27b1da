use crate::range::RangeSpec;

/// Sample rows the binary shapes its output from. Only the width (8) matters.
pub const SAMPLE: [[f64; 8]; 8] = [
    [1.9, 3.9, 3.9, 3.9, 3.9, 3.9, 8.9, 9.9],
    [1.88, 3.69, 3.69, 3.69, 3.69, 3.69, 8.45, 9.36],
    [2.65, 4.59, 4.59, 4.59, 4.59, 4.59, 5.86, 7.56],
    [3.12, 4.89, 4.89, 4.89, 4.89, 4.89, 6.32, 8.52],
    [3.25, 4.56, 4.56, 4.56, 4.56, 4.56, 7.25, 9.25],
    [3.46, 4.82, 4.82, 4.82, 4.82, 4.82, 7.14, 8.89],
    [3.65, 4.15, 4.15, 4.15, 4.15, 4.15, 4.52, 7.99],
    [4.21, 4.85, 4.85, 4.85, 4.85, 4.85, 5.12, 7.65],
];

pub const DEFAULT_RANGE: RangeSpec = RangeSpec::new(2.0, 2.0, 8.0);
