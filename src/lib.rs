pub mod args;
pub mod call;
pub mod defaults;
pub mod error;
pub mod matrix;
pub mod range;
pub mod value;

pub use args::{foo, foo_to, Args, Kwargs};
pub use call::{call, call_to, decode};
pub use error::{Error, Result};
pub use matrix::{condd, condd_to, gen_normal, Matrix};
pub use range::{RangeSpec, Shape};
pub use value::Value;
