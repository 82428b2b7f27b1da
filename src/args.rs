use std::fmt;
use std::io::{self, Write};

use log::debug;

use crate::error::Result;
use crate::value::{join, Value};

/// Keyword arguments in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kwargs(Vec<(String, Value)>);

impl Kwargs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserting an existing key replaces its value and keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Kwargs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut kwargs = Kwargs::new();
        for (k, v) in iter {
            kwargs.insert(k, v);
        }
        kwargs
    }
}

impl fmt::Display for Kwargs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {v}", Value::from(k))?;
        }
        f.write_str("}")
    }
}

/// Positional arguments rendered as a tuple: `()`, `(1,)`, `(1, 2)`.
pub struct Tuple<'a>(pub &'a [Value]);

impl fmt::Display for Tuple<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        join(f, self.0)?;
        if self.0.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub positional: Vec<Value>,
    pub keywords: Kwargs,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.insert(key, value);
        self
    }

    pub fn describe(&self) -> String {
        format!("args={} kwds={}", Tuple(&self.positional), self.keywords)
    }

    pub fn into_parts(self) -> (Vec<Value>, Kwargs) {
        (self.positional, self.keywords)
    }
}

/// Prints the positional and keyword arguments on separate lines and hands
/// them back untouched.
pub fn foo(args: Args) -> Result<(Vec<Value>, Kwargs)> {
    foo_to(&mut io::stdout().lock(), args)
}

pub fn foo_to<W: Write + ?Sized>(out: &mut W, args: Args) -> Result<(Vec<Value>, Kwargs)> {
    debug!("{}", args.describe());
    writeln!(out, "{}", Tuple(&args.positional))?;
    writeln!(out, "{}", args.keywords)?;
    Ok(args.into_parts())
}
