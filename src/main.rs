use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use pyscripts::defaults::{DEFAULT_RANGE, SAMPLE};
use pyscripts::{condd, RangeSpec};

/// Generate a standard-normal matrix shaped by a range and the sample width
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_RANGE.start, allow_negative_numbers = true)]
    start: f64,

    #[arg(long, default_value_t = DEFAULT_RANGE.step, allow_negative_numbers = true)]
    step: f64,

    #[arg(long, default_value_t = DEFAULT_RANGE.end, allow_negative_numbers = true)]
    end: f64,

    /// Seed for reproducible output; fresh entropy when omitted
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn range(&self) -> RangeSpec {
        RangeSpec::new(self.start, self.step, self.end)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let resp = condd(&SAMPLE, &cli.range().to_kwargs(), &mut rng).context("failed to generate matrix")?;
    println!("{resp}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_uses_default_range() {
        let cli = Cli::parse_from(["pyscripts"]);
        assert_eq!(cli.range(), DEFAULT_RANGE);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn flags_override_range() {
        let cli = Cli::parse_from(["pyscripts", "--start", "-4", "--step", "2", "--end", "4", "--seed", "7"]);
        assert_eq!(cli.range(), RangeSpec::new(-4.0, 2.0, 4.0));
        assert_eq!(cli.seed, Some(7));
    }
}
