use std::path::PathBuf;

use clap::Parser;

use crate::core::config::{self, SearchConfig};
use crate::Result;

#[derive(Parser)]
#[command(
    name = "primehunt",
    version,
    about = "Bounded-concurrency prime search over fixed-size range slices",
    long_about = "Primehunt splits the range [0, N) into fixed-size contiguous slices, \
                  evaluates each slice on its own worker under a configurable concurrency \
                  cap, and prints the discovered primes in ascending order together with \
                  the elapsed wall-clock time."
)]
pub struct Cli {
    /// Upper bound of the search range [0, RANGE)
    pub range: Option<u64>,

    /// Number of candidates per work slice
    pub slice_size: Option<u64>,

    /// Maximum concurrent evaluator tasks (0 = all available cores)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Optional TOML configuration file with a [search] table
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Merges built-in defaults, the optional config file, and explicit
    /// arguments (highest precedence) into one validated configuration.
    pub fn resolve_config(&self) -> Result<SearchConfig> {
        let mut resolved = match &self.config {
            Some(path) => config::load_config(path)?,
            None => SearchConfig::default(),
        };

        if let Some(range) = self.range {
            resolved.range = range;
        }
        if let Some(slice_size) = self.slice_size {
            resolved.slice_size = slice_size;
        }
        if let Some(threads) = self.threads {
            resolved.concurrency = threads;
        }

        resolved.validate()?;
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults_when_no_arguments() {
        let cli = Cli::parse_from(["primehunt"]);
        assert_eq!(cli.resolve_config().unwrap(), SearchConfig::default());
    }

    #[test]
    fn positional_arguments_override_defaults() {
        let cli = Cli::parse_from(["primehunt", "2000", "250", "-j", "3"]);
        assert_eq!(
            cli.resolve_config().unwrap(),
            SearchConfig {
                range: 2000,
                slice_size: 250,
                concurrency: 3
            }
        );
    }

    #[test]
    fn arguments_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search]\nrange = 500\nslice_size = 50").unwrap();

        let cli = Cli::parse_from([
            "primehunt",
            "900",
            "--config",
            file.path().to_str().unwrap(),
        ]);
        let resolved = cli.resolve_config().unwrap();
        assert_eq!(resolved.range, 900);
        assert_eq!(resolved.slice_size, 50);
    }

    #[test]
    fn non_numeric_range_fails_to_parse() {
        assert!(Cli::try_parse_from(["primehunt", "lots"]).is_err());
    }

    #[test]
    fn non_numeric_slice_size_fails_to_parse() {
        assert!(Cli::try_parse_from(["primehunt", "100", "ten"]).is_err());
    }

    #[test]
    fn zero_slice_size_rejected_at_resolution() {
        let cli = Cli::parse_from(["primehunt", "100", "0"]);
        assert!(cli.resolve_config().is_err());
    }
}
