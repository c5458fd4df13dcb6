//! Viewer launch arguments and runtime seed generation.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewerArgs {
    pub seed: SeedChoice,
    /// Start from default controls instead of the persisted ones.
    pub reset_controls: bool,
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A fresh seed per call, used at launch and for the new-seed key.
pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    splitmix(
        (now_nanos as u64)
            ^ ((now_nanos >> 64) as u64)
            ^ u64::from(process::id()).rotate_left(17)
            ^ counter.rotate_left(7),
    )
}

/// Accepts `--seed N`, `--seed=N` and `--reset-controls`; anything else is ignored.
pub fn parse_viewer_args(args: &[String], generated_seed: u64) -> Result<ViewerArgs, String> {
    let mut seed = None;
    let mut reset_controls = false;
    let mut rest = args.iter().skip(1);

    while let Some(argument) = rest.next() {
        let value = match argument.as_str() {
            "--reset-controls" => {
                reset_controls = true;
                continue;
            }
            "--seed" => {
                let value = rest.next().map(String::as_str);
                value.ok_or_else(|| "missing value for --seed".to_string())?
            }
            other => match other.strip_prefix("--seed=") {
                Some(value) => value,
                None => continue,
            },
        };
        if seed.replace(parse_seed_value(value)?).is_some() {
            return Err("seed provided more than once".to_string());
        }
    }

    let seed = match seed {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Generated(generated_seed),
    };
    Ok(ViewerArgs { seed, reset_controls })
}

fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("seed value '{raw_value}' must be a number"))
}

fn splitmix(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn uses_generated_seed_when_seed_flag_is_absent() {
        let parsed = parse_viewer_args(&as_args(&["app"]), 9_876_543).expect("no flags");
        assert_eq!(
            parsed,
            ViewerArgs { seed: SeedChoice::Generated(9_876_543), reset_controls: false }
        );
    }

    #[test]
    fn parses_both_seed_spellings() {
        let separate = parse_viewer_args(&as_args(&["app", "--seed", "4242"]), 1).expect("valid");
        assert_eq!(separate.seed, SeedChoice::Cli(4_242));
        let inline = parse_viewer_args(&as_args(&["app", "--seed=2026"]), 1).expect("valid");
        assert_eq!(inline.seed.value(), 2_026);
    }

    #[test]
    fn reset_flag_combines_with_seed() {
        let parsed = parse_viewer_args(&as_args(&["app", "--reset-controls", "--seed", "7"]), 1)
            .expect("valid");
        assert!(parsed.reset_controls);
        assert_eq!(parsed.seed, SeedChoice::Cli(7));
    }

    #[test]
    fn rejects_bad_seed_arguments() {
        let missing = parse_viewer_args(&as_args(&["app", "--seed"]), 1).expect_err("no value");
        assert!(missing.contains("missing"), "{missing}");

        let garbage = parse_viewer_args(&as_args(&["app", "--seed=abc"]), 1).expect_err("nan");
        assert!(garbage.contains("number"), "{garbage}");

        let twice = parse_viewer_args(&as_args(&["app", "--seed=1", "--seed", "2"]), 1)
            .expect_err("duplicate");
        assert!(twice.contains("more than once"), "{twice}");
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        assert_ne!(generate_runtime_seed(), generate_runtime_seed());
    }
}
