//! Seed selection for a desktop session: `--seed N` pins a run, otherwise a
//! time-derived seed is mixed fresh per launch.

use std::time::{SystemTime, UNIX_EPOCH};

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    mix_seed((now_nanos as u64) ^ ((now_nanos >> 64) as u64) ^ pid.rotate_left(17))
}

pub fn resolve_seed_from_args(args: &[String], generated_seed: u64) -> Result<u64, String> {
    let mut selected_seed = None;
    let mut index = 1_usize;

    while index < args.len() {
        let argument = args[index].as_str();

        if argument == "--seed" {
            let Some(value) = args.get(index + 1) else {
                return Err("missing value for --seed".to_string());
            };
            selected_seed = Some(parse_seed_value(value)?);
            index += 2;
            continue;
        }

        if let Some(value) = argument.strip_prefix("--seed=") {
            selected_seed = Some(parse_seed_value(value)?);
        }
        index += 1;
    }

    Ok(selected_seed.unwrap_or(generated_seed))
}

fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("seed value '{raw_value}' must be a number"))
}

fn mix_seed(mut value: u64) -> u64 {
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
        let args = as_args(&["warren"]);
        let seed = resolve_seed_from_args(&args, 9_876_543).expect("resolution should not fail");
        assert_eq!(seed, 9_876_543);
    }

    #[test]
    fn parses_seed_flag_with_separate_value() {
        let args = as_args(&["warren", "--seed", "4242"]);
        let seed = resolve_seed_from_args(&args, 1).expect("valid --seed should parse");
        assert_eq!(seed, 4_242);
    }

    #[test]
    fn parses_seed_flag_with_inline_value() {
        let args = as_args(&["warren", "--seed=2026"]);
        let seed = resolve_seed_from_args(&args, 1).expect("valid --seed should parse");
        assert_eq!(seed, 2_026);
    }

    #[test]
    fn errors_when_seed_flag_has_no_value() {
        let args = as_args(&["warren", "--seed"]);
        let err = resolve_seed_from_args(&args, 1).expect_err("missing value should error");
        assert!(err.contains("missing"), "error should explain the missing value: {err}");
    }

    #[test]
    fn errors_when_seed_value_is_not_a_number() {
        let args = as_args(&["warren", "--seed=abc"]);
        let err = resolve_seed_from_args(&args, 1).expect_err("non-numeric value should error");
        assert!(err.contains("number"), "error should explain the numeric requirement: {err}");
    }
}
