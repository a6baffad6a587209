use time::macros::format_description;
use tracing_subscriber::{fmt::time::LocalTime, EnvFilter};

/// Logs go to stderr so JSON written to stdout stays machine-readable.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let timer = LocalTime::new(format_description!(
        "[hour]:[minute]:[second].[subsecond digits:3]"
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn format_number(num: u64) -> String {
    let digits = num.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            result.push(',');
        }
        result.push(digit);
    }
    result
}

pub fn format_minutes(avg_minutes: f64, avg_hours: Option<f64>) -> String {
    match avg_hours {
        Some(hours) => format!("{:.1} h", hours),
        None => format!("{:.1} min", avg_minutes),
    }
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if args.top == 0 {
        anyhow::bail!("--top must be greater than 0");
    }

    if args.pretty && !args.json {
        anyhow::bail!("--pretty only applies together with --json");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;
    use clap::Parser;

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn format_minutes_prefers_hours() {
        assert_eq!(format_minutes(5.0, None), "5.0 min");
        assert_eq!(format_minutes(95.0, Some(1.6)), "1.6 h");
    }

    #[test]
    fn validate_args_rejects_zero_top() {
        let args = Args::parse_from(["chatwrapped", "chat.txt", "--top", "0"]);
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn validate_args_rejects_pretty_without_json() {
        let args = Args::parse_from(["chatwrapped", "chat.txt", "--pretty"]);
        assert!(validate_args(&args).is_err());

        let args = Args::parse_from(["chatwrapped", "chat.txt", "--json", "--pretty"]);
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn exclusions_default_to_meta_ai() {
        let args = Args::parse_from(["chatwrapped", "chat.txt"]);
        assert_eq!(args.exclude, vec!["meta ai".to_string()]);
        assert_eq!(args.top, 10);

        let args = Args::parse_from(["chatwrapped", "chat.txt", "--exclude", "bot", "--exclude", "Ana"]);
        assert_eq!(args.exclude, vec!["bot".to_string(), "Ana".to_string()]);
    }
}
