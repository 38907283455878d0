use std::path::PathBuf;

use qrng::config::AppConfig;
use qrng::format::NumberFormat;

use crate::error::CliError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub bits: Option<i64>,
    pub count: Option<i64>,
    pub format: Option<NumberFormat>,
    pub seed: Option<u64>,
    pub delay_ms: Option<u64>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub verbose: bool,
    pub print_config: bool,
    pub help: bool,
}

pub fn usage() -> String {
    [
        "qrng - simulated quantum random number generator (not quantum, not secure)",
        "Usage: qrng [options]",
        "",
        "Options:",
        "  -b, --bits <0-32>             Bits per number",
        "  -n, --count <0-10000>         How many numbers to measure",
        "  -f, --format <decimal|binary|hex>",
        "  -s, --seed <u64>              Fixed PRNG seed (also QRNG_SEED)",
        "      --delay-ms <ms>           Cosmetic pause before results (default 1500)",
        "  -c, --config <path>           JSON config (default: <config dir>/qrng/config.json)",
        "      --json                    Print results as JSON",
        "      --print-config            Print the effective config and exit",
        "  -v, --verbose                 Debug logging on stderr",
        "  -h, --help                    Show this help",
    ]
    .join("\n")
}

fn parse_num<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, CliError> {
    raw.trim()
        .parse()
        .map_err(|_| CliError::Usage(format!("{flag}: expected a number, got {raw:?}")))
}

impl CliArgs {
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut out = CliArgs::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            // Accept both `--flag value` and `--flag=value`.
            let (flag, inline) = match arg.split_once('=') {
                Some((f, v)) if f.starts_with("--") => (f.to_string(), Some(v.to_string())),
                _ => (arg.clone(), None),
            };

            let mut value = |name: &str| -> Result<String, CliError> {
                match inline.clone() {
                    Some(v) => Ok(v),
                    None => it
                        .next()
                        .ok_or_else(|| CliError::Usage(format!("{name} needs a value"))),
                }
            };

            match flag.as_str() {
                "-b" | "--bits" => out.bits = Some(parse_num(&flag, &value(&flag)?)?),
                "-n" | "--count" => out.count = Some(parse_num(&flag, &value(&flag)?)?),
                "-f" | "--format" => out.format = Some(value(&flag)?.parse()?),
                "-s" | "--seed" => out.seed = Some(parse_num(&flag, &value(&flag)?)?),
                "--delay-ms" => out.delay_ms = Some(parse_num(&flag, &value(&flag)?)?),
                "-c" | "--config" => out.config = Some(PathBuf::from(value(&flag)?)),
                "--json" => out.json = true,
                "--print-config" => out.print_config = true,
                "-v" | "--verbose" => out.verbose = true,
                "-h" | "--help" | "help" => out.help = true,
                other => return Err(CliError::Usage(format!("unknown argument: {other}"))),
            }
        }

        Ok(out)
    }

    /// Layer command-line values over `cfg`.
    pub fn apply_to(&self, cfg: &mut AppConfig) {
        if let Some(b) = self.bits {
            cfg.bit_width = b;
        }
        if let Some(n) = self.count {
            cfg.count = n;
        }
        if let Some(f) = self.format {
            cfg.format = f;
        }
        if let Some(s) = self.seed {
            cfg.seed = Some(s);
        }
        if let Some(d) = self.delay_ms {
            cfg.delay_ms = d;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, CliError> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn empty_is_all_defaults() {
        assert_eq!(parse(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn short_long_and_inline_forms() {
        let a = parse(&["-b", "16", "--count=4", "--format", "hex", "--seed=9", "--json"]).unwrap();
        assert_eq!(a.bits, Some(16));
        assert_eq!(a.count, Some(4));
        assert_eq!(a.format, Some(NumberFormat::Hex));
        assert_eq!(a.seed, Some(9));
        assert!(a.json);
        assert!(!a.verbose);
    }

    #[test]
    fn negative_numbers_parse_and_fail_later() {
        // Range checks belong to the request, not the parser.
        let a = parse(&["--bits", "-3"]).unwrap();
        assert_eq!(a.bits, Some(-3));
    }

    #[test]
    fn errors() {
        assert!(matches!(parse(&["--bits"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["--bits", "x"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["--format", "octal"]), Err(CliError::Qrng(_))));
        assert!(matches!(parse(&["--wat"]), Err(CliError::Usage(_))));
    }

    #[test]
    fn flags_override_config() {
        let mut cfg = AppConfig::default();
        let a = parse(&["-n", "3", "--delay-ms", "0"]).unwrap();
        a.apply_to(&mut cfg);
        assert_eq!(cfg.count, 3);
        assert_eq!(cfg.delay_ms, 0);
        assert_eq!(cfg.bit_width, 8);
    }

    #[test]
    fn usage_mentions_every_flag() {
        let u = usage();
        for flag in ["--bits", "--count", "--format", "--seed", "--delay-ms", "--config", "--json"] {
            assert!(u.contains(flag), "{flag}");
        }
    }
}
