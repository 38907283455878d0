//! qrng - terminal front end for the simulated quantum RNG.
//!
//! Examples:
//!   qrng
//!   qrng --bits 4 --count 10 --format binary
//!   qrng -b 32 -n 5 -f hex --seed 42 --delay-ms 0 --json
//!
//! Defaults come from `<config dir>/qrng/config.json` when present, then the
//! `QRNG_SEED` environment variable, then flags.

use std::future::Future;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use qrng::config::AppConfig;
use qrng::controller::{Controller, Scheduler};
use qrng::prng::Prng;
use tracing::{debug, error, info, warn, Level};

mod args;
mod error;
mod paths;
mod render;

use args::{usage, CliArgs};
use error::CliError;
use paths::AppPaths;

const SEED_ENV: &str = "QRNG_SEED";

struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

fn read_config_file(path: &Path) -> Result<AppConfig, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(AppConfig::from_json_str(&text)?)
}

/// Layer the config: file, then the `QRNG_SEED` value, then flags.
fn load_config(args: &CliArgs, seed_env: Option<String>) -> Result<AppConfig, CliError> {
    let mut cfg = match &args.config {
        Some(path) => read_config_file(path)?,
        None => match AppPaths::new().map(|p| p.config_file()) {
            Some(path) if path.is_file() => {
                debug!("Using config {:?}", path);
                read_config_file(&path)?
            }
            _ => AppConfig::default(),
        },
    };

    if let Some(raw) = seed_env {
        cfg.apply_seed_override(&raw)?;
    }
    args.apply_to(&mut cfg);
    Ok(cfg)
}

fn effective_config_json(cfg: &AppConfig) -> Result<String, CliError> {
    cfg.validate()?;
    Ok(cfg.to_json_pretty()?)
}

async fn run(args: CliArgs) -> Result<(), CliError> {
    let cfg = load_config(&args, std::env::var(SEED_ENV).ok())?;

    if args.print_config {
        println!("{}", effective_config_json(&cfg)?);
        return Ok(());
    }

    let request = cfg.request()?;
    let rng = match cfg.seed {
        Some(seed) => {
            info!("Seeded run (seed={})", seed);
            Prng::new(seed)
        }
        None => Prng::from_clock(),
    };

    let controller = Controller::new(TokioScheduler, rng).with_delay(cfg.delay());
    if !args.json && !cfg.delay().is_zero() {
        eprintln!("Measuring qubits...");
    }

    let Some(view) = controller.generate_request(request).await else {
        warn!("Generation skipped: controller busy");
        return Ok(());
    };

    if args.json {
        println!("{}", render::render_json(&request, &view)?);
    } else {
        print!("{}", render::render_text(&request, &view));
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}\n");
            eprintln!("{}", usage());
            return ExitCode::from(2);
        }
    };

    if args.help {
        println!("{}", usage());
        return ExitCode::SUCCESS;
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrng::error::QrngError;
    use std::path::PathBuf;

    fn args(list: &[&str]) -> CliArgs {
        CliArgs::parse(list.iter().map(|s| s.to_string())).unwrap()
    }

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("qrng-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn flags_beat_env_which_beats_file() {
        let path = scratch_file("layering.json", r#"{ "seed": 1, "count": 3 }"#);
        let path_arg = path.to_string_lossy().into_owned();

        let cfg = load_config(&args(&["--config", &path_arg]), None).unwrap();
        assert_eq!(cfg.seed, Some(1));

        let cfg = load_config(&args(&["--config", &path_arg]), Some("2".into())).unwrap();
        assert_eq!(cfg.seed, Some(2));

        let cfg = load_config(
            &args(&["--config", &path_arg, "--seed", "3"]),
            Some("2".into()),
        )
        .unwrap();
        assert_eq!(cfg.seed, Some(3));
        assert_eq!(cfg.count, 3);
        assert_eq!(cfg.bit_width, 8);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn bad_seed_env_is_reported() {
        let path = scratch_file("bad-env.json", "{}");
        let path_arg = path.to_string_lossy().into_owned();

        let err = load_config(&args(&["--config", &path_arg]), Some("soon".into())).unwrap_err();
        assert!(matches!(err, CliError::Qrng(QrngError::Config(_))));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_config_file_is_a_read_error() {
        let path = std::env::temp_dir().join(format!("qrng-{}-absent.json", std::process::id()));
        let path_arg = path.to_string_lossy().into_owned();

        let err = load_config(&args(&["--config", &path_arg]), None).unwrap_err();
        match err {
            CliError::ConfigRead { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn printed_config_is_validated() {
        let mut cfg = AppConfig::default();
        args(&["--bits", "99"]).apply_to(&mut cfg);
        let err = effective_config_json(&cfg).unwrap_err();
        assert!(matches!(err, CliError::Qrng(QrngError::BitWidthOutOfRange(99))));

        let text = effective_config_json(&AppConfig::default()).unwrap();
        assert!(text.contains("\"bit_width\": 8"));
    }
}
