// SPDX-License-Identifier: MPL-2.0
use iced_cue::app::{self, Flags};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced-cue - audio player with timeline markers

USAGE:
  iced-cue [OPTIONS] [SOURCE]

OPTIONS:
  -h, --help             Print this help
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --markers <FILE>       TOML file with timeline markers
  --duration <SECS>      Length reported for the source
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        markers_path: args.opt_value_from_str("--markers")?,
        duration_secs: args.opt_value_from_str("--duration")?,
        source: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };
    Ok(Some(flags))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_cue=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application failed");
            ExitCode::FAILURE
        }
    }
}
