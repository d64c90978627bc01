// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::{self, paths, Flags};
use iced_carousel::directory_scanner;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_carousel - endless image carousel

USAGE:
  iced_carousel [OPTIONS] IMAGE_OR_DIR...

OPTIONS:
  --lang LANG          UI language (e.g. en-US, fr)
  --config-dir DIR     Directory holding settings.toml
  --log-level LEVEL    Log filter (e.g. info, debug); RUST_LOG wins when set
  -h, --help           Print this help

ARGS:
  IMAGE_OR_DIR         Image file, http(s) URL, or directory of images
";

fn init_tracing(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.unwrap_or("iced_carousel=info")))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or(None);
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or(None);
    let log_level: Option<String> = args.opt_value_from_str("--log-level").unwrap_or(None);

    init_tracing(log_level.as_deref());

    let raw: Vec<String> = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok())
        .collect();
    let sources = directory_scanner::expand_arguments(&raw);
    tracing::info!(arguments = raw.len(), images = sources.len(), "resolved image list");

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        lang,
        config_dir: config_dir.map(PathBuf::from),
        sources,
    })
}
