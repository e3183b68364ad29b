// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        content_dir: args
            .opt_value_from_str::<_, PathBuf>("--content-dir")
            .unwrap_or(None),
    };

    app::run(flags)
}
