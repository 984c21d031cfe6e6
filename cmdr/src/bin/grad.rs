// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use gradient_cmdr::{grad::{AppContext, AppPaths, CLIArg, StudioConfig, could_not_run_msg,
                           try_run_command},
                    set_mimalloc_in_main};
use gradient_studio::{CommonResult, NoNativeShare, SystemClipboard, TracingConfig,
                      setup_default_miette_global_report_handler, throws,
                      try_initialize_logging_global};

const ISSUES_URL: &str = concat!(env!("CARGO_PKG_REPOSITORY"), "/issues");

// Note: The `tokio::main` macro internally calls `.expect("Failed building the Runtime")`
// when initializing the Tokio runtime. This is unavoidable and safe, as runtime creation
// failure is a fatal error that should panic. The lint must be suppressed here.
#[tokio::main]
#[allow(clippy::unwrap_in_result)]
async fn main() -> CommonResult<()> {
    set_mimalloc_in_main!();

    throws!({
        setup_default_miette_global_report_handler("grad", ISSUES_URL);

        // If no args are passed, the following line will fail, and help will be printed
        // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
        let cli_arg = CLIArg::parse();

        let enable_logging = cli_arg.global_options.enable_logging;
        enable_logging.then(|| {
            try_initialize_logging_global(TracingConfig::new_file(None)).ok();
            // % is Display, ? is Debug.
            tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
        });

        let paths = AppPaths::try_new(cli_arg.global_options.maybe_config_file.as_deref())?;
        let config = StudioConfig::load_from(&paths.config_file)?;
        let mut ctx = AppContext {
            config,
            paths,
            clipboard: Box::new(SystemClipboard),
            share: Box::new(NoNativeShare),
        };

        let mut stdout = std::io::stdout();
        if let Err(error) = try_run_command(&cli_arg, &mut ctx, &mut stdout).await {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not run grad due to the following problem",
                error = ?error
            );
            eprintln!("{}", could_not_run_msg(&error));
            std::process::exit(1);
        }

        enable_logging.then(|| {
            tracing::debug!(message = "Stop logging...");
        });
    })
}
