//! Storefront entry point

use std::process::ExitCode;

use tracing::{error, info};

use storefront::{
    config::StorefrontConfig, console::Terminal, fixtures::default_catalog,
    observability::init_subscriber, session::Session,
};

fn main() -> ExitCode {
    let config = match StorefrontConfig::load() {
        Ok(config) => config,
        Err(err) => {
            // `--help` and `--version` also arrive here, printed to stdout.
            let printed = err.print().is_ok();

            return if printed && !err.use_stderr() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    if let Err(err) = init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for setup errors"
        )]
        {
            eprintln!("Logging error: {err}");
        }

        return ExitCode::FAILURE;
    }

    let catalog = match default_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            error!(%err, "failed to load seed catalog");
            return ExitCode::FAILURE;
        }
    };

    info!(products = catalog.len(), "storefront starting");

    let mut session = Session::new(Terminal::stdio(), catalog)
        .with_shortfall_policy(config.on_insufficient_stock);

    match session.run() {
        Ok(()) => {
            info!(orders = session.orders().len(), "storefront stopped");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "session ended with an error");
            ExitCode::FAILURE
        }
    }
}
