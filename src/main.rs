use clap::Parser;
use segment_intersect::utils::{logger, validation::Validate};
use segment_intersect::{CliConfig, Locale, Session, SegmentError};
use std::io;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let requested_locale = config.locale.unwrap_or_default();
    if let Err(e) = config.validate() {
        fail(requested_locale, &e);
    }

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => fail(requested_locale, &e),
    };

    let result = {
        let stdin = io::stdin();
        let mut session = Session::new(
            &settings,
            stdin.lock(),
            io::stdout().lock(),
            io::stderr().lock(),
        );
        session.run()
    };

    match result {
        Ok(report) => tracing::info!("Session finished: {:?}", report),
        Err(e) => fail(settings.locale, &e),
    }
}

fn fail(locale: Locale, e: &SegmentError) -> ! {
    tracing::error!("{}", e);
    tracing::warn!("Suggestion: {}", e.recovery_suggestion());
    eprintln!(
        "{}{}",
        locale.messages().error_prefix,
        e.user_friendly_message()
    );
    std::process::exit(1);
}
