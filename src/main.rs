use clap::Parser;
use numsign::utils::logger;
use numsign::{CliConfig, SignEngine, StdinSource};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let mut engine = SignEngine::new(StdinSource::new());

    match engine.run() {
        Ok(classification) => {
            println!("{}", classification);
        }
        Err(e) => {
            tracing::error!("Classification failed: {} (kind: {:?})", e, e.kind());
            eprintln!("error: {}", e);
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
