mod platform;

use clap::Parser;

fn main() -> Result<(), platform::AppError> {
    let cli = platform::Cli::parse();
    let config = platform::AppConfig::resolve(&cli)?;
    platform::logging::initialize(&config.log_destination(), config.log_level());
    platform::run_app(config)
}
