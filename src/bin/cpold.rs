use cpold::commands::backup::{self, args};
use cpold::config::Config;
use cpold::error::CpoldError;
use log::warn;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("CPOLD_LOG", "warn"))
        .init();

    // Copies already made are left in place.
    if let Err(e) = ctrlc::set_handler(|| {
        let interrupted = CpoldError::Interrupted;
        eprintln!("{interrupted}");
        std::process::exit(interrupted.exit_code());
    }) {
        warn!("cpold: cannot install interrupt handler: {e}");
    }

    let config = Config::default();
    let input = match args::parse_from(std::env::args_os(), &config) {
        Ok(input) => input,
        Err(CpoldError::Usage(e)) => e.exit(),
        Err(e) => {
            eprintln!("cpold: {e}");
            std::process::exit(e.exit_code());
        }
    };

    let summary = backup::run(&input, &config);
    std::process::exit(summary.exit_code());
}
