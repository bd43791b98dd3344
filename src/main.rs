use bmp2ascii::cli::{self, Args, Command};
use clap::Parser;

fn main() {
    let args = Args::parse();

    let default_filter = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();

    let result = match &args.command {
        Some(Command::Config { action }) => cli::handle_config_action(action, args.config.as_deref()),
        None => cli::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
