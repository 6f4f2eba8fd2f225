use ascii_render::cli::{self, Args};
use ascii_render::config::{Config, Destination, RenderConfig};
use ascii_render::error::AppError;
use ascii_render::render;
use ascii_render::terminal::TerminalSize;
use clap::Parser;

fn run(args: &Args) -> Result<(), AppError> {
    let file_config = Config::load(args.config.as_deref())?;
    let config = RenderConfig::resolve(args, &file_config, TerminalSize::query)?;
    log::debug!("Resolved render config: {:?}", config);

    render::run(&config)?;

    if let Destination::File(path) = &config.destination {
        eprintln!("Wrote ASCII art to: {}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = cli::exit_code(&e);
            // clap routes help to stdout and errors to stderr
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
