use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use changelog::cli::{orchestration, Cli};
use changelog::{config, ui};

fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Console logging on stderr: RUST_LOG (default: warn), or debug with --verbose
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}

fn run(args: Cli) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;
    let edit = args.command.edit();

    let changelog = match &edit {
        None => orchestration::init(&config),
        Some(edit) => {
            let reader = orchestration::open_input(args.filename.as_deref()).with_context(|| {
                match &args.filename {
                    Some(path) => format!("cannot open {}", path.display()),
                    None => "cannot read stdin".to_string(),
                }
            })?;
            orchestration::edit(reader, edit, &config)?
        }
    };

    let rendered = orchestration::render(&changelog)?;
    orchestration::write_output(args.output.as_deref(), &rendered).with_context(|| {
        match &args.output {
            Some(path) => format!("cannot write {}", path.display()),
            None => "cannot write stdout".to_string(),
        }
    })?;

    if let Some(path) = &args.output {
        ui::display_success(&format!(
            "{} ({})",
            orchestration::describe(edit.as_ref()),
            path.display()
        ));
    }

    Ok(())
}
