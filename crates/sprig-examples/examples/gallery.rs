//! Launch one of the sprig demos.

use std::{
    fs::File,
    path::{Path, PathBuf},
    rc::Rc,
    sync::Mutex,
};

use anyhow::{Context as _, Result, bail};
use clap::Parser;
use sprig::{Binding, backend::crossterm::runloop_with_options, runloop::RunOptions};
use sprig_examples::{bindings::binding, gallery};
use tracing_subscriber::{EnvFilter, fmt};

/// CLI flags for the demo gallery.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// The demo to run.
    #[clap(short, long, default_value = "counter")]
    example: String,

    /// List the available demos and exit.
    #[clap(short, long)]
    list: bool,

    /// Write debug logs to this file. Filtered by `RUST_LOG`.
    #[clap(long)]
    log: Option<PathBuf>,

    /// Restore the terminal and print a backtrace on panic.
    #[clap(long)]
    panic_hook: bool,
}

/// Send tracing output to `path`.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    fmt()
        .with_writer(Mutex::new(file))
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "sprig=debug".into()))
        .event_format(
            fmt::format()
                .with_level(true)
                .with_line_number(true)
                .with_ansi(false)
                .without_time()
                .compact(),
        )
        .init();
    Ok(())
}

/// Run the gallery.
pub fn main() -> Result<()> {
    let args = Args::parse();
    if args.list {
        for name in gallery::NAMES {
            println!("{name}");
        }
        return Ok(());
    }
    if let Some(path) = &args.log {
        init_logging(path)?;
    }
    let Some(comp) = gallery::lookup(&args.example) else {
        bail!(
            "unknown example {:?}, expected one of: {}",
            args.example,
            gallery::NAMES.join(", ")
        );
    };

    let options = RunOptions {
        install_panic_hook: args.panic_hook,
        ..RunOptions::default()
    };
    let hook: Rc<dyn Binding> = Rc::new(binding);
    let tree = runloop_with_options(comp, Some(hook), options)?;
    tracing::info!(state = ?tree, "demo finished");
    Ok(())
}
