mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;

use app::RunPlotApp;
use data::select::{select_files, RunMode};
use state::SessionState;

/// Interactive plot of data sequences recorded by test runs.
#[derive(Parser, Debug)]
#[command(version, about = "Interactive viewer for test-run CSV series")]
struct Args {
    /// Folder containing data generated in the current test run.
    #[arg(long)]
    folder: PathBuf,

    /// Folder containing gold run data (required in single-run and full-run
    /// modes).
    #[arg(long)]
    golds: Option<PathBuf>,

    /// Test case name (prefix of the CSV files).
    #[arg(long)]
    name: String,

    /// Mode of execution. When omitted, inferred from --golds: given means
    /// full-run, absent means round-robin.
    #[arg(long, value_enum)]
    run_mode: Option<RunMode>,
}

fn main() -> eframe::Result {
    // Skipped files are reported via warn!, so keep those visible by default.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let run_mode = args.run_mode.unwrap_or(if args.golds.is_some() {
        RunMode::FullRun
    } else {
        RunMode::RoundRobin
    });

    // All file I/O happens up front; the plot window only opens on success.
    let session = match load_session(&args, run_mode) {
        Ok(session) => session,
        Err(e) => {
            log::error!("{e:#}");
            let _ = rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title("Error")
                .set_description(format!("{e:#}"))
                .show();
            std::process::exit(1);
        }
    };

    let title = format!("runplot – {} ({run_mode})", args.name);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 650.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(RunPlotApp::new(session)))),
    )
}

/// Select the CSVs for the run mode, load them, and build the session.
fn load_session(args: &Args, run_mode: RunMode) -> anyhow::Result<SessionState> {
    let paths = select_files(&args.folder, &args.name, args.golds.as_deref(), run_mode)?;
    log::info!(
        "selected {} file(s) for {} in {} mode",
        paths.len(),
        args.name,
        run_mode
    );

    let series = data::loader::load_series(&paths);
    SessionState::new(series)
}
