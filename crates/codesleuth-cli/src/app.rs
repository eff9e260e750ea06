/// Console application: starts a scan and drains progress at a fixed tick.
///
/// The loop is a frame loop without a window: sleep one tick, drain at most
/// `batch` messages, render what arrived. Only the terminal message ends
/// the loop; an empty queue never does, because a fast walker can outrun
/// the printer and a slow one can leave the queue briefly dry.
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use codesleuth_core::model::ScanSummary;
use codesleuth_core::scanner::progress::ScanMessage;
use codesleuth_core::scanner::ScanController;

use crate::args::{Args, OutputFormat};

/// Entry point used by the binary.
pub fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_scan(&args, &mut out)?;
    Ok(())
}

/// Run one scan to completion, writing progress and the report to `out`.
///
/// Separate from [`run`] so tests can capture the output in a buffer.
/// Returns the final summary, whether the scan completed or was cancelled.
pub fn run_scan(args: &Args, out: &mut impl Write) -> anyhow::Result<ScanSummary> {
    let mut controller = ScanController::new(args.rules());
    controller
        .start(&args.path)
        .with_context(|| format!("cannot scan {}", args.path.display()))?;
    info!("scanning {}", args.path.display());

    let tick = Duration::from_millis(args.tick_ms);
    // A zero cap could never drain the terminal message; floor it at one.
    let batch = args.batch.max(1);
    loop {
        thread::sleep(tick);
        for message in controller.drain_up_to(batch) {
            match message {
                ScanMessage::Counted(stats) => {
                    if args.format == OutputFormat::Text {
                        writeln!(out, "{stats}")?;
                    }
                }
                ScanMessage::Warning { path, message } => {
                    warn!("skipped {}: {message}", path.display());
                }
                ScanMessage::Complete(summary) => {
                    render_summary(args, out, &summary, false)?;
                    return Ok(summary);
                }
                ScanMessage::Cancelled(summary) => {
                    render_summary(args, out, &summary, true)?;
                    return Ok(summary);
                }
            }
        }
        // Keep piped output live between ticks.
        out.flush()?;
    }
}

/// Print the end-of-scan report in the requested format.
fn render_summary(
    args: &Args,
    out: &mut impl Write,
    summary: &ScanSummary,
    cancelled: bool,
) -> anyhow::Result<()> {
    match args.format {
        OutputFormat::Text => {
            if cancelled {
                writeln!(out, "\nscan cancelled; partial results:")?;
            } else {
                writeln!(out)?;
            }
            writeln!(out, "{}", summary.report(&args.label))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, summary)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
