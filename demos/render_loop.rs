//! Redraws a bar and a spinner on a single line until a simulated download
//! finishes.
//!
//! Rendering never touches the terminal, so this loop owns the `\r` redraw
//! and the timing. Run with `RUST_LOG=progress_tally=trace` to see the
//! clamping events from the final overshooting update.

use std::io::Write;
use std::time::Duration;

use progress_tally::*;
use tracing_subscriber::EnvFilter;

const TOTAL: u64 = 2_400;
const CHUNK: u64 = 85;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let color = std::env::args()
        .nth(1)
        .map(|name| name.parse::<Color>())
        .transpose()
        .unwrap_or_else(|e| {
            eprintln!("{e}, using cyan");
            None
        })
        .unwrap_or(Color::Cyan);

    let bar = ProgressBar::new(30)
        .half_steps(true)
        .percentage_decimals(1)
        .color(color)
        .color_on_completion(Color::Leaf);
    let mut spinner = Spinner::new()
        .show_percentage(false)
        .color(color)
        .color_on_completion(Color::Leaf);

    let mut out = std::io::stdout().lock();

    // Connecting: progress unknown.
    for _ in 0..12 {
        write!(out, "\r{} connecting", spinner.render(None))?;
        out.flush()?;
        sleep(80);
    }
    writeln!(out)?;

    let mut done = 0;
    loop {
        let ratio = ratio_of(done, TOTAL);
        write!(
            out,
            "\r{} {} {done}/{TOTAL} KB",
            spinner.render(Some(ratio)),
            bar.at(ratio),
        )?;
        out.flush()?;
        if done >= TOTAL {
            break;
        }
        done += CHUNK;
        sleep(60);
    }
    writeln!(out)?;

    // An overshooting update is clamped, not rejected.
    writeln!(out, "{}", bar.render(done as f64 / TOTAL as f64 + 0.5))
}

fn sleep(ms: u64) {
    std::thread::sleep(Duration::from_millis(ms));
}
