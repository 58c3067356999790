use std::sync::Mutex;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while TPVM settles. `None` when nothing is waiting.
static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

const TICK: Duration = Duration::from_millis(100);

fn style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg} {elapsed:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ])
}

pub fn start_wait(reason: &str, ceiling: Duration) {
    let pb = ProgressBar::new_spinner();
    pb.set_style(style());
    pb.enable_steady_tick(TICK);
    pb.set_message(format!(
        "Waiting up to {} for {}",
        format!("{}s", ceiling.as_secs()).yellow().bold(),
        reason
    ));

    if let Ok(mut active) = ACTIVE.lock() {
        if let Some(previous) = active.replace(pb) {
            previous.finish_and_clear();
        }
    }
}

pub fn finish_wait() {
    if let Ok(mut active) = ACTIVE.lock() {
        if let Some(pb) = active.take() {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
pub fn is_waiting() -> bool {
    ACTIVE.lock().is_ok_and(|active| active.is_some())
}

/// Routes log lines above the spinner while one is active.
pub struct SpinnerWriter;

impl std::io::Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        let msg = msg.trim_end();

        match ACTIVE.lock().ok().as_deref().and_then(Option::as_ref) {
            Some(pb) => pb.println(msg),
            None => println!("{msg}"),
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
