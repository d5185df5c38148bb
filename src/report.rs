//! Progress rendering and result persistence.
//!
//! The search engine itself is silent and clock-free; everything a human
//! sees goes through here. The console reporter hangs off the engine's
//! observer hooks, and the result writer serializes groups one per line,
//! member words space-separated, in discovery order.

use crate::search::SearchObserver;
use crate::words::Candidates;
use anyhow::{Context, Result};
use itertools::Itertools;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

const BAR_WIDTH: usize = 50;

/// Render a duration in the coarsest unit that fits: "743ms", "12s",
/// "3m", "2h".
pub fn format_duration(millis: u128) -> String {
    if millis < 1000 {
        format!("{millis}ms")
    } else if millis < 1000 * 60 {
        format!("{}s", millis / 1000)
    } else if millis < 1000 * 60 * 60 {
        format!("{}m", millis / 1000 / 60)
    } else {
        format!("{}h", millis / 1000 / 60 / 60)
    }
}

/// Console progress renderer for a sequential search.
///
/// Redraws an elapsed timestamp, a progress bar and a group counter on the
/// same line as roots are processed, and prints each found group on its
/// own line as it appears.
pub struct ConsoleReporter<'a> {
    candidates: &'a Candidates,
    start: Instant,
}

impl<'a> ConsoleReporter<'a> {
    pub fn new(candidates: &'a Candidates) -> Self {
        Self {
            candidates,
            start: Instant::now(),
        }
    }

    fn timestamp(&self) -> String {
        format!("[{}]", format_duration(self.start.elapsed().as_millis()))
    }
}

impl SearchObserver for ConsoleReporter<'_> {
    fn on_root(&mut self, processed: usize, total: usize, nodes_visited: u64) {
        let fraction = processed as f64 / total as f64;
        let filled = (fraction * BAR_WIDTH as f64) as usize;
        let millis = self.start.elapsed().as_millis().max(1);
        let checks_per_second = nodes_visited as f64 / millis as f64 * 1000.0;
        print!(
            "\r{} [{}{}] {:.1}% {:.1}k checks per second",
            self.timestamp(),
            "█".repeat(filled),
            " ".repeat(BAR_WIDTH - filled),
            fraction * 100.0,
            checks_per_second / 1000.0,
        );
        let _ = io::stdout().flush();
    }

    fn on_group(&mut self, group: &[usize]) {
        // Trailing blanks overwrite progress bar scraps left on the line.
        println!(
            "\r{} Found group: {}{}",
            self.timestamp(),
            group.iter().map(|&i| self.candidates.word(i)).join(" "),
            " ".repeat(BAR_WIDTH),
        );
    }
}

/// Write groups to `path`, one per line, words space-separated, in the
/// order given.
pub fn write_groups(path: &Path, groups: &[Vec<usize>], candidates: &Candidates) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create result file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for group in groups {
        writeln!(
            out,
            "{}",
            group.iter().map(|&i| candidates.word(i)).join(" ")
        )?;
    }
    out.flush()?;
    Ok(())
}
