//! Statistics and rendering of simulation outcomes.
//!
//! Rates are derived here rather than in the engines so an empty reference
//! string simply has no rate instead of a division by zero.

use crate::disk::SeekOutcome;
use crate::paging::{PageId, PagingOutcome};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PagingStats {
    pub hits: usize,
    pub faults: usize,
    pub total: usize,
    pub hit_rate: Option<f64>,
    pub fault_rate: Option<f64>,
}

impl PagingStats {
    pub fn from_outcome(outcome: &PagingOutcome) -> Self {
        let total = outcome.total_references();
        let rate = |count: usize| (total > 0).then(|| count as f64 / total as f64);
        Self {
            hits: outcome.hits,
            faults: outcome.faults,
            total,
            hit_rate: rate(outcome.hits),
            fault_rate: rate(outcome.faults),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PagingReport<'a> {
    pub stats: PagingStats,
    pub outcome: &'a PagingOutcome,
}

#[derive(Debug, Serialize)]
pub struct SeekReport<'a> {
    pub path: Vec<u32>,
    pub outcome: &'a SeekOutcome,
}

fn percent(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{:.1}%", rate * 100.0),
        None => "n/a".to_string(),
    }
}

fn slot_list(frames: &[Option<PageId>]) -> String {
    let cells: Vec<String> = frames
        .iter()
        .map(|slot| match slot {
            Some(page) => page.to_string(),
            None => "-".to_string(),
        })
        .collect();
    format!("[{}]", cells.join(", "))
}

fn bit_list(bits: &[bool]) -> String {
    let cells: Vec<&str> = bits.iter().map(|&b| if b { "1" } else { "0" }).collect();
    format!("[{}]", cells.join(", "))
}

pub fn render_paging(outcome: &PagingOutcome) -> String {
    let stats = PagingStats::from_outcome(outcome);
    let mut out = String::new();
    let _ = writeln!(out, "Page Faults: {}", stats.faults);
    let _ = writeln!(out, "Page Hits: {}", stats.hits);
    let _ = writeln!(out, "Total References: {}", stats.total);
    let _ = writeln!(out, "Hit Rate: {}", percent(stats.hit_rate));
    let _ = writeln!(out, "Fault Rate: {}", percent(stats.fault_rate));
    let _ = writeln!(out);
    let _ = writeln!(out, "Allocation Sequence:");
    for record in &outcome.trace {
        let kind = if record.hit { "hit" } else { "fault" };
        let _ = write!(
            out,
            "{:>6} {:<5} {}",
            record.page,
            kind,
            slot_list(&record.frames)
        );
        if let Some(bits) = &record.reference_bits {
            let _ = write!(out, " bits {}", bit_list(bits));
        }
        if let Some(victim) = record.evicted {
            let _ = write!(out, " evicted {}", victim);
        }
        let _ = writeln!(out);
    }
    out
}

pub fn render_seek(outcome: &SeekOutcome) -> String {
    let path: Vec<String> = outcome.path().iter().map(u32::to_string).collect();
    format!(
        "Total Seek Distance: {}\nOrder of Served Requests:\n{}\n",
        outcome.seek_distance,
        path.join(" -> ")
    )
}

pub fn paging_json(outcome: &PagingOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&PagingReport {
        stats: PagingStats::from_outcome(outcome),
        outcome,
    })
}

pub fn seek_json(outcome: &SeekOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SeekReport {
        path: outcome.path(),
        outcome,
    })
}
