//! Plain-text rendering of the saved game for non-interactive commands

use std::fmt::Write;

use crate::game::Team;
use crate::ui::view::{MarkRow, ScoreboardView};

/// Scoreboard as printed by `dugout show`
pub fn scoreboard_text(view: &ScoreboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  Outs: {}", view.title, view.outs);
    let _ = writeln!(out, "Run cap: {}  Time left: {}", view.run_cap, view.time_left);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Inn  {:>8}  {:>8}",
        Team::Visitor.label(),
        Team::Home.label()
    );
    for row in &view.rows {
        let _ = writeln!(out, "{:>3}  {:>8}  {:>8}", row.inning, row.visitor, row.home);
    }
    let _ = writeln!(out, "Tot  {:>8}  {:>8}", view.visitor_total, view.home_total);

    if !view.marks.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Timestamps");
        out.push_str(&marks_text(&view.marks));
    }
    out
}

/// One line per mark: elapsed, half-inning, wall clock
pub fn marks_text(marks: &[MarkRow]) -> String {
    let mut out = String::new();
    for mark in marks {
        let _ = writeln!(
            out,
            "{:>8}  {:<10}  {}",
            mark.elapsed, mark.context, mark.wall_clock
        );
    }
    out
}
