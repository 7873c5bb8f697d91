// src/cli/handlers.rs
use console::style;

use crate::models::{StrengthLabel, StrengthResult, Tip};
use crate::strength;

const METER_CELLS: usize = 20;

/// Placeholder shown while no password has been generated.
pub const GENERATED_PLACEHOLDER: &str = "Click Generate Password";

// Meter bar without colour, e.g. [████████░░░░░░░░░░░░]
pub fn meter_bar(width: u8) -> String {
    let filled = (width as usize * METER_CELLS) / 100;
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(METER_CELLS - filled.min(METER_CELLS))
    )
}

/// Strength meter line, or `None` when there is nothing to rate.
pub fn render_strength(result: &StrengthResult) -> Option<String> {
    if result.is_empty() {
        return None;
    }

    let bar = meter_bar(result.width);
    let (bar, label) = match result.label {
        StrengthLabel::Weak => (style(bar).red(), style(result.label.as_str()).red().bold()),
        StrengthLabel::Medium => (style(bar).yellow(), style(result.label.as_str()).yellow().bold()),
        StrengthLabel::Strong => (style(bar).green(), style(result.label.as_str()).green().bold()),
        StrengthLabel::None => return None,
    };

    Some(format!("{} {:>3}%  {}", bar, result.width, label))
}

pub fn render_tips(tips: &[Tip]) -> String {
    let mut out = String::from("Password Tips:");
    for tip in tips {
        let line = if tip.satisfied {
            format!("\n  {} {}", style("✔").green(), tip.description)
        } else {
            format!("\n  {} {}", style("✘").red(), style(&tip.description).dim())
        };
        out.push_str(&line);
    }
    out
}

/// Meter (when non-empty) followed by the tip list.
pub fn render_report(password: &str) -> String {
    let result = strength::evaluate(password);
    let tips = strength::tips(password);

    match render_strength(&result) {
        Some(meter) => format!("{}\n{}", meter, render_tips(&tips)),
        None => render_tips(&tips),
    }
}
