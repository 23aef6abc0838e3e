//! Plain-text output format.

use reelquote_types::Quote;
use std::io::Write;

use crate::{DISCLAIMER, FormatError, Formatter};

/// Plain-text formatter.
///
/// Mirrors the estimate card: cost, timeline, service breakdown with costs
/// aligned to the right edge, assumptions, and an optional disclaimer.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// Target line width for the breakdown.
    width: usize,
    /// Whether to print the disclaimer.
    disclaimer: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFormatter {
    /// Creates a text formatter with default settings (60 columns, disclaimer on).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width: 60,
            disclaimer: true,
        }
    }

    /// Sets the line width used to align breakdown costs.
    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets whether to print the disclaimer.
    #[must_use]
    pub const fn with_disclaimer(mut self, disclaimer: bool) -> Self {
        self.disclaimer = disclaimer;
        self
    }

    fn breakdown_line(&self, item: &str, cost: &str) -> String {
        // two-space indent plus at least one space on each side of the leader
        let used = 2 + item.chars().count() + cost.chars().count() + 2;
        if used >= self.width {
            return format!("  {item}  {cost}");
        }
        format!("  {item} {} {cost}", ".".repeat(self.width - used))
    }
}

impl Formatter for TextFormatter {
    fn write_quote<W: Write>(&self, quote: &Quote, mut writer: W) -> Result<(), FormatError> {
        writeln!(writer, "Your Project Estimate:")?;
        writeln!(writer)?;
        writeln!(writer, "ESTIMATED COST")?;
        writeln!(writer, "  {}", quote.estimated_cost_range)?;
        writeln!(writer)?;
        writeln!(writer, "ESTIMATED TIMELINE")?;
        writeln!(writer, "  {}", quote.timeline_estimate)?;
        writeln!(writer)?;
        writeln!(writer, "SERVICE BREAKDOWN")?;
        for line in &quote.breakdown {
            writeln!(writer, "{}", self.breakdown_line(&line.item, &line.cost))?;
        }
        writeln!(writer)?;
        writeln!(writer, "ASSUMPTIONS")?;
        writeln!(writer, "  {}", quote.assumptions)?;

        if self.disclaimer {
            writeln!(writer)?;
            writeln!(writer, "{DISCLAIMER}")?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}
