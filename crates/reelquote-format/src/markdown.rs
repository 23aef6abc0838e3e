//! Markdown output format.

use reelquote_types::Quote;
use std::io::Write;

use crate::{DISCLAIMER, FormatError, Formatter};

/// Markdown formatter.
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter {
    /// Whether to print the disclaimer.
    disclaimer: bool,
}

impl MarkdownFormatter {
    /// Creates a new Markdown formatter (disclaimer on).
    #[must_use]
    pub const fn new() -> Self {
        Self { disclaimer: true }
    }

    /// Sets whether to print the disclaimer.
    #[must_use]
    pub const fn with_disclaimer(mut self, disclaimer: bool) -> Self {
        self.disclaimer = disclaimer;
        self
    }
}

/// Escapes characters that would break a table cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl Formatter for MarkdownFormatter {
    fn write_quote<W: Write>(&self, quote: &Quote, mut writer: W) -> Result<(), FormatError> {
        writeln!(writer, "## Your Project Estimate")?;
        writeln!(writer)?;
        writeln!(writer, "**Estimated Cost:** {}  ", quote.estimated_cost_range)?;
        writeln!(writer, "**Estimated Timeline:** {}", quote.timeline_estimate)?;
        writeln!(writer)?;
        writeln!(writer, "### Service Breakdown")?;
        writeln!(writer)?;
        writeln!(writer, "| Service | Cost |")?;
        writeln!(writer, "| --- | ---: |")?;
        for line in &quote.breakdown {
            writeln!(writer, "| {} | {} |", cell(&line.item), cell(&line.cost))?;
        }
        writeln!(writer)?;
        writeln!(writer, "### Assumptions")?;
        writeln!(writer)?;
        writeln!(writer, "{}", quote.assumptions)?;

        if self.disclaimer {
            writeln!(writer)?;
            writeln!(writer, "_{}_", DISCLAIMER.trim_start_matches('*'))?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelquote_types::BreakdownItem;

    #[test]
    fn test_markdown_table() {
        let quote = Quote::new(
            "$500-$750",
            "1 week",
            vec![
                BreakdownItem::new("Animation", "$400"),
                BreakdownItem::new("Edit | Color", "$100"),
            ],
            "Single revision round",
        );
        let result = MarkdownFormatter::new().render(&quote).unwrap();

        assert!(result.contains("**Estimated Cost:** $500-$750"));
        assert!(result.contains("| Animation | $400 |\n"));
        assert!(result.contains("| Edit \\| Color | $100 |\n"));
        assert!(result.contains("### Assumptions\n\nSingle revision round\n"));
        assert!(result.trim_end().ends_with("project details._"));
    }

    #[test]
    fn test_markdown_without_disclaimer() {
        let quote = Quote::new("$1", "1 day", Vec::new(), "None");
        let result = MarkdownFormatter::new()
            .with_disclaimer(false)
            .render(&quote)
            .unwrap();
        assert!(result.ends_with("None\n"));
    }
}
