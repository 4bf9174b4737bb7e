//! Plain-text and JSON rendering of a scored cohort.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

use clubpulse_scorer::{CategorySummary, ScoredClub};

/// A scored cohort plus its category partition, ready to render.
#[derive(Debug, Serialize)]
pub(crate) struct Report<'a> {
    clubs: &'a [ScoredClub],
    categories: &'a BTreeMap<String, CategorySummary>,
}

impl<'a> Report<'a> {
    pub(crate) const fn new(
        clubs: &'a [ScoredClub],
        categories: &'a BTreeMap<String, CategorySummary>,
    ) -> Self {
        Self { clubs, categories }
    }

    /// Render the ranking table and category summaries as plain text.
    pub(crate) fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{:>4}  {:<24} {:<16} {:>6} {:>6} {:>10} {:>9} {:>7}",
            "Rank", "Club", "Category", "Score", "Posts", "Followers", "Messages", "Events",
        )?;
        for (position, club) in self.clubs.iter().enumerate() {
            writeln!(
                out,
                "{:>4}  {:<24} {:<16} {:>6.3} {:>6} {:>10} {:>9} {:>7}",
                position + 1,
                club.name,
                club.category,
                club.normalized_score,
                club.metrics.num_posts,
                club.metrics.followers,
                club.metrics.total_messages,
                club.events.len(),
            )?;
        }

        writeln!(out)?;
        writeln!(out, "Categories:")?;
        for (category, summary) in self.categories {
            writeln!(
                out,
                "  {category}: {} club(s), mean score {:.3} ({})",
                summary.clubs.len(),
                summary.mean_normalized_score,
                summary.clubs.join(", "),
            )?;
        }
        Ok(())
    }

    /// Render the full report as pretty-printed JSON.
    pub(crate) fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}
