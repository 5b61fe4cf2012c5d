/* Human-readable output for search results. Nothing here prints. */

use crate::engine::duel::Comparison;
use crate::engine::SearchResult;
use std::fmt;

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Best gene sequence generated: {}", self.sequence)?;
        write!(f, "Utility score: {}", self.score)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Without special nucleotide:")?;
        writeln!(f, "{}", self.unboosted)?;
        writeln!(f)?;
        match &self.boosted {
            Some(boosted) => {
                writeln!(f, "With special nucleotide:")?;
                writeln!(f, "{}", boosted)?;
                writeln!(f)?;
                write!(f, "{}", verdict(self.booster_helps()))
            }
            None => write!(
                f,
                "Special nucleotide '{}' not found in pool.",
                self.booster.symbol
            ),
        }
    }
}

pub fn verdict(booster_helps: bool) -> &'static str {
    if booster_helps {
        "YES"
    } else {
        "NO"
    }
}

// one line, for logs
pub fn summary(res: &SearchResult) -> String {
    format!(
        "{} ({}) [{} nodes, {} leaves, {} cutoffs]",
        res.sequence, res.score, res.stats.nodes, res.stats.leaves, res.stats.cutoffs
    )
}
