//! Static reference table of categories, example hands and odds.

use crate::cards::format_cards;
use crate::evaluator::Category;

/// One row of the reference table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub category: Category,
    pub example: String,
}

impl TableRow {
    fn new(category: Category) -> Self {
        Self { category, example: format!("[{}]", format_cards(&category.example())) }
    }

    /// `"Royal Flush: (10)"`
    pub fn heading(&self) -> String {
        format!("{}: ({})", self.category, self.category.rank())
    }

    /// `"Royal Flush - [10H JH QH KH AH] - 1 in 649,351 - 0.000154%"`
    pub fn odds_line(&self) -> String {
        format!(
            "{} - {} - 1 in {} - {}%",
            self.category,
            self.example,
            group_thousands(self.category.odds().round() as u64),
            self.category.probability()
        )
    }
}

/// Rows for every category, strongest first.
pub fn reference_table() -> Vec<TableRow> {
    Category::ALL.into_iter().map(TableRow::new).collect()
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_every_category_in_strength_order() {
        let rows = reference_table();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].category, Category::RoyalFlush);
        assert_eq!(rows[9].category, Category::HighCard);
    }

    #[test]
    fn headings_and_odds_lines() {
        let rows = reference_table();
        assert_eq!(rows[0].heading(), "Royal Flush: (10)");
        assert_eq!(rows[0].example, "[10H JH QH KH AH]");
        assert_eq!(
            rows[0].odds_line(),
            "Royal Flush - [10H JH QH KH AH] - 1 in 649,351 - 0.000154%"
        );
        assert_eq!(rows[9].odds_line(), "High Card - [10H JD 8C QH KH] - 1 in 2 - 50.1%");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(71_942), "71,942");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
