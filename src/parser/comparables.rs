use tracing::{debug, info};

use super::money::{AmountScanner, Money};
use crate::config::PageRange;
use crate::source::PageSource;

/// How a comparables row is recognised, tested on the lowercased line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowMatch {
    /// Trimmed line starts with the phrase.
    Prefix(&'static str),
    /// Phrase appears anywhere in the line.
    Contains(&'static str),
}

impl RowMatch {
    fn matches(&self, line: &str) -> bool {
        let lowered = line.to_lowercase();
        match self {
            RowMatch::Prefix(phrase) => lowered.trim().starts_with(phrase),
            RowMatch::Contains(phrase) => lowered.contains(phrase),
        }
    }
}

/// 可比车辆的挂牌价 / 调整后可比价
pub struct ComparableValueExtractor {
    name: &'static str,
    row: RowMatch,
    scanner: AmountScanner,
}

impl ComparableValueExtractor {
    pub fn list_price() -> Self {
        Self {
            name: "list price",
            row: RowMatch::Prefix("list price"),
            scanner: AmountScanner::new(),
        }
    }

    pub fn adjusted_value() -> Self {
        Self {
            name: "adjusted comparable value",
            row: RowMatch::Contains("adjusted comparable value"),
            scanner: AmountScanner::new(),
        }
    }

    pub fn extract(&self, source: &dyn PageSource, pages: PageRange) -> Vec<Money> {
        let mut amounts = Vec::new();

        for page in pages.clamp(source.page_count()) {
            let Some(text) = source.page_text(page) else {
                continue;
            };

            for line in text.lines().filter(|line| self.row.matches(line)) {
                let found = self.scanner.scan(line);
                debug!("第 {} 页 {}: {} 个金额", page, self.name, found.len());
                amounts.extend(found);
            }
        }

        info!("{} 共 {} 个", self.name, amounts.len());
        amounts
    }
}
