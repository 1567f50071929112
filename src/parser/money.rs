use regex::Regex;
use std::fmt;

/// 金额，以分为单位保存
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Parse an amount such as `$ 12,345.6`. Currency sign, spaces and
    /// thousands separators are ignored; at most two fraction digits.
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned: String = raw
            .chars()
            .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
            .collect();

        let (whole, fraction) = match cleaned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (cleaned.as_str(), ""),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let dollars: i64 = whole.parse().ok()?;
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().ok()? * 10,
            _ => fraction.parse().ok()?,
        };
        dollars.checked_mul(100)?.checked_add(cents).map(Self::from_cents)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// 行内所有 `$` 金额
pub struct AmountScanner {
    pattern: Regex,
}

impl AmountScanner {
    /// Also takes an optional one or two digit fraction, so `$20,250.50`
    /// keeps its cents instead of stopping at the decimal point.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\$\s?[\d,]+(?:\.\d{1,2})?").expect("amount pattern"),
        }
    }

    /// Every amount in `line`, left to right. Tokens that do not parse are skipped.
    pub fn scan(&self, line: &str) -> Vec<Money> {
        self.pattern
            .find_iter(line)
            .filter_map(|m| Money::parse(m.as_str()))
            .collect()
    }
}

impl Default for AmountScanner {
    fn default() -> Self {
        Self::new()
    }
}
