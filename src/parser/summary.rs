use regex::Regex;
use tracing::{debug, info};

use super::{keys, FieldMap};

/// 第一页的估价摘要：里程、出险日期与六个金额
pub struct SummaryExtractor {
    line_patterns: Vec<(&'static str, Regex)>,
    amount_patterns: Vec<(&'static str, Regex)>,
}

impl SummaryExtractor {
    pub fn new() -> Self {
        let line_patterns = vec![
            (keys::ODOMETER, Regex::new(r"Odometer\s*([\d,]+)").expect("odometer pattern")),
            (
                keys::LOSS_INCIDENT_DATE,
                Regex::new(r"Loss Incident Date\s*[:\-]?\s*([\d/]+)").expect("loss date pattern"),
            ),
        ];

        // Amounts may wrap onto the next line, so these run over the whole page
        let amount_patterns = [
            (keys::BASE_VEHICLE_VALUE, r"Base Vehicle Value\s*\$\s*([\d,]+\.\d{2})"),
            (keys::ADJUSTED_VEHICLE_VALUE, r"Adjusted Vehicle Value\s*\$\s*([\d,]+\.\d{2})"),
            (keys::VEHICULAR_TAX, r"Vehicular Tax.*?\+\s*\$\s*([\d,]+\.\d{2})"),
            (keys::VALUE_BEFORE_DEDUCTIBLE, r"Value before Deductible\s*\$\s*([\d,]+\.\d{2})"),
            (keys::DEDUCTIBLE, r"Deductible\*?\s*-\s*\$\s*([\d,]+\.\d{2})"),
            (keys::TOTAL, r"Total\s*\$\s*([\d,]+\.\d{2})"),
        ]
        .into_iter()
        .map(|(key, pattern)| (key, Regex::new(pattern).expect("amount pattern")))
        .collect();

        Self { line_patterns, amount_patterns }
    }

    pub fn extract(&self, text: &str) -> FieldMap {
        let mut values = FieldMap::new();

        for line in text.lines() {
            for (key, pattern) in &self.line_patterns {
                if !line.contains(*key) {
                    continue;
                }
                if let Some(caps) = pattern.captures(line) {
                    values.insert(key.to_string(), caps[1].to_string());
                }
            }
        }

        let combined = text.replace('\n', " ");
        for (key, pattern) in &self.amount_patterns {
            if let Some(caps) = pattern.captures(&combined) {
                debug!("摘要金额 {}: {}", key, &caps[1]);
                values.insert(key.to_string(), caps[1].to_string());
            }
        }

        info!("估价摘要提取到 {} 个字段", values.len());
        values
    }
}

impl Default for SummaryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUMMARY_PAGE: &str = "\
VALUATION SUMMARY
Loss Incident Date: 03/14/2024  Odometer 48,213
Base Vehicle Value $ 18,250.00
Adjusted Vehicle Value $17,900.00
Vehicular Tax (6.625%) applied to adjusted value
+ $1,185.88
Value before Deductible $19,085.88
Deductible* - $500.00
Total $18,585.88";

    #[test]
    fn base_value_and_total() {
        let text = "Base Vehicle Value $12,000.00\nTotal $11,500.00";
        let values = SummaryExtractor::new().extract(text);

        let expected: FieldMap = [
            ("Base Vehicle Value".to_string(), "12,000.00".to_string()),
            ("Total".to_string(), "11,500.00".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn full_summary_page() {
        let values = SummaryExtractor::new().extract(SUMMARY_PAGE);

        assert_eq!(values.len(), 8);
        assert_eq!(values[keys::ODOMETER], "48,213");
        assert_eq!(values[keys::LOSS_INCIDENT_DATE], "03/14/2024");
        assert_eq!(values[keys::BASE_VEHICLE_VALUE], "18,250.00");
        assert_eq!(values[keys::ADJUSTED_VEHICLE_VALUE], "17,900.00");
        assert_eq!(values[keys::VEHICULAR_TAX], "1,185.88");
        assert_eq!(values[keys::VALUE_BEFORE_DEDUCTIBLE], "19,085.88");
        assert_eq!(values[keys::DEDUCTIBLE], "500.00");
        assert_eq!(values[keys::TOTAL], "18,585.88");
    }

    #[test]
    fn labels_are_case_sensitive() {
        let values = SummaryExtractor::new().extract("total $10.00\nodometer 1,000");
        assert!(values.is_empty());
    }

    #[test]
    fn amounts_need_two_fraction_digits() {
        let values = SummaryExtractor::new().extract("Total $11,500");
        assert!(!values.contains_key(keys::TOTAL));
    }

    #[test]
    fn empty_page_yields_nothing() {
        assert!(SummaryExtractor::new().extract("").is_empty());
    }
}
