use tracing::{debug, info};

use crate::config::PageRange;
use crate::source::PageSource;

const LABEL: &str = "Odometer";

/// 可比车辆表格中的里程读数
pub struct OdometerExtractor;

impl OdometerExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Readings from the first `Odometer` row of each page, in page order.
    pub fn extract(&self, source: &dyn PageSource, pages: PageRange) -> Vec<u64> {
        let mut readings = Vec::new();

        for page in pages.clamp(source.page_count()) {
            let Some(text) = source.page_text(page) else {
                continue;
            };

            if let Some(line) = text.lines().find(|line| line.starts_with(LABEL)) {
                let row = parse_readings(&line.replace(LABEL, ""));
                debug!("第 {} 页里程行: {:?}", page, row);
                readings.extend(row);
            }
        }

        info!("里程读数共 {} 个", readings.len());
        readings
    }
}

impl Default for OdometerExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_readings(row: &str) -> Vec<u64> {
    row.split_whitespace()
        .filter_map(|token| {
            let digits = token.replace(',', "");
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            digits.parse().ok()
        })
        .collect()
}

/// Each table row starts with the loss vehicle's own reading followed by
/// three comparables; drop every index that is a multiple of four.
pub fn drop_reference_readings(readings: &[u64]) -> Vec<u64> {
    readings
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 4 != 0)
        .map(|(_, value)| *value)
        .collect()
}
