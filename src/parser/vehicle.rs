use regex::Regex;
use std::collections::HashSet;
use tracing::{debug, info};

use super::{keys, FieldMap};
use crate::source::PageSource;

/// 车辆信息（年份、品牌、VIN 等十二项）
pub struct VehicleInfoExtractor {
    fields: Vec<(&'static str, Regex)>,
    postal_code: Regex,
}

impl VehicleInfoExtractor {
    pub fn new() -> Self {
        let fields = [
            (keys::YEAR, r"(\d{4})"),
            (keys::MAKE, r"([A-Za-z]+)"),
            (keys::MODEL, r"([\w\s\-]+)"),
            (keys::VIN, r"([\w\d]+)"),
            (keys::TRIM, r"(\w+)"),
            (keys::CYLINDERS, r"(\d+)"),
            (keys::DISPLACEMENT, r"([\w\.]+)"),
            (keys::INDUCTION, r"(\w+)"),
            (keys::FUEL_TYPE, r"(\w+)"),
            (keys::CARBURATION, r"(\w+)"),
            (keys::TRANSMISSION, r"([\w\s]+)"),
            (keys::LOCATION, r"([A-Z\s,0-9\-]+)"),
        ]
        .into_iter()
        .map(|(key, value)| {
            let pattern = format!(r"(?i)^{}\s*[:\-]?\s*{}", regex::escape(key), value);
            (key, Regex::new(&pattern).expect("vehicle field pattern"))
        })
        .collect();

        Self {
            fields,
            postal_code: Regex::new(r"^.*?\d{5}(?:-\d{4})?").expect("postal code pattern"),
        }
    }

    /// Scan up to `max_pages` pages from `start_page`. Stops as soon as every
    /// field has been found; later pages are never read.
    pub fn extract(&self, source: &dyn PageSource, start_page: usize, max_pages: usize) -> FieldMap {
        let mut found = FieldMap::new();
        let mut remaining: HashSet<&str> = self.fields.iter().map(|(key, _)| *key).collect();

        let end = source.page_count().min(start_page.saturating_add(max_pages));
        for page in start_page..end {
            let Some(text) = source.page_text(page) else {
                debug!("第 {} 页无文本，跳过", page);
                continue;
            };

            for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
                for (key, pattern) in &self.fields {
                    if !remaining.contains(key) {
                        continue;
                    }
                    let Some(caps) = pattern.captures(line) else {
                        continue;
                    };
                    let value = caps[1].trim();
                    let value = if *key == keys::LOCATION {
                        self.trim_to_postal_code(value)
                    } else {
                        value.to_string()
                    };
                    // A bare label keeps the field open for a later line
                    if value.is_empty() {
                        continue;
                    }
                    debug!("车辆字段 {} = {} (第 {} 页)", key, value, page);
                    found.insert(key.to_string(), value);
                    remaining.remove(key);
                }
                if remaining.is_empty() {
                    break;
                }
            }
            if remaining.is_empty() {
                debug!("车辆字段已全部找到，停止于第 {} 页", page);
                break;
            }
        }

        info!("车辆信息提取到 {} 个字段", found.len());
        found
    }

    /// Cut a location after its first ZIP code (`07102` or `07102-1234`).
    pub fn trim_to_postal_code(&self, location: &str) -> String {
        match self.postal_code.find(location) {
            Some(m) => m.as_str().to_string(),
            None => location.to_string(),
        }
    }
}

impl Default for VehicleInfoExtractor {
    fn default() -> Self {
        Self::new()
    }
}
