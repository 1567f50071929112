use serde::{Deserialize, Serialize};

use crate::utils::{ValuationError, ValuationResult};

/// 估价摘要所在页（第一页）
pub const SUMMARY_PAGE: usize = 0;
/// 车辆信息起始页（第三页）
pub const VEHICLE_START_PAGE: usize = 2;
pub const VEHICLE_MAX_PAGES: usize = 6;
/// 车主/理赔编号所在页（第十页）
pub const OWNER_CLAIM_PAGE: usize = 9;
pub const ODOMETER_PAGES: PageRange = PageRange { start: 7, end: 15 };
pub const COMPARABLE_PAGES: PageRange = PageRange { start: 8, end: 15 };

/// 闭区间页码范围（0起始）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

impl PageRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Pages of this range that exist in a document of `page_count` pages.
    pub fn clamp(&self, page_count: usize) -> std::ops::Range<usize> {
        let end = (self.end + 1).min(page_count);
        self.start.min(end)..end
    }
}

/// 报告版式：各类字段所在的页码
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LayoutConfig {
    pub summary_page: usize,
    pub vehicle_start_page: usize,
    pub vehicle_max_pages: usize,
    pub owner_claim_page: usize,
    pub odometer_pages: PageRange,
    pub comparable_pages: PageRange,
}

impl LayoutConfig {
    pub fn validate(&self) -> ValuationResult<()> {
        for (name, range) in [
            ("odometer_pages", self.odometer_pages),
            ("comparable_pages", self.comparable_pages),
        ] {
            if range.start > range.end {
                return Err(ValuationError::ConfigError(format!(
                    "{}: start ({}) 大于 end ({})",
                    name, range.start, range.end
                )));
            }
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            summary_page: SUMMARY_PAGE,
            vehicle_start_page: VEHICLE_START_PAGE,
            vehicle_max_pages: VEHICLE_MAX_PAGES,
            owner_claim_page: OWNER_CLAIM_PAGE,
            odometer_pages: ODOMETER_PAGES,
            comparable_pages: COMPARABLE_PAGES,
        }
    }
}
