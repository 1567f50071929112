pub mod comparables;
pub mod keys;
pub mod money;
pub mod odometer;
pub mod owner_claim;
pub mod summary;
pub mod vehicle;

pub use comparables::ComparableValueExtractor;
pub use money::Money;
pub use odometer::OdometerExtractor;
pub use owner_claim::{OwnerClaim, OwnerClaimExtractor};
pub use summary::SummaryExtractor;
pub use vehicle::VehicleInfoExtractor;

use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::config::LayoutConfig;
use crate::record::ValuationRecord;
use crate::source::PageSource;
use crate::utils::{ValuationError, ValuationResult};

/// 字段名 -> 字段值
pub type FieldMap = BTreeMap<String, String>;

/// 各提取器的原始输出，合并前
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub summary: FieldMap,
    pub vehicle: FieldMap,
    pub owner_claim: OwnerClaim,
    pub odometer_readings: Vec<u64>,
    pub list_prices: Vec<Money>,
    pub adjusted_values: Vec<Money>,
}

/// 统一提取管道
pub struct ExtractionPipeline {
    layout: LayoutConfig,
    summary: SummaryExtractor,
    vehicle: VehicleInfoExtractor,
    owner_claim: OwnerClaimExtractor,
    odometer: OdometerExtractor,
    list_prices: ComparableValueExtractor,
    adjusted_values: ComparableValueExtractor,
}

impl ExtractionPipeline {
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            layout,
            summary: SummaryExtractor::new(),
            vehicle: VehicleInfoExtractor::new(),
            owner_claim: OwnerClaimExtractor::new(),
            odometer: OdometerExtractor::new(),
            list_prices: ComparableValueExtractor::list_price(),
            adjusted_values: ComparableValueExtractor::adjusted_value(),
        }
    }

    /// Run every extractor over `source` without merging.
    pub fn extract(&self, source: &dyn PageSource) -> ValuationResult<Extraction> {
        let layout = &self.layout;
        let page_count = source.page_count();
        info!("开始提取，文档共 {} 页", page_count);

        if layout.summary_page >= page_count {
            return Err(ValuationError::PageOutOfRange {
                index: layout.summary_page,
                count: page_count,
            });
        }
        let summary = source
            .page_text(layout.summary_page)
            .map(|text| self.summary.extract(text))
            .unwrap_or_default();

        let vehicle = self.vehicle.extract(source, layout.vehicle_start_page, layout.vehicle_max_pages);

        let owner_claim = match source.page_text(layout.owner_claim_page) {
            Some(text) => self.owner_claim.extract(text),
            None => {
                if layout.owner_claim_page >= page_count {
                    warn!("车主页 {} 超出文档范围", layout.owner_claim_page);
                }
                OwnerClaim::default()
            }
        };

        Ok(Extraction {
            summary,
            vehicle,
            owner_claim,
            odometer_readings: self.odometer.extract(source, layout.odometer_pages),
            list_prices: self.list_prices.extract(source, layout.comparable_pages),
            adjusted_values: self.adjusted_values.extract(source, layout.comparable_pages),
        })
    }

    /// 提取并合并为一条记录
    pub fn process(&self, source: &dyn PageSource) -> ValuationResult<ValuationRecord> {
        let extraction = self.extract(source)?;
        let record = ValuationRecord::merge(extraction);
        info!("提取完成，共 {} 个字段", record.len());
        Ok(record)
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
