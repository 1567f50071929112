use serde::Serialize;
use std::fmt::Display;

use crate::parser::keys;
use crate::parser::odometer::drop_reference_readings;
use crate::parser::{Extraction, FieldMap};

pub const ODOMETER_SEPARATOR: &str = ", ";
pub const PRICE_SEPARATOR: &str = "|";

/// 一次提取的合并结果；组合字段以字符串形式保存
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValuationRecord {
    fields: FieldMap,
}

impl ValuationRecord {
    /// Summary first, then vehicle info, then owner/claim; a later map only
    /// adds or replaces keys it actually has. The three comparables lists are
    /// always set, to `N/A` when empty.
    pub fn merge(extraction: Extraction) -> Self {
        let Extraction {
            summary,
            vehicle,
            owner_claim,
            odometer_readings,
            list_prices,
            adjusted_values,
        } = extraction;

        let mut fields = summary;
        fields.extend(vehicle);
        fields.extend(owner_claim.into_fields());

        let odometer = drop_reference_readings(&odometer_readings);
        fields.insert(keys::ODOMETER_VALUES.to_string(), join_or_na(&odometer, ODOMETER_SEPARATOR));
        fields.insert(keys::LIST_PRICES_COMPS.to_string(), join_or_na(&list_prices, PRICE_SEPARATOR));
        fields.insert(
            keys::ADJUSTED_COMPARABLE_VALUES.to_string(),
            join_or_na(&adjusted_values, PRICE_SEPARATOR),
        );

        Self { fields }
    }

    pub fn from_fields(fields: FieldMap) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Fields in lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

fn join_or_na<T: Display>(values: &[T], separator: &str) -> String {
    if values.is_empty() {
        return keys::NOT_AVAILABLE.to_string();
    }
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
