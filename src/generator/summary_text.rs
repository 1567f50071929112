use crate::parser::keys;
use crate::record::ValuationRecord;

const AMOUNT_ROWS: [[&str; 3]; 2] = [
    [keys::BASE_VEHICLE_VALUE, keys::ADJUSTED_VEHICLE_VALUE, keys::VEHICULAR_TAX],
    [keys::VALUE_BEFORE_DEDUCTIBLE, keys::DEDUCTIBLE, keys::TOTAL],
];

/// 生成终端显示用的提取结果文本
pub fn render_summary(record: &ValuationRecord) -> String {
    let or_na = |key: &str| record.get(key).unwrap_or(keys::NOT_AVAILABLE).to_string();

    let mut lines = vec![
        format!("Owner: {}", or_na(keys::OWNER)),
        format!("Claim Reference: {}", or_na(keys::CLAIM_REFERENCE)),
        String::new(),
        "Valuation Summary:".to_string(),
    ];

    for row in AMOUNT_ROWS {
        let cells: Vec<String> = row
            .iter()
            .map(|key| match record.get(key) {
                Some(value) => format!("{}: ${}", key, value),
                None => format!("{}: {}", key, keys::NOT_AVAILABLE),
            })
            .collect();
        lines.push(cells.join(" | "));
    }

    lines.push(format!("Odometer: {}", or_na(keys::ODOMETER)));
    lines.push(format!("Loss Incident Date: {}", or_na(keys::LOSS_INCIDENT_DATE)));
    lines.push(String::new());

    lines.push("Vehicle Information:".to_string());
    for key in keys::VEHICLE_INFO {
        if let Some(value) = record.get(key) {
            lines.push(format!("{}: {}", key, value));
        }
    }
    lines.push(String::new());

    lines.push(format!("Odometer Values: {}", or_na(keys::ODOMETER_VALUES)));
    lines.push(format!("List Prices for Comps: {}", or_na(keys::LIST_PRICES_COMPS)));
    lines.push(format!(
        "Adjusted Comparable Values: {}",
        or_na(keys::ADJUSTED_COMPARABLE_VALUES)
    ));

    lines.join("\n")
}
