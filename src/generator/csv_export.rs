use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use crate::parser::keys;
use crate::record::ValuationRecord;
use crate::utils::ValuationResult;

const PRIORITY_KEYS: [&str; 2] = [keys::LOSS_INCIDENT_DATE, keys::ODOMETER];

/// 将组合字段拆回列表；空值或 `N/A` 不产生任何行
pub fn split_composite(value: Option<&str>, separator: char) -> Vec<String> {
    match value.map(str::trim) {
        None | Some("") => Vec::new(),
        Some(keys::NOT_AVAILABLE) => Vec::new(),
        Some(value) => value
            .split(separator)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

/// Export rows in order: priority fields, vehicle info, one block per
/// comparable, then everything else sorted by key.
pub fn export_rows(record: &ValuationRecord) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    let mut emitted: HashSet<&str> = HashSet::new();

    for key in PRIORITY_KEYS.into_iter().chain(keys::VEHICLE_INFO) {
        if let Some(value) = record.get(key) {
            rows.push(row(key, value));
            emitted.insert(key);
        }
    }

    let columns = [
        ("Odometer", split_composite(record.get(keys::ODOMETER_VALUES), ',')),
        ("List Prices", split_composite(record.get(keys::LIST_PRICES_COMPS), '|')),
        (
            "Adjusted Comparable Values",
            split_composite(record.get(keys::ADJUSTED_COMPARABLE_VALUES), '|'),
        ),
    ];
    let comparables = columns.iter().map(|(_, values)| values.len()).max().unwrap_or(0);
    for i in 0..comparables {
        for (label, values) in &columns {
            if let Some(value) = values.get(i) {
                rows.push(row(&format!("comp{} {}", i + 1, label), value));
            }
        }
    }
    emitted.extend(keys::COMPOSITES);

    // ValuationRecord iterates in key order already
    for (key, value) in record.iter() {
        if !emitted.contains(key) {
            rows.push(row(key, value));
        }
    }

    rows
}

fn row(field: &str, value: &str) -> (String, String) {
    (field.trim().to_string(), value.trim().to_string())
}

/// Render the export as CSV bytes, header `Field,Value`.
pub fn to_csv(record: &ValuationRecord) -> ValuationResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Field", "Value"])?;
    for (field, value) in export_rows(record) {
        writer.write_record([field, value])?;
    }
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()).into())
}

/// The file is only written once the whole CSV has been built in memory.
pub fn write_csv(record: &ValuationRecord, path: impl AsRef<Path>) -> ValuationResult<()> {
    let path = path.as_ref();
    let bytes = to_csv(record)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    info!("已导出CSV: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Extraction, FieldMap};
    use crate::utils::ValuationError;

    fn record(pairs: &[(&str, &str)]) -> ValuationRecord {
        ValuationRecord::from_fields(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<FieldMap>(),
        )
    }

    fn pairs(rows: &[(String, String)]) -> Vec<(&str, &str)> {
        rows.iter().map(|(f, v)| (f.as_str(), v.as_str())).collect()
    }

    #[test]
    fn vehicle_info_precedes_comparables() {
        let record = record(&[(keys::YEAR, "2020"), (keys::ODOMETER_VALUES, "100,200,300")]);
        let rows = export_rows(&record);

        assert_eq!(
            pairs(&rows),
            vec![
                ("Year", "2020"),
                ("comp1 Odometer", "100"),
                ("comp2 Odometer", "200"),
                ("comp3 Odometer", "300"),
            ]
        );
    }

    #[test]
    fn full_ordering() {
        let record = record(&[
            (keys::TOTAL, "11,500.00"),
            (keys::OWNER, " JANE DOE "),
            (keys::MAKE, "Honda"),
            (keys::LOCATION, "NEWARK NJ 07102"),
            (keys::ODOMETER, "48,213"),
            (keys::LOSS_INCIDENT_DATE, "03/14/2024"),
            (keys::ODOMETER_VALUES, "51000, 39870"),
            (keys::LIST_PRICES_COMPS, "21995.00|19400.00|20250.50"),
            (keys::ADJUSTED_COMPARABLE_VALUES, "N/A"),
            (keys::BASE_VEHICLE_VALUE, "12,000.00"),
        ]);
        let rows = export_rows(&record);

        assert_eq!(
            pairs(&rows),
            vec![
                ("Loss Incident Date", "03/14/2024"),
                ("Odometer", "48,213"),
                ("Location", "NEWARK NJ 07102"),
                ("Make", "Honda"),
                ("comp1 Odometer", "51000"),
                ("comp1 List Prices", "21995.00"),
                ("comp2 Odometer", "39870"),
                ("comp2 List Prices", "19400.00"),
                ("comp3 List Prices", "20250.50"),
                ("Base Vehicle Value", "12,000.00"),
                ("Owner", "JANE DOE"),
                ("Total", "11,500.00"),
            ]
        );
    }

    #[test]
    fn placeholder_composites_expand_to_nothing() {
        assert!(split_composite(Some("N/A"), '|').is_empty());
        assert!(split_composite(Some(" N/A "), ',').is_empty());
        assert!(split_composite(Some(""), ',').is_empty());
        assert!(split_composite(None, ',').is_empty());

        let record = record(&[
            (keys::ODOMETER_VALUES, "N/A"),
            (keys::LIST_PRICES_COMPS, "N/A"),
            (keys::ADJUSTED_COMPARABLE_VALUES, "N/A"),
        ]);
        assert!(export_rows(&record).is_empty());
    }

    #[test]
    fn joined_amounts_split_back() {
        let merged = ValuationRecord::merge(Extraction {
            list_prices: vec![
                crate::parser::Money::from_cents(100_000),
                crate::parser::Money::from_cents(250_050),
            ],
            ..Default::default()
        });
        assert_eq!(
            split_composite(merged.get(keys::LIST_PRICES_COMPS), '|'),
            vec!["1000.00", "2500.50"]
        );
    }

    #[test]
    fn joined_odometer_readings_split_back() {
        let merged = ValuationRecord::merge(Extraction {
            odometer_readings: vec![0, 100, 200, 300],
            ..Default::default()
        });
        assert_eq!(merged.get(keys::ODOMETER_VALUES), Some("100, 200, 300"));
        assert_eq!(
            split_composite(merged.get(keys::ODOMETER_VALUES), ','),
            vec!["100", "200", "300"]
        );
    }

    #[test]
    fn unwritable_target_is_an_io_error_and_leaves_other_files() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("previous.csv");
        std::fs::write(&existing, "Field,Value\nYear,1999\n").unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let record = record(&[(keys::YEAR, "2020")]);
        let result = write_csv(&record, blocker.join("report.csv"));
        assert!(matches!(result, Err(ValuationError::IoError(_))));

        let result = write_csv(&record, dir.path());
        assert!(matches!(result, Err(ValuationError::IoError(_))));

        assert_eq!(
            std::fs::read_to_string(&existing).unwrap(),
            "Field,Value\nYear,1999\n"
        );
        assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "not a directory");
    }

    #[test]
    fn csv_has_header_and_quotes_delimiters() {
        let record = record(&[(keys::LOCATION, "NEWARK, NJ 07102"), (keys::YEAR, "2020")]);
        let csv = String::from_utf8(to_csv(&record).unwrap()).unwrap();

        assert_eq!(csv, "Field,Value\nLocation,\"NEWARK, NJ 07102\"\nYear,2020\n");
    }

    #[test]
    fn write_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exports/report.csv");
        let record = record(&[(keys::YEAR, "2020")]);

        write_csv(&record, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Field,Value\nYear,2020\n");
    }
}
