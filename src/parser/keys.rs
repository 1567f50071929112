//! 记录中使用的字段名

pub const ODOMETER: &str = "Odometer";
pub const LOSS_INCIDENT_DATE: &str = "Loss Incident Date";

pub const BASE_VEHICLE_VALUE: &str = "Base Vehicle Value";
pub const ADJUSTED_VEHICLE_VALUE: &str = "Adjusted Vehicle Value";
pub const VEHICULAR_TAX: &str = "Vehicular Tax (6.625%)";
pub const VALUE_BEFORE_DEDUCTIBLE: &str = "Value before Deductible";
pub const DEDUCTIBLE: &str = "Deductible";
pub const TOTAL: &str = "Total";

pub const OWNER: &str = "Owner";
pub const CLAIM_REFERENCE: &str = "Claim Reference";

pub const LOCATION: &str = "Location";
pub const YEAR: &str = "Year";
pub const MAKE: &str = "Make";
pub const MODEL: &str = "Model";
pub const VIN: &str = "VIN";
pub const TRIM: &str = "Trim";
pub const CYLINDERS: &str = "Cylinders";
pub const DISPLACEMENT: &str = "Displacement";
pub const INDUCTION: &str = "Induction";
pub const FUEL_TYPE: &str = "Fuel Type";
pub const CARBURATION: &str = "Carburation";
pub const TRANSMISSION: &str = "Transmission";

/// Vehicle fields in display and export order.
pub const VEHICLE_INFO: [&str; 12] = [
    LOCATION,
    YEAR,
    MAKE,
    MODEL,
    VIN,
    TRIM,
    CYLINDERS,
    DISPLACEMENT,
    INDUCTION,
    FUEL_TYPE,
    CARBURATION,
    TRANSMISSION,
];

pub const ODOMETER_VALUES: &str = "Odometer Values";
pub const LIST_PRICES_COMPS: &str = "List Prices Comps";
pub const ADJUSTED_COMPARABLE_VALUES: &str = "Adjusted Comparable Values";

pub const COMPOSITES: [&str; 3] = [ODOMETER_VALUES, LIST_PRICES_COMPS, ADJUSTED_COMPARABLE_VALUES];

/// Placeholder for a missing value.
pub const NOT_AVAILABLE: &str = "N/A";
