use tracing::info;

use super::{keys, FieldMap};

/// 车主与理赔编号
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerClaim {
    pub owner: Option<String>,
    pub claim_reference: Option<String>,
}

impl OwnerClaim {
    pub fn into_fields(self) -> FieldMap {
        let mut values = FieldMap::new();
        if let Some(owner) = self.owner {
            values.insert(keys::OWNER.to_string(), owner);
        }
        if let Some(claim) = self.claim_reference {
            values.insert(keys::CLAIM_REFERENCE.to_string(), claim);
        }
        values
    }
}

pub struct OwnerClaimExtractor;

impl OwnerClaimExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> OwnerClaim {
        let mut result = OwnerClaim::default();

        for line in text.lines() {
            if let Some(value) = value_after(line, "Owner:") {
                result.owner = value;
            }
            if let Some(value) = value_after(line, "Claim:") {
                result.claim_reference = value;
            }
        }

        info!(
            "车主/理赔: owner={}, claim={}",
            result.owner.is_some(),
            result.claim_reference.is_some()
        );
        result
    }
}

impl Default for OwnerClaimExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// `None` when the label is not on the line, `Some(None)` when nothing follows it.
fn value_after(line: &str, label: &str) -> Option<Option<String>> {
    let (_, rest) = line.split_once(label)?;
    let rest = rest.trim();
    Some((!rest.is_empty()).then(|| rest.to_string()))
}
