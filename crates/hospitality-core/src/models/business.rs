use serde::{Deserialize, Serialize};

/// What kind of operation a sector runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub enum SectorKind {
    #[default]
    Restaurant,
    Hotel,
    Venue,
}

impl std::fmt::Display for SectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectorKind::Restaurant => write!(f, "Restaurant"),
            SectorKind::Hotel => write!(f, "Hotel"),
            SectorKind::Venue => write!(f, "Venue"),
        }
    }
}

/// Top-level business grouping, e.g. a restaurant brand or the hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: SectorKind,
}

/// A single business. Its id is the `context` carried by scoped records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: String,
    pub name: String,
    pub sector_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_kind_defaults_when_missing() {
        let json = r#"{"id": "s1", "name": "Harbour Group"}"#;
        let sector: Sector = serde_json::from_str(json).expect("parse sector");
        assert_eq!(sector.kind, SectorKind::Restaurant);
    }

    #[test]
    fn test_business_uses_camel_case() {
        let json = r#"{"id": "b1", "name": "Harbour Grill", "sectorId": "s1"}"#;
        let business: Business = serde_json::from_str(json).expect("parse business");
        assert_eq!(business.sector_id, "s1");
    }
}
