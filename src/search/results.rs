use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One thing description as the directory returns it
///
/// Only the three display fields are typed; everything else the directory
/// sends is preserved in `extra` so the full object survives a round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThingRecord {
    pub thing_id: String,
    pub thing_type: String,
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One result item, ready for the table: the typed record plus the serialized
/// original payload for the detail view
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub record: ThingRecord,
    pub payload: String,
}

impl SearchHit {
    pub fn from_value(value: &Value) -> Result<Self> {
        let record = serde_json::from_value(value.clone()).map_err(|e| Error::BadResponse {
            message: format!("result item does not match the directory schema: {e}"),
        })?;
        Ok(Self {
            record,
            payload: value.to_string(),
        })
    }
}

/// Parse every element of a search response; one malformed item fails the
/// whole response
pub fn parse_hits(items: &[Value]) -> Result<Vec<SearchHit>> {
    items.iter().map(SearchHit::from_value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_extracts_fields_and_payload() {
        let value = json!({
            "thing_id": "t1",
            "thing_type": "Sensor",
            "title": "Temp Sensor",
            "properties": {"unit": "celsius"}
        });
        let hit = SearchHit::from_value(&value).unwrap();

        assert_eq!(hit.record.thing_id, "t1");
        assert_eq!(hit.record.thing_type, "Sensor");
        assert_eq!(hit.record.title, "Temp Sensor");
        assert_eq!(hit.record.extra["properties"]["unit"], "celsius");
        assert_eq!(hit.payload, value.to_string());
    }

    #[test]
    fn test_from_value_missing_field_is_error() {
        let value = json!({"thing_id": "t1", "thing_type": "Sensor"});
        assert!(SearchHit::from_value(&value).is_err());
    }

    #[test]
    fn test_parse_hits_fails_on_non_object_item() {
        let items = vec![json!({"thing_id": "t1", "thing_type": "Sensor", "title": "x"}), json!(3)];
        assert!(parse_hits(&items).is_err());
    }

    #[test]
    fn test_record_reserializes_extras() {
        let value = json!({
            "thing_id": "t1",
            "thing_type": "Sensor",
            "title": "Temp Sensor",
            "foo": "bar"
        });
        let hit = SearchHit::from_value(&value).unwrap();
        let back = serde_json::to_value(&hit.record).unwrap();
        assert_eq!(back["foo"], "bar");
    }
}
