//! Opaque design-service response carried from intake to renderer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::DesignRequest;

/// Raw JSON body returned by the design service, passed through verbatim.
///
/// Intake never inspects it. The renderer reads the optional echoed fields
/// through the accessors below, which treat absent, `null`, mistyped, empty
/// and zero values alike as missing. Numeric fields also accept numbers sent
/// as strings (`"180"`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignPayload(Value);

impl DesignPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the raw JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn id(&self) -> Option<&str> {
        self.text("id")
    }

    pub fn design_type(&self) -> Option<&str> {
        self.text("designType")
    }

    pub fn color(&self) -> Option<&str> {
        self.text("color")
    }

    pub fn style(&self) -> Option<&str> {
        self.text("style")
    }

    pub fn weight(&self) -> Option<f64> {
        self.number("weight")
    }

    pub fn height(&self) -> Option<f64> {
        self.number("height")
    }

    /// Names of echoed fields that will fall back to defaults.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for (name, present) in [
            ("id", self.id().is_some()),
            ("designType", self.design_type().is_some()),
            ("color", self.color().is_some()),
            ("style", self.style().is_some()),
            ("weight", self.weight().is_some()),
            ("height", self.height().is_some()),
        ] {
            if !present {
                missing.push(name);
            }
        }
        missing
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    fn number(&self, key: &str) -> Option<f64> {
        let n = match self.0.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        n.filter(|n| n.is_finite() && *n != 0.0)
    }
}

impl From<Value> for DesignPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&DesignRequest> for DesignPayload {
    /// Echo a request as if the service had returned it unchanged.
    fn from(request: &DesignRequest) -> Self {
        Self(serde_json::to_value(request).unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::DesignType;
    use serde_json::json;

    #[test]
    fn accessors_read_echoed_fields() {
        let payload = DesignPayload::new(json!({
            "id": "d-1",
            "designType": "wedding",
            "color": "#ffeedd",
            "style": "mermaid",
            "weight": 58.5,
            "height": 162,
            "extra": {"ignored": true},
        }));
        assert_eq!(payload.id(), Some("d-1"));
        assert_eq!(payload.design_type(), Some("wedding"));
        assert_eq!(payload.color(), Some("#ffeedd"));
        assert_eq!(payload.style(), Some("mermaid"));
        assert_eq!(payload.weight(), Some(58.5));
        assert_eq!(payload.height(), Some(162.0));
        assert!(payload.missing_fields().is_empty());
    }

    #[test]
    fn falsy_and_mistyped_values_count_as_missing() {
        let payload = DesignPayload::new(json!({
            "id": null,
            "designType": "",
            "color": 7,
            "weight": 0,
            "height": "tall",
        }));
        assert_eq!(payload.id(), None);
        assert_eq!(payload.design_type(), None);
        assert_eq!(payload.color(), None);
        assert_eq!(payload.weight(), None);
        assert_eq!(payload.height(), None);
        assert_eq!(
            payload.missing_fields(),
            vec!["id", "designType", "color", "style", "weight", "height"]
        );
    }

    #[test]
    fn numeric_strings_are_read_as_numbers() {
        let payload = DesignPayload::new(json!({
            "weight": " 58.5 ",
            "height": "180",
        }));
        assert_eq!(payload.weight(), Some(58.5));
        assert_eq!(payload.height(), Some(180.0));

        let zero = DesignPayload::new(json!({"height": "0", "weight": ""}));
        assert_eq!(zero.height(), None);
        assert_eq!(zero.weight(), None);
    }

    #[test]
    fn non_object_payload_has_no_fields() {
        let payload = DesignPayload::new(json!(["not", "an", "object"]));
        assert_eq!(payload.style(), None);
        assert_eq!(payload.missing_fields().len(), 6);
    }

    #[test]
    fn echo_from_request() {
        let request = DesignRequest {
            design_type: DesignType::Summer,
            color: "#00ff00".into(),
            style: "sundress".into(),
            weight: 60.0,
            height: 168.0,
        };
        let payload = DesignPayload::from(&request);
        assert_eq!(payload.design_type(), Some("summer"));
        assert_eq!(payload.height(), Some(168.0));
        assert_eq!(payload.missing_fields(), vec!["id"]);
    }
}
