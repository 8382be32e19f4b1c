//! Design form state and per-field input rules.

use crate::design::{DesignRequest, DesignType, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};
use crate::error::FormError;
use std::fmt;
use std::str::FromStr;

/// One editable form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    DesignType,
    Color,
    Style,
    Weight,
    Height,
}

impl FormField {
    /// Fields in form order.
    pub const ALL: [FormField; 5] = [
        Self::DesignType,
        Self::Color,
        Self::Style,
        Self::Weight,
        Self::Height,
    ];

    /// Wire / identifier name.
    pub fn key(self) -> &'static str {
        match self {
            Self::DesignType => "designType",
            Self::Color => "color",
            Self::Style => "style",
            Self::Weight => "weight",
            Self::Height => "height",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DesignType => "Dress Type",
            Self::Color => "Preferred Color",
            Self::Style => "Style Description",
            Self::Weight => "Weight (kg)",
            Self::Height => "Height (cm)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::DesignType => "evening|casual|cocktail|wedding|summer|formal",
            Self::Color => "#rrggbb",
            Self::Style => "e.g., A-line, fitted, flowing, vintage",
            Self::Weight => "65.5",
            Self::Height => "170",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("unknown form field `{needle}`"))
    }
}

/// Values entered so far. Every field starts empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub design_type: Option<DesignType>,
    pub color: Option<String>,
    pub style: String,
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill every field from a complete request.
    pub fn from_request(request: &DesignRequest) -> Result<Self, FormError> {
        let mut form = Self::new();
        form.set_field(FormField::DesignType, request.design_type.as_str())?;
        form.set_field(FormField::Color, &request.color)?;
        form.set_field(FormField::Style, &request.style)?;
        form.set_field(FormField::Weight, &request.weight.to_string())?;
        form.set_field(FormField::Height, &request.height.to_string())?;
        Ok(form)
    }

    /// Parse and store one field. A rejected value leaves the field unchanged.
    pub fn set_field(&mut self, field: FormField, raw: &str) -> Result<(), FormError> {
        let raw = raw.trim();
        match field {
            FormField::DesignType => {
                let kind = raw.parse::<DesignType>().map_err(|reason| invalid(field, reason))?;
                self.design_type = Some(kind);
            }
            FormField::Color => self.color = Some(parse_hex_color(raw).map_err(|r| invalid(field, r))?),
            FormField::Style => {
                if raw.is_empty() {
                    return Err(invalid(field, "must not be empty"));
                }
                self.style = raw.to_string();
            }
            FormField::Weight => {
                self.weight = Some(parse_bounded(raw, &WEIGHT_RANGE_KG, 0.1).map_err(|r| invalid(field, r))?);
            }
            FormField::Height => {
                self.height = Some(parse_bounded(raw, &HEIGHT_RANGE_CM, 1.0).map_err(|r| invalid(field, r))?);
            }
        }
        Ok(())
    }

    /// Current value of a field as display text; empty when unset.
    pub fn display_value(&self, field: FormField) -> String {
        match field {
            FormField::DesignType => self.design_type.map(|k| k.label().to_string()).unwrap_or_default(),
            FormField::Color => self.color.clone().unwrap_or_default(),
            FormField::Style => self.style.clone(),
            FormField::Weight => self.weight.map(|w| w.to_string()).unwrap_or_default(),
            FormField::Height => self.height.map(|h| h.to_string()).unwrap_or_default(),
        }
    }

    /// Fields still empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        FormField::ALL
            .into_iter()
            .filter(|field| match field {
                FormField::DesignType => self.design_type.is_none(),
                FormField::Color => self.color.is_none(),
                FormField::Style => self.style.is_empty(),
                FormField::Weight => self.weight.is_none(),
                FormField::Height => self.height.is_none(),
            })
            .map(FormField::key)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Build a request; partial forms are rejected.
    pub fn to_request(&self) -> Result<DesignRequest, FormError> {
        match (self.design_type, &self.color, self.weight, self.height) {
            (Some(design_type), Some(color), Some(weight), Some(height)) if !self.style.is_empty() => {
                Ok(DesignRequest {
                    design_type,
                    color: color.clone(),
                    style: self.style.clone(),
                    weight,
                    height,
                })
            }
            _ => Err(FormError::Incomplete(self.missing_fields())),
        }
    }

    /// Clear every field back to empty.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn invalid(field: FormField, reason: impl Into<String>) -> FormError {
    FormError::InvalidField {
        field: field.key(),
        reason: reason.into(),
    }
}

/// Accept `#rrggbb` (leading `#` optional), normalized to lowercase.
fn parse_hex_color(raw: &str) -> Result<String, String> {
    let digits = raw.strip_prefix('#').unwrap_or(raw);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("`{raw}` is not a #rrggbb color"));
    }
    Ok(format!("#{}", digits.to_ascii_lowercase()))
}

/// Parse a number within `range` that is a whole multiple of `step`.
fn parse_bounded(
    raw: &str,
    range: &std::ops::RangeInclusive<f64>,
    step: f64,
) -> Result<f64, String> {
    let value = raw
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("`{raw}` is not a number"))?;
    if !range.contains(&value) {
        return Err(format!(
            "must be between {} and {}",
            range.start(),
            range.end()
        ));
    }
    let steps = value / step;
    if (steps - steps.round()).abs() > 1e-6 {
        return Err(format!("must be in steps of {step}"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut form = FormState::new();
        form.set_field(FormField::DesignType, "evening").unwrap();
        form.set_field(FormField::Color, "#112233").unwrap();
        form.set_field(FormField::Style, "A-line").unwrap();
        form.set_field(FormField::Weight, "65").unwrap();
        form.set_field(FormField::Height, "170").unwrap();
        form
    }

    #[test]
    fn complete_form_builds_request() {
        let request = filled().to_request().unwrap();
        assert_eq!(request.design_type, DesignType::Evening);
        assert_eq!(request.color, "#112233");
        assert_eq!(request.style, "A-line");
        assert_eq!(request.weight, 65.0);
        assert_eq!(request.height, 170.0);
    }

    #[test]
    fn empty_form_lists_every_missing_field() {
        let err = FormState::new().to_request().unwrap_err();
        assert_eq!(
            err,
            FormError::Incomplete(vec!["designType", "color", "style", "weight", "height"])
        );
    }

    #[test]
    fn partial_form_is_rejected() {
        let mut form = filled();
        form.height = None;
        assert!(!form.is_complete());
        assert_eq!(form.to_request().unwrap_err(), FormError::Incomplete(vec!["height"]));
    }

    #[test]
    fn out_of_range_values_keep_previous_value() {
        let mut form = filled();
        let err = form.set_field(FormField::Weight, "29.9").unwrap_err();
        assert!(err.to_string().contains("between 30 and 200"), "got: {err}");
        assert_eq!(form.weight, Some(65.0));

        assert!(form.set_field(FormField::Height, "251").is_err());
        assert!(form.set_field(FormField::Height, "tall").is_err());
        assert!(form.set_field(FormField::Height, "NaN").is_err());
        assert_eq!(form.height, Some(170.0));
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut form = FormState::new();
        form.set_field(FormField::Weight, "30").unwrap();
        form.set_field(FormField::Weight, "200").unwrap();
        form.set_field(FormField::Height, "100").unwrap();
        form.set_field(FormField::Height, "250").unwrap();
        assert_eq!(form.height, Some(250.0));
    }

    #[test]
    fn numeric_step_rules() {
        let mut form = FormState::new();
        form.set_field(FormField::Weight, "65.5").unwrap();
        assert!(form.set_field(FormField::Weight, "65.55").is_err());
        assert!(form.set_field(FormField::Height, "170.5").is_err());
        assert_eq!(form.weight, Some(65.5));
        assert_eq!(form.height, None);
    }

    #[test]
    fn color_is_normalized() {
        let mut form = FormState::new();
        form.set_field(FormField::Color, "AABBCC").unwrap();
        assert_eq!(form.color.as_deref(), Some("#aabbcc"));
        assert!(form.set_field(FormField::Color, "#abc").is_err());
        assert!(form.set_field(FormField::Color, "#gggggg").is_err());
        assert_eq!(form.color.as_deref(), Some("#aabbcc"));
    }

    #[test]
    fn blank_style_and_unknown_type_are_rejected() {
        let mut form = FormState::new();
        assert!(form.set_field(FormField::Style, "   ").is_err());
        assert!(form.set_field(FormField::DesignType, "ballgown").is_err());
        assert_eq!(form, FormState::new());
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = filled();
        form.reset();
        assert_eq!(form, FormState::default());
        assert_eq!(form.display_value(FormField::Style), "");
    }

    #[test]
    fn from_request_round_trips_through_validation() {
        let request = filled().to_request().unwrap();
        let form = FormState::from_request(&request).unwrap();
        assert_eq!(form, filled());
        assert_eq!(form.display_value(FormField::DesignType), "Evening Gown");
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("designtype".parse::<FormField>(), Ok(FormField::DesignType));
        assert_eq!("Height".parse::<FormField>(), Ok(FormField::Height));
        assert!("shoe".parse::<FormField>().is_err());
    }
}
