//! Design data model: the request a user authors, the opaque payload the
//! design service answers with, and the result the renderer displays.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

mod clock;
mod measurements;
mod payload;
mod templates;

pub use clock::iso_timestamp_now;
pub use measurements::Measurements;
pub use payload::DesignPayload;
pub use templates::{
    build_design_result, design_photo_url, mock_fabric_suggestion, mock_making_plan,
    DEFAULT_COLOR, DEFAULT_DESIGN_ID, DEFAULT_DESIGN_TYPE, DEFAULT_HEIGHT_CM, DEFAULT_STYLE,
    DEFAULT_WEIGHT_KG,
};

/// Accepted weight range in kilograms.
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 30.0..=200.0;
/// Accepted height range in centimeters.
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 100.0..=250.0;

/// Dress category offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignType {
    Evening,
    Casual,
    Cocktail,
    Wedding,
    Summer,
    Formal,
}

impl DesignType {
    pub const ALL: [DesignType; 6] = [
        Self::Evening,
        Self::Casual,
        Self::Cocktail,
        Self::Wedding,
        Self::Summer,
        Self::Formal,
    ];

    /// Wire value, as sent in `designType`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Evening => "evening",
            Self::Casual => "casual",
            Self::Cocktail => "cocktail",
            Self::Wedding => "wedding",
            Self::Summer => "summer",
            Self::Formal => "formal",
        }
    }

    /// Human-facing option label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Evening => "Evening Gown",
            Self::Casual => "Casual Dress",
            Self::Cocktail => "Cocktail Dress",
            Self::Wedding => "Wedding Dress",
            Self::Summer => "Summer Dress",
            Self::Formal => "Formal Dress",
        }
    }
}

impl fmt::Display for DesignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DesignType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| {
                let options = Self::ALL.map(DesignType::as_str).join("|");
                format!("unknown design type `{}` (expected {options})", s.trim())
            })
    }
}

/// A complete, user-authored design request.
///
/// Field names on the wire are exactly `designType`, `color`, `style`,
/// `weight`, `height`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRequest {
    pub design_type: DesignType,
    /// `#rrggbb`, lowercase.
    pub color: String,
    pub style: String,
    /// Kilograms.
    pub weight: f64,
    /// Centimeters.
    pub height: f64,
}

/// Sewing difficulty of a making plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recommended fabric for a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricSuggestion {
    #[serde(rename = "type")]
    pub fabric_type: String,
    pub description: String,
    pub characteristics: Vec<String>,
    /// Whole dollars.
    pub estimated_cost: u32,
}

/// How to make the dress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakingPlan {
    pub difficulty: Difficulty,
    pub estimated_time: String,
    pub required_tools: Vec<String>,
    pub measurements: Measurements,
    pub instructions: Vec<String>,
}

/// A displayable generated design. Lives only in renderer state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignResult {
    pub id: String,
    /// Echoed from the payload; may be a value outside [`DesignType`].
    pub design_type: String,
    pub color: String,
    pub style: String,
    pub weight: f64,
    pub height: f64,
    pub design_photo: String,
    pub fabric_suggestion: FabricSuggestion,
    pub making_details: MakingPlan,
    pub created_at: String,
}
