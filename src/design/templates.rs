//! Fixed mock templates and the payload-to-result derivation.

use tracing::debug;

use super::{
    iso_timestamp_now, DesignPayload, DesignResult, Difficulty, FabricSuggestion, MakingPlan,
    Measurements,
};

pub const DEFAULT_DESIGN_ID: &str = "mock-design-id";
pub const DEFAULT_DESIGN_TYPE: &str = "evening";
pub const DEFAULT_COLOR: &str = "#000000";
pub const DEFAULT_STYLE: &str = "elegant";
pub const DEFAULT_WEIGHT_KG: f64 = 65.0;
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;

const PHOTO_BASE_URL: &str = "https://via.placeholder.com/400x600";
const PHOTO_TEXT_COLOR: &str = "ffffff";
const PHOTO_FALLBACK_HEX: &str = "000000";
const PHOTO_FALLBACK_LABEL: &str = "Dress";

/// The fabric every mock design recommends.
pub fn mock_fabric_suggestion() -> FabricSuggestion {
    FabricSuggestion {
        fabric_type: "Silk Chiffon".to_string(),
        description: "Lightweight, flowing fabric perfect for elegant evening wear".to_string(),
        characteristics: to_strings(&[
            "Breathable",
            "Drapes beautifully",
            "Soft texture",
            "Natural fiber",
        ]),
        estimated_cost: 45,
    }
}

/// The making plan every mock design uses, with measurements for `height_cm`.
pub fn mock_making_plan(height_cm: f64) -> MakingPlan {
    MakingPlan {
        difficulty: Difficulty::Intermediate,
        estimated_time: "8-12 hours".to_string(),
        required_tools: to_strings(&[
            "Sewing machine",
            "Fabric scissors",
            "Measuring tape",
            "Pins",
            "Needles",
        ]),
        measurements: Measurements::from_height(height_cm),
        instructions: to_strings(&[
            "Take accurate body measurements",
            "Create a pattern based on measurements",
            "Cut fabric according to pattern",
            "Sew main seams together",
            "Add finishing touches and hem",
        ]),
    }
}

/// Placeholder photo URL keyed by the payload's raw color and type.
///
/// The first character of the color is always dropped, `#` or not. Falls
/// back to `000000` / `Dress`, independently of the display defaults.
pub fn design_photo_url(payload: &DesignPayload) -> String {
    let hex = payload
        .color()
        .map(|c| {
            let mut chars = c.chars();
            chars.next();
            chars.as_str()
        })
        .filter(|c| !c.is_empty())
        .unwrap_or(PHOTO_FALLBACK_HEX);
    let label = payload.design_type().unwrap_or(PHOTO_FALLBACK_LABEL);
    format!(
        "{PHOTO_BASE_URL}/{hex}/{PHOTO_TEXT_COLOR}?text={}",
        urlencoding::encode(label)
    )
}

/// Combine payload fields (or their defaults) with the mock templates.
pub fn build_design_result(payload: &DesignPayload) -> DesignResult {
    let missing = payload.missing_fields();
    if !missing.is_empty() {
        debug!(fields = ?missing, "design payload missing fields, using defaults");
    }

    let height = payload.height().unwrap_or(DEFAULT_HEIGHT_CM);
    DesignResult {
        id: payload.id().unwrap_or(DEFAULT_DESIGN_ID).to_string(),
        design_type: payload
            .design_type()
            .unwrap_or(DEFAULT_DESIGN_TYPE)
            .to_string(),
        color: payload.color().unwrap_or(DEFAULT_COLOR).to_string(),
        style: payload.style().unwrap_or(DEFAULT_STYLE).to_string(),
        weight: payload.weight().unwrap_or(DEFAULT_WEIGHT_KG),
        height,
        design_photo: design_photo_url(payload),
        fabric_suggestion: mock_fabric_suggestion(),
        making_details: mock_making_plan(height),
        created_at: iso_timestamp_now(),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
