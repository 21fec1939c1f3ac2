//! Blood-glucose reading classification.
//!
//! Pure logic -- no database access. A reading in mg/dL is placed into one of
//! three clinical bands using a threshold pair looked up from the patient's
//! diabetes type and the measurement context.
//!
//! The upper bound of the normal band is inclusive for Type 1/Type 2,
//! Prediabetes and the generic table, but exclusive for Gestational. Readings
//! exactly at a gestational upper threshold are therefore hyperglycemic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Context recorded when a submission does not name one.
pub const DEFAULT_CONTEXT: &str = "Other";

/// Diabetes type assumed for users without a patient profile.
pub const DEFAULT_DIABETES_TYPE: &str = "Type 2";

/// Clinical severity band of a single reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GlucoseCategory {
    Hypoglycemia,
    Normal,
    Hyperglycemia,
}

impl GlucoseCategory {
    /// Label stored in `glucose_logs.category` and returned to clients.
    pub fn as_str(self) -> &'static str {
        match self {
            GlucoseCategory::Hypoglycemia => "Hypoglycemia",
            GlucoseCategory::Normal => "Normal",
            GlucoseCategory::Hyperglycemia => "Hyperglycemia",
        }
    }

    /// Whether the assigned doctor should receive an urgent alert.
    pub fn is_alert(self) -> bool {
        !matches!(self, GlucoseCategory::Normal)
    }
}

impl fmt::Display for GlucoseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When the reading was taken relative to a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementContext {
    Fasting,
    PostMeal,
    Other,
}

impl MeasurementContext {
    /// Map a client label to a context. Unrecognised labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Fasting" => MeasurementContext::Fasting,
            "Post-meal" => MeasurementContext::PostMeal,
            _ => MeasurementContext::Other,
        }
    }
}

/// The patient's condition as recorded on their profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiabetesType {
    Type1,
    Type2,
    Gestational,
    Prediabetes,
    /// Anything else, including a profile with no recorded type.
    Unspecified,
}

impl DiabetesType {
    /// Map a profile label to a diabetes type. Unrecognised labels become
    /// `Unspecified`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Type 1" => DiabetesType::Type1,
            "Type 2" => DiabetesType::Type2,
            "Gestational" => DiabetesType::Gestational,
            "Prediabetes" => DiabetesType::Prediabetes,
            _ => DiabetesType::Unspecified,
        }
    }

    /// Resolve the type to classify with from a profile lookup.
    ///
    /// `None` means the user has no patient profile and falls back to
    /// [`DEFAULT_DIABETES_TYPE`]. `Some(None)` means a profile exists but has
    /// no type recorded, which uses the generic table.
    pub fn for_profile(profile: Option<Option<&str>>) -> Self {
        match profile {
            None => DiabetesType::from_label(DEFAULT_DIABETES_TYPE),
            Some(label) => label.map_or(DiabetesType::Unspecified, DiabetesType::from_label),
        }
    }
}

/// How the upper threshold of the normal band is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    /// `value <= high` is still normal.
    Inclusive,
    /// `value == high` is already hyperglycemic.
    Exclusive,
}

/// A `(low, high)` threshold pair in mg/dL.
///
/// `value < low` is hypoglycemic. Values from `low` up to `high` (compared per
/// [`UpperBound`]) are normal, and everything above is hyperglycemic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdBand {
    pub low: f64,
    pub high: f64,
    pub upper: UpperBound,
}

impl ThresholdBand {
    const fn inclusive(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            upper: UpperBound::Inclusive,
        }
    }

    const fn exclusive(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            upper: UpperBound::Exclusive,
        }
    }

    /// Place a value into its band.
    pub fn categorize(&self, value: f64) -> GlucoseCategory {
        if value < self.low {
            GlucoseCategory::Hypoglycemia
        } else if self.within_upper(value) {
            GlucoseCategory::Normal
        } else {
            GlucoseCategory::Hyperglycemia
        }
    }

    fn within_upper(&self, value: f64) -> bool {
        match self.upper {
            UpperBound::Inclusive => value <= self.high,
            UpperBound::Exclusive => value < self.high,
        }
    }
}

/// Look up the threshold pair for a diabetes type and measurement context.
pub fn threshold_band(diabetes_type: DiabetesType, context: MeasurementContext) -> ThresholdBand {
    use DiabetesType as D;
    use MeasurementContext as C;

    match (diabetes_type, context) {
        (D::Type1 | D::Type2, C::Fasting) => ThresholdBand::inclusive(80.0, 130.0),
        (D::Type1 | D::Type2, C::PostMeal | C::Other) => ThresholdBand::inclusive(80.0, 180.0),
        (D::Gestational, C::Fasting) => ThresholdBand::exclusive(70.0, 95.0),
        (D::Gestational, C::PostMeal) => ThresholdBand::exclusive(70.0, 140.0),
        // Two hours after a meal.
        (D::Gestational, C::Other) => ThresholdBand::exclusive(70.0, 120.0),
        (D::Prediabetes, C::Fasting) => ThresholdBand::inclusive(100.0, 125.0),
        (D::Prediabetes, C::PostMeal | C::Other) => ThresholdBand::inclusive(100.0, 199.0),
        (D::Unspecified, _) => ThresholdBand::inclusive(70.0, 140.0),
    }
}

/// Classify a reading in mg/dL.
pub fn classify(
    value: f64,
    context: MeasurementContext,
    diabetes_type: DiabetesType,
) -> GlucoseCategory {
    threshold_band(diabetes_type, context).categorize(value)
}

/// Interpret a JSON value as a glucose reading.
///
/// Accepts JSON numbers and numeric strings. Anything else, including
/// non-finite numbers such as `"NaN"`, is a `CoreError::InvalidArgument`.
pub fn parse_glucose_value(raw: &serde_json::Value) -> Result<f64, CoreError> {
    let parsed = match raw {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(value) if value.is_finite() => Ok(value),
        _ => Err(CoreError::InvalidArgument(format!(
            "glucose_level must be a number, got {raw}"
        ))),
    }
}

/// Parse and classify a raw reading using client-supplied labels.
pub fn classify_raw(
    raw: &serde_json::Value,
    context: &str,
    diabetes_type: DiabetesType,
) -> Result<GlucoseCategory, CoreError> {
    let value = parse_glucose_value(raw)?;
    Ok(classify(
        value,
        MeasurementContext::from_label(context),
        diabetes_type,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use super::GlucoseCategory::{Hyperglycemia, Hypoglycemia, Normal};

    const ALL_TYPES: [DiabetesType; 5] = [
        DiabetesType::Type1,
        DiabetesType::Type2,
        DiabetesType::Gestational,
        DiabetesType::Prediabetes,
        DiabetesType::Unspecified,
    ];

    const ALL_CONTEXTS: [MeasurementContext; 3] = [
        MeasurementContext::Fasting,
        MeasurementContext::PostMeal,
        MeasurementContext::Other,
    ];

    fn classify_labels(value: f64, context: &str, diabetes_type: &str) -> GlucoseCategory {
        classify(
            value,
            MeasurementContext::from_label(context),
            DiabetesType::from_label(diabetes_type),
        )
    }

    #[test]
    fn type1_fasting_lower_boundary() {
        assert_eq!(classify_labels(80.0, "Fasting", "Type 1"), Normal);
        assert_eq!(classify_labels(79.9, "Fasting", "Type 1"), Hypoglycemia);
    }

    #[test]
    fn type2_fasting_upper_boundary_is_inclusive() {
        assert_eq!(classify_labels(130.0, "Fasting", "Type 2"), Normal);
        assert_eq!(classify_labels(130.1, "Fasting", "Type 2"), Hyperglycemia);
    }

    #[test]
    fn type1_post_meal_uses_180() {
        assert_eq!(classify_labels(180.0, "Post-meal", "Type 1"), Normal);
        assert_eq!(classify_labels(180.5, "Post-meal", "Type 1"), Hyperglycemia);
        assert_eq!(classify_labels(79.0, "Post-meal", "Type 1"), Hypoglycemia);
    }

    #[test]
    fn gestational_upper_boundary_is_exclusive() {
        assert_eq!(classify_labels(95.0, "Fasting", "Gestational"), Hyperglycemia);
        assert_eq!(classify_labels(94.9, "Fasting", "Gestational"), Normal);
        assert_eq!(classify_labels(140.0, "Post-meal", "Gestational"), Hyperglycemia);
        assert_eq!(classify_labels(139.9, "Post-meal", "Gestational"), Normal);
        assert_eq!(classify_labels(120.0, "Other", "Gestational"), Hyperglycemia);
        assert_eq!(classify_labels(119.9, "Other", "Gestational"), Normal);
    }

    #[test]
    fn gestational_lower_boundary() {
        assert_eq!(classify_labels(70.0, "Fasting", "Gestational"), Normal);
        assert_eq!(classify_labels(69.9, "Fasting", "Gestational"), Hypoglycemia);
    }

    #[test]
    fn prediabetes_boundaries() {
        assert_eq!(classify_labels(125.0, "Fasting", "Prediabetes"), Normal);
        assert_eq!(classify_labels(125.01, "Fasting", "Prediabetes"), Hyperglycemia);
        assert_eq!(classify_labels(99.9, "Fasting", "Prediabetes"), Hypoglycemia);
        assert_eq!(classify_labels(199.0, "Post-meal", "Prediabetes"), Normal);
        assert_eq!(classify_labels(199.5, "Other", "Prediabetes"), Hyperglycemia);
    }

    #[test]
    fn generic_table_boundaries() {
        assert_eq!(classify_labels(140.0, "Other", "Unknown"), Normal);
        assert_eq!(classify_labels(140.01, "Other", "Unknown"), Hyperglycemia);
        assert_eq!(classify_labels(69.99, "Other", "Unknown"), Hypoglycemia);
    }

    #[test]
    fn unknown_context_behaves_like_other() {
        for value in [60.0, 80.0, 150.0, 180.0, 181.0, 250.0] {
            let snack = classify_labels(value, "Snack", "Type 1");
            assert_eq!(snack, classify_labels(value, "Post-meal", "Type 1"));
            assert_eq!(snack, classify_labels(value, "Other", "Type 1"));
        }
    }

    #[test]
    fn unknown_type_uses_generic_band_for_every_context() {
        for context in ["Fasting", "Post-meal", "Other", "Bedtime"] {
            assert_eq!(classify_labels(69.0, context, "Type 3"), Hypoglycemia);
            assert_eq!(classify_labels(70.0, context, "Type 3"), Normal);
            assert_eq!(classify_labels(140.0, context, "Type 3"), Normal);
            assert_eq!(classify_labels(141.0, context, "Type 3"), Hyperglycemia);
        }
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(MeasurementContext::from_label("fasting"), MeasurementContext::Other);
        assert_eq!(DiabetesType::from_label("type 1"), DiabetesType::Unspecified);
    }

    #[test]
    fn bands_partition_the_line_in_order() {
        for diabetes_type in ALL_TYPES {
            for context in ALL_CONTEXTS {
                let band = threshold_band(diabetes_type, context);
                assert!(band.low < band.high, "{diabetes_type:?}/{context:?}");

                let mut previous = Hypoglycemia;
                let mut seen = Vec::new();
                let mut value = -50.0;
                while value <= 400.0 {
                    let category = classify(value, context, diabetes_type);
                    assert!(
                        category >= previous,
                        "{diabetes_type:?}/{context:?}: {value} went back to {category:?}"
                    );
                    if !seen.contains(&category) {
                        seen.push(category);
                    }
                    previous = category;
                    value += 0.25;
                }
                assert_eq!(seen, vec![Hypoglycemia, Normal, Hyperglycemia]);
            }
        }
    }

    #[test]
    fn classification_is_idempotent() {
        let first = classify_labels(101.5, "Fasting", "Prediabetes");
        for _ in 0..100 {
            assert_eq!(classify_labels(101.5, "Fasting", "Prediabetes"), first);
        }
    }

    #[test]
    fn profile_resolution() {
        assert_eq!(DiabetesType::for_profile(None), DiabetesType::Type2);
        assert_eq!(DiabetesType::for_profile(Some(None)), DiabetesType::Unspecified);
        assert_eq!(
            DiabetesType::for_profile(Some(Some("Gestational"))),
            DiabetesType::Gestational
        );
    }

    #[test]
    fn parses_numbers_and_numeric_strings() {
        assert_eq!(parse_glucose_value(&json!(120)).unwrap(), 120.0);
        assert_eq!(parse_glucose_value(&json!(95.5)).unwrap(), 95.5);
        assert_eq!(parse_glucose_value(&json!(" 101.25 ")).unwrap(), 101.25);
    }

    #[test]
    fn non_numeric_value_is_invalid_argument() {
        assert_matches!(
            parse_glucose_value(&json!("abc")),
            Err(CoreError::InvalidArgument(_))
        );
        assert_matches!(
            parse_glucose_value(&json!(true)),
            Err(CoreError::InvalidArgument(_))
        );
        assert_matches!(
            parse_glucose_value(&json!(null)),
            Err(CoreError::InvalidArgument(_))
        );
        assert_matches!(
            classify_raw(&json!("abc"), "Fasting", DiabetesType::Type1),
            Err(CoreError::InvalidArgument(_))
        );
    }

    #[test]
    fn non_finite_strings_are_rejected() {
        for raw in ["NaN", "inf", "-infinity"] {
            assert_matches!(
                parse_glucose_value(&json!(raw)),
                Err(CoreError::InvalidArgument(_))
            );
        }
    }

    #[test]
    fn classify_raw_accepts_string_readings() {
        let category = classify_raw(&json!("200"), "Fasting", DiabetesType::Type1).unwrap();
        assert_eq!(category, Hyperglycemia);
    }

    #[test]
    fn category_labels_and_alerts() {
        assert_eq!(Hypoglycemia.to_string(), "Hypoglycemia");
        assert_eq!(serde_json::to_value(Normal).unwrap(), json!("Normal"));
        assert!(Hypoglycemia.is_alert());
        assert!(Hyperglycemia.is_alert());
        assert!(!Normal.is_alert());
    }
}
