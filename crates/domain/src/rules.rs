//! Alert rules
//!
//! Rules are evaluated in fixed priority order (rain, wind, soil) and the
//! first match wins — later rules are not evaluated once one fires. This
//! mirrors the observed product behavior; whether simultaneous conditions
//! should alert on more than the first is an open product question.

use crate::entities::{Alert, AlertCategory, Observation, Reading};

/// Soil moisture at or below this percentage fires the soil alert
pub const SOIL_MOISTURE_THRESHOLD: f64 = 25.0;

const MISSING_FIELD: &str = "N/A";

/// Evaluate one observation and decide whether an alert fires
///
/// Returns the empty alert when no rule matches. Numeric coercion never
/// raises: an unparseable moisture value counts as 100 (non-alerting).
pub fn evaluate(node: &str, observation: &Observation) -> Alert {
    if observation.rain_is_high() {
        return Alert::new(AlertCategory::Rain, rain_message(node, observation));
    }

    if observation.wind_is_strong() {
        return Alert::new(AlertCategory::Wind, wind_message(node, observation));
    }

    if let Some(moisture) = observation.moisture_value() {
        if moisture <= SOIL_MOISTURE_THRESHOLD {
            return Alert::new(AlertCategory::Soil, soil_message(node, observation));
        }
    }

    Alert::none()
}

fn rain_message(node: &str, observation: &Observation) -> String {
    format!(
        "🌧️ RAIN ALERT\n\nNode: {node}\nCondition: Heavy rain expected\nSummary: {}",
        summary_or_placeholder(observation)
    )
}

fn wind_message(node: &str, observation: &Observation) -> String {
    format!(
        "🌬️ HIGH WIND ALERT\n\nNode: {node}\nCondition: Strong winds detected\nSummary: {}",
        summary_or_placeholder(observation)
    )
}

fn soil_message(node: &str, observation: &Observation) -> String {
    let moisture = observation
        .moisture_pct
        .as_ref()
        .map(percent_lexeme)
        .unwrap_or_else(|| MISSING_FIELD.to_string());
    let health = observation
        .health_index
        .as_ref()
        .map_or_else(|| MISSING_FIELD.to_string(), ToString::to_string);

    format!(
        "🚨 LOW SOIL MOISTURE ALERT\n\nNode: {node}\nSoil Moisture: {moisture}%\nHealth Index: {health}",
    )
}

fn summary_or_placeholder(observation: &Observation) -> &str {
    observation.summary.as_deref().unwrap_or(MISSING_FIELD)
}

/// Render a moisture reading without its `%` sign so the template can append
/// exactly one — "12%" and "12" both come out as `12`
fn percent_lexeme(reading: &Reading) -> String {
    reading
        .to_string()
        .trim_end_matches('%')
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(json: &str) -> Observation {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn rain_fires_on_high_probability() {
        let obs = observation(r#"{"rain_prob": "High", "summary": "storm front"}"#);
        let alert = evaluate("Field 3", &obs);
        assert_eq!(alert.category, AlertCategory::Rain);
        assert!(alert.message.contains("Field 3"));
        assert!(alert.message.contains("storm front"));
    }

    #[test]
    fn rain_takes_priority_over_wind_and_soil() {
        let obs = observation(
            r#"{"rain_prob": "high", "wind_speed": "Strong", "moisture_pct": "10%"}"#,
        );
        let alert = evaluate("Field 3", &obs);
        assert_eq!(alert.category, AlertCategory::Rain);
    }

    #[test]
    fn wind_takes_priority_over_soil() {
        let obs = observation(r#"{"wind_speed": "STRONG", "moisture_pct": 5}"#);
        let alert = evaluate("Field 3", &obs);
        assert_eq!(alert.category, AlertCategory::Wind);
        assert!(alert.message.contains("Strong winds detected"));
    }

    #[test]
    fn soil_fires_at_threshold() {
        for json in [
            r#"{"moisture_pct": "25%"}"#,
            r#"{"moisture_pct": "25"}"#,
            r#"{"moisture_pct": 25}"#,
            r#"{"moisture_pct": 25.0}"#,
        ] {
            let alert = evaluate("Field 3", &observation(json));
            assert_eq!(alert.category, AlertCategory::Soil, "input: {json}");
            assert!(alert.message.contains("25%"), "input: {json}");
        }
    }

    #[test]
    fn soil_does_not_fire_above_threshold() {
        let alert = evaluate("Field 3", &observation(r#"{"moisture_pct": "26"}"#));
        assert_eq!(alert.category, AlertCategory::None);
    }

    #[test]
    fn unparseable_moisture_does_not_fire() {
        let alert = evaluate("Field 3", &observation(r#"{"moisture_pct": "n/a"}"#));
        assert_eq!(alert.category, AlertCategory::None);
    }

    #[test]
    fn empty_observation_yields_none() {
        let alert = evaluate("Field 3", &observation("{}"));
        assert_eq!(alert.category, AlertCategory::None);
        assert!(!alert.is_firing());
    }

    #[test]
    fn missing_summary_renders_placeholder() {
        let alert = evaluate("Field 3", &observation(r#"{"rain_prob": "High"}"#));
        assert!(alert.message.contains("Summary: N/A"));
    }

    #[test]
    fn soil_message_includes_health_index() {
        let obs = observation(r#"{"moisture_pct": "12%", "health_index": 0.8}"#);
        let alert = evaluate("Soil A", &obs);
        assert!(alert.message.contains("Soil A"));
        assert!(alert.message.contains("Soil Moisture: 12%"));
        assert!(alert.message.contains("Health Index: 0.8"));
    }

    #[test]
    fn soil_message_renders_single_percent_sign() {
        let alert = evaluate("Soil A", &observation(r#"{"moisture_pct": "12%"}"#));
        assert!(alert.message.contains("12%"));
        assert!(!alert.message.contains("12%%"));
    }

    #[test]
    fn non_high_rain_does_not_fire() {
        let alert = evaluate("Field 3", &observation(r#"{"rain_prob": "Medium"}"#));
        assert_eq!(alert.category, AlertCategory::None);
    }
}
