//! Observation intake
//!
//! One POST triggers one dispatch for one node. A failed required text send
//! surfaces as 502; an observation that fires no rule is a successful
//! request with `delivered: false`.

use axum::Json;
use axum::extract::{Path, State};
use domain::{AlertCategory, Observation};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use application::DispatchOutcome;

use crate::error::ApiError;
use crate::state::AppState;

/// Response to one dispatch attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchResponse {
    /// Whether the required text message was confirmed sent
    pub delivered: bool,
    /// Category of the evaluated alert (NONE when no rule fired)
    pub category: AlertCategory,
    /// Transport ID of the sent text message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_message_id: Option<String>,
    /// Transport ID of the sent voice message, if the best-effort channel
    /// succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_message_id: Option<String>,
}

impl From<DispatchOutcome> for DispatchResponse {
    fn from(outcome: DispatchOutcome) -> Self {
        match outcome {
            DispatchOutcome::NoAlert => Self {
                delivered: false,
                category: AlertCategory::None,
                text_message_id: None,
                voice_message_id: None,
            },
            DispatchOutcome::Delivered {
                category,
                text_message_id,
                voice_message_id,
            } => Self {
                delivered: true,
                category,
                text_message_id: Some(text_message_id),
                voice_message_id,
            },
        }
    }
}

/// `POST /v1/alerts/{node}` - evaluate one observation and dispatch
#[instrument(skip(state, observation), fields(node = %node))]
pub async fn dispatch_alert(
    State(state): State<AppState>,
    Path(node): Path<String>,
    Json(observation): Json<Observation>,
) -> Result<Json<DispatchResponse>, ApiError> {
    let outcome = state.dispatcher.dispatch(&node, &observation).await?;
    Ok(Json(outcome.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_alert_response_shape() {
        let response: DispatchResponse = DispatchOutcome::NoAlert.into();
        assert!(!response.delivered);
        assert_eq!(response.category, AlertCategory::None);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"delivered\":false"));
        assert!(!json.contains("text_message_id"));
    }

    #[test]
    fn delivered_response_shape() {
        let response: DispatchResponse = DispatchOutcome::Delivered {
            category: AlertCategory::Soil,
            text_message_id: "SM1".to_string(),
            voice_message_id: None,
        }
        .into();

        assert!(response.delivered);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"category\":\"SOIL\""));
        assert!(json.contains("\"text_message_id\":\"SM1\""));
        assert!(!json.contains("voice_message_id"));
    }
}
