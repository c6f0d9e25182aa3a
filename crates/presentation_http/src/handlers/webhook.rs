//! Twilio inbound webhook
//!
//! Receives the form-encoded inbound WhatsApp message and answers with a
//! TwiML document. The reply body always renders; a sender address that does
//! not parse still gets the fallback help text rather than an error.

use axum::extract::{Form, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use domain::PhoneNumber;
use integration_twilio::{IncomingMessage, MessagingResponse};
use tracing::{instrument, warn};

use crate::state::AppState;

/// `POST /webhook/twilio` - language selection conversation
#[instrument(skip(state, incoming), fields(message_sid = %incoming.message_sid))]
pub async fn receive_message(
    State(state): State<AppState>,
    Form(incoming): Form<IncomingMessage>,
) -> Response {
    let reply = match PhoneNumber::new(&incoming.from) {
        Ok(sender) => {
            state
                .language_selection
                .handle_message(&sender, &incoming.body)
                .await
        },
        Err(e) => {
            warn!(from = %incoming.from, error = %e, "Unparseable webhook sender");
            "❓ I didn't understand.\n\nSend *START* to choose your language.".to_string()
        },
    };

    let xml = MessagingResponse::new().message(reply).to_xml();
    ([(header::CONTENT_TYPE, "text/xml")], xml).into_response()
}
