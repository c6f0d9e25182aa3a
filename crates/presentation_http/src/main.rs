//! AgriVue HTTP Server
//!
//! Main entry point: wires the Twilio transport, translation client, speech
//! gateway, artifact store and language registry into the alert dispatcher
//! and serves the HTTP API.

use std::{path::PathBuf, sync::Arc, time::Duration};

use application::{
    AlertDispatcher, DispatchConfig, LanguageSelectionService,
    ports::{LanguageStorePort, MessengerPort, TranslationPort, VoicePort},
};
use domain::PhoneNumber;
use infrastructure::{
    AppConfig, HttpTranslationAdapter, JsonLanguageStore, SpeechVoiceAdapter,
    TwilioMessengerAdapter,
};
use presentation_http::{RateLimiterConfig, RateLimiterLayer, routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agrivue_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🌱 AgriVue v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        audio_dir = %config.storage.audio_dir,
        "Configuration loaded"
    );

    let recipient = PhoneNumber::new(&config.alerts.recipient)
        .map_err(|e| anyhow::anyhow!("Invalid alerts.recipient: {e}"))?;

    // Messaging transport
    let twilio = integration_twilio::TwilioClient::new(config.twilio.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize Twilio client: {e}"))?;
    let messenger: Arc<dyn MessengerPort> = Arc::new(TwilioMessengerAdapter::new(twilio));

    // Translation service
    let translate = integration_translate::TranslateClient::new(config.translation.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize translation client: {e}"))?;
    let translator: Arc<dyn TranslationPort> = Arc::new(HttpTranslationAdapter::new(translate));

    // Speech synthesis + artifact storage
    let audio_dir = PathBuf::from(&config.storage.audio_dir);
    let tts = ai_speech::SpeechGatewayProvider::new(config.speech.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize speech gateway: {e}"))?;
    let store = ai_speech::ArtifactStore::new(audio_dir.clone());
    let voice: Arc<dyn VoicePort> = Arc::new(SpeechVoiceAdapter::new(Arc::new(tts), store));

    // Language registry
    let languages: Arc<dyn LanguageStorePort> =
        Arc::new(JsonLanguageStore::open(&config.storage.language_file));

    // Services
    let dispatcher = AlertDispatcher::new(
        messenger,
        translator,
        voice,
        Arc::clone(&languages),
        DispatchConfig {
            recipient,
            public_base_url: config.alerts.public_base_url.clone(),
            voice_send_delay: Duration::from_millis(config.alerts.voice_send_delay_ms),
        },
    );
    let language_selection = LanguageSelectionService::new(languages);

    let state = AppState {
        dispatcher: Arc::new(dispatcher),
        language_selection: Arc::new(language_selection),
        audio_dir: Arc::new(audio_dir),
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    // Configure rate limiter
    let rate_limiter = RateLimiterLayer::new(&RateLimiterConfig {
        enabled: config.security.rate_limit_enabled,
        requests_per_minute: config.security.rate_limit_rpm,
    });

    // Add middleware (order matters: first added = outermost)
    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(rate_limiter);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
    // Connection draining is handled by axum's graceful_shutdown
}
