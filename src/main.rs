use signon_api::application::{
    commands::auth::RedirectPolicy,
    ports::{
        AvatarFetcherPort, SessionGatewayPort,
        identity::IdentityProviders,
    },
    services::ApplicationServices,
};
use signon_api::config::AppConfig;
use signon_api::domain::avatar::HostAllowlist;
use signon_api::infrastructure::{
    avatar::HttpAvatarFetcher, identity::GoogleIdentityProvider,
    security::session_gateway::CookieSessionGateway,
};
use signon_api::presentation::http::{
    routes::build_router_with_rate_limiter,
    state::{CookieSettings, HttpState},
};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    // before tracing, so RUST_LOG from `.env` applies
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let session_gateway: Arc<SessionGatewayPort> =
        Arc::new(CookieSessionGateway::new(config.session_secret()));
    let avatar_fetcher: Arc<AvatarFetcherPort> = Arc::new(HttpAvatarFetcher::new()?);
    let providers =
        IdentityProviders::new().with(Arc::new(GoogleIdentityProvider::new(config.google())?));
    let provider_names: Vec<String> = providers.names().map(str::to_owned).collect();

    let services = Arc::new(ApplicationServices::new(
        providers,
        session_gateway,
        avatar_fetcher,
        RedirectPolicy::new(
            config.frontend_origin().clone(),
            config.default_redirect_path(),
        ),
        HostAllowlist::new(config.avatar_allowed_hosts()),
    ));

    let state = HttpState {
        services,
        cookies: CookieSettings {
            secure: config.is_production(),
            session_max_age: config.session_max_age(),
        },
        allowed_origin: config.frontend_origin().origin().ascii_serialization(),
    };

    let app = build_router_with_rate_limiter(state, config.avatar_rate_limit());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        frontend = %config.frontend_origin(),
        providers = ?provider_names,
        production = config.is_production(),
        "listening on {address}"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
