mod app;
mod cart;
mod config;
mod db;
mod extract;
mod products;
mod profile;
mod state;
mod users;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "storefront=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // Missing configuration or a failed database authentication is fatal:
    // nothing binds until both succeed.
    let state = match AppState::init().await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "unable to start");
            std::process::exit(1);
        }
    };

    // Session middleware is not wired up; the secret is still required so a
    // misconfigured deployment fails here rather than once sessions land.
    tracing::info!(
        env = %state.config.env,
        session_secret_set = !state.config.session_secret.is_empty(),
        "configuration loaded"
    );

    if let Err(e) = sqlx::migrate!("./migrations").run(&state.db).await {
        tracing::warn!(error = %e, "migration failed; continuing");
    }

    let config = state.config.clone();
    let app = app::build_app(state);
    app::serve(app, &config).await
}
