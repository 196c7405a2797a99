use tracing_subscriber::EnvFilter;

#[rocket::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    if let Err(e) = twitter_server::rocket().launch().await {
        tracing::error!(error = %e, "server did not start");
        std::process::exit(1);
    }
}
