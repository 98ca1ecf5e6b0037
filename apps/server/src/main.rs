use actix_web::{web, App, HttpServer};
use server::config::admin_key::admin_api_key;
use server::config::roster_file::load_roster;
use server::infra::state::build_state;
use server::middleware::request_trace::RequestTrace;
use server::middleware::structured_logger::StructuredLogger;
use server::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("WHISPER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("WHISPER_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ WHISPER_PORT must be a valid port number");
            std::process::exit(1);
        });

    println!("🚀 Starting Whisper Chain Server on http://{}:{}", host, port);

    let roster_path = match std::env::var("WHISPER_ROSTER_PATH") {
        Ok(path) => path,
        Err(_) => {
            eprintln!("❌ WHISPER_ROSTER_PATH must be set (path to the roster JSON file)");
            std::process::exit(1);
        }
    };

    let admin_key = match admin_api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("❌ Invalid admin api key configuration: {e}");
            std::process::exit(1);
        }
    };

    let entries = match load_roster(&roster_path) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("❌ Failed to load roster from '{roster_path}': {e}");
            std::process::exit(1);
        }
    };

    // Create application state using unified builder
    let app_state = match build_state()
        .with_admin_api_key(admin_key)
        .with_entries(entries)
        .build()
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "✅ Roster loaded: {} participants",
        app_state.roster.read().count()
    );

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
