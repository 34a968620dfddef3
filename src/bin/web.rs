//! Single binary web server: REST API over the tournament store.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080),
//! DATA_FILE (path of the JSON data file, default ./data/tournament.json).

use actix_web::{
    delete, get, post,
    web::{Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::sync::RwLock;
use swiss_tournament_web::{
    player_standings, swiss_pairings, JsonFileStore, PlayerId, TournamentError, TournamentStore,
};

/// Shared state: one store behind a lock. Reads take the read lock,
/// mutations the write lock, so a standings computation always sees
/// one consistent snapshot.
type AppState = Data<RwLock<JsonFileStore>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct RegisterPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct ReportMatchBody {
    winner: PlayerId,
    loser: PlayerId,
}

/// Map a domain error to a response: storage failures are 500, every
/// other variant is a caller mistake (400).
fn error_response(e: TournamentError) -> HttpResponse {
    match e {
        TournamentError::Storage(_) => {
            log::error!("storage failure: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
        _ => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament-web",
    })
}

/// List all registered players.
#[get("/api/players")]
async fn api_list_players(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.players() {
        Ok(players) => HttpResponse::Ok().json(players),
        Err(e) => error_response(TournamentError::Storage(e)),
    }
}

/// Register a player (name must not be blank; the store assigns the id).
#[post("/api/players")]
async fn api_register_player(state: AppState, body: Json<RegisterPlayerBody>) -> HttpResponse {
    let name = body.name.trim();
    if name.is_empty() {
        return error_response(TournamentError::BlankPlayerName);
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.register_player(name) {
        Ok(player) => {
            log::info!("Registered player {} ({})", player.id, player.name);
            HttpResponse::Ok().json(player)
        }
        Err(e) => error_response(TournamentError::Storage(e)),
    }
}

/// Bulk register players from a CSV body: one row per player, first
/// column is the name, no header row. Blank names are skipped.
#[post("/api/players/import")]
async fn api_import_players(state: AppState, body: String) -> HttpResponse {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut names: Vec<String> = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                return HttpResponse::BadRequest()
                    .json(serde_json::json!({ "error": format!("Invalid CSV: {}", e) }))
            }
        };
        if let Some(name) = record.get(0) {
            let name = name.trim();
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
    }

    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut registered = Vec::with_capacity(names.len());
    for name in &names {
        match g.register_player(name) {
            Ok(player) => registered.push(player),
            Err(e) => return error_response(TournamentError::Storage(e)),
        }
    }
    log::info!("Imported {} player(s) from CSV", registered.len());
    HttpResponse::Ok().json(serde_json::json!({
        "registered": registered.len(),
        "players": registered,
    }))
}

/// Count of registered players.
#[get("/api/players/count")]
async fn api_count_players(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.count_players() {
        Ok(count) => HttpResponse::Ok().json(serde_json::json!({ "count": count })),
        Err(e) => error_response(TournamentError::Storage(e)),
    }
}

/// Remove all players unconditionally.
#[delete("/api/players")]
async fn api_clear_players(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.clear_players() {
        Ok(()) => {
            log::info!("Cleared all players");
            HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
        }
        Err(e) => error_response(TournamentError::Storage(e)),
    }
}

/// List all recorded match outcomes.
#[get("/api/matches")]
async fn api_list_matches(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.matches() {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => error_response(TournamentError::Storage(e)),
    }
}

/// Report the outcome of one concluded match. Both ids must be
/// registered players and must differ.
#[post("/api/matches")]
async fn api_report_match(state: AppState, body: Json<ReportMatchBody>) -> HttpResponse {
    if body.winner == body.loser {
        return error_response(TournamentError::SelfMatch(body.winner));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let players = match g.players() {
        Ok(players) => players,
        Err(e) => return error_response(TournamentError::Storage(e)),
    };
    for id in [body.winner, body.loser] {
        if !players.iter().any(|p| p.id == id) {
            return error_response(TournamentError::PlayerNotFound(id));
        }
    }
    match g.record_match(body.winner, body.loser) {
        Ok(record) => {
            log::info!(
                "Recorded match {}: {} beat {}",
                record.id,
                record.winner,
                record.loser
            );
            HttpResponse::Ok().json(record)
        }
        Err(e) => error_response(TournamentError::Storage(e)),
    }
}

/// Remove all match records unconditionally.
#[delete("/api/matches")]
async fn api_clear_matches(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.clear_matches() {
        Ok(()) => {
            log::info!("Cleared all matches");
            HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
        }
        Err(e) => error_response(TournamentError::Storage(e)),
    }
}

/// Current standings: wins descending, name ascending.
#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match player_standings(&*g) {
        Ok(standings) => HttpResponse::Ok().json(standings),
        Err(e) => error_response(TournamentError::Storage(e)),
    }
}

/// Next-round pairings (400 if the player count is odd).
#[get("/api/pairings")]
async fn api_pairings(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match swiss_pairings(&*g) {
        Ok(pairings) => HttpResponse::Ok().json(pairings),
        Err(e) => error_response(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_file() -> String {
    "./data/tournament.json".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_file = std::env::var("DATA_FILE").unwrap_or_else(|_| default_data_file());

    let store = JsonFileStore::open(&data_file)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    log::info!("Tournament data at {}", data_file);

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(store));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_list_players)
            .service(api_register_player)
            .service(api_import_players)
            .service(api_count_players)
            .service(api_clear_players)
            .service(api_list_matches)
            .service(api_report_match)
            .service(api_clear_matches)
            .service(api_standings)
            .service(api_pairings)
    })
    .bind(bind)?
    .run()
    .await
}
