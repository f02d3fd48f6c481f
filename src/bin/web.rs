//! Single binary web server: session API over in-memory state.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.

use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use badminton_session_web::{
    add_player, create_match, delete_queue, end_match, enqueue_match, promote_queue,
    recalculate_split_costs, remove_player, update_wait_times, PlayerId, Session, SessionError,
    SessionId, Settings, SkillTier, WAIT_TIME_UPDATE_INTERVAL_SECS,
};
use chrono::Utc;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-session entry: session data + last activity time (for auto-cleanup).
struct SessionEntry {
    session: Session,
    last_activity: Instant,
}

/// In-memory state: many sessions by ID. Entries are removed after inactivity.
type AppState = Data<RwLock<HashMap<SessionId, SessionEntry>>>;

/// Inactivity threshold: sessions not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateSessionBody {
    #[serde(default)]
    settings: Option<Settings>,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
    #[serde(default)]
    skill: SkillTier,
}

#[derive(Deserialize)]
struct TeamsBody {
    team_1: [PlayerId; 2],
    team_2: [PlayerId; 2],
    #[serde(default)]
    confirm_rematch: bool,
}

#[derive(Deserialize)]
struct EndMatchBody {
    shuttles_used: u32,
}

/// Path segment: session id (e.g. /api/sessions/{id})
#[derive(Deserialize)]
struct SessionPath {
    id: SessionId,
}

/// Path segments: session id and a child resource id.
#[derive(Deserialize)]
struct SessionChildPath {
    id: SessionId,
    child_id: Uuid,
}

fn domain_error(e: &SessionError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn no_session() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "badminton-session-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new session (returns it with id; client stores id for subsequent requests).
#[post("/api/sessions")]
async fn api_create_session(state: AppState, body: Option<Json<CreateSessionBody>>) -> HttpResponse {
    let settings = body
        .and_then(|b| b.into_inner().settings)
        .unwrap_or_default();
    let session = Session::with_settings(settings);
    let response = HttpResponse::Ok().json(&session);
    let id = session.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        SessionEntry {
            session,
            last_activity: Instant::now(),
        },
    );
    response
}

/// Get a session by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/sessions/{id}")]
async fn api_get_session(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.session)
        }
        None => no_session(),
    }
}

/// Replace session settings.
#[put("/api/sessions/{id}/settings")]
async fn api_update_settings(
    state: AppState,
    path: Path<SessionPath>,
    body: Json<Settings>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_session(),
    };
    entry.last_activity = Instant::now();
    entry.session.settings = body.into_inner();
    HttpResponse::Ok().json(&entry.session)
}

/// Add a player to the roster (settings must be configured).
#[post("/api/sessions/{id}/players")]
async fn api_add_player(
    state: AppState,
    path: Path<SessionPath>,
    body: Json<AddPlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_session(),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    match add_player(s, body.name.trim(), body.skill, Utc::now()) {
        Ok(_) => HttpResponse::Ok().json(s),
        Err(e) => domain_error(&e),
    }
}

/// Soft-delete a player by id.
#[delete("/api/sessions/{id}/players/{child_id}")]
async fn api_remove_player(state: AppState, path: Path<SessionChildPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_session(),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    match remove_player(s, path.child_id) {
        Ok(()) => HttpResponse::Ok().json(s),
        Err(e) => domain_error(&e),
    }
}

/// Create a match from a 4-player selection (court must be free).
#[post("/api/sessions/{id}/matches")]
async fn api_create_match(
    state: AppState,
    path: Path<SessionPath>,
    body: Json<TeamsBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_session(),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    match create_match(s, body.team_1, body.team_2, body.confirm_rematch, Utc::now()) {
        Ok(_) => HttpResponse::Ok().json(s),
        Err(e) => domain_error(&e),
    }
}

/// End an active match, recording shuttles used.
#[post("/api/sessions/{id}/matches/{child_id}/end")]
async fn api_end_match(
    state: AppState,
    path: Path<SessionChildPath>,
    body: Json<EndMatchBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_session(),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    match end_match(s, path.child_id, body.shuttles_used, Utc::now()) {
        Ok(()) => HttpResponse::Ok().json(s),
        Err(e) => domain_error(&e),
    }
}

/// Queue a team pairing for a later court (no court check here).
#[post("/api/sessions/{id}/queues")]
async fn api_enqueue(
    state: AppState,
    path: Path<SessionPath>,
    body: Json<TeamsBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_session(),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    match enqueue_match(s, body.team_1, body.team_2, Utc::now()) {
        Ok(_) => HttpResponse::Ok().json(s),
        Err(e) => domain_error(&e),
    }
}

/// Promote a queue entry to a match (court availability re-checked).
#[post("/api/sessions/{id}/queues/{child_id}/promote")]
async fn api_promote_queue(state: AppState, path: Path<SessionChildPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_session(),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    match promote_queue(s, path.child_id, Utc::now()) {
        Ok(_) => HttpResponse::Ok().json(s),
        Err(e) => domain_error(&e),
    }
}

/// Remove a queue entry without playing it.
#[delete("/api/sessions/{id}/queues/{child_id}")]
async fn api_delete_queue(state: AppState, path: Path<SessionChildPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_session(),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    match delete_queue(s, path.child_id) {
        Ok(()) => HttpResponse::Ok().json(s),
        Err(e) => domain_error(&e),
    }
}

/// Recalculate split-system costs across all current players.
#[post("/api/sessions/{id}/costs/recalculate")]
async fn api_recalculate_costs(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_session(),
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    match recalculate_split_costs(s) {
        Ok(()) => HttpResponse::Ok().json(s),
        Err(e) => domain_error(&e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<SessionId, SessionEntry>::new()));

    // Background task: recompute wait times every 10 seconds. The first tick
    // fires immediately, so players see a wait time as soon as the server is up.
    let state_wait = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval =
            actix_web::rt::time::interval(Duration::from_secs(WAIT_TIME_UPDATE_INTERVAL_SECS));
        loop {
            interval.tick().await;
            let now = Utc::now();
            let mut g = match state_wait.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            for entry in g.values_mut() {
                update_wait_times(&mut entry.session, now);
            }
        }
    });

    // Background task: every 30 minutes, remove sessions inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive session(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_create_session)
            .service(api_get_session)
            .service(api_update_settings)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_create_match)
            .service(api_end_match)
            .service(api_enqueue)
            .service(api_promote_queue)
            .service(api_delete_queue)
            .service(api_recalculate_costs)
    })
    .bind(bind)?
    .run()
    .await
}
