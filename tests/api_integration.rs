//! End-to-end API integration tests
//!
//! These tests drive the complete HTTP flows of the composer API over
//! in-memory provider fakes: opening a session, restoring a prior
//! draft, editing the selection, designating captains, and submitting
//! the finished team.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tokio::sync::Notify;
use tower::util::ServiceExt; // for oneshot

use fantasyiq_api::api::{self, state::AppState};
use fantasyiq_api::domain::draft::{ContestId, PlayerId, Sport};
use fantasyiq_api::domain::providers::{
    PriorDraftProvider, ProviderError, ProviderResult, RosterBundle, RosterProvider, SavedDraft,
    TeamSaved, TeamSaver, TeamSubmission,
};
use fantasyiq_api::domain::roster::{Contest, Player};

const CONTEST: &str = "match-1";

/// One fake standing in for the whole legacy backend
struct FakeBackend {
    players: Vec<Player>,
    saved: Option<SavedDraft>,
    reject_save_with: Option<String>,
    save_calls: AtomicUsize,
    /// When set, save requests park here until released by the test
    save_gate: Option<Arc<Notify>>,
}

impl FakeBackend {
    fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            saved: None,
            reject_save_with: None,
            save_calls: AtomicUsize::new(0),
            save_gate: None,
        }
    }
}

#[async_trait]
impl RosterProvider for FakeBackend {
    async fn fetch_roster(&self, contest_id: &ContestId) -> ProviderResult<RosterBundle> {
        if contest_id.as_str() != CONTEST {
            return Err(ProviderError::ContestNotFound(contest_id.clone()));
        }
        Ok(RosterBundle {
            contest: Contest {
                id: contest_id.clone(),
                title: "IND vs AUS".to_string(),
                sport: Sport::Cricket,
            },
            players: self.players.clone(),
        })
    }
}

#[async_trait]
impl PriorDraftProvider for FakeBackend {
    async fn fetch_prior_draft(
        &self,
        _contest_id: &ContestId,
    ) -> ProviderResult<Option<SavedDraft>> {
        Ok(self.saved.clone())
    }
}

#[async_trait]
impl TeamSaver for FakeBackend {
    async fn save_team(&self, _submission: &TeamSubmission) -> ProviderResult<TeamSaved> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.save_gate {
            gate.notified().await;
        }
        match &self.reject_save_with {
            Some(message) => Err(ProviderError::Rejected {
                message: message.clone(),
            }),
            None => Ok(TeamSaved {
                message: "Team created successfully!".to_string(),
                redirect: "/joined-contests".to_string(),
            }),
        }
    }
}

fn pid(s: &str) -> PlayerId {
    PlayerId::new(s).unwrap()
}

fn cricket_pool(count: usize) -> Vec<Player> {
    let roles = Sport::Cricket.roles();
    (0..count)
        .map(|i| Player {
            id: pid(&format!("p{}", i)),
            name: format!("Player {}", i),
            team: if i % 2 == 0 { "IND" } else { "AUS" }.to_string(),
            role: roles[i % roles.len()],
        })
        .collect()
}

/// Setup test application with routes over a fake backend
fn setup_app(backend: Arc<FakeBackend>) -> Router {
    api::router(AppState::new(backend.clone(), backend.clone(), backend))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).to_string(),
        ))
    };
    (status, value)
}

async fn open_draft(app: &Router) -> (StatusCode, Value) {
    send(app, "POST", &format!("/api/contests/{}/draft", CONTEST), None).await
}

async fn add_player(app: &Router, player: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        &format!("/api/contests/{}/draft/players", CONTEST),
        Some(json!({ "player_id": player })),
    )
    .await
}

async fn fill_team(app: &Router) {
    for i in 0..11 {
        let (status, _) = add_player(app, &format!("p{}", i)).await;
        assert_eq!(status, StatusCode::OK);
    }
}

async fn designate(app: &Router, role: &str, player: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        &format!("/api/contests/{}/draft/{}", CONTEST, role),
        Some(json!({ "player_id": player })),
    )
    .await
}

async fn submit(app: &Router) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        &format!("/api/contests/{}/draft/submit", CONTEST),
        None,
    )
    .await
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app(Arc::new(FakeBackend::new(cricket_pool(15))));
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
}

#[tokio::test]
async fn test_open_draft_for_unknown_contest_is_not_found() {
    let app = setup_app(Arc::new(FakeBackend::new(cricket_pool(15))));
    let (status, body) = send(&app, "POST", "/api/contests/nope/draft", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Contest not found"));
}

#[tokio::test]
async fn test_draft_requires_open_session() {
    let app = setup_app(Arc::new(FakeBackend::new(cricket_pool(15))));
    let (status, _) = send(&app, "GET", "/api/contests/match-1/draft", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_journey_open_fill_designate_submit() {
    let backend = Arc::new(FakeBackend::new(cricket_pool(15)));
    let app = setup_app(backend.clone());

    let (status, view) = open_draft(&app).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(view["status"], "empty");
    assert_eq!(view["team_size"], 11);
    assert_eq!(view["contest_title"], "IND vs AUS");

    fill_team(&app).await;

    let (_, view) = send(&app, "GET", "/api/contests/match-1/draft", None).await;
    assert_eq!(view["status"], "full");
    assert_eq!(view["selected_count"], 11);
    assert_eq!(view["submittable"], false);

    let (status, view) = designate(&app, "captain", "p1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["captain"]["player_id"], "p1");
    assert_eq!(view["submittable"], false);

    let (status, view) = designate(&app, "vice-captain", "p2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["submittable"], true);

    let (status, body) = submit(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Team created successfully!");
    assert_eq!(body["redirect"], "/joined-contests");
    assert_eq!(backend.save_calls.load(Ordering::SeqCst), 1);

    // The session is terminal; a repeat submit is refused without a
    // second save request.
    let (status, _) = submit(&app).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(backend.save_calls.load(Ordering::SeqCst), 1);

    let (_, view) = send(&app, "GET", "/api/contests/match-1/draft", None).await;
    assert_eq!(view["status"], "submitted");
}

#[tokio::test]
async fn test_duplicate_add_is_conflict() {
    let app = setup_app(Arc::new(FakeBackend::new(cricket_pool(15))));
    open_draft(&app).await;

    add_player(&app, "p0").await;
    let (status, body) = add_player(&app, "p0").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("already selected"));

    let (_, view) = send(&app, "GET", "/api/contests/match-1/draft", None).await;
    assert_eq!(view["selected_count"], 1);
}

#[tokio::test]
async fn test_twelfth_player_is_refused() {
    let app = setup_app(Arc::new(FakeBackend::new(cricket_pool(15))));
    open_draft(&app).await;
    fill_team(&app).await;

    let (status, body) = add_player(&app, "p11").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("11 players"));
}

#[tokio::test]
async fn test_unknown_player_is_not_found() {
    let app = setup_app(Arc::new(FakeBackend::new(cricket_pool(15))));
    open_draft(&app).await;

    let (status, _) = add_player(&app, "nobody").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_designation_conflict_is_refused_and_state_survives() {
    let app = setup_app(Arc::new(FakeBackend::new(cricket_pool(15))));
    open_draft(&app).await;
    fill_team(&app).await;
    designate(&app, "captain", "p1").await;
    designate(&app, "vice-captain", "p2").await;

    let (status, body) = designate(&app, "vice-captain", "p1").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("captain"));

    let (_, view) = send(&app, "GET", "/api/contests/match-1/draft", None).await;
    assert_eq!(view["captain"]["player_id"], "p1");
    assert_eq!(view["vice_captain"]["player_id"], "p2");
    assert_eq!(view["submittable"], true);
}

#[tokio::test]
async fn test_removing_captain_clears_designation() {
    let app = setup_app(Arc::new(FakeBackend::new(cricket_pool(15))));
    open_draft(&app).await;
    fill_team(&app).await;
    designate(&app, "captain", "p3").await;

    let (status, view) = send(
        &app,
        "DELETE",
        "/api/contests/match-1/draft/players/p3",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["captain"], Value::Null);
    assert_eq!(view["selected_count"], 10);
    assert_eq!(view["status"], "partial");
}

#[tokio::test]
async fn test_roster_filter_view() {
    let app = setup_app(Arc::new(FakeBackend::new(cricket_pool(15))));
    open_draft(&app).await;

    let (status, view) = send(&app, "GET", "/api/contests/match-1/roster", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["players"].as_array().unwrap().len(), 15);
    assert_eq!(view["roles"].as_array().unwrap().len(), 4);

    let (status, view) = send(
        &app,
        "GET",
        "/api/contests/match-1/roster?role=Bowler",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let players = view["players"].as_array().unwrap();
    assert!(!players.is_empty());
    assert!(players.iter().all(|p| p["role"] == "Bowler"));

    let (status, _) = send(
        &app,
        "GET",
        "/api/contests/match-1/roster?role=Umpire",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_prior_draft_restored_with_stale_ids_dropped() {
    let mut backend = FakeBackend::new(cricket_pool(12));
    backend.saved = Some(SavedDraft {
        selected_players: vec![pid("p4"), pid("retired"), pid("p0"), pid("p9")],
        captain_id: Some(pid("p0")),
        vice_captain_id: Some(pid("retired")),
    });
    let app = setup_app(Arc::new(backend));

    let (status, view) = open_draft(&app).await;
    assert_eq!(status, StatusCode::CREATED);

    let ids: Vec<&str> = view["selected"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["player_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["p4", "p0", "p9"]);
    assert_eq!(view["captain"]["player_id"], "p0");
    assert_eq!(view["vice_captain"], Value::Null);
    assert_eq!(view["status"], "partial");
}

#[tokio::test]
async fn test_submit_incomplete_team_is_bad_request() {
    let backend = Arc::new(FakeBackend::new(cricket_pool(15)));
    let app = setup_app(backend.clone());
    open_draft(&app).await;
    add_player(&app, "p0").await;

    let (status, body) = submit(&app).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("exactly 11"));
    assert_eq!(backend.save_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_reopen_during_inflight_submit_keeps_fresh_draft_editable() {
    let mut backend = FakeBackend::new(cricket_pool(15));
    let gate = Arc::new(Notify::new());
    backend.save_gate = Some(gate.clone());
    let backend = Arc::new(backend);
    let app = setup_app(backend.clone());

    open_draft(&app).await;
    fill_team(&app).await;
    designate(&app, "captain", "p0").await;
    designate(&app, "vice-captain", "p1").await;

    // Kick off a submit whose save round-trip parks on the gate.
    let submit_app = app.clone();
    let pending = tokio::spawn(async move { submit(&submit_app).await });
    while backend.save_calls.load(Ordering::SeqCst) == 0 {
        tokio::task::yield_now().await;
    }

    // User reloads the page mid-flight: the session is replaced by a
    // fresh, empty draft.
    let (status, view) = open_draft(&app).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(view["status"], "empty");

    // Release the save; the confirmation belongs to the old session
    // and must not touch the replacement draft.
    gate.notify_one();
    let (status, body) = pending.await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Team created successfully!");

    let (_, view) = send(&app, "GET", "/api/contests/match-1/draft", None).await;
    assert_eq!(view["status"], "empty");
    assert_eq!(view["selected_count"], 0);

    let (status, view) = add_player(&app, "p3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["selected_count"], 1);
}

#[tokio::test]
async fn test_save_rejection_surfaces_verbatim_and_allows_retry() {
    let mut backend = FakeBackend::new(cricket_pool(15));
    backend.reject_save_with = Some("Cannot create/edit team after match has started".to_string());
    let backend = Arc::new(backend);
    let app = setup_app(backend.clone());

    open_draft(&app).await;
    fill_team(&app).await;
    designate(&app, "captain", "p0").await;
    designate(&app, "vice-captain", "p1").await;

    let (status, body) = submit(&app).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Cannot create/edit team after match has started"
    );
    assert_eq!(backend.save_calls.load(Ordering::SeqCst), 1);

    // Draft survives for retry.
    let (_, view) = send(&app, "GET", "/api/contests/match-1/draft", None).await;
    assert_eq!(view["status"], "full");
    assert_eq!(view["submittable"], true);
}
