//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use chrono::Local;
use tower_http::services::ServeDir;
use tracing::{debug, error, info, warn};

use crate::catalog::Catalog;
use crate::detail::RouteDetail;
use crate::domain::{Route, RouteId};
use crate::search::search;
use crate::session::{NotificationTopic, Setting, ToggleKey};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &std::path::Path) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/api/search", get(api_search))
        .route("/api/routes/:id", get(api_route))
        .route("/routes/:id", get(route_page))
        .route("/detail/close", post(close_detail))
        .route("/detail/select", post(select_detail))
        .route("/favorites", get(favorites_page))
        .route("/favorites/:id", post(add_favorite))
        .route("/favorites/:id/remove", post(remove_favorite))
        .route("/history", get(history_page))
        .route("/notifications", get(notifications_page))
        .route("/notifications/read", post(mark_notifications_read))
        .route("/notifications/:topic/toggle", post(toggle_notification))
        .route("/settings", get(settings_page))
        .route("/settings/:key/toggle", post(toggle_setting))
        .route("/profile", get(profile_page))
        .route("/help", get(help_page))
        .route("/help/faq/:id/toggle", post(toggle_faq))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_page)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Render a template into an HTML response.
fn render<T: Template>(template: &T) -> Result<Response, AppError> {
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html).into_response())
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Look up a route by its path segment.
fn find_route<'a>(catalog: &'a Catalog, raw: &str) -> Result<&'a Route, AppError> {
    RouteId::parse(raw)
        .ok()
        .and_then(|id| catalog.route(&id))
        .ok_or_else(|| AppError::NotFound {
            message: format!("Route {} not found", raw),
        })
}

/// Parse a toggle slug from the path.
fn parse_toggle<K: ToggleKey>(slug: &str) -> Result<K, AppError> {
    K::from_slug(slug).ok_or_else(|| AppError::BadRequest {
        message: format!("Unknown toggle: {}", slug),
    })
}

/// Home page: browse all routes, or show search results.
async fn index_page(
    State(state): State<AppState>,
    Query(req): Query<SearchRequest>,
) -> Result<Response, AppError> {
    let outcome = search(&state.catalog, req.query());
    let session = state.session.read().await;

    render(&IndexTemplate::from_outcome(
        req.query(),
        &outcome,
        &session.favorites,
        session.detail.view(),
    ))
}

/// About page.
async fn about_page(State(state): State<AppState>) -> Result<Response, AppError> {
    render(&AboutTemplate::new(&state.catalog))
}

/// Search routes and locations.
async fn api_search(
    State(state): State<AppState>,
    Query(req): Query<SearchRequest>,
) -> Json<SearchResponse> {
    let outcome = search(&state.catalog, req.query());
    Json(SearchResponse::from_outcome(&outcome))
}

/// Detail for one route, without touching the session.
async fn api_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RouteDetail>, AppError> {
    let route = find_route(&state.catalog, &id)?;
    Ok(Json(RouteDetail::from_route(route)))
}

/// Show one route's detail.
///
/// This is the route-pick action, so a GET here also opens the session's
/// detail panel on this route (replacing any route already shown). The
/// index page then shows the banner until it is closed or confirmed.
/// `/api/routes/:id` is the read-only counterpart.
async fn route_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let route = find_route(&state.catalog, &id)?;

    let mut session = state.session.write().await;
    session.detail.show(route.clone());
    let is_favorite = session.favorites.contains(route.id());
    let detail = session.detail.view();
    drop(session);

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let detail = detail.ok_or_else(|| AppError::Internal {
            message: "Detail sheet closed while rendering".to_string(),
        })?;
        render(&RouteDetailTemplate {
            detail,
            is_favorite,
        })
    } else {
        Ok(Json(DetailResponse::new(detail)).into_response())
    }
}

/// Dismiss the detail sheet.
async fn close_detail(State(state): State<AppState>) -> Redirect {
    state.session.write().await.detail.close();
    Redirect::to("/")
}

/// Confirm the route on the detail sheet.
async fn select_detail(State(state): State<AppState>) -> Redirect {
    let confirmed = state.session.write().await.detail.confirm(|route| {
        info!(route = route.name(), fare = %route.fare(), "route selected");
    });
    if !confirmed {
        debug!("no route to confirm");
    }
    Redirect::to("/")
}

/// Favorite routes.
async fn favorites_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let session = state.session.read().await;
    let routes = session
        .favorites
        .resolve(&state.catalog)
        .into_iter()
        .map(|r| RouteCardView::from_route(r, &session.favorites))
        .collect();

    render(&FavoritesTemplate { routes })
}

async fn add_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let route = find_route(&state.catalog, &id)?;
    if state.session.write().await.favorites.add(route.id().clone()) {
        debug!(route = route.name(), "favorite added");
    }
    Ok(Redirect::to("/favorites"))
}

async fn remove_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let route = find_route(&state.catalog, &id)?;
    if state.session.write().await.favorites.remove(route.id()) {
        debug!(route = route.name(), "favorite removed");
    }
    Ok(Redirect::to("/favorites"))
}

/// Trip history for the current user.
async fn history_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let today = Local::now().date_naive();
    let session = state.session.read().await;
    render(&HistoryTemplate::new(&session.history, &state.catalog, today))
}

async fn notifications_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let session = state.session.read().await;
    render(&NotificationsTemplate::new(
        &session.notification_prefs,
        &session.inbox,
    ))
}

async fn toggle_notification(
    State(state): State<AppState>,
    Path(topic): Path<String>,
) -> Result<Redirect, AppError> {
    let topic: NotificationTopic = parse_toggle(&topic)?;
    let enabled = state
        .session
        .write()
        .await
        .notification_prefs
        .toggle(topic);
    debug!(topic = topic.slug(), enabled, "notification preference changed");
    Ok(Redirect::to("/notifications"))
}

async fn mark_notifications_read(State(state): State<AppState>) -> Redirect {
    let count = state.session.write().await.inbox.mark_all_read();
    debug!(count, "notifications marked read");
    Redirect::to("/notifications")
}

async fn settings_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let session = state.session.read().await;
    render(&SettingsTemplate {
        toggles: ToggleView::collect(&session.settings),
    })
}

async fn toggle_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Redirect, AppError> {
    let setting: Setting = parse_toggle(&key)?;
    let enabled = state.session.write().await.settings.toggle(setting);
    debug!(setting = setting.slug(), enabled, "setting changed");
    Ok(Redirect::to("/settings"))
}

/// Profile hub with travel stats and links to the other pages.
async fn profile_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let today = Local::now().date_naive();
    let session = state.session.read().await;
    render(&ProfileTemplate::new(&session, today))
}

/// Help & support.
async fn help_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let session = state.session.read().await;
    render(&HelpTemplate::new(&session.faq))
}

/// Open or close one FAQ answer. Opening one closes the others.
async fn toggle_faq(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let open = state
        .session
        .write()
        .await
        .faq
        .toggle(&id)
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;
    debug!(faq = %id, open, "faq toggled");
    Ok(Redirect::to("/help"))
}

/// Anything not matched above.
async fn not_found_page() -> Response {
    let template = ErrorTemplate {
        title: "Page not found".to_string(),
        message: "There is nothing at this address.".to_string(),
    };
    (StatusCode::NOT_FOUND, askama_axum::into_response(&template)).into_response()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use axum::body::to_bytes;
    use axum::http::HeaderValue;
    use chrono::NaiveDate;

    fn test_state() -> AppState {
        let catalog = Catalog::builtin().unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let session = Session::demo(&catalog, today);
        AppState::new(catalog, session)
    }

    fn html_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("text/html"));
        headers
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn accepts_html_checks_header() {
        assert!(accepts_html(&html_headers()));
        assert!(!accepts_html(&HeaderMap::new()));
    }

    #[test]
    fn unknown_toggle_is_bad_request() {
        let err = parse_toggle::<Setting>("warp-drive").unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
        assert_eq!(parse_toggle::<Setting>("dark-mode").unwrap(), Setting::DarkMode);
    }

    #[test]
    fn error_status_codes() {
        let response = AppError::NotFound {
            message: "x".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::BadRequest {
            message: "x".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn detail_lifecycle_through_handlers() {
        let state = test_state();

        let response = route_page(
            State(state.clone()),
            HeaderMap::new(),
            Path("legon-madina".to_string()),
        )
        .await
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["visible"], true);
        assert_eq!(json["route"]["name"], "Legon - Madina");
        assert!(state.session.read().await.detail.is_visible());

        select_detail(State(state.clone())).await;
        assert!(!state.session.read().await.detail.is_visible());

        route_page(
            State(state.clone()),
            html_headers(),
            Path("main-campus-loop".to_string()),
        )
        .await
        .unwrap();
        close_detail(State(state.clone())).await;
        assert!(!state.session.read().await.detail.is_visible());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let state = test_state();
        let err = route_page(State(state.clone()), HeaderMap::new(), Path("nowhere".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert!(!state.session.read().await.detail.is_visible());

        let err = add_favorite(State(state), Path("has space".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn api_search_browse_and_match() {
        let state = test_state();

        let Json(response) = api_search(State(state.clone()), Query(SearchRequest::default())).await;
        assert!(matches!(response, SearchResponse::Browse { .. }));

        let req = SearchRequest {
            q: Some("Great Hall".to_string()),
        };
        let Json(response) = api_search(State(state), Query(req)).await;
        let SearchResponse::Matches { routes, locations } = response else {
            panic!("expected matches");
        };
        assert_eq!(routes[0].name, "Main Campus Loop");
        assert_eq!(locations[0].name, "Great Hall");
    }

    #[tokio::test]
    async fn favorites_add_and_remove() {
        let state = test_state();

        add_favorite(State(state.clone()), Path("legon-madina".to_string()))
            .await
            .unwrap();
        let id = RouteId::parse("legon-madina").unwrap();
        assert!(state.session.read().await.favorites.contains(&id));

        remove_favorite(State(state.clone()), Path("legon-madina".to_string()))
            .await
            .unwrap();
        assert!(!state.session.read().await.favorites.contains(&id));
    }

    #[tokio::test]
    async fn toggles_flip_session_values() {
        let state = test_state();

        toggle_setting(State(state.clone()), Path("dark-mode".to_string()))
            .await
            .unwrap();
        assert!(state.session.read().await.settings.get(Setting::DarkMode));

        toggle_notification(State(state.clone()), Path("promotions".to_string()))
            .await
            .unwrap();
        assert!(
            state
                .session
                .read()
                .await
                .notification_prefs
                .get(NotificationTopic::Promotions)
        );

        mark_notifications_read(State(state.clone())).await;
        assert_eq!(state.session.read().await.inbox.unread_count(), 0);
    }

    #[tokio::test]
    async fn index_shows_open_detail() {
        let state = test_state();
        let response = index_page(State(state.clone()), Query(SearchRequest::default()))
            .await
            .unwrap();
        assert!(!body_text(response).await.contains("detail-banner"));

        route_page(
            State(state.clone()),
            HeaderMap::new(),
            Path("hostels-express".to_string()),
        )
        .await
        .unwrap();

        let response = index_page(State(state), Query(SearchRequest::default()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("detail-banner"));
    }

    #[tokio::test]
    async fn faq_opens_switches_and_closes() {
        let state = test_state();

        toggle_faq(State(state.clone()), Path("2".to_string()))
            .await
            .unwrap();
        assert!(state.session.read().await.faq.is_expanded("2"));

        toggle_faq(State(state.clone()), Path("5".to_string()))
            .await
            .unwrap();
        {
            let session = state.session.read().await;
            assert!(session.faq.is_expanded("5"));
            assert!(!session.faq.is_expanded("2"));
        }

        let response = help_page(State(state.clone())).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains("Feedback keeps the route data accurate."));
        assert!(!html.contains("Times vary with traffic"));

        toggle_faq(State(state.clone()), Path("5".to_string()))
            .await
            .unwrap();
        assert!(state.session.read().await.faq.expanded().is_none());
    }

    #[tokio::test]
    async fn unknown_faq_is_bad_request() {
        let state = test_state();
        toggle_faq(State(state.clone()), Path("1".to_string()))
            .await
            .unwrap();

        let err = toggle_faq(State(state.clone()), Path("99".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        assert!(state.session.read().await.faq.is_expanded("1"));
    }

    #[tokio::test]
    async fn profile_links_every_page() {
        let response = profile_page(State(test_state())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        for href in ["/favorites", "/history", "/notifications", "/settings", "/help", "/about"] {
            assert!(html.contains(&format!("href=\"{href}\"")), "missing {href}");
        }
        assert!(html.contains("Routes Used"));
    }

    #[tokio::test]
    async fn about_page_renders() {
        let response = about_page(State(test_state())).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains("Our Team"));
        assert!(html.contains("Student Union"));
    }

    #[tokio::test]
    async fn fallback_is_not_found() {
        let response = not_found_page().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
