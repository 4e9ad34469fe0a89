use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        event::{self, EVENT_TAG},
        leaderboard::{self, LEADERBOARD_TAG},
        team::{self, TEAM_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Statboard API", description = "Leaderboards and event teams"),
    tags(
        (name = LEADERBOARD_TAG, description = "Leaderboard rankings and score submission"),
        (name = EVENT_TAG, description = "Community events"),
        (name = TEAM_TAG, description = "Event team membership")
    )
)]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document through Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(leaderboard::get_leaderboards))
        .routes(routes!(leaderboard::get_leaderboard))
        .routes(routes!(leaderboard::get_rank))
        .routes(routes!(leaderboard::get_positions))
        .routes(routes!(leaderboard::submit_score))
        .routes(routes!(leaderboard::remove_subject))
        .routes(routes!(event::create_event))
        .routes(routes!(event::get_events))
        .routes(routes!(event::get_event))
        .routes(routes!(team::get_teams, team::create_team))
        .routes(routes!(team::get_my_team))
        .routes(routes!(
            team::get_team,
            team::rename_team,
            team::delete_team
        ))
        .routes(routes!(team::join_team))
        .routes(routes!(team::leave_team))
        .routes(routes!(team::regenerate_join_code))
        .routes(routes!(team::kick_member))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
