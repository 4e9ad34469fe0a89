use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        leaderboard::{
            LeaderboardPositionsDto, LeaderboardRankDto, LeaderboardSliceDto, LeaderboardsDto,
            RemovedSubjectDto, SubmitScoreDto, SubmitScoreResultDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::leaderboard::LeaderboardService,
        state::AppState,
    },
};

/// Tag for grouping leaderboard endpoints in OpenAPI documentation
pub static LEADERBOARD_TAG: &str = "leaderboard";

#[derive(Deserialize)]
pub struct SliceParams {
    #[serde(default)]
    pub offset: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    20
}

#[derive(Deserialize)]
pub struct RankParams {
    #[serde(default)]
    pub upcoming: usize,
}

/// List every registered leaderboard.
///
/// # Returns
/// - `200 OK` - Definitions keyed by leaderboard id
#[utoipa::path(
    get,
    path = "/api/leaderboards",
    tag = LEADERBOARD_TAG,
    responses(
        (status = 200, description = "Registered leaderboards", body = LeaderboardsDto)
    ),
)]
pub async fn get_leaderboards(State(state): State<AppState>) -> impl IntoResponse {
    let service = LeaderboardService::new(
        &state.db,
        &state.leaderboard_registry,
        &state.leaderboard_store,
    );

    let leaderboards = service
        .list_definitions()
        .map(|definition| (definition.id.clone(), definition.to_dto()))
        .collect();

    Json(LeaderboardsDto { leaderboards })
}

/// Get a page of a leaderboard.
///
/// Entries are ordered by score descending; equal scores keep the order in which the
/// subjects first entered the leaderboard.
///
/// # Arguments
/// - `state` - Application state containing the rankings
/// - `leaderboard_id` - Leaderboard slug
/// - `params` - Offset (default 0) and limit (default 20, clamped to the configured maximum)
///
/// # Returns
/// - `200 OK` - Page of ranked entries with leaderboard metadata
/// - `400 Bad Request` - Negative offset or limit
/// - `404 Not Found` - Unknown leaderboard
#[utoipa::path(
    get,
    path = "/api/leaderboards/{leaderboard_id}",
    tag = LEADERBOARD_TAG,
    params(
        ("leaderboard_id" = String, Path, description = "Leaderboard slug"),
        ("offset" = Option<i64>, Query, description = "Entries to skip (default: 0)"),
        ("limit" = Option<i64>, Query, description = "Entries to return (default: 20)")
    ),
    responses(
        (status = 200, description = "Leaderboard page", body = LeaderboardSliceDto),
        (status = 400, description = "Negative offset or limit", body = ErrorDto),
        (status = 404, description = "Unknown leaderboard", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(leaderboard_id): Path<String>,
    Query(params): Query<SliceParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = LeaderboardService::new(
        &state.db,
        &state.leaderboard_registry,
        &state.leaderboard_store,
    );

    let slice = service
        .get_slice(&leaderboard_id, params.offset, params.limit)
        .await?;

    Ok(Json(slice.into_dto()))
}

/// Get a subject's rank on a leaderboard.
///
/// # Arguments
/// - `leaderboard_id` - Leaderboard slug
/// - `subject_id` - Profile member or account id, depending on the leaderboard's scope
/// - `params` - Number of entries directly above the subject to include (max 25)
///
/// # Returns
/// - `200 OK` - Rank and score, both null when the subject is not ranked
/// - `404 Not Found` - Unknown leaderboard
#[utoipa::path(
    get,
    path = "/api/leaderboards/{leaderboard_id}/rank/{subject_id}",
    tag = LEADERBOARD_TAG,
    params(
        ("leaderboard_id" = String, Path, description = "Leaderboard slug"),
        ("subject_id" = String, Path, description = "Profile member or account id"),
        ("upcoming" = Option<usize>, Query, description = "Entries above the subject to include (default: 0, max: 25)")
    ),
    responses(
        (status = 200, description = "Subject rank", body = LeaderboardRankDto),
        (status = 404, description = "Unknown leaderboard", body = ErrorDto)
    ),
)]
pub async fn get_rank(
    State(state): State<AppState>,
    Path((leaderboard_id, subject_id)): Path<(String, String)>,
    Query(params): Query<RankParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = LeaderboardService::new(
        &state.db,
        &state.leaderboard_registry,
        &state.leaderboard_store,
    );

    let rank = service
        .get_rank(&leaderboard_id, &subject_id, params.upcoming)
        .await?;

    Ok(Json(rank.into_dto()))
}

/// Get a player's rank on every leaderboard they appear on.
///
/// Profile scoped leaderboards are looked up by `profile_member_id` and account scoped
/// leaderboards by `account_id`.
#[utoipa::path(
    get,
    path = "/api/leaderboards/positions/{account_id}/{profile_member_id}",
    tag = LEADERBOARD_TAG,
    params(
        ("account_id" = String, Path, description = "Account id"),
        ("profile_member_id" = String, Path, description = "Profile member id")
    ),
    responses(
        (status = 200, description = "Ranks keyed by leaderboard id", body = LeaderboardPositionsDto)
    ),
)]
pub async fn get_positions(
    State(state): State<AppState>,
    Path((account_id, profile_member_id)): Path<(String, String)>,
) -> impl IntoResponse {
    let service = LeaderboardService::new(
        &state.db,
        &state.leaderboard_registry,
        &state.leaderboard_store,
    );

    let positions = service
        .get_positions(&account_id, &profile_member_id)
        .await;

    Json(positions.into_dto())
}

/// Submit a subject's score.
///
/// Entry point for stat updates. The score is normalized for the leaderboard's data type;
/// scores below the leaderboard minimum remove the subject's entry.
///
/// # Access Control
/// - `Admin` - Only admins can write scores
///
/// # Returns
/// - `200 OK` - Stored score and resulting rank
/// - `400 Bad Request` - Score is not a finite number
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - Unknown leaderboard
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/leaderboards/{leaderboard_id}/scores/{subject_id}",
    tag = LEADERBOARD_TAG,
    params(
        ("leaderboard_id" = String, Path, description = "Leaderboard slug"),
        ("subject_id" = String, Path, description = "Profile member or account id")
    ),
    request_body = SubmitScoreDto,
    responses(
        (status = 200, description = "Score stored", body = SubmitScoreResultDto),
        (status = 400, description = "Score is not a finite number", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Unknown leaderboard", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_score(
    State(state): State<AppState>,
    session: Session,
    Path((leaderboard_id, subject_id)): Path<(String, String)>,
    Json(payload): Json<SubmitScoreDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = LeaderboardService::new(
        &state.db,
        &state.leaderboard_registry,
        &state.leaderboard_store,
    );

    let submission = service
        .submit_score(&leaderboard_id, &subject_id, payload.score)
        .await?;

    Ok(Json(submission.into_dto()))
}

/// Remove a subject from every leaderboard.
///
/// # Access Control
/// - `Admin` - Only admins can remove subjects
///
/// # Returns
/// - `200 OK` - Leaderboards the subject was removed from
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/leaderboards/subjects/{subject_id}",
    tag = LEADERBOARD_TAG,
    params(
        ("subject_id" = String, Path, description = "Profile member or account id")
    ),
    responses(
        (status = 200, description = "Subject removed", body = RemovedSubjectDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_subject(
    State(state): State<AppState>,
    session: Session,
    Path(subject_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = LeaderboardService::new(
        &state.db,
        &state.leaderboard_registry,
        &state.leaderboard_store,
    );

    let leaderboards = service.remove_subject(&subject_id).await?;

    Ok(Json(RemovedSubjectDto {
        subject_id,
        leaderboards,
    }))
}
