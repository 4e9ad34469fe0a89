use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        team::{
            CreateEventTeamDto, EventTeamDto, JoinCodeDto, JoinEventTeamDto, UpdateEventTeamDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::event::team::EventTeamService,
        state::AppState,
    },
};

/// Tag for grouping event team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// List an event's teams.
///
/// Join codes are only included for teams the caller belongs to.
///
/// # Returns
/// - `200 OK` - Teams with their members
/// - `404 Not Found` - No event with that ID
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/teams",
    tag = TEAM_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved teams", body = Vec<EventTeamDto>),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session)
        .optional_user_id()
        .await?;

    let teams = EventTeamService::new(&state.db, &state.event_locks)
        .list_teams(event_id)
        .await?;

    Ok(Json(
        teams
            .into_iter()
            .map(|team| team.into_dto(viewer))
            .collect::<Vec<_>>(),
    ))
}

/// Create a team and become its owner.
///
/// # Access Control
/// - Any logged in user who is not yet on a team for the event
///
/// # Returns
/// - `201 Created` - The new team including its join code
/// - `400 Bad Request` - Invalid name or the event has ended
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - No event with that ID
/// - `409 Conflict` - User is already on a team for the event
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/teams",
    tag = TEAM_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    request_body = CreateEventTeamDto,
    responses(
        (status = 201, description = "Successfully created team", body = EventTeamDto),
        (status = 400, description = "Invalid name or event has ended", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "User is already on a team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(payload): Json<CreateEventTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let team = EventTeamService::new(&state.db, &state.event_locks)
        .create_team(event_id, user.discord_id, &payload.name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(team.into_dto(Some(user.discord_id))),
    ))
}

/// Get the caller's team for an event.
///
/// # Returns
/// - `200 OK` - The caller's team, or null when they are not on one
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/teams/me",
    tag = TEAM_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "The caller's team", body = Option<EventTeamDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_team(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let team = EventTeamService::new(&state.db, &state.event_locks)
        .get_user_team(event_id, user.discord_id)
        .await?;

    Ok(Json(team.map(|t| t.into_dto(Some(user.discord_id)))))
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID"),
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved team", body = EventTeamDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    session: Session,
    Path((event_id, team_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session)
        .optional_user_id()
        .await?;

    let team = EventTeamService::new(&state.db, &state.event_locks)
        .get_team(event_id, team_id)
        .await?;

    Ok(Json(team.into_dto(viewer)))
}

/// Rename a team.
///
/// # Access Control
/// - Team owner, while the event is active
#[utoipa::path(
    patch,
    path = "/api/events/{event_id}/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID"),
        ("team_id" = i32, Path, description = "Team ID")
    ),
    request_body = UpdateEventTeamDto,
    responses(
        (status = 200, description = "Successfully renamed team", body = EventTeamDto),
        (status = 400, description = "Invalid name or event has ended", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rename_team(
    State(state): State<AppState>,
    session: Session,
    Path((event_id, team_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateEventTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let team = EventTeamService::new(&state.db, &state.event_locks)
        .rename_team(event_id, team_id, user.discord_id, &payload.name)
        .await?;

    Ok(Json(team.into_dto(Some(user.discord_id))))
}

/// Delete a team and all of its memberships.
///
/// # Access Control
/// - Team owner
///
/// # Returns
/// - `204 No Content` - Team deleted
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User does not own the team
/// - `404 Not Found` - Team not found
#[utoipa::path(
    delete,
    path = "/api/events/{event_id}/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID"),
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted team"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    session: Session,
    Path((event_id, team_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    EventTeamService::new(&state.db, &state.event_locks)
        .delete_team(event_id, team_id, user.discord_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Join a team with its join code.
///
/// # Access Control
/// - Any logged in user who is not yet on a team for the event
///
/// # Returns
/// - `200 OK` - The joined team
/// - `400 Bad Request` - Wrong join code or the event has ended
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Team not found
/// - `409 Conflict` - User is already on a team, or the team is full
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/teams/{team_id}/join",
    tag = TEAM_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID"),
        ("team_id" = i32, Path, description = "Team ID")
    ),
    request_body = JoinEventTeamDto,
    responses(
        (status = 200, description = "Successfully joined team", body = EventTeamDto),
        (status = 400, description = "Wrong join code or event has ended", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Already on a team or team is full", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_team(
    State(state): State<AppState>,
    session: Session,
    Path((event_id, team_id)): Path<(i32, i32)>,
    Json(payload): Json<JoinEventTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let team = EventTeamService::new(&state.db, &state.event_locks)
        .join_team(event_id, team_id, user.discord_id, &payload.code)
        .await?;

    Ok(Json(team.into_dto(Some(user.discord_id))))
}

/// Leave a team.
///
/// When the owner leaves, the team is disbanded.
///
/// # Returns
/// - `204 No Content` - Left the team
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not on the team
/// - `404 Not Found` - Team not found
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/teams/{team_id}/leave",
    tag = TEAM_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID"),
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 204, description = "Successfully left team"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not on the team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_team(
    State(state): State<AppState>,
    session: Session,
    Path((event_id, team_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    EventTeamService::new(&state.db, &state.event_locks)
        .leave_team(event_id, team_id, user.discord_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Replace a team's join code.
///
/// # Access Control
/// - Team owner
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/teams/{team_id}/code",
    tag = TEAM_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID"),
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "New join code", body = JoinCodeDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn regenerate_join_code(
    State(state): State<AppState>,
    session: Session,
    Path((event_id, team_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let join_code = EventTeamService::new(&state.db, &state.event_locks)
        .regenerate_join_code(event_id, team_id, user.discord_id)
        .await?;

    Ok(Json(JoinCodeDto { join_code }))
}

/// Remove a member from a team.
///
/// # Access Control
/// - Team owner, while the event is active. Owners cannot kick themselves.
#[utoipa::path(
    delete,
    path = "/api/events/{event_id}/teams/{team_id}/members/{user_id}",
    tag = TEAM_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID"),
        ("team_id" = i32, Path, description = "Team ID"),
        ("user_id" = u64, Path, description = "Discord ID of the member to remove")
    ),
    responses(
        (status = 204, description = "Successfully removed member"),
        (status = 400, description = "Owner targeted themselves or event has ended", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner, or target is not on the team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn kick_member(
    State(state): State<AppState>,
    session: Session,
    Path((event_id, team_id, user_id)): Path<(i32, i32, u64)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    EventTeamService::new(&state.db, &state.event_locks)
        .kick_member(event_id, team_id, user.discord_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
