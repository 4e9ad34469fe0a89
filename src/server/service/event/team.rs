//! Event team membership workflow.
//!
//! A team lives while it has members. The owner leaving, the owner deleting it or the last
//! member leaving removes it together with every membership.
//!
//! Each mutating operation:
//! 1. acquires the event's lock from `EventLocks`
//! 2. opens a database transaction
//! 3. re-reads the team and event and checks every precondition
//! 4. writes and commits
//!
//! The lock serializes concurrent requests in this process; the `(event_id, user_id)` key
//! of `event_team_member` backs the one-team-per-user rule in storage as well.

use chrono::Utc;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr, SqlErr, TransactionTrait,
};

use crate::server::{
    data::{
        event::EventRepository, event_team::EventTeamRepository,
        event_team_member::EventTeamMemberRepository,
    },
    error::{internal::InternalError, team::TeamError, AppError},
    model::{
        event::Event,
        team::{CreateEventTeamParam, EventTeam, EventTeamWithMembers},
    },
    service::event::{
        code::{generate_join_code, normalize_join_code},
        lock::EventLocks,
    },
};

const JOIN_CODE_ATTEMPTS: usize = 5;
const MAX_TEAM_NAME_LENGTH: usize = 64;

pub struct EventTeamService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a EventLocks,
}

impl<'a> EventTeamService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a EventLocks) -> Self {
        Self { db, locks }
    }

    /// Gets a team with its members.
    ///
    /// # Returns
    /// - `Ok(EventTeamWithMembers)` - The team
    /// - `Err(TeamError::TeamNotFound)` - No such team in the event
    pub async fn get_team(
        &self,
        event_id: i32,
        team_id: i32,
    ) -> Result<EventTeamWithMembers, AppError> {
        let team = find_team(self.db, event_id, team_id).await?;
        with_members(self.db, team).await
    }

    /// Lists an event's teams in creation order.
    ///
    /// # Returns
    /// - `Ok(Vec<EventTeamWithMembers>)` - Teams with members
    /// - `Err(TeamError::EventNotFound)` - No event with that ID
    pub async fn list_teams(&self, event_id: i32) -> Result<Vec<EventTeamWithMembers>, AppError> {
        find_event(self.db, event_id).await?;

        let teams = EventTeamRepository::new(self.db)
            .get_by_event(event_id)
            .await?;
        let team_ids: Vec<i32> = teams.iter().map(|t| t.id).collect();
        let mut members = EventTeamMemberRepository::new(self.db)
            .get_by_teams(&team_ids)
            .await?;

        Ok(teams
            .into_iter()
            .map(|team| {
                let (own, rest): (Vec<_>, Vec<_>) = members.drain(..).partition(|m| m.team_id == team.id);
                members = rest;
                EventTeamWithMembers { team, members: own }
            })
            .collect())
    }

    /// Gets the team `user_id` belongs to in an event, if any.
    pub async fn get_user_team(
        &self,
        event_id: i32,
        user_id: u64,
    ) -> Result<Option<EventTeamWithMembers>, AppError> {
        let Some(membership) = EventTeamMemberRepository::new(self.db)
            .find_by_event_and_user(event_id, user_id)
            .await?
        else {
            return Ok(None);
        };

        let team = find_team(self.db, event_id, membership.team_id).await?;
        Ok(Some(with_members(self.db, team).await?))
    }

    /// Creates a team owned by `owner_id` with the owner as its first member.
    ///
    /// # Returns
    /// - `Ok(EventTeamWithMembers)` - The new team
    /// - `Err(AppError::BadRequest)` - Empty or overlong name
    /// - `Err(TeamError::EventNotFound)` - No event with that ID
    /// - `Err(TeamError::EventNotActive)` - Event has ended
    /// - `Err(TeamError::UserAlreadyOnTeam)` - Owner is already on a team in the event
    pub async fn create_team(
        &self,
        event_id: i32,
        owner_id: u64,
        name: &str,
    ) -> Result<EventTeamWithMembers, AppError> {
        let name = validate_team_name(name)?;

        let _lock = self.locks.lock(event_id).await;
        let txn = self.db.begin().await?;

        let event = find_event(&txn, event_id).await?;
        ensure_active(&event)?;

        let members = EventTeamMemberRepository::new(&txn);
        if members
            .find_by_event_and_user(event_id, owner_id)
            .await?
            .is_some()
        {
            return Err(already_on_team(owner_id, event_id));
        }

        let join_code = unique_join_code(&txn).await?;
        let team = EventTeamRepository::new(&txn)
            .create(CreateEventTeamParam {
                event_id,
                owner_id,
                name,
                join_code,
            })
            .await?;
        members
            .add(event_id, team.id, owner_id)
            .await
            .map_err(|e| membership_conflict(e, owner_id, event_id))?;

        let team = with_members(&txn, team).await?;
        txn.commit().await?;

        tracing::info!(
            "User {} created team {} for event {}",
            owner_id,
            team.team.id,
            event_id
        );

        Ok(team)
    }

    /// Adds `user_id` to a team using its join code.
    ///
    /// # Returns
    /// - `Ok(EventTeamWithMembers)` - The team including the new member
    /// - `Err(TeamError::TeamNotFound)` - No such team in the event
    /// - `Err(TeamError::EventNotActive)` - Event has ended
    /// - `Err(TeamError::InvalidJoinCode)` - Code does not match the team's current code
    /// - `Err(TeamError::UserAlreadyOnTeam)` - User is already on a team in the event
    /// - `Err(TeamError::TeamFull)` - Team is at capacity
    pub async fn join_team(
        &self,
        event_id: i32,
        team_id: i32,
        user_id: u64,
        join_code: &str,
    ) -> Result<EventTeamWithMembers, AppError> {
        let _lock = self.locks.lock(event_id).await;
        let txn = self.db.begin().await?;

        let team = find_team(&txn, event_id, team_id).await?;
        let event = find_event(&txn, event_id).await?;
        ensure_active(&event)?;

        if normalize_join_code(join_code) != team.join_code {
            tracing::debug!("User {} used a wrong join code for team {}", user_id, team_id);
            return Err(TeamError::InvalidJoinCode(team_id).into());
        }

        let members = EventTeamMemberRepository::new(&txn);
        if members
            .find_by_event_and_user(event_id, user_id)
            .await?
            .is_some()
        {
            return Err(already_on_team(user_id, event_id));
        }

        if members.count_by_team(team_id).await? >= u64::from(event.max_team_size) {
            return Err(TeamError::TeamFull(team_id).into());
        }

        members
            .add(event_id, team_id, user_id)
            .await
            .map_err(|e| membership_conflict(e, user_id, event_id))?;

        let team = with_members(&txn, team).await?;
        txn.commit().await?;

        tracing::info!("User {} joined team {}", user_id, team_id);

        Ok(team)
    }

    /// Removes `user_id` from a team.
    ///
    /// The owner leaving disbands the team; so does the last member leaving. Leaving is
    /// allowed after the event has ended.
    ///
    /// # Returns
    /// - `Ok(true)` - Member removed and the team was deleted
    /// - `Ok(false)` - Member removed, team remains
    /// - `Err(TeamError::TeamNotFound)` - No such team in the event
    /// - `Err(TeamError::NotTeamMember)` - User is not on this team
    pub async fn leave_team(
        &self,
        event_id: i32,
        team_id: i32,
        user_id: u64,
    ) -> Result<bool, AppError> {
        let _lock = self.locks.lock(event_id).await;
        let txn = self.db.begin().await?;

        let team = find_team(&txn, event_id, team_id).await?;
        let members = EventTeamMemberRepository::new(&txn);
        ensure_member(&members, &team, user_id).await?;

        let disbanded = if team.owner_id == user_id {
            disband(&txn, team_id).await?;
            true
        } else {
            members.remove(event_id, user_id).await?;
            if members.count_by_team(team_id).await? == 0 {
                disband(&txn, team_id).await?;
                true
            } else {
                false
            }
        };

        txn.commit().await?;

        tracing::info!("User {} left team {}", user_id, team_id);
        if disbanded {
            tracing::info!("Team {} disbanded", team_id);
        }

        Ok(disbanded)
    }

    /// Deletes a team and all its memberships.
    ///
    /// # Returns
    /// - `Ok(())` - Team deleted
    /// - `Err(TeamError::TeamNotFound)` - No such team in the event
    /// - `Err(TeamError::NotOwner)` - Requester does not own the team
    pub async fn delete_team(
        &self,
        event_id: i32,
        team_id: i32,
        requester_id: u64,
    ) -> Result<(), AppError> {
        let _lock = self.locks.lock(event_id).await;
        let txn = self.db.begin().await?;

        let team = find_team(&txn, event_id, team_id).await?;
        ensure_owner(&team, requester_id)?;

        disband(&txn, team_id).await?;
        txn.commit().await?;

        tracing::info!("User {} deleted team {}", requester_id, team_id);

        Ok(())
    }

    /// Replaces a team's join code.
    ///
    /// The previous code stops working once this returns.
    ///
    /// # Returns
    /// - `Ok(String)` - The new join code
    /// - `Err(TeamError::TeamNotFound)` - No such team in the event
    /// - `Err(TeamError::NotOwner)` - Requester does not own the team
    pub async fn regenerate_join_code(
        &self,
        event_id: i32,
        team_id: i32,
        requester_id: u64,
    ) -> Result<String, AppError> {
        let _lock = self.locks.lock(event_id).await;
        let txn = self.db.begin().await?;

        let team = find_team(&txn, event_id, team_id).await?;
        ensure_owner(&team, requester_id)?;

        let join_code = unique_join_code(&txn).await?;
        let team = EventTeamRepository::new(&txn)
            .update_join_code(team_id, join_code)
            .await?;
        txn.commit().await?;

        tracing::info!("Join code for team {} regenerated", team_id);

        Ok(team.join_code)
    }

    /// Renames a team.
    ///
    /// # Returns
    /// - `Ok(EventTeamWithMembers)` - The renamed team
    /// - `Err(AppError::BadRequest)` - Empty or overlong name
    /// - `Err(TeamError::NotOwner)` - Requester does not own the team
    /// - `Err(TeamError::EventNotActive)` - Event has ended
    pub async fn rename_team(
        &self,
        event_id: i32,
        team_id: i32,
        requester_id: u64,
        name: &str,
    ) -> Result<EventTeamWithMembers, AppError> {
        let name = validate_team_name(name)?;

        let _lock = self.locks.lock(event_id).await;
        let txn = self.db.begin().await?;

        let team = find_team(&txn, event_id, team_id).await?;
        ensure_owner(&team, requester_id)?;
        ensure_active(&find_event(&txn, event_id).await?)?;

        let team = EventTeamRepository::new(&txn)
            .update_name(team_id, name)
            .await?;
        let team = with_members(&txn, team).await?;
        txn.commit().await?;

        Ok(team)
    }

    /// Removes another member from the owner's team.
    ///
    /// # Returns
    /// - `Ok(())` - Member removed
    /// - `Err(TeamError::NotOwner)` - Requester does not own the team
    /// - `Err(TeamError::CannotKickSelf)` - Owner targeted themselves
    /// - `Err(TeamError::EventNotActive)` - Event has ended
    /// - `Err(TeamError::NotTeamMember)` - Target is not on this team
    pub async fn kick_member(
        &self,
        event_id: i32,
        team_id: i32,
        requester_id: u64,
        user_id: u64,
    ) -> Result<(), AppError> {
        let _lock = self.locks.lock(event_id).await;
        let txn = self.db.begin().await?;

        let team = find_team(&txn, event_id, team_id).await?;
        ensure_owner(&team, requester_id)?;
        if user_id == requester_id {
            return Err(TeamError::CannotKickSelf.into());
        }
        ensure_active(&find_event(&txn, event_id).await?)?;

        let members = EventTeamMemberRepository::new(&txn);
        ensure_member(&members, &team, user_id).await?;
        members.remove(event_id, user_id).await?;
        txn.commit().await?;

        tracing::info!(
            "User {} kicked {} from team {}",
            requester_id,
            user_id,
            team_id
        );

        Ok(())
    }
}

async fn find_event<C: ConnectionTrait>(db: &C, event_id: i32) -> Result<Event, AppError> {
    EventRepository::new(db)
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| TeamError::EventNotFound(event_id).into())
}

/// Finds a team, treating a team of another event as missing.
async fn find_team<C: ConnectionTrait>(
    db: &C,
    event_id: i32,
    team_id: i32,
) -> Result<EventTeam, AppError> {
    EventTeamRepository::new(db)
        .find_by_id(team_id)
        .await?
        .filter(|team| team.event_id == event_id)
        .ok_or_else(|| TeamError::TeamNotFound(team_id).into())
}

async fn with_members<C: ConnectionTrait>(
    db: &C,
    team: EventTeam,
) -> Result<EventTeamWithMembers, AppError> {
    let members = EventTeamMemberRepository::new(db)
        .get_by_team(team.id)
        .await?;

    Ok(EventTeamWithMembers { team, members })
}

async fn ensure_member(
    members: &EventTeamMemberRepository<'_, DatabaseTransaction>,
    team: &EventTeam,
    user_id: u64,
) -> Result<(), AppError> {
    let on_team = members
        .find_by_event_and_user(team.event_id, user_id)
        .await?
        .is_some_and(|m| m.team_id == team.id);

    if !on_team {
        return Err(TeamError::NotTeamMember {
            user_id,
            team_id: team.id,
        }
        .into());
    }

    Ok(())
}

fn ensure_owner(team: &EventTeam, user_id: u64) -> Result<(), AppError> {
    if team.owner_id != user_id {
        return Err(TeamError::NotOwner {
            user_id,
            team_id: team.id,
        }
        .into());
    }

    Ok(())
}

fn ensure_active(event: &Event) -> Result<(), AppError> {
    if !event.is_active_at(Utc::now()) {
        return Err(TeamError::EventNotActive(event.id).into());
    }

    Ok(())
}

async fn disband(txn: &DatabaseTransaction, team_id: i32) -> Result<(), AppError> {
    EventTeamMemberRepository::new(txn)
        .remove_by_team(team_id)
        .await?;
    EventTeamRepository::new(txn).delete(team_id).await?;

    Ok(())
}

async fn unique_join_code<C: ConnectionTrait>(db: &C) -> Result<String, AppError> {
    let repo = EventTeamRepository::new(db);

    for _ in 0..JOIN_CODE_ATTEMPTS {
        let code = generate_join_code();
        if !repo.join_code_exists(&code).await? {
            return Ok(code);
        }
    }

    Err(InternalError::JoinCodeExhausted {
        attempts: JOIN_CODE_ATTEMPTS,
    }
    .into())
}

fn validate_team_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();

    if name.is_empty() || name.chars().count() > MAX_TEAM_NAME_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Team name must be between 1 and {} characters",
            MAX_TEAM_NAME_LENGTH
        )));
    }

    Ok(name.to_string())
}

fn already_on_team(user_id: u64, event_id: i32) -> AppError {
    TeamError::UserAlreadyOnTeam { user_id, event_id }.into()
}

/// Maps a membership key violation to `UserAlreadyOnTeam`.
fn membership_conflict(err: DbErr, user_id: u64, event_id: i32) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => already_on_team(user_id, event_id),
        _ => err.into(),
    }
}
