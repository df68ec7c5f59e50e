//! Handlers for the `/registrations` resource: review and submission of a
//! completed wizard draft.
//!
//! Both endpoints take the full draft (event, partnership, selection) and
//! rebuild a wizard session from it, so they enforce exactly the advance
//! guards an interactive session went through: partnership names present,
//! at least one division and one level, caps respected.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use promenade_core::catalog::{division_name, level_name};
use promenade_core::error::CoreError;
use promenade_core::partnership::{DancerDraft, PartnershipDraft};
use promenade_core::selection::{DanceKey, SelectionState};
use promenade_core::submission::plan_registrations;
use promenade_core::types::DbId;
use promenade_core::wizard::WizardSession;
use promenade_db::models::dancer::UpsertDancer;
use promenade_db::models::partnership::{CreatePartnership, Partnership};
use promenade_db::models::registration::{CreateRegistration, Registration};
use promenade_db::repositories::{
    DancerRepo, EventConfigurationRepo, EventRepo, PartnershipRepo, RegistrationRepo,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// The complete wizard draft as sent by the client for review or
/// submission.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationDraft {
    pub event_id: DbId,
    pub partnership: PartnershipDraft,
    pub selected_age_divisions: Vec<String>,
    pub selected_skill_levels: Vec<String>,
    #[serde(default)]
    pub selected_dances: Vec<DanceKey>,
}

impl RegistrationDraft {
    /// Rebuild a wizard session at the review step, enforcing every
    /// advance guard on the way.
    fn into_session(self) -> Result<WizardSession, CoreError> {
        let selection = SelectionState::try_new(
            self.selected_age_divisions,
            self.selected_skill_levels,
            self.selected_dances,
        )?;
        WizardSession::from_draft(self.event_id, self.partnership, selection)
    }
}

/// One dancer as shown on the review step.
#[derive(Debug, Serialize)]
pub struct DancerSummary {
    pub name: String,
    pub email: String,
    pub is_professional: bool,
}

impl From<&DancerDraft> for DancerSummary {
    fn from(dancer: &DancerDraft) -> Self {
        Self {
            name: format!("{} {}", dancer.first_name, dancer.last_name),
            email: dancer.email.clone(),
            is_professional: dancer.is_professional,
        }
    }
}

/// Selected dances grouped under their category's display name.
#[derive(Debug, Serialize)]
pub struct DanceGroup {
    pub category: String,
    pub dances: Vec<String>,
}

/// Everything the review step displays, with catalog ids resolved to
/// display names.
#[derive(Debug, Serialize)]
pub struct ReviewSummary {
    pub event_id: DbId,
    pub event_name: String,
    pub leader: DancerSummary,
    pub follower: DancerSummary,
    pub age_divisions: Vec<String>,
    pub skill_levels: Vec<String>,
    pub dance_groups: Vec<DanceGroup>,
    pub registration_count: usize,
}

/// The rows created by a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmissionResult {
    pub partnership: Partnership,
    pub registrations: Vec<Registration>,
}

// ---------------------------------------------------------------------------
// POST /registrations/review
// ---------------------------------------------------------------------------

/// Validate a draft and return the review-step summary.
///
/// Division and level ids fall back to the raw id when the configuration
/// no longer carries a matching entry; dance keys that fail to resolve
/// are dropped from the grouping entirely.
pub async fn review(
    State(state): State<AppState>,
    Json(draft): Json<RegistrationDraft>,
) -> AppResult<Json<DataResponse<ReviewSummary>>> {
    let event_id = draft.event_id;
    let session = draft.into_session()?;

    let event = EventRepo::find_by_id(&state.pool, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;
    let config = EventConfigurationRepo::find_by_event(&state.pool, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EventConfiguration",
            id: event_id,
        }))?;

    let selection = session.selection();
    let age_divisions = selection
        .age_divisions()
        .iter()
        .map(|id| {
            division_name(&config.age_divisions, id)
                .unwrap_or(id)
                .to_string()
        })
        .collect();
    let skill_levels = selection
        .skill_levels()
        .iter()
        .map(|id| level_name(&config.skill_levels, id).unwrap_or(id).to_string())
        .collect();
    let dance_groups = selection
        .grouped_dances(&config.dance_categories)
        .into_iter()
        .map(|(category, dances)| DanceGroup { category, dances })
        .collect();
    let registration_count = plan_registrations(selection).len();

    let summary = ReviewSummary {
        event_id: event.id,
        event_name: event.name,
        leader: DancerSummary::from(&session.partnership().leader),
        follower: DancerSummary::from(&session.partnership().follower),
        age_divisions,
        skill_levels,
        dance_groups,
        registration_count,
    };

    Ok(Json(DataResponse { data: summary }))
}

// ---------------------------------------------------------------------------
// POST /registrations
// ---------------------------------------------------------------------------

/// Run the submission sequence for a reviewed draft.
///
/// The steps run strictly in order: upsert leader, upsert follower,
/// insert partnership, then one registration insert per
/// (division x level) pair in division-major order. There is no
/// transaction around the sequence: a failure aborts at that point and
/// rows already created remain (re-running the dancer upserts is
/// idempotent; the partnership insert is not).
pub async fn submit(
    State(state): State<AppState>,
    Json(draft): Json<RegistrationDraft>,
) -> AppResult<(StatusCode, Json<DataResponse<SubmissionResult>>)> {
    let event_id = draft.event_id;
    let session = draft.into_session()?;

    let event = EventRepo::find_by_id(&state.pool, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;

    let leader = DancerRepo::upsert(
        &state.pool,
        &UpsertDancer::from(&session.partnership().leader),
    )
    .await?;
    let follower = DancerRepo::upsert(
        &state.pool,
        &UpsertDancer::from(&session.partnership().follower),
    )
    .await?;

    let partnership = PartnershipRepo::create(
        &state.pool,
        &CreatePartnership {
            leader_id: leader.id,
            follower_id: follower.id,
            event_id: event.id,
        },
    )
    .await?;

    tracing::debug!(
        partnership_id = partnership.id,
        leader_id = leader.id,
        follower_id = follower.id,
        "Partnership created"
    );

    let mut registrations = Vec::new();
    for plan in plan_registrations(session.selection()) {
        let row =
            RegistrationRepo::create(&state.pool, &CreateRegistration::from_plan(partnership.id, plan))
                .await?;
        registrations.push(row);
    }

    tracing::info!(
        event_id = event.id,
        partnership_id = partnership.id,
        count = registrations.len(),
        "Registration submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SubmissionResult {
                partnership,
                registrations,
            },
        }),
    ))
}
