use crate::clock::Clock;
use crate::errors::AppError;
use crate::models::{
    AcceptedResponse, HistoryResponse, PunchKind, PunchRequest, PunchResponse, StatsResponse,
    TodayResponse,
};
use crate::state::AppState;
use crate::stats::build_stats_at;
use crate::storage::PointStore;
use crate::summary::{aggregate, next_actions, to_response, today};
use crate::ui::render_index;
use crate::validation::{CorrectionForm, FieldError, JustificationForm};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let response = build_today(&state).await;
    Html(render_index(&response))
}

pub async fn get_today(State(state): State<AppState>) -> Json<TodayResponse> {
    Json(build_today(&state).await)
}

pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let mut events = state.store.load().await;
    // stable reverse keeps same-millisecond punches newest-appended first
    events.reverse();
    events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Json(HistoryResponse { events })
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let events = state.store.load().await;
    Json(build_stats_at(state.clock.today(), &events))
}

pub async fn punch(
    State(state): State<AppState>,
    Json(payload): Json<PunchRequest>,
) -> Result<Json<PunchResponse>, AppError> {
    let kind: PunchKind = payload
        .kind
        .parse()
        .map_err(|err| AppError::bad_request(format!("{err}")))?;

    Ok(Json(apply_punch(&state, kind).await))
}

pub async fn punch_form(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Redirect, AppError> {
    let kind: PunchKind = kind
        .parse()
        .map_err(|err| AppError::bad_request(format!("{err}")))?;

    apply_punch(&state, kind).await;
    Ok(Redirect::to("/"))
}

pub async fn submit_correction(
    State(state): State<AppState>,
    Json(form): Json<CorrectionForm>,
) -> Result<(StatusCode, Json<AcceptedResponse>), AppError> {
    let mut errors = form.validate();
    let record_id = form.record_id.trim();
    if !record_id.is_empty() && !state.store.load().await.iter().any(|e| e.id == record_id) {
        errors.push(FieldError {
            field: "record_id",
            message: "Unknown record.",
        });
    }
    if !errors.is_empty() {
        return Err(AppError::invalid(errors));
    }

    info!(
        record_id,
        new_date = %form.new_date,
        new_time = %form.new_time,
        "correction request submitted"
    );
    Ok(accepted("Correction request sent to management."))
}

pub async fn submit_justification(
    Json(form): Json<JustificationForm>,
) -> Result<(StatusCode, Json<AcceptedResponse>), AppError> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Err(AppError::invalid(errors));
    }

    info!(
        absence_date = %form.absence_date,
        attachment = form.attachment_name.as_deref().unwrap_or("none"),
        "absence justification submitted"
    );
    Ok(accepted("Justification recorded for review."))
}

async fn apply_punch(state: &AppState, kind: PunchKind) -> PunchResponse {
    let appended = state.store.append(kind).await;
    info!(id = %appended.event.id, %kind, saved = appended.saved(), "punch recorded");

    let events = state.store.load().await;
    let summary = aggregate(&today(&events, state.clock.as_ref()));

    PunchResponse {
        saved: appended.saved(),
        warning: appended.warning(),
        event: appended.event,
        summary: to_response(&summary),
    }
}

async fn build_today(state: &AppState) -> TodayResponse {
    let events = state.store.load().await;
    let day = today(&events, state.clock.as_ref());
    let summary = aggregate(&day);

    TodayResponse {
        date: state.clock.today().to_string(),
        next_actions: next_actions(summary.last_kind),
        summary: to_response(&summary),
        events: day,
    }
}

fn accepted(message: &str) -> (StatusCode, Json<AcceptedResponse>) {
    (
        StatusCode::ACCEPTED,
        Json(AcceptedResponse {
            message: message.to_string(),
        }),
    )
}
