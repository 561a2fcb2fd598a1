use axum::{Json, extract::State};
use tradehub_core::dashboard::DashboardSummary;

use crate::state::AppState;

pub async fn summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    let active_needs = state.needs.count_open();
    Json(state.catalog.dashboard.clone().with_active_needs(active_needs))
}
