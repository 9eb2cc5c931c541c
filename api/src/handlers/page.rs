//! Page view handler

use axum::{extract::State, Json};

use crate::app::{CancelToken, PageView};
use crate::AppState;

/// GET /api/page
///
/// Never fails as a whole: each section carries its own display state, and a
/// failed pipeline renders as that section's fallback.
pub async fn get_page(State(state): State<AppState>) -> Json<PageView> {
    Json(state.page_service.load(&CancelToken::new()).await)
}
