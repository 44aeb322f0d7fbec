use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::notify::{share_advisory, Advisory};
use crate::report::export::{render_report, report_file_name, ReportInputs};

#[derive(Deserialize)]
pub struct ReportQuery {
    /// Inline print-oriented view instead of a download.
    #[serde(default)]
    pub print: bool,
}

/// POST /api/v1/report
///
/// String-templates the results-page values into the fixed report document.
/// Default: a download named with the current date. `?print=true` serves it
/// inline for the browser's print view.
pub async fn handle_report(
    Query(query): Query<ReportQuery>,
    Json(inputs): Json<ReportInputs>,
) -> Response {
    let today = chrono::Utc::now().date_naive();
    let html = render_report(&inputs, today);

    let disposition = if query.print {
        "inline".to_string()
    } else {
        format!("attachment; filename=\"{}\"", report_file_name(today))
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        html,
    )
        .into_response()
}

#[derive(Deserialize)]
pub struct ShareRequest {
    /// Whether the page's clipboard copy of the results link succeeded.
    pub clipboard_copied: bool,
}

/// POST /api/v1/share
///
/// Resolves the share-results action to an advisory: success toast on a
/// granted clipboard copy, an equivalent fallback advisory on denial — never
/// a raw error.
pub async fn handle_share(Json(req): Json<ShareRequest>) -> Json<Advisory> {
    Json(share_advisory(req.clipboard_copied))
}
