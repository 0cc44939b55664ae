//! AJAX endpoint serving count and page requests

use super::state::AppState;
use super::store::Post;
use crate::adapters::service::{
    CountData, Envelope, ErrorCode, PageData, RequestType, ACTION, API_KEY_HEADER,
};
use crate::config::{secret_matches, MAX_PAGE_SIZE};
use crate::domain::UrlRecord;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::collections::HashMap;
use std::fmt::Write;

const MSG_NO_PERMISSION: &str = "You do not have permission to access this section";
const MSG_INVALID_PARAMETERS: &str = "Invalid parameters provided";
const MSG_TAXONOMY_NOT_FOUND: &str = "Taxonomy does not exist";
const MSG_TERM_NOT_FOUND: &str = "Term not found";
const MSG_INVALID_NONCE: &str = "Security check failed";

/// Parse a non-negative integer the lenient way form input is usually read
///
/// Leading whitespace and sign are ignored and parsing stops at the first
/// non-digit, so `"-5"` is 5 and `"12abc"` is 12. No digits at all gives 0.
pub fn parse_absint(raw: &str) -> u64 {
    let digits = raw.trim().trim_start_matches(['-', '+']);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().unwrap_or(0)
}

fn error_response(status: StatusCode, code: ErrorCode, message: &str) -> Response {
    (status, Json(Envelope::error(code, message))).into_response()
}

fn is_admin(state: &AppState, headers: &HeaderMap) -> bool {
    let Some(presented) = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    state
        .config
        .admin_keys
        .iter()
        .any(|key| secret_matches(key, presented))
}

fn format_date(post: &Post, format: &str) -> String {
    let mut formatted = String::new();
    if write!(formatted, "{}", post.date.format(format)).is_err() {
        return post.date.to_rfc3339();
    }
    formatted
}

/// `GET /wp-admin/admin-ajax.php`
///
/// Checks run in order: action, anti-forgery token, capability, parameters,
/// taxonomy, term. Errors other than a bad token or unknown action are
/// returned as a failed envelope with HTTP 200.
pub async fn get_urls(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if params.get("action").map(String::as_str) != Some(ACTION) {
        return (StatusCode::BAD_REQUEST, "0").into_response();
    }

    let request_type = match params.get("request_type").map(|s| s.trim()) {
        Some("count") => RequestType::Count,
        _ => RequestType::Data,
    };

    if let Some(expected) = &state.config.nonce {
        let presented = params.get("nonce").map(String::as_str).unwrap_or_default();
        if !secret_matches(expected, presented) {
            tracing::warn!(request_type = request_type.as_str(), "Rejected request with invalid nonce");
            return error_response(StatusCode::FORBIDDEN, ErrorCode::InvalidNonce, MSG_INVALID_NONCE);
        }
    }

    if !is_admin(&state, &headers) {
        tracing::warn!(request_type = request_type.as_str(), "Rejected request without admin capability");
        return error_response(StatusCode::OK, ErrorCode::Forbidden, MSG_NO_PERMISSION);
    }

    let taxonomy = params.get("taxonomy").map(|s| s.trim()).unwrap_or_default();
    let term_id = params.get("ID").map(|s| parse_absint(s)).unwrap_or(0);

    if taxonomy.is_empty() || term_id == 0 {
        return error_response(StatusCode::OK, ErrorCode::InvalidParameters, MSG_INVALID_PARAMETERS);
    }

    if !state.store.taxonomy_exists(taxonomy) {
        return error_response(StatusCode::OK, ErrorCode::TaxonomyNotFound, MSG_TAXONOMY_NOT_FOUND);
    }

    let Some(term) = state.store.term(taxonomy, term_id) else {
        return error_response(StatusCode::OK, ErrorCode::TermNotFound, MSG_TERM_NOT_FOUND);
    };

    let posts = state.store.published_posts(term.id);
    let total = posts.len() as u64;

    match request_type {
        RequestType::Count => {
            tracing::debug!(taxonomy, term_id, total, "Count request");
            Json(Envelope::ok(CountData {
                total_count: total,
                term_name: term.name,
                batch_size: state.config.default_per_page,
            }))
            .into_response()
        }
        RequestType::Data => {
            let page = params
                .get("page")
                .map(|s| parse_absint(s))
                .unwrap_or(1)
                .max(1);
            let per_page = match params.get("per_page").map(|s| parse_absint(s)) {
                None | Some(0) => u64::from(state.config.default_per_page),
                Some(n) => n,
            }
            .min(u64::from(MAX_PAGE_SIZE));

            let total_pages = total.div_ceil(per_page);
            let offset = (page - 1).saturating_mul(per_page);

            let urls: Vec<UrlRecord> = posts
                .iter()
                .skip(usize::try_from(offset).unwrap_or(usize::MAX))
                .take(per_page as usize)
                .filter_map(|post| {
                    let permalink = post.permalink.as_deref().filter(|p| !p.is_empty())?;
                    Some(UrlRecord::new(
                        permalink,
                        post.title.as_str(),
                        format_date(post, &state.config.date_format),
                    ))
                })
                .collect();

            tracing::debug!(
                taxonomy,
                term_id,
                page,
                per_page,
                returned = urls.len(),
                total,
                "Page request"
            );

            let page = u32::try_from(page).unwrap_or(u32::MAX);
            let total_pages = u32::try_from(total_pages).unwrap_or(u32::MAX);
            Json(Envelope::ok(PageData {
                urls,
                current_page: page,
                total_pages,
                total_posts: total,
                has_more: page < total_pages,
                term: term.name,
            }))
            .into_response()
        }
    }
}
