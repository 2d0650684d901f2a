use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::response::Response;

use crate::app_state::AppState;
use crate::domain::point::dto::page_request::PageRequest;
use crate::errors::ErrorAlert;

fn insert(headers: &mut HeaderMap, name: String, value: &str) {
    if let (Ok(name), Ok(value)) = (
        HeaderName::try_from(name.to_ascii_lowercase()),
        HeaderValue::from_str(value),
    ) {
        headers.insert(name, value);
    }
}

/// `X-<app>-alert` + `X-<app>-params` pair, keyed by a translation message.
pub fn alert(app_name: &str, message: &str, param: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(&mut headers, format!("x-{app_name}-alert"), message);
    insert(&mut headers, format!("x-{app_name}-params"), param);
    headers
}

pub fn entity_creation_alert(app_name: &str, entity_name: &str, param: &str) -> HeaderMap {
    alert(app_name, &format!("{app_name}.{entity_name}.created"), param)
}

pub fn entity_update_alert(app_name: &str, entity_name: &str, param: &str) -> HeaderMap {
    alert(app_name, &format!("{app_name}.{entity_name}.updated"), param)
}

pub fn entity_deletion_alert(app_name: &str, entity_name: &str, param: &str) -> HeaderMap {
    alert(app_name, &format!("{app_name}.{entity_name}.deleted"), param)
}

/// `X-<app>-error` + `X-<app>-params` pair for a rejected request.
pub fn failure_alert(app_name: &str, alert: &ErrorAlert) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(&mut headers, format!("x-{app_name}-error"), &format!("error.{}", alert.error_key));
    insert(&mut headers, format!("x-{app_name}-params"), &alert.entity_name);
    headers
}

/// Response layer: copies an [`ErrorAlert`] left by a failed handler into headers.
pub async fn error_alert_headers(State(state): State<AppState>, mut response: Response) -> Response {
    if let Some(alert) = response.extensions_mut().remove::<ErrorAlert>() {
        response
            .headers_mut()
            .extend(failure_alert(&state.app_name, &alert));
    }
    response
}

/// `X-Total-Count` and RFC 5988 `Link` headers for a paged listing at `base_path`.
pub fn pagination(base_path: &str, extra_query: &[(&str, &str)], page: &PageRequest, total: u64) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(&mut headers, "x-total-count".into(), &total.to_string());

    let size = page.size.max(1) as u64;
    let last_page = if total == 0 { 0 } else { (total - 1) / size };
    let current = page.page as u64;

    let mut links = Vec::new();
    if current < last_page {
        links.push(link(base_path, extra_query, current + 1, size, "next"));
    }
    if current > 0 {
        links.push(link(base_path, extra_query, current - 1, size, "prev"));
    }
    links.push(link(base_path, extra_query, last_page, size, "last"));
    links.push(link(base_path, extra_query, 0, size, "first"));

    insert(&mut headers, "link".into(), &links.join(","));
    headers
}

fn link(base_path: &str, extra_query: &[(&str, &str)], page: u64, size: u64, rel: &str) -> String {
    let mut query = format!("page={page}&size={size}");
    for (k, v) in extra_query {
        query.push_str(&format!("&{k}={}", urlencoding::encode(v)));
    }
    format!("<{base_path}?{query}>; rel=\"{rel}\"")
}
