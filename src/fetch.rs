//! One-shot spreadsheet fetch.
//!
//! `fetch` issues a single request and hands the complete row set, or the
//! reason there is none, to the callback exactly once. There is no retry and
//! no timeout; a request that never settles never calls back.

use crate::csv::parse_rows;
use crate::error::{Result, SheetMapError};
use crate::types::Row;

#[cfg(target_arch = "wasm32")]
use crate::sheets::SheetSource;

/// Turn an HTTP response into rows.
pub fn decode_response(status: u16, url: &str, body: &str) -> Result<Vec<Row>> {
    if !(200..300).contains(&status) {
        return Err(SheetMapError::Http {
            status,
            url: url.to_string(),
        });
    }
    // A sheet that is not shared publicly answers 200 with the sign-in page.
    if looks_like_html(body) {
        return Err(SheetMapError::Csv(format!(
            "{url} returned an HTML page, is the sheet shared publicly?"
        )));
    }
    parse_rows(body)
}

fn looks_like_html(body: &str) -> bool {
    let head: String = body.trim_start().chars().take(9).collect();
    let head = head.to_ascii_lowercase();
    head.starts_with("<!doctype") || head.starts_with("<html")
}

/// Fetch every row of `source` (a shareable link, sheet key or CSV URL).
#[cfg(target_arch = "wasm32")]
pub async fn fetch_rows(source: &str) -> Result<Vec<Row>> {
    let url = SheetSource::parse(source)?.csv_url();
    log::debug!("fetching sheet rows from {url}");
    let response = gloo_net::http::Request::get(&url).send().await?;
    let status = response.status();
    let body = response.text().await?;
    let rows = decode_response(status, &url, &body)?;
    log::info!("fetched {} rows from {url}", rows.len());
    Ok(rows)
}

/// Fetch `source` in the background and call `on_ready` with the result.
#[cfg(target_arch = "wasm32")]
pub fn fetch<F>(source: String, on_ready: F)
where
    F: FnOnce(Result<Vec<Row>>) + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_rows(&source).await;
        on_ready(result);
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_success_parses_body() {
        let rows = decode_response(200, "u", "Latitud,Longitud\n1,2").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value("Longitud"), "2");
    }

    #[test]
    fn test_error_status() {
        let err = decode_response(404, "https://x/y.csv", "Not found").unwrap_err();
        assert!(matches!(err, SheetMapError::Http { status: 404, .. }));
    }

    #[test]
    fn test_sign_in_page_is_rejected() {
        let err = decode_response(200, "u", "\n<!DOCTYPE html><html>").unwrap_err();
        assert!(matches!(err, SheetMapError::Csv(_)));
    }

    #[test]
    fn test_html_check_ignores_case() {
        for body in [
            "<!doctype html><html><body>Logga in</body></html>",
            "<HTML><body>x</body></HTML>",
            "  <Html lang=\"sv\">",
        ] {
            let err = decode_response(200, "u", body).unwrap_err();
            assert!(matches!(err, SheetMapError::Csv(_)), "{body}");
        }
    }

    #[test]
    fn test_csv_starting_with_angle_bracket_cell_is_parsed() {
        let rows = decode_response(200, "u", "<Institution>,Latitud\nLib,1").unwrap();
        assert_eq!(rows.len(), 1);
    }
}
