//! Fixtures shared by unit tests

use crate::model::QuoteField;
use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;

fn sample_value(field: QuoteField) -> &'static str {
    match field {
        QuoteField::LastPrice => "1234",
        QuoteField::ChangePercent => "+1.2%",
        QuoteField::DayHigh => "1,240.00",
        QuoteField::DayLow => "1,210.00",
        QuoteField::Volume => "42,000",
        QuoteField::Turnover => "12,345,678.90",
        QuoteField::Week52High => "1,450.00",
        QuoteField::Week52Low => "980.00",
        QuoteField::DownFromHigh => "-14.9%",
        QuoteField::UpFromLow => "25.9%",
    }
}

fn render(fields: impl Iterator<Item = (QuoteField, String)>) -> String {
    let mut html = String::from("<!DOCTYPE html><html><head><title>Quote</title></head><body>\n");
    for (field, value) in fields {
        html.push_str(&format!(
            "<p>{}: <span id=\"{}\">{}</span></p>\n",
            field.label(),
            field.element_id(),
            value
        ));
    }
    html.push_str("</body></html>");
    html
}

/// A complete quote page with the given price and change
pub(crate) fn quote_page(last_price: &str, change_percent: &str) -> String {
    render(QuoteField::ALL.into_iter().map(|field| {
        let value = match field {
            QuoteField::LastPrice => last_price.to_string(),
            QuoteField::ChangePercent => change_percent.to_string(),
            other => sample_value(other).to_string(),
        };
        (field, value)
    }))
}

/// A complete quote page with French prose, encoded as windows-1252
///
/// Carries no charset declaration, so the encoding has to be detected.
pub(crate) fn windows_1252_quote_page(last_price: &str, change_percent: &str) -> Vec<u8> {
    let html = quote_page(last_price, change_percent).replace(
        "<body>\n",
        "<body>\n<p>Cours de clôture de la séance précédente. Données élaborées à titre \
         indicatif, vérifiées après la fermeture du marché. Dernière mise à jour : \
         détails à côté de chaque société cotée.</p>\n",
    );
    encoding_rs::WINDOWS_1252.encode(&html).0.into_owned()
}

/// A quote page lacking one field
pub(crate) fn quote_page_without(missing: QuoteField) -> String {
    render(
        QuoteField::ALL
            .into_iter()
            .filter(|field| *field != missing)
            .map(|field| (field, sample_value(field).to_string())),
    )
}

/// Serve `pages` keyed by symbol on a local port, 404 for anything else
///
/// Returns the base URL of the site.
pub(crate) async fn spawn_quote_site(pages: HashMap<String, (StatusCode, Vec<u8>)>) -> String {
    let pages = Arc::new(pages);
    let app = Router::new().route(
        "/:symbol",
        get(move |Path(symbol): Path<String>| {
            let pages = Arc::clone(&pages);
            async move {
                match pages.get(&symbol) {
                    Some((status, body)) => (*status, body.clone()),
                    None => (StatusCode::NOT_FOUND, b"Not Found".to_vec()),
                }
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// A site serving one full page for `symbol`
pub(crate) async fn spawn_single_quote(symbol: &str, last_price: &str) -> String {
    let mut pages = HashMap::new();
    pages.insert(
        symbol.to_string(),
        (StatusCode::OK, quote_page(last_price, "+1.2%").into_bytes()),
    );
    spawn_quote_site(pages).await
}
