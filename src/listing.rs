use serde_json::Value as JsonValue;

pub const RANK_FALLBACK: &str = "N/A";
pub const NAME_FALLBACK: &str = "Unknown";

/// One coin of the listing, reduced to the fields the report shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinRow {
    pub rank: String,
    pub name: String,
    pub price: Option<f64>,
    pub change_24h: Option<f64>,
}

impl CoinRow {
    pub fn from_json(coin: &JsonValue) -> Self {
        let rank = coin.get("rank").and_then(display_scalar).unwrap_or_else(|| RANK_FALLBACK.to_string());
        let name = coin.get("name").and_then(display_scalar).unwrap_or_else(|| NAME_FALLBACK.to_string());

        // Only the first quote is consulted.
        let quote = coin
            .get("quotes")
            .and_then(|q| q.as_array())
            .and_then(|q| q.first());
        let price = quote.and_then(|q| q.get("price")).and_then(|x| x.as_f64());
        let change_24h = quote
            .and_then(|q| q.get("percentChange24h"))
            .and_then(|x| x.as_f64());

        Self { rank, name, price, change_24h }
    }
}

/// `data.cryptoCurrencyList`, or an empty slice when either level is missing
/// or has the wrong shape.
pub fn coin_list(listing: &JsonValue) -> &[JsonValue] {
    listing
        .get("data")
        .and_then(|d| d.get("cryptoCurrencyList"))
        .and_then(|l| l.as_array())
        .map(|l| l.as_slice())
        .unwrap_or(&[])
}

pub fn coin_rows(listing: &JsonValue) -> Vec<CoinRow> {
    coin_list(listing).iter().map(CoinRow::from_json).collect()
}

fn display_scalar(v: &JsonValue) -> Option<String> {
    match v {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
