use chrono::NaiveDate;
use serde_json::Value as JsonValue;

use crate::{
    listing::{coin_rows, CoinRow},
    utils::group_thousands,
};

pub const MISSING: &str = "N/A";
pub const SEPARATOR_WIDTH: usize = 45;

/// `$45,231.12`, or `N/A`.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${}", group_thousands(&format!("{p:.2}"))),
        None => MISSING.to_string(),
    }
}

/// `+3.40%` / `-1.50%`, or `N/A`.
pub fn format_change(change: Option<f64>) -> String {
    match change {
        Some(c) => format!("{c:+.2}%"),
        None => MISSING.to_string(),
    }
}

fn columns(rank: &str, name: &str, price: &str, change: &str) -> String {
    format!("{rank:<5} {name:<15} {price:<12} {change:<8}")
}

pub fn format_row(row: &CoinRow) -> String {
    columns(
        &row.rank,
        &row.name,
        &format_price(row.price),
        &format_change(row.change_24h),
    )
}

pub fn header_lines(date: NaiveDate) -> [String; 3] {
    [
        format!("--- CRYPTO REPORT ({}) ---", date.format("%Y-%m-%d")),
        columns("Rank", "Name", "Price", "24h %"),
        "-".repeat(SEPARATOR_WIDTH),
    ]
}

/// Title, column header, separator, then one line per coin in upstream order.
pub fn render_report(listing: &JsonValue, date: NaiveDate) -> Vec<String> {
    let mut lines: Vec<String> = header_lines(date).into();
    lines.extend(coin_rows(listing).iter().map(format_row));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(45231.123)), "$45,231.12");
        assert_eq!(format_price(Some(0.5)), "$0.50");
        assert_eq!(format_price(Some(1_000_000.0)), "$1,000,000.00");
        assert_eq!(format_price(Some(999.999)), "$1,000.00");
        assert_eq!(format_price(None), "N/A");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(Some(3.4)), "+3.40%");
        assert_eq!(format_change(Some(-1.5)), "-1.50%");
        assert_eq!(format_change(Some(0.0)), "+0.00%");
        assert_eq!(format_change(None), "N/A");
    }

    #[test]
    fn test_header_lines() {
        let [title, header, sep] = header_lines(date());
        assert_eq!(title, "--- CRYPTO REPORT (2024-03-09) ---");
        assert_eq!(header, "Rank  Name            Price        24h %   ");
        assert_eq!(sep, "-".repeat(45));
    }

    #[test]
    fn test_row_layout() {
        let row = CoinRow {
            rank: "1".to_string(),
            name: "Bitcoin".to_string(),
            price: Some(45231.123),
            change_24h: Some(3.4),
        };
        assert_eq!(format_row(&row), "1     Bitcoin         $45,231.12   +3.40%  ");
    }

    #[test]
    fn test_missing_quotes_render_na() {
        let listing = json!({
            "data": { "cryptoCurrencyList": [ { "rank": 3, "name": "Tether" } ] }
        });
        let lines = render_report(&listing, date());
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "3     Tether          N/A          N/A     ");
    }

    #[test]
    fn test_line_count_matches_listing() {
        let coins: Vec<JsonValue> = (1..=7)
            .map(|i| json!({ "rank": i, "name": format!("Coin{i}"), "quotes": [{ "price": i as f64 }] }))
            .collect();
        let listing = json!({ "data": { "cryptoCurrencyList": coins } });
        let lines = render_report(&listing, date());
        assert_eq!(lines.len(), 7 + 3);
        assert!(lines[3].starts_with("1     Coin1"));
        assert!(lines[9].starts_with("7     Coin7"));
    }

    #[test]
    fn test_missing_data_key_yields_header_only() {
        let lines = render_report(&json!({ "status": { "error_code": 0 } }), date());
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_long_names_are_not_truncated() {
        let row = CoinRow {
            rank: "10".to_string(),
            name: "Wrapped Staked Ether".to_string(),
            price: None,
            change_24h: Some(-0.25),
        };
        assert_eq!(format_row(&row), "10    Wrapped Staked Ether N/A          -0.25%  ");
    }
}
