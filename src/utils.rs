//utils.rs
use chrono::NaiveDateTime;

/// Parse timestamp Hostaway (`YYYY-MM-DD HH:MM:SS`). None kalau formatnya
/// tidak sesuai; normalisasi tidak boleh gagal hanya karena tanggal rusak.
pub fn parse_submitted_at(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok()
}

/// Pembulatan ke n digit desimal.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_submitted_at_valid() {
        let parsed = parse_submitted_at("2020-08-21 22:45:14").unwrap();
        assert_eq!(parsed.year(), 2020);
        assert_eq!(parsed.month(), 8);
        assert_eq!(parsed.day(), 21);
        assert_eq!(parsed.hour(), 22);
    }

    #[test]
    fn parse_submitted_at_rejects_garbage() {
        assert!(parse_submitted_at("not a date").is_none());
        assert!(parse_submitted_at("2020-08-21").is_none());
        assert!(parse_submitted_at("").is_none());
    }

    #[test]
    fn round_to_two_places() {
        assert_eq!(round_to(8.666666, 2), 8.67);
        assert_eq!(round_to(9.0, 2), 9.0);
        assert_eq!(round_to(7.25, 1), 7.3);
    }
}
