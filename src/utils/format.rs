// ============================================================================
// FORMATO - montos, meses, fechas locales <-> UTC
// ============================================================================

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Offset, Utc};

const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// `$1,234.50`
pub fn money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// `$12.00` (sin separador de miles, como en las tablas de cuotas)
pub fn money_plain(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// "Hace N segundos/minutos/horas/días"; cada unidad redondea sobre la anterior
pub fn relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let millis = (now - date).num_milliseconds() as f64;
    let seconds = (millis / 1000.0).round();
    let minutes = (seconds / 60.0).round();
    let hours = (minutes / 60.0).round();
    let days = (hours / 24.0).round();

    if seconds < 60.0 {
        format!("Hace {} segundos", seconds as i64)
    } else if minutes < 60.0 {
        format!("Hace {} minutos", minutes as i64)
    } else if hours < 24.0 {
        format!("Hace {} horas", hours as i64)
    } else {
        format!("Hace {} días", days as i64)
    }
}

/// Mes actual como `YYYY-MM`
pub fn month_of(date: DateTime<Utc>) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Desplaza un mes `YYYY-MM` por `delta` meses. None si el formato no es válido.
pub fn shift_month(month: &str, delta: i32) -> Option<String> {
    let (year, mon) = month.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let mon: i32 = mon.parse().ok()?;
    if !(1..=12).contains(&mon) {
        return None;
    }
    let index = year * 12 + (mon - 1) + delta;
    Some(format!("{:04}-{:02}", index.div_euclid(12), index.rem_euclid(12) + 1))
}

/// Offset local del navegador (chrono usa js Date con `wasmbind`)
pub fn local_offset() -> FixedOffset {
    chrono::Local::now().offset().fix()
}

/// Valor de un `<input type="datetime-local">` (hora local) -> ISO UTC con `Z`
pub fn local_input_to_utc(input: &str, offset: FixedOffset) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let naive = NaiveDateTime::parse_from_str(input, DATETIME_LOCAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    let local = naive.and_local_timezone(offset).single()?;
    Some(
        local
            .with_timezone(&Utc)
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    )
}

/// ISO del backend -> valor para `<input type="datetime-local">`
pub fn utc_to_local_input(iso: &str, offset: FixedOffset) -> String {
    parse_iso(iso)
        .map(|dt| dt.with_timezone(&offset).format(DATETIME_LOCAL_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn parse_iso(iso: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(iso.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn format_local_datetime(iso: &str, offset: FixedOffset) -> String {
    format_with(iso, offset, "%d/%m/%Y %H:%M")
}

pub fn format_local_date(iso: &str, offset: FixedOffset) -> String {
    format_with(iso, offset, "%d/%m/%Y")
}

pub fn format_local_time(iso: &str, offset: FixedOffset) -> String {
    format_with(iso, offset, "%H:%M")
}

fn format_with(iso: &str, offset: FixedOffset, pattern: &str) -> String {
    match parse_iso(iso) {
        Some(dt) => dt.with_timezone(&offset).format(pattern).to_string(),
        None => iso.to_string(),
    }
}

/// Día (`YYYY-MM-DD`) de un valor datetime-local
pub fn input_day(input: &str) -> Option<&str> {
    let (day, _) = input.split_once('T')?;
    if day.len() == 10 {
        Some(day)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(0.0), "$0.00");
        assert_eq!(money(1234.5), "$1,234.50");
        assert_eq!(money(1_000_000.0), "$1,000,000.00");
        assert_eq!(money(-15.256), "-$15.26");
        assert_eq!(money_plain(1234.5), "$1234.50");
    }

    #[test]
    fn relative_time_units() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now - chrono::Duration::seconds(30), now), "Hace 30 segundos");
        assert_eq!(relative_time(now - chrono::Duration::minutes(5), now), "Hace 5 minutos");
        assert_eq!(relative_time(now - chrono::Duration::hours(3), now), "Hace 3 horas");
        assert_eq!(relative_time(now - chrono::Duration::days(2), now), "Hace 2 días");
    }

    #[test]
    fn shift_month_crosses_years() {
        assert_eq!(shift_month("2024-06", -6).as_deref(), Some("2023-12"));
        assert_eq!(shift_month("2024-01", -1).as_deref(), Some("2023-12"));
        assert_eq!(shift_month("2023-12", 1).as_deref(), Some("2024-01"));
        assert_eq!(shift_month("2024-13", 0), None);
        assert_eq!(shift_month("junio", 0), None);
    }

    #[test]
    fn local_input_round_trips_through_utc() {
        let offset = FixedOffset::west_opt(4 * 3600).unwrap();
        let utc = local_input_to_utc("2024-03-01T18:30", offset).unwrap();
        assert_eq!(utc, "2024-03-01T22:30:00.000Z");
        assert_eq!(utc_to_local_input(&utc, offset), "2024-03-01T18:30");
        assert_eq!(local_input_to_utc("", offset), None);
        assert_eq!(local_input_to_utc("mañana", offset), None);
    }

    #[test]
    fn display_helpers_fall_back_to_raw_text() {
        let offset = FixedOffset::east_opt(0).unwrap();
        assert_eq!(format_local_datetime("2024-03-01T22:30:00Z", offset), "01/03/2024 22:30");
        assert_eq!(format_local_time("2024-03-01T22:30:00Z", offset), "22:30");
        assert_eq!(format_local_date("no-date", offset), "no-date");
        assert_eq!(input_day("2024-03-01T10:00"), Some("2024-03-01"));
        assert_eq!(input_day(""), None);
    }
}
