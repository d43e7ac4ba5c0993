#![forbid(unsafe_code)]

//! Date display and delivery ETA.
//!
//! Dates arrive as ISO-8601 text. Two shapes are accepted:
//!
//! - a calendar date, `2025-12-15`, which is midnight UTC for arithmetic and
//!   is displayed as that same calendar date;
//! - a date-time, with an offset (`2025-12-15T10:00:00-03:00`) or without one
//!   (read as UTC). For display its instant is shifted to São Paulo time.
//!
//! Nothing here fails: unparseable text formats as [`INVALID_DATE_LABEL`] and
//! has no ETA.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};

/// São Paulo has been fixed at UTC-3 since daylight saving was abolished in 2019.
const SAO_PAULO_OFFSET_SECS: i32 = 3 * 3600;

const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Display format for pt-BR calendar dates.
const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Shown in place of a date that could not be parsed.
pub const INVALID_DATE_LABEL: &str = "Data inválida";

/// Deliveries at most this many days out are flagged as due soon.
pub const SOON_THRESHOLD_DAYS: i64 = 15;

/// A parsed ISO-8601 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsoDate {
    Date(NaiveDate),
    Instant(DateTime<Utc>),
}

impl IsoDate {
    /// Parse a calendar date or date-time.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Some(Self::Date(date));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(Self::Instant(dt.with_timezone(&Utc)));
        }
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
            .map(|naive| Self::Instant(naive.and_utc()))
    }

    /// The instant used for arithmetic. Calendar dates are midnight UTC.
    #[must_use]
    pub fn instant(self) -> DateTime<Utc> {
        match self {
            Self::Date(date) => date.and_time(chrono::NaiveTime::MIN).and_utc(),
            Self::Instant(instant) => instant,
        }
    }

    /// The calendar date shown to the user.
    #[must_use]
    pub fn display_date(self) -> NaiveDate {
        match self {
            Self::Date(date) => date,
            Self::Instant(instant) => instant.with_timezone(&sao_paulo()).date_naive(),
        }
    }
}

fn sao_paulo() -> FixedOffset {
    FixedOffset::west_opt(SAO_PAULO_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Parse text to an instant, if it is a valid ISO-8601 date or date-time.
#[must_use]
pub fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    IsoDate::parse(text).map(IsoDate::instant)
}

/// Format an ISO-8601 value as a pt-BR calendar date (`dd/mm/yyyy`).
#[must_use]
pub fn format_date(text: &str) -> String {
    match IsoDate::parse(text) {
        Some(date) => date.display_date().format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE_LABEL.to_string(),
    }
}

/// Whole days from `reference` until `target`, rounded up.
///
/// A delivery half a day away is 1 day out; one half a day overdue is 0.
/// Returns `None` when `target` does not parse.
#[must_use]
pub fn days_until(target: &str, reference: DateTime<Utc>) -> Option<i64> {
    let target = parse_instant(target)?;
    let ms = target
        .signed_duration_since(reference)
        .num_milliseconds();
    Some(ceil_div(ms, MS_PER_DAY))
}

fn ceil_div(n: i64, d: i64) -> i64 {
    -((-n).div_euclid(d))
}

/// How the ETA tile presents a day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EtaStatus {
    /// Due today or in the past: already delivered or overdue.
    Due,
    /// Within [`SOON_THRESHOLD_DAYS`].
    Soon(i64),
    Later(i64),
    /// The delivery date could not be parsed.
    Unknown,
}

impl EtaStatus {
    #[must_use]
    pub fn classify(days: Option<i64>) -> Self {
        match days {
            None => Self::Unknown,
            Some(d) if d <= 0 => Self::Due,
            Some(d) if d <= SOON_THRESHOLD_DAYS => Self::Soon(d),
            Some(d) => Self::Later(d),
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Due => "Entregue / vencido".to_string(),
            Self::Soon(d) | Self::Later(d) => format!("{d} dias"),
            Self::Unknown => "—".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn date_only_displays_its_own_day() {
        assert_eq!(format_date("2025-09-15"), "15/09/2025");
        assert_eq!(format_date("2026-01-30"), "30/01/2026");
    }

    #[test]
    fn instants_display_in_sao_paulo() {
        // 02:00 UTC is 23:00 the previous day in São Paulo.
        assert_eq!(format_date("2025-12-15T02:00:00Z"), "14/12/2025");
        assert_eq!(format_date("2025-12-15T10:00:00-03:00"), "15/12/2025");
        assert_eq!(format_date("2025-12-15T02:00"), "14/12/2025");
    }

    #[test]
    fn invalid_dates_degrade() {
        assert_eq!(format_date("not a date"), INVALID_DATE_LABEL);
        assert_eq!(format_date("2025-13-40"), INVALID_DATE_LABEL);
        assert_eq!(days_until("", noon(2025, 1, 1)), None);
    }

    #[test]
    fn partial_days_round_up() {
        let reference = noon(2025, 10, 8);
        // Midnight UTC of the next day is 12h away.
        assert_eq!(days_until("2025-10-09", reference), Some(1));
        // Midnight UTC of the same day was 12h ago.
        assert_eq!(days_until("2025-10-08", reference), Some(0));
        assert_eq!(days_until("2025-10-07", reference), Some(-1));
    }

    #[test]
    fn exact_days() {
        let reference = Utc.with_ymd_and_hms(2025, 10, 8, 0, 0, 0).unwrap();
        assert_eq!(days_until("2025-10-18", reference), Some(10));
        assert_eq!(days_until("2025-10-08", reference), Some(0));
    }

    #[test]
    fn offsets_of_twelve_hours() {
        let reference = noon(2025, 3, 3);
        let ahead = (reference + TimeDelta::hours(12)).to_rfc3339();
        let behind = (reference - TimeDelta::hours(12)).to_rfc3339();
        assert_eq!(days_until(&ahead, reference), Some(1));
        assert_eq!(days_until(&behind, reference), Some(0));
    }

    #[test]
    fn eta_classification() {
        assert_eq!(EtaStatus::classify(Some(-3)), EtaStatus::Due);
        assert_eq!(EtaStatus::classify(Some(0)), EtaStatus::Due);
        assert_eq!(EtaStatus::classify(Some(1)), EtaStatus::Soon(1));
        assert_eq!(EtaStatus::classify(Some(15)), EtaStatus::Soon(15));
        assert_eq!(EtaStatus::classify(Some(16)), EtaStatus::Later(16));
        assert_eq!(EtaStatus::classify(None), EtaStatus::Unknown);
    }

    #[test]
    fn delivery_at_todays_midnight_is_due() {
        let midnight = Utc.with_ymd_and_hms(2025, 10, 8, 0, 0, 0).unwrap();
        let status = EtaStatus::classify(days_until("2025-10-08", midnight));
        assert_eq!(status, EtaStatus::Due);
        assert_eq!(status.label(), "Entregue / vencido");
    }

    #[test]
    fn eta_labels() {
        assert_eq!(EtaStatus::Due.label(), "Entregue / vencido");
        assert_eq!(EtaStatus::Soon(3).label(), "3 dias");
        assert_eq!(EtaStatus::Later(108).label(), "108 dias");
        assert_eq!(EtaStatus::Unknown.label(), "—");
    }

    #[test]
    fn ceil_div_signs() {
        assert_eq!(ceil_div(1, 24), 1);
        assert_eq!(ceil_div(-1, 24), 0);
        assert_eq!(ceil_div(-24, 24), -1);
        assert_eq!(ceil_div(-25, 24), -1);
        assert_eq!(ceil_div(0, 24), 0);
    }
}
