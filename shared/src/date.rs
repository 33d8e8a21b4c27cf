//! Timestamp parsing and locale short-date formatting for result cards.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Locale conventions for the date in a result card's attribution line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateLocale {
    /// `M/D/YYYY`
    #[default]
    EnUs,
    /// `DD/MM/YYYY`
    EnGb,
    /// `DD/MM/YYYY`
    Fr,
    /// `D.M.YYYY`
    De,
    /// `YYYY/M/D`
    ZhCn,
    /// `YYYY/M/D`
    Ja,
}

impl DateLocale {
    /// Resolve a BCP 47 (`en-GB`) or POSIX (`en_GB.UTF-8`) tag.
    ///
    /// Returns `None` for tags with no known convention, including `C` and
    /// `POSIX`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim()
            .replace('_', "-")
            .to_ascii_lowercase();
        let mut parts = tag.split('-');
        let language = parts.next().unwrap_or_default();
        let region = parts.next();

        match (language, region) {
            ("en", Some("gb" | "au" | "nz" | "ie" | "in")) => Some(Self::EnGb),
            ("en", _) => Some(Self::EnUs),
            ("fr", _) => Some(Self::Fr),
            ("de", _) => Some(Self::De),
            ("zh", _) => Some(Self::ZhCn),
            ("ja", _) => Some(Self::Ja),
            _ => None,
        }
    }

    /// Like [`DateLocale::from_tag`] but falls back to `en-US`.
    pub fn from_tag_or_default(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_default()
    }

    /// Canonical BCP 47 tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::Fr => "fr-FR",
            Self::De => "de-DE",
            Self::ZhCn => "zh-CN",
            Self::Ja => "ja-JP",
        }
    }

    /// Format a calendar date the way this locale writes short dates.
    pub fn format(self, date: NaiveDate) -> String {
        let pattern = match self {
            Self::EnUs => "%-m/%-d/%Y",
            Self::EnGb | Self::Fr => "%d/%m/%Y",
            Self::De => "%-d.%-m.%Y",
            Self::ZhCn | Self::Ja => "%Y/%-m/%-d",
        };
        date.format(pattern).to_string()
    }
}

impl fmt::Display for DateLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DateLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| format!("unsupported locale `{s}`"))
    }
}

/// Parse the calendar date out of a post timestamp.
///
/// Accepts RFC 3339, naive ISO datetimes (what the server emits) and plain
/// `YYYY-MM-DD` dates. The date is taken as written, without timezone
/// conversion.
pub fn parse_post_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(datetime.date());
        }
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok();
    if date.is_none() {
        tracing::debug!(raw, "unparseable post date");
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_resolve_to_locales() {
        assert_eq!(DateLocale::from_tag("en-US"), Some(DateLocale::EnUs));
        assert_eq!(DateLocale::from_tag("en_GB.UTF-8"), Some(DateLocale::EnGb));
        assert_eq!(DateLocale::from_tag("de"), Some(DateLocale::De));
        assert_eq!(DateLocale::from_tag("zh-Hans-CN"), Some(DateLocale::ZhCn));
        assert_eq!(DateLocale::from_tag("C"), None);
        assert_eq!(DateLocale::from_tag_or_default("POSIX"), DateLocale::EnUs);
        assert!("xx-YY".parse::<DateLocale>().is_err());
    }

    #[test]
    fn server_timestamps_parse() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5);
        assert_eq!(parse_post_date("2024-03-05T10:15:30.123456"), expected);
        assert_eq!(parse_post_date("2024-03-05T10:15:30"), expected);
        assert_eq!(parse_post_date("2024-03-05 10:15:30"), expected);
        assert_eq!(parse_post_date("2024-03-05T23:30:00-08:00"), expected);
        assert_eq!(parse_post_date("2024-03-05"), expected);
        assert_eq!(parse_post_date("yesterday"), None);
    }

    #[test]
    fn dates_follow_locale_order() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date");
        assert_eq!(DateLocale::EnUs.format(date), "3/5/2024");
        assert_eq!(DateLocale::EnGb.format(date), "05/03/2024");
        assert_eq!(DateLocale::De.format(date), "5.3.2024");
        assert_eq!(DateLocale::ZhCn.format(date), "2024/3/5");
    }
}
