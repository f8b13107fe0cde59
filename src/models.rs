//! Journal Models
//!
//! Themes, tasks and the transient UI state that goes with them.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::status::Status;

/// Storage and `<input type="date">` format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A weekly tracking unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub title: String,
    /// First day of the theme; when set, day headings are derived from it
    #[serde(default, with = "date_format")]
    pub date: Option<NaiveDate>,
    /// Free-text day labels, `"top\nbottom"`
    pub days: Vec<String>,
    pub tasks: Vec<Task>,
}

impl Theme {
    pub fn new(date: Option<NaiveDate>, day_count: usize) -> Self {
        Self {
            title: String::new(),
            date,
            days: vec![String::new(); day_count],
            tasks: Vec::new(),
        }
    }

    /// Heading for a day column as (top, bottom) lines
    pub fn day_heading(&self, day: usize) -> (String, String) {
        match self.date {
            Some(date) => date_heading(date, day),
            None => {
                let label = self.days.get(day).map(String::as_str).unwrap_or("");
                (label_top(label).to_string(), label_bottom(label).to_string())
            }
        }
    }
}

/// A trackable habit with one status per day column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub days: Vec<Status>,
}

impl Task {
    pub fn new(day_count: usize) -> Self {
        Self {
            title: String::new(),
            days: vec![Status::Blank; day_count],
        }
    }

    /// Statuses sized to `len` columns for display; the task itself is untouched
    pub fn aligned_days(&self, len: usize) -> Vec<Status> {
        let mut days: Vec<Status> = self.days.iter().copied().take(len).collect();
        days.resize(len, Status::Blank);
        days
    }
}

/// What the pointer is over, for cross-highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverTarget {
    pub theme: usize,
    pub task: Option<usize>,
    pub day: Option<usize>,
}

impl HoverTarget {
    pub fn task(theme: usize, task: usize) -> Self {
        Self { theme, task: Some(task), day: None }
    }

    pub fn day(theme: usize, day: usize) -> Self {
        Self { theme, task: None, day: Some(day) }
    }

    pub fn matches_day(&self, theme: usize, day: usize) -> bool {
        self.theme == theme && self.day == Some(day)
    }

    pub fn matches_task(&self, theme: usize, task: usize) -> bool {
        self.theme == theme && self.task == Some(task)
    }
}

/// Transient application state (never persisted)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppState {
    pub demo: bool,
    pub hover: Option<HoverTarget>,
}

// ========================
// Day labels
// ========================

pub fn label_top(label: &str) -> &str {
    label.split('\n').next().unwrap_or("")
}

pub fn label_bottom(label: &str) -> &str {
    label.split_once('\n').map(|(_, bottom)| bottom).unwrap_or("")
}

pub fn compose_label(top: &str, bottom: &str) -> String {
    format!("{}\n{}", top, bottom)
}

/// Narrow weekday letter and day-of-month for `start + offset` days
pub fn date_heading(start: NaiveDate, offset: usize) -> (String, String) {
    match start.checked_add_days(Days::new(offset as u64)) {
        Some(date) => (weekday_letter(date.weekday()).to_string(), date.day().to_string()),
        None => (String::new(), String::new()),
    }
}

fn weekday_letter(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "M",
        Weekday::Tue | Weekday::Thu => "T",
        Weekday::Wed => "W",
        Weekday::Fri => "F",
        Weekday::Sat | Weekday::Sun => "S",
    }
}

// ========================
// Dates
// ========================

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (older saves).
/// Timestamps were taken from the local clock, so they map to the
/// local calendar date, not the UTC one.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Local).date_naive())
    })
}

/// en-US short date, e.g. `5/6/2024`
pub fn display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

mod date_format {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{parse_date, DATE_FORMAT};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse_date(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid date {:?}", raw))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_theme_has_blank_labels() {
        let theme = Theme::new(None, 7);
        assert_eq!(theme.days, vec![String::new(); 7]);
        assert!(theme.tasks.is_empty());
        assert!(theme.title.is_empty());
    }

    #[test]
    fn test_aligned_days_pads_and_truncates() {
        let task = Task { title: "Run".into(), days: vec![Status::Checked, Status::Lower] };
        assert_eq!(task.aligned_days(4), vec![Status::Checked, Status::Lower, Status::Blank, Status::Blank]);
        assert_eq!(task.aligned_days(1), vec![Status::Checked]);
        assert_eq!(task.days.len(), 2);
    }

    #[test]
    fn test_label_parts() {
        assert_eq!(label_top("M\n6"), "M");
        assert_eq!(label_bottom("M\n6"), "6");
        assert_eq!(label_top(""), "");
        assert_eq!(label_bottom("only"), "");
        assert_eq!(compose_label("T", "7"), "T\n7");
    }

    #[test]
    fn test_dated_headings_follow_calendar() {
        // 2024-05-06 is a Monday
        let mut theme = Theme::new(Some(ymd(2024, 5, 6)), 7);
        theme.days[0] = compose_label("X", "99");
        assert_eq!(theme.day_heading(0), ("M".to_string(), "6".to_string()));
        assert_eq!(theme.day_heading(3), ("T".to_string(), "9".to_string()));
        assert_eq!(theme.day_heading(6), ("S".to_string(), "12".to_string()));
        // Past the month end
        assert_eq!(date_heading(ymd(2024, 5, 30), 2), ("S".to_string(), "1".to_string()));
    }

    #[test]
    fn test_undated_headings_use_labels() {
        let mut theme = Theme::new(None, 2);
        theme.days[1] = compose_label("W", "3");
        assert_eq!(theme.day_heading(1), ("W".to_string(), "3".to_string()));
        assert_eq!(theme.day_heading(0), (String::new(), String::new()));
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2024-05-06"), Some(ymd(2024, 5, 6)));
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(display_date(ymd(2024, 5, 6)), "5/6/2024");
    }

    #[test]
    fn test_timestamps_use_local_calendar_date() {
        use chrono::TimeZone;

        let instant = ymd(2024, 5, 5).and_hms_opt(22, 0, 0).unwrap();
        let expected = Local.from_utc_datetime(&instant).date_naive();
        assert_eq!(parse_date("2024-05-05T22:00:00.000Z"), Some(expected));
        assert_eq!(parse_date("2024-05-06T00:00:00+02:00"), Some(expected));
        // Every real offset puts 22:00 UTC on the 5th or the 6th
        assert!(expected == ymd(2024, 5, 5) || expected == ymd(2024, 5, 6));
    }

    #[test]
    fn test_theme_date_serde() {
        let theme = Theme::new(Some(ymd(2023, 12, 31)), 0);
        let json = serde_json::to_string(&theme).unwrap();
        assert!(json.contains("\"date\":\"2023-12-31\""));

        let absent: Theme = serde_json::from_str(r#"{"title":"","days":[],"tasks":[]}"#).unwrap();
        assert_eq!(absent.date, None);
        let empty: Theme = serde_json::from_str(r#"{"title":"","date":"","days":[],"tasks":[]}"#).unwrap();
        assert_eq!(empty.date, None);
        assert!(serde_json::from_str::<Theme>(r#"{"title":"","date":"soon","days":[],"tasks":[]}"#).is_err());
    }

    #[test]
    fn test_hover_matching() {
        let hover = HoverTarget::day(1, 2);
        assert!(hover.matches_day(1, 2));
        assert!(!hover.matches_day(0, 2));
        assert!(!hover.matches_task(1, 2));

        let hover = HoverTarget::task(0, 1);
        assert!(hover.matches_task(0, 1));
        assert!(!hover.matches_day(0, 1));
    }
}
