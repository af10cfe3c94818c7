use super::record::TaskRecord;
use chrono::NaiveDateTime;
use fancy_regex::Regex;
use std::sync::LazyLock;

// Worker logs timestamp every line like [2012-10-16 16:34:08,087: INFO/MainProcess]
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})").expect("valid regex literal")
});

// Completion lines end like "succeeded in 11.5902109146s: None"
static DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" in (\d+)\.\d+s").expect("valid regex literal"));

/// Extract the first `YYYY-MM-DD HH:MM:SS` substring as a naive datetime.
///
/// Fractional seconds after the match (the `,087` tail) are ignored; the
/// result keeps second precision only.
pub fn extract_timestamp(line: &str) -> Option<NaiveDateTime> {
    if let Ok(Some(caps)) = TIMESTAMP.captures(line) {
        return NaiveDateTime::parse_from_str(&caps[1], "%Y-%m-%d %H:%M:%S").ok();
    }
    None
}

/// Extract the integer seconds from the first ` in <float>s` substring.
///
/// Truncates: ` in 11.3482778072s` yields 11.
pub fn extract_duration(line: &str) -> Option<u64> {
    if let Ok(Some(caps)) = DURATION.captures(line) {
        return caps[1].parse().ok();
    }
    None
}

/// Run both extractions over one line. Never fails; a miss on either
/// pattern leaves the corresponding field absent.
pub fn parse_record(line: &str) -> TaskRecord {
    TaskRecord {
        timestamp: extract_timestamp(line),
        duration_secs: extract_duration(line),
    }
}
