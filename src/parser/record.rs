use chrono::{NaiveDateTime, Timelike};

/// One task-completion event extracted from a single log line.
///
/// Either field is `None` when its pattern did not match anywhere in the
/// line. A pattern miss is not an error; the record is still produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRecord {
    /// Wall-clock completion time, second precision, no timezone.
    pub timestamp: Option<NaiveDateTime>,
    /// Whole seconds the task ran for, truncated from the logged float.
    pub duration_secs: Option<u64>,
}

impl TaskRecord {
    /// Hour-of-day (0-23) of the completion time, if one was parsed.
    pub fn hour(&self) -> Option<u32> {
        self.timestamp.map(|ts| ts.hour())
    }
}
