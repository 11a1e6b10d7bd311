// src/widget/message.rs
use chrono::{DateTime, Local};

/// One entry of the displayed conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub is_user: bool,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::at(text, true, Local::now())
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::at(text, false, Local::now())
    }

    pub fn at(text: impl Into<String>, is_user: bool, timestamp: DateTime<Local>) -> Self {
        Self { text: text.into(), is_user, timestamp }
    }

    pub fn speaker(&self) -> &'static str {
        if self.is_user { "You" } else { "Bot" }
    }

    pub fn time(&self) -> String {
        format_time(&self.timestamp)
    }
}

/// Clock time in 12-hour form, e.g. `2:30 PM`.
pub fn format_time(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_noon_and_afternoon() {
        let noon = Local.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap();
        let afternoon = Local.with_ymd_and_hms(2023, 1, 1, 14, 30, 0).unwrap();
        assert_eq!(format_time(&noon), "12:00 PM");
        assert_eq!(format_time(&afternoon), "2:30 PM");
    }

    #[test]
    fn speaker_labels() {
        assert_eq!(Message::user("hi").speaker(), "You");
        assert_eq!(Message::bot("hello").speaker(), "Bot");
    }
}
