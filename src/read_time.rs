const AVERAGE_READING_SPEED_WPM: f64 = 200.0;

/// Converts a word count into an hours/minutes phrase at a fixed 200 words
/// per minute. Present segments are collected and joined with " and "; when
/// neither segment survives rounding the phrase is "Less than a minute".
pub fn estimate(word_count: usize) -> String {
    let minutes = word_count as f64 / AVERAGE_READING_SPEED_WPM;
    let hours = (minutes / 60.0).floor() as u64;
    let remaining_minutes = (minutes % 60.0).round() as u64;

    let mut segments = Vec::new();
    if hours > 0 {
        segments.push(format!("{hours} {}", pluralize(hours, "hour")));
    }
    if remaining_minutes > 0 {
        segments.push(format!(
            "{remaining_minutes} {}",
            pluralize(remaining_minutes, "minute")
        ));
    }

    if segments.is_empty() {
        "Less than a minute".to_owned()
    } else {
        segments.join(" and ")
    }
}

fn pluralize(value: u64, unit: &str) -> String {
    if value == 1 {
        unit.to_owned()
    } else {
        format!("{unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_text_reads_in_less_than_a_minute() {
        assert_eq!(estimate(0), "Less than a minute");
        assert_eq!(estimate(30), "Less than a minute");
    }

    #[test]
    fn minutes_only() {
        assert_eq!(estimate(450), "2 minutes");
        assert_eq!(estimate(200), "1 minute");
    }

    #[test]
    fn hours_and_minutes() {
        // 27_000 words / 200 wpm = 135 minutes.
        assert_eq!(estimate(27_000), "2 hours and 15 minutes");
    }

    #[test]
    fn exact_hour_omits_minutes() {
        // 12_000 words = 60 minutes exactly.
        assert_eq!(estimate(12_000), "1 hour");
        assert_eq!(estimate(24_000), "2 hours");
    }

    #[test]
    fn remainder_can_round_up_to_sixty() {
        // 11_960 words = 59.8 minutes; floor gives 0 hours, round gives 60.
        assert_eq!(estimate(11_960), "60 minutes");
    }
}
