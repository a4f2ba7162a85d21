use chrono::Utc;
use maud::{html, Markup, Render};

use crate::prelude::DateTime;

const DEFAULT_LABEL: &str = "just now";

/// Renders a timestamp as a relative age, e.g. "3 days ago".
pub struct TimeSince(pub DateTime);

impl Render for TimeSince {
    fn render(&self) -> Markup {
        html! {
            time datetime=(self.0.to_rfc3339()) title=(self.0.to_string()) {
                (time_since(self.0, Utc::now(), DEFAULT_LABEL))
            }
        }
    }
}

/// Formats the difference between `then` and `now` using the largest
/// applicable unit, pluralized unless the magnitude is exactly 1.
///
/// Future timestamps clamp to the default label instead of producing a
/// negative period.
pub fn time_since(then: DateTime, now: DateTime, default: &str) -> String {
    let diff = now - then;
    if diff < chrono::Duration::zero() {
        return default.to_string();
    }

    let days = diff.num_days();
    let seconds = diff.num_seconds() - days * 86400;

    let periods = [
        (days / 365, "year"),
        (days / 30, "month"),
        (days / 7, "week"),
        (days, "day"),
        (seconds / 3600, "hour"),
        (seconds / 60, "minute"),
        (seconds, "second"),
    ];

    for (magnitude, unit) in periods {
        if magnitude != 0 {
            let suffix = if magnitude == 1 { "" } else { "s" };
            return format!("{magnitude} {unit}{suffix} ago");
        }
    }

    default.to_string()
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn now() -> DateTime {
        chrono::Utc::now()
    }

    #[test]
    fn ninety_days_is_three_months() {
        let now = now();
        assert_eq!(time_since(now - Duration::days(90), now, "just now"), "3 months ago");
    }

    #[test]
    fn ten_seconds_ago() {
        let now = now();
        assert_eq!(time_since(now - Duration::seconds(10), now, "just now"), "10 seconds ago");
    }

    #[test]
    fn equal_instants_yield_default_label() {
        let now = now();
        assert_eq!(time_since(now, now, "just now"), "just now");
    }

    #[test]
    fn one_day_is_singular() {
        let now = now();
        assert_eq!(time_since(now - Duration::days(1), now, "just now"), "1 day ago");
    }

    #[test]
    fn two_weeks_ago() {
        let now = now();
        assert_eq!(time_since(now - Duration::days(15), now, "just now"), "2 weeks ago");
    }

    #[test]
    fn future_timestamp_clamps_to_default_label() {
        let now = now();
        assert_eq!(time_since(now + Duration::hours(2), now, "just now"), "just now");
    }
}
