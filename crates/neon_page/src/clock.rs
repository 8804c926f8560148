//! Clock text and greeting

use chrono::Timelike;

/// Zero-padded 24h clock text
pub fn clock_text<T: Timelike>(now: &T) -> String {
    format!("{:02}:{:02}", now.hour(), now.minute())
}

/// Greeting line for the hour of day
pub fn greeting<T: Timelike>(now: &T) -> &'static str {
    match now.hour() {
        0..=5 => "Working late? Here's your command center.",
        6..=11 => "Good morning — ready for launch.",
        12..=17 => "Good afternoon — stay focused.",
        _ => "Good evening — systems nominal.",
    }
}

/// Emits a fresh clock/greeting pair whenever the displayed minute changes.
/// Call it as often as you like; it answers at most once per minute.
#[derive(Default)]
pub struct ClockTicker {
    shown: Option<(u32, u32)>,
}

impl ClockTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick<T: Timelike>(&mut self, now: &T) -> Option<(String, &'static str)> {
        let stamp = (now.hour(), now.minute());
        if self.shown == Some(stamp) {
            return None;
        }
        self.shown = Some(stamp);
        Some((clock_text(now), greeting(now)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_clock_text_zero_padded() {
        assert_eq!(clock_text(&at(9, 5)), "09:05");
        assert_eq!(clock_text(&at(23, 59)), "23:59");
    }

    #[test]
    fn test_greeting_thresholds() {
        assert_eq!(greeting(&at(0, 0)), "Working late? Here's your command center.");
        assert_eq!(greeting(&at(5, 59)), "Working late? Here's your command center.");
        assert_eq!(greeting(&at(6, 0)), "Good morning — ready for launch.");
        assert_eq!(greeting(&at(11, 59)), "Good morning — ready for launch.");
        assert_eq!(greeting(&at(12, 0)), "Good afternoon — stay focused.");
        assert_eq!(greeting(&at(17, 59)), "Good afternoon — stay focused.");
        assert_eq!(greeting(&at(18, 0)), "Good evening — systems nominal.");
        assert_eq!(greeting(&at(23, 30)), "Good evening — systems nominal.");
    }

    #[test]
    fn test_ticker_fires_once_per_minute() {
        let mut ticker = ClockTicker::new();
        assert!(ticker.tick(&at(10, 30)).is_some());
        assert!(ticker.tick(&at(10, 30)).is_none());
        assert!(ticker.tick(&at(10, 31)).is_some());
    }

    #[test]
    fn test_ticker_returns_both_parts() {
        let mut ticker = ClockTicker::new();
        let (clock, text) = ticker.tick(&at(7, 0)).unwrap();
        assert_eq!(clock, "07:00");
        assert!(text.starts_with("Good morning"));
    }
}
