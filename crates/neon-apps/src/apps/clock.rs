//! Clock Application
//!
//! Displays wall-clock time as zero-padded HH:MM, refreshed on every tick.

use serde::Serialize;

use crate::framework::{AppContext, AppError, AppManifest, NeonApp, CLOCK_MANIFEST};

/// Clock state sent to the shell
#[derive(Clone, Debug, Serialize)]
pub struct ClockState<'a> {
    /// Formatted time, e.g. "09:41"
    pub time: &'a str,
}

/// Clock application state
#[derive(Default)]
pub struct ClockApp {
    time: String,
}

/// Format milliseconds since the Unix epoch as HH:MM in UTC
fn format_hhmm(wallclock_ms: u64) -> String {
    let minutes_of_day = (wallclock_ms / 60_000) % (24 * 60);
    format!("{:02}:{:02}", minutes_of_day / 60, minutes_of_day % 60)
}

impl NeonApp for ClockApp {
    fn manifest() -> &'static AppManifest {
        &CLOCK_MANIFEST
    }

    fn init(&mut self, ctx: &mut AppContext) -> Result<(), AppError> {
        self.time = format_hhmm(ctx.wallclock_ms);
        Ok(())
    }

    fn tick(&mut self, ctx: &mut AppContext) {
        self.time = format_hhmm(ctx.wallclock_ms);
    }

    fn handle_button(&mut self, _ctx: &mut AppContext, _name: &str) -> Result<(), AppError> {
        Ok(())
    }

    fn state_json(&self) -> String {
        let state = ClockState { time: &self.time };
        serde_json::to_string(&state).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_format_hhmm() {
        assert_eq!(format_hhmm(0), "00:00");
        // 09:41 UTC
        assert_eq!(format_hhmm(9 * 3_600_000 + 41 * 60_000), "09:41");
        // Wraps at midnight
        assert_eq!(format_hhmm(24 * 3_600_000 + 60_000), "00:01");
    }

    #[test]
    fn test_tick_updates_time() {
        let mut app = ClockApp::default();
        let mut storage = MemoryStorage::new();

        let mut ctx = AppContext::new(13 * 3_600_000 + 5 * 60_000, &mut storage);
        app.init(&mut ctx).unwrap();
        assert!(app.state_json().contains("13:05"));

        let mut ctx = AppContext::new(13 * 3_600_000 + 6 * 60_000, &mut storage);
        app.tick(&mut ctx);
        assert!(app.state_json().contains("13:06"));
    }
}
