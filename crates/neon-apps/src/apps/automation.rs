//! Automation Application
//!
//! Fixed-step pipeline runner. Each timer cycle completes one step while
//! running; progress is reported as a percentage.

use serde::Serialize;

use crate::framework::{AppContext, AppError, AppManifest, NeonApp, AUTOMATION_MANIFEST};

/// Pipeline steps, executed in order
const STEPS: [&str; 6] = [
    "Connecting to service",
    "Authenticating",
    "Fetching records",
    "Processing entries",
    "Generating report",
    "Cleaning up",
];

/// Automation state sent to the shell
#[derive(Clone, Debug, Serialize)]
pub struct AutomationState<'a> {
    pub steps: &'a [&'a str],
    pub completed: usize,
    pub running: bool,
    /// Percentage of completed steps, 0 to 100
    pub progress: usize,
    /// Step currently executing, if any
    pub current: Option<&'a str>,
}

/// Automation application state
#[derive(Default)]
pub struct AutomationApp {
    running: bool,
    completed: usize,
}

impl NeonApp for AutomationApp {
    fn manifest() -> &'static AppManifest {
        &AUTOMATION_MANIFEST
    }

    fn tick(&mut self, _ctx: &mut AppContext) {
        if !self.running {
            return;
        }

        self.completed += 1;
        if self.completed >= STEPS.len() {
            self.completed = STEPS.len();
            self.running = false;
        }
    }

    fn handle_button(&mut self, _ctx: &mut AppContext, name: &str) -> Result<(), AppError> {
        match name {
            "start" => {
                if !self.running && self.completed < STEPS.len() {
                    self.running = true;
                }
            }
            "reset" => {
                self.running = false;
                self.completed = 0;
            }
            _ => {}
        }
        Ok(())
    }

    fn state_json(&self) -> String {
        let state = AutomationState {
            steps: &STEPS,
            completed: self.completed,
            running: self.running,
            progress: self.completed * 100 / STEPS.len(),
            current: if self.running {
                STEPS.get(self.completed).copied()
            } else {
                None
            },
        };
        serde_json::to_string(&state).unwrap_or_default()
    }
}
