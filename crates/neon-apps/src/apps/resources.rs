//! Resources Application
//!
//! Panel of resource switches with a cap on how many can be enabled at
//! once. Enabling a switch past the cap turns off the least recently
//! enabled one.

use serde::Serialize;

use crate::framework::{AppContext, AppError, AppManifest, NeonApp, RESOURCES_MANIFEST};

/// Maximum number of switches enabled at the same time
const MAX_ENABLED: usize = 2;

const SWITCH_NAMES: [&str; 3] = ["Turbo CPU", "RAM Cache", "GPU Boost"];

#[derive(Clone, Debug, Serialize)]
struct Switch {
    name: &'static str,
    on: bool,
    #[serde(skip)]
    enabled_seq: u64,
}

/// Resources state sent to the shell
#[derive(Clone, Debug, Serialize)]
pub struct ResourcesState {
    switches: Vec<Switch>,
    enabled_count: usize,
}

/// Resources application state
pub struct ResourcesApp {
    switches: Vec<Switch>,
    next_seq: u64,
}

impl Default for ResourcesApp {
    fn default() -> Self {
        Self {
            switches: SWITCH_NAMES
                .iter()
                .map(|name| Switch {
                    name,
                    on: false,
                    enabled_seq: 0,
                })
                .collect(),
            next_seq: 1,
        }
    }
}

impl ResourcesApp {
    fn enabled_count(&self) -> usize {
        self.switches.iter().filter(|s| s.on).count()
    }

    fn toggle(&mut self, index: usize) {
        let Some(switch) = self.switches.get(index) else {
            return;
        };

        if switch.on {
            self.switches[index].on = false;
            return;
        }

        // Evict the least recently enabled switch to stay under the cap
        if self.enabled_count() >= MAX_ENABLED {
            if let Some(victim) = self
                .switches
                .iter_mut()
                .filter(|s| s.on)
                .min_by_key(|s| s.enabled_seq)
            {
                victim.on = false;
            }
        }

        self.switches[index].on = true;
        self.switches[index].enabled_seq = self.next_seq;
        self.next_seq += 1;
    }
}

impl NeonApp for ResourcesApp {
    fn manifest() -> &'static AppManifest {
        &RESOURCES_MANIFEST
    }

    fn handle_button(&mut self, _ctx: &mut AppContext, name: &str) -> Result<(), AppError> {
        if let Some(index) = name.strip_prefix("toggle:").and_then(|p| p.parse().ok()) {
            self.toggle(index);
        }
        Ok(())
    }

    fn state_json(&self) -> String {
        let state = ResourcesState {
            switches: self.switches.clone(),
            enabled_count: self.enabled_count(),
        };
        serde_json::to_string(&state).unwrap_or_default()
    }
}
