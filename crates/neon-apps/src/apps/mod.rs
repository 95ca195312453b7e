//! Neon Applications
//!
//! Each application has its own module containing:
//! - App implementation (`NeonApp` trait impl)
//! - State types serialized to JSON for the shell

pub mod automation;
pub mod calculator;
pub mod clock;
pub mod currency;
pub mod editor;
pub mod music;
pub mod resources;
pub mod tasks;
pub mod users;

// Re-export app types for convenience
pub use automation::AutomationApp;
pub use calculator::CalculatorApp;
pub use clock::ClockApp;
pub use currency::CurrencyApp;
pub use editor::EditorApp;
pub use music::MusicApp;
pub use resources::ResourcesApp;
pub use tasks::TasksApp;
pub use users::UsersApp;

// Re-export state types (for shell/frontend consumption)
pub use automation::AutomationState;
pub use calculator::{CalculatorState, HistoryEntry};
pub use clock::ClockState;
pub use currency::{CurrencyState, FetchStatus};
pub use editor::{EditorState, SaveStatus};
pub use music::{MusicState, TrackInfo};
pub use resources::ResourcesState;
pub use tasks::{Priority, Task, TaskStatus, TasksState};
pub use users::{Role, User, UsersState};
