//! Tasks Application
//!
//! Kanban board with three fixed columns (todo, doing, done). Tasks are
//! persisted to storage as JSON under a single key.

use serde::{Deserialize, Serialize};

use crate::framework::{AppContext, AppError, AppManifest, NeonApp, TASKS_MANIFEST};

/// Storage key for the persisted task list
const TASKS_KEY: &str = "neon_tasks";

/// Board column a task lives in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    Doing,
    Done,
}

impl TaskStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(TaskStatus::Todo),
            "doing" => Some(TaskStatus::Doing),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

/// Task priority
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

/// A single board entry
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub priority: Priority,
    pub status: TaskStatus,
}

/// Tasks state sent to the shell
#[derive(Clone, Debug, Serialize)]
pub struct TasksState<'a> {
    pub tasks: &'a [Task],
    pub draft_title: &'a str,
    pub draft_priority: Priority,
}

/// Tasks application state
#[derive(Default)]
pub struct TasksApp {
    tasks: Vec<Task>,
    draft_title: String,
    draft_priority: Priority,
}

impl TasksApp {
    fn save(&self, ctx: &mut AppContext) {
        if let Ok(json) = serde_json::to_string(&self.tasks) {
            ctx.storage.set(TASKS_KEY, &json);
        }
    }

    /// Allocate a new task id from the wall clock, bumping past collisions
    fn next_id(&self, wallclock_ms: u64) -> u64 {
        let mut id = wallclock_ms;
        while self.tasks.iter().any(|t| t.id == id) {
            id += 1;
        }
        id
    }

    fn handle_add(&mut self, ctx: &mut AppContext) {
        let title = self.draft_title.trim();
        if title.is_empty() {
            return;
        }

        self.tasks.push(Task {
            id: self.next_id(ctx.wallclock_ms),
            title: title.to_string(),
            priority: self.draft_priority,
            status: TaskStatus::Todo,
        });
        self.draft_title.clear();
        self.draft_priority = Priority::default();
        self.save(ctx);
    }

    fn handle_move(&mut self, ctx: &mut AppContext, id: u64, status: TaskStatus) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.status = status;
            self.save(ctx);
        }
    }

    fn handle_delete(&mut self, ctx: &mut AppContext, id: u64) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.save(ctx);
        }
    }
}

impl NeonApp for TasksApp {
    fn manifest() -> &'static AppManifest {
        &TASKS_MANIFEST
    }

    fn init(&mut self, ctx: &mut AppContext) -> Result<(), AppError> {
        if let Some(json) = ctx.storage.get(TASKS_KEY) {
            self.tasks = serde_json::from_str(&json)
                .map_err(|e| AppError::InitFailed(format!("corrupt task list: {}", e)))?;
        }
        Ok(())
    }

    fn handle_button(&mut self, ctx: &mut AppContext, name: &str) -> Result<(), AppError> {
        let mut parts = name.split(':');
        match parts.next() {
            Some("add") => self.handle_add(ctx),
            Some("move") => {
                let id = parts.next().and_then(|p| p.parse().ok());
                let status = parts.next().and_then(TaskStatus::parse);
                if let (Some(id), Some(status)) = (id, status) {
                    self.handle_move(ctx, id, status);
                }
            }
            Some("delete") => {
                if let Some(id) = parts.next().and_then(|p| p.parse().ok()) {
                    self.handle_delete(ctx, id);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_text(&mut self, _ctx: &mut AppContext, field: &str, value: &str) -> Result<(), AppError> {
        match field {
            "title" => self.draft_title = value.to_string(),
            "priority" => {
                self.draft_priority = Priority::parse(value).ok_or(AppError::InvalidInput {
                    field: "priority",
                    reason: format!("unknown priority '{}'", value),
                })?;
            }
            _ => {}
        }
        Ok(())
    }

    fn state_json(&self) -> String {
        let state = TasksState {
            tasks: &self.tasks,
            draft_title: &self.draft_title,
            draft_priority: self.draft_priority,
        };
        serde_json::to_string(&state).unwrap_or_default()
    }
}
