//! Users Application
//!
//! User accounts with login, registration, and deletion. Accounts are
//! persisted to storage; a default administrator is seeded on first run.
//! Passwords never leave the app in state snapshots.

use serde::{Deserialize, Serialize};

use crate::framework::{AppContext, AppError, AppManifest, NeonApp, USERS_MANIFEST};

/// Storage key for the persisted account list
const USERS_KEY: &str = "neon_users";

/// Account role
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// A stored account, including the password
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub password: String,
    pub display_name: String,
    pub role: Role,
}

/// Account projection sent to the shell, password omitted
#[derive(Clone, Debug, Serialize)]
pub struct UserView<'a> {
    pub id: u64,
    pub username: &'a str,
    pub display_name: &'a str,
    pub role: Role,
}

/// Users state sent to the shell
#[derive(Clone, Debug, Serialize)]
pub struct UsersState<'a> {
    pub users: Vec<UserView<'a>>,
    pub logged_in: Option<UserView<'a>>,
    pub status: &'a str,
}

/// Users application state
#[derive(Default)]
pub struct UsersApp {
    users: Vec<User>,
    logged_in: Option<u64>,
    status: String,
    draft_username: String,
    draft_password: String,
    draft_display_name: String,
}

fn view(user: &User) -> UserView<'_> {
    UserView {
        id: user.id,
        username: &user.username,
        display_name: &user.display_name,
        role: user.role,
    }
}

impl UsersApp {
    fn save(&self, ctx: &mut AppContext) {
        if let Ok(json) = serde_json::to_string(&self.users) {
            ctx.storage.set(USERS_KEY, &json);
        }
    }

    fn handle_login(&mut self) {
        let found = self
            .users
            .iter()
            .find(|u| u.username == self.draft_username && u.password == self.draft_password);

        match found {
            Some(user) => {
                self.logged_in = Some(user.id);
                self.status.clear();
                self.draft_password.clear();
            }
            None => {
                self.status = String::from("Invalid credentials");
            }
        }
    }

    fn handle_register(&mut self, ctx: &mut AppContext) {
        let username = self.draft_username.trim().to_string();
        let password = self.draft_password.trim().to_string();
        let display_name = self.draft_display_name.trim().to_string();

        if username.is_empty() || password.is_empty() || display_name.is_empty() {
            self.status = String::from("All fields are required");
            return;
        }

        if self.users.iter().any(|u| u.username == username) {
            self.status = String::from("Username already exists");
            return;
        }

        let id = self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        self.users.push(User {
            id,
            username,
            password,
            display_name,
            role: Role::User,
        });
        self.status = String::from("Account created");
        self.draft_username.clear();
        self.draft_password.clear();
        self.draft_display_name.clear();
        self.save(ctx);
    }

    fn handle_delete(&mut self, ctx: &mut AppContext, id: u64) {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        if self.users.len() == before {
            return;
        }

        if self.logged_in == Some(id) {
            self.logged_in = None;
        }
        self.save(ctx);
    }
}

impl NeonApp for UsersApp {
    fn manifest() -> &'static AppManifest {
        &USERS_MANIFEST
    }

    fn init(&mut self, ctx: &mut AppContext) -> Result<(), AppError> {
        if let Some(json) = ctx.storage.get(USERS_KEY) {
            self.users = serde_json::from_str(&json)
                .map_err(|e| AppError::InitFailed(format!("corrupt user list: {}", e)))?;
        }

        // Seed the default administrator on first run
        if self.users.is_empty() {
            self.users.push(User {
                id: 1,
                username: String::from("admin"),
                password: String::from("admin"),
                display_name: String::from("Administrador"),
                role: Role::Admin,
            });
            self.save(ctx);
        }

        Ok(())
    }

    fn handle_button(&mut self, ctx: &mut AppContext, name: &str) -> Result<(), AppError> {
        let mut parts = name.split(':');
        match parts.next() {
            Some("login") => self.handle_login(),
            Some("logout") => {
                self.logged_in = None;
                self.status.clear();
            }
            Some("register") => self.handle_register(ctx),
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
            "username" => self.draft_username = value.to_string(),
            "password" => self.draft_password = value.to_string(),
            "display_name" => self.draft_display_name = value.to_string(),
            _ => {}
        }
        Ok(())
    }

    fn state_json(&self) -> String {
        let state = UsersState {
            users: self.users.iter().map(view).collect(),
            logged_in: self
                .logged_in
                .and_then(|id| self.users.iter().find(|u| u.id == id))
                .map(view),
            status: &self.status,
        };
        serde_json::to_string(&state).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, Storage};

    fn init_app(storage: &mut MemoryStorage) -> UsersApp {
        let mut app = UsersApp::default();
        let mut ctx = AppContext::new(0, storage);
        app.init(&mut ctx).unwrap();
        app
    }

    #[test]
    fn test_seeds_default_admin() {
        let mut storage = MemoryStorage::new();
        let app = init_app(&mut storage);

        assert_eq!(app.users.len(), 1);
        assert_eq!(app.users[0].username, "admin");
        assert_eq!(app.users[0].role, Role::Admin);
        assert!(storage.get(USERS_KEY).is_some());
    }

    #[test]
    fn test_login_success_and_failure() {
        let mut storage = MemoryStorage::new();
        let mut app = init_app(&mut storage);
        let mut ctx = AppContext::new(0, &mut storage);

        app.handle_text(&mut ctx, "username", "admin").unwrap();
        app.handle_text(&mut ctx, "password", "wrong").unwrap();
        app.handle_button(&mut ctx, "login").unwrap();
        assert!(app.logged_in.is_none());
        assert_eq!(app.status, "Invalid credentials");

        app.handle_text(&mut ctx, "password", "admin").unwrap();
        app.handle_button(&mut ctx, "login").unwrap();
        assert_eq!(app.logged_in, Some(1));
        assert!(app.status.is_empty());
    }

    #[test]
    fn test_register_validation() {
        let mut storage = MemoryStorage::new();
        let mut app = init_app(&mut storage);
        let mut ctx = AppContext::new(0, &mut storage);

        app.handle_button(&mut ctx, "register").unwrap();
        assert_eq!(app.status, "All fields are required");

        app.handle_text(&mut ctx, "username", "admin").unwrap();
        app.handle_text(&mut ctx, "password", "pw").unwrap();
        app.handle_text(&mut ctx, "display_name", "Someone").unwrap();
        app.handle_button(&mut ctx, "register").unwrap();
        assert_eq!(app.status, "Username already exists");

        app.handle_text(&mut ctx, "username", "maria").unwrap();
        app.handle_text(&mut ctx, "password", "pw").unwrap();
        app.handle_button(&mut ctx, "register").unwrap();
        assert_eq!(app.status, "Account created");
        assert_eq!(app.users.len(), 2);
        assert_eq!(app.users[1].id, 2);
        assert_eq!(app.users[1].role, Role::User);
    }

    #[test]
    fn test_delete_logs_out_deleted_user() {
        let mut storage = MemoryStorage::new();
        let mut app = init_app(&mut storage);
        let mut ctx = AppContext::new(0, &mut storage);

        app.handle_text(&mut ctx, "username", "admin").unwrap();
        app.handle_text(&mut ctx, "password", "admin").unwrap();
        app.handle_button(&mut ctx, "login").unwrap();
        assert_eq!(app.logged_in, Some(1));

        app.handle_button(&mut ctx, "delete:1").unwrap();
        assert!(app.logged_in.is_none());
        assert!(app.users.is_empty());
    }

    #[test]
    fn test_state_excludes_passwords() {
        let mut storage = MemoryStorage::new();
        let app = init_app(&mut storage);

        let json = app.state_json();
        assert!(json.contains("\"username\":\"admin\""));
        assert!(!json.contains("password"));
    }
}
