//! Process-wide authentication state consumed by every screen.

use webblog_api_types::User;

/// Read-only snapshot of the signed-in user, if any.
///
/// Ownership checks here are advisory; the backend enforces the real policy.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    user: Option<User>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.role.is_admin())
    }

    /// Owner or admin; anonymous visitors never qualify.
    pub fn can_modify(&self, author_id: i64) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.id == author_id || user.role.is_admin())
    }

    pub fn logout(&mut self) {
        self.user = None;
    }
}
