//! Session store: mock sign-in for the admin area.
//!
//! There is exactly one accepted credential pair (from [`AuthSettings`]).
//! `register` accepts anything. The signed-in identity is remembered in an
//! external [`SessionCache`] so that it survives a restart until the entry
//! expires.
//!
//! None of the operations surface errors. Cache failures are logged and the
//! in-memory state change still happens.

use casems_core::auth::{AuthState, PasswordResetError, SessionCache, validate_new_password};
use casems_core::config::AuthSettings;
use casems_core::notification::{Notification, Notifier};
use casems_core::user::User;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Holds at most one authenticated identity.
///
/// `login` and `register` wait out a simulated round trip before touching
/// state, so when two calls overlap the one that *finishes* last decides
/// the final identity. Calls cannot be cancelled.
pub struct SessionStore {
    settings: AuthSettings,
    cache: Arc<dyn SessionCache>,
    notifier: Arc<dyn Notifier>,
    identity: RwLock<Option<User>>,
}

impl SessionStore {
    /// Creates an anonymous store. Call [`SessionStore::restore`] to pick up
    /// a remembered identity.
    pub fn new(
        settings: AuthSettings,
        cache: Arc<dyn SessionCache>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            settings,
            cache,
            notifier,
            identity: RwLock::new(None),
        }
    }

    /// Restores the identity remembered in the session cache.
    ///
    /// A missing or expired entry leaves the store anonymous. An entry that
    /// does not parse as an identity is removed from the cache and the store
    /// becomes anonymous.
    pub async fn restore(&self) -> AuthState {
        let key = &self.settings.cache_key;
        let raw = match self.cache.get(key).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("[SessionStore] Failed to read session cache: {}", e);
                None
            }
        };

        let restored = match raw {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    tracing::info!("[SessionStore] Restored session for {}", user.email);
                    Some(user)
                }
                Err(e) => {
                    tracing::warn!("[SessionStore] Discarding malformed session entry: {}", e);
                    self.forget().await;
                    None
                }
            },
            None => None,
        };

        *self.identity.write().await = restored.clone();
        AuthState::from(restored)
    }

    /// Signs in with the demo credentials.
    ///
    /// Returns `true` and becomes authenticated only for the exact demo
    /// email and password. Any other pair leaves the current state alone.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        tokio::time::sleep(self.settings.login_latency()).await;

        if email != self.settings.demo_email || password != self.settings.demo_password {
            tracing::info!("[SessionStore] Rejected login for {}", email);
            self.notifier.notify(Notification::destructive(
                "Login failed",
                "Invalid email or password.",
            ));
            return false;
        }

        let user = User::new(
            self.settings.demo_id.clone(),
            self.settings.demo_email.clone(),
            self.settings.demo_name.clone(),
        );
        self.sign_in(user).await;
        self.notifier.notify(Notification::new(
            "Welcome back!",
            "You have successfully logged in.",
        ));
        true
    }

    /// Signs out and forgets the remembered identity.
    pub async fn logout(&self) {
        *self.identity.write().await = None;
        self.forget().await;
        tracing::info!("[SessionStore] Logged out");
        self.notifier.notify(Notification::new(
            "Logged out",
            "You have been successfully logged out.",
        ));
    }

    /// Creates an administrator account and signs it in.
    ///
    /// No input is validated and the password is not stored; this always
    /// returns `true`.
    pub async fn register(&self, email: &str, _password: &str, name: &str) -> bool {
        tokio::time::sleep(self.settings.register_latency()).await;

        let user = User::generate(email, name);
        self.sign_in(user).await;
        self.notifier.notify(Notification::new(
            "Account created!",
            "Your account has been successfully created.",
        ));
        true
    }

    /// Pretends to email password-reset instructions.
    pub async fn request_password_reset(&self, email: &str) {
        tokio::time::sleep(self.settings.password_reset_latency()).await;
        tracing::info!("[SessionStore] Password reset requested for {}", email);
        self.notifier.notify(Notification::new(
            "Email sent!",
            "Check your inbox for password reset instructions.",
        ));
    }

    /// Validates a new password and pretends to store it.
    ///
    /// Validation happens before the simulated round trip. The accepted
    /// demo credentials do not change.
    pub async fn reset_password(
        &self,
        password: &str,
        confirm: &str,
    ) -> Result<(), PasswordResetError> {
        validate_new_password(password, confirm, self.settings.min_password_len)?;

        tokio::time::sleep(self.settings.password_reset_latency()).await;
        self.notifier.notify(Notification::new(
            "Password reset successful!",
            "You can now log in with your new password.",
        ));
        Ok(())
    }

    pub async fn current_user(&self) -> Option<User> {
        self.identity.read().await.clone()
    }

    pub async fn state(&self) -> AuthState {
        AuthState::from(self.current_user().await)
    }

    pub async fn is_authenticated(&self) -> bool {
        self.identity.read().await.is_some()
    }

    async fn sign_in(&self, user: User) {
        tracing::info!("[SessionStore] Signed in {} ({})", user.email, user.id);
        self.remember(&user).await;
        *self.identity.write().await = Some(user);
    }

    async fn remember(&self, user: &User) {
        let value = match serde_json::to_string(user) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("[SessionStore] Failed to serialize identity: {}", e);
                return;
            }
        };
        if let Err(e) = self
            .cache
            .set(&self.settings.cache_key, &value, self.settings.cache_ttl())
            .await
        {
            tracing::warn!("[SessionStore] Failed to persist session: {}", e);
        }
    }

    async fn forget(&self) {
        if let Err(e) = self.cache.remove(&self.settings.cache_key).await {
            tracing::warn!("[SessionStore] Failed to clear session cache: {}", e);
        }
    }
}
