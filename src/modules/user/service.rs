/// Auth Service
///
/// Owns the signed-in user. Credentials are looked up in the user directory by exact
/// email; passwords are accepted without verification. The session is mirrored to a
/// key-value store so it survives a restart.
use log::{info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use validator::Validate;

use crate::api::error;
use crate::api::toast::{Toast, ToastSink};
use crate::modules::user::model::{SignInModel, SignUpModel};
use crate::modules::user::repository::UserRepository;
use crate::modules::user::schema::UserEntity;
use crate::modules::user::session::{SessionStore, StoredSession};
use crate::utils::new_id;

pub struct UserService {
    repo: Arc<dyn UserRepository + Send + Sync>,
    session: SessionStore,
    toasts: Arc<dyn ToastSink + Send + Sync>,
    current: RwLock<Option<UserEntity>>,
    loading: AtomicBool,
    latency: Duration,
}

struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        LoadingGuard(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl UserService {
    pub fn with_dependencies(
        repo: Arc<dyn UserRepository + Send + Sync>,
        session: SessionStore,
        toasts: Arc<dyn ToastSink + Send + Sync>,
        latency: Duration,
    ) -> Self {
        info!("UserService initialized with dependencies");
        UserService {
            repo,
            session,
            toasts,
            current: RwLock::new(None),
            loading: AtomicBool::new(false),
            latency,
        }
    }

    pub fn current_user(&self) -> Option<UserEntity> {
        self.current.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub async fn sign_in(&self, user: SignInModel) -> Result<UserEntity, error::SystemError> {
        let _loading = LoadingGuard::start(&self.loading);
        let result = self.try_sign_in(user).await;
        match &result {
            Ok(user) => self.toasts.emit(
                Toast::ok("Signed in successfully")
                    .description(format!("Welcome back, {}!", user.name)),
            ),
            Err(err) => self.toasts.emit(Toast::destructive("Sign in failed").description(err.message())),
        }
        result
    }

    async fn try_sign_in(&self, user: SignInModel) -> Result<UserEntity, error::SystemError> {
        self.simulate_latency().await;

        let user_entity = self
            .repo
            .find_by_email(&user.email)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Invalid email or password"))?;

        self.session.save(&user_entity).await?;
        self.set_current(Some(user_entity.clone()));
        info!("User {} signed in", user_entity.id);
        Ok(user_entity)
    }

    pub async fn sign_up(&self, user: SignUpModel) -> Result<UserEntity, error::SystemError> {
        let _loading = LoadingGuard::start(&self.loading);
        let result = self.try_sign_up(user).await;
        match &result {
            Ok(user) => self.toasts.emit(
                Toast::ok("Signed up successfully").description(format!("Welcome, {}!", user.name)),
            ),
            Err(err) => self.toasts.emit(Toast::destructive("Sign up failed").description(err.message())),
        }
        result
    }

    async fn try_sign_up(&self, user: SignUpModel) -> Result<UserEntity, error::SystemError> {
        user.validate()?;
        self.simulate_latency().await;

        if self.repo.find_by_email(&user.email).await?.is_some() {
            return Err(error::SystemError::conflict("Email already in use"));
        }

        let new_user = UserEntity {
            id: new_id("user"),
            email: user.email,
            name: user.name,
            role: user.role,
            avatar: None,
            department: None,
            joined_at: chrono::Utc::now(),
        };

        // New accounts join the directory so they can sign in again later.
        self.repo.create(&new_user).await?;
        if let Err(err) = self.session.save(&new_user).await {
            self.repo.delete(&new_user.id).await?;
            return Err(err);
        }
        self.set_current(Some(new_user.clone()));
        info!("User {} signed up as {:?}", new_user.id, new_user.role);
        Ok(new_user)
    }

    /// The in-memory session always ends; a failure to remove the stored entry is still
    /// reported.
    pub async fn sign_out(&self) -> Result<(), error::SystemError> {
        if let Some(user) = self.current.write().unwrap_or_else(|e| e.into_inner()).take() {
            info!("User {} signed out", user.id);
        }
        if let Err(err) = self.session.clear().await {
            log::error!("Failed to remove stored session: {err}");
            return Err(err);
        }
        self.toasts.emit(
            Toast::ok("Signed out").description("You have been signed out successfully."),
        );
        Ok(())
    }

    /// Reinstates the persisted session. Never fails: a corrupt entry is discarded and
    /// a storage error is logged, both leaving the portal signed out.
    pub async fn restore_session(&self) -> Option<UserEntity> {
        let _loading = LoadingGuard::start(&self.loading);
        match self.session.load().await {
            Ok(StoredSession::Valid(user)) => {
                info!("Restored session for user {}", user.id);
                self.set_current(Some(user.clone()));
                Some(user)
            }
            Ok(StoredSession::Empty) => None,
            Ok(StoredSession::Corrupt(reason)) => {
                warn!("Discarding stored session: {reason}");
                if let Err(err) = self.session.clear().await {
                    log::error!("Failed to remove corrupt session: {err}");
                }
                None
            }
            Err(err) => {
                log::error!("Failed to read stored session: {err}");
                None
            }
        }
    }

    fn set_current(&self, user: Option<UserEntity>) {
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = user;
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}
