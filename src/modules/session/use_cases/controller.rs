// Session controller: the single owner of the kiosk session.
//
// Every mutation takes the state lock, folds events through `evolve` and
// publishes the resulting snapshot on a watch channel. Screen and role
// transitions bump the session epoch and drop any pending auto-logout; the
// employee dashboard arms a new one. A timer only logs out the epoch it was
// armed for.

use crate::modules::branding::core::selector::ThemeSelector;
use crate::modules::clock_entries::adapters::outbound::local_entry_store::LocalEntryStore;
use crate::modules::clock_entries::core::entry::ClockType;
use crate::modules::session::core::access_code::{AccessCodeDirectory, validate_access_code};
use crate::modules::session::core::decide::{DecideError, decide_clock, decide_navigate};
use crate::modules::session::core::events::SessionEvent;
use crate::modules::session::core::evolve::evolve;
use crate::modules::session::core::state::{Role, Screen, SessionState};
use crate::modules::session::use_cases::register_admin::{AdminProfile, AdminRegistrationForm};
use crate::shared::core::clock::Clock;
use crate::shared::core::deferred::DeferredTask;
use crate::shared::core::validation::ValidationErrors;
use crate::shared::infrastructure::key_value_store::SlotError;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{Mutex, watch};
use tracing::info;

pub const DEFAULT_ADMIN_NAME: &str = "Administrator";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimings {
    pub admin_login_delay: Duration,
    pub employee_login_delay: Duration,
    pub auto_logout_after: Duration,
}

impl Default for SessionTimings {
    fn default() -> Self {
        Self {
            admin_login_delay: Duration::from_millis(1500),
            employee_login_delay: Duration::from_millis(1000),
            auto_logout_after: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    #[error("invalid employee access code")]
    AccessDenied,

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error(transparent)]
    Storage(#[from] SlotError),
}

struct Tracked {
    state: SessionState,
    epoch: u64,
    auto_logout: Option<DeferredTask>,
}

struct Inner {
    tracked: Mutex<Tracked>,
    published: watch::Sender<SessionState>,
    entries: Arc<LocalEntryStore>,
    directory: AccessCodeDirectory,
    themes: Arc<ThemeSelector>,
    admins: RwLock<HashMap<String, AdminProfile>>,
    clock: Arc<dyn Clock>,
    timings: SessionTimings,
}

#[derive(Clone)]
pub struct SessionController {
    inner: Arc<Inner>,
}

impl SessionController {
    pub fn new(
        entries: Arc<LocalEntryStore>,
        directory: AccessCodeDirectory,
        themes: Arc<ThemeSelector>,
        clock: Arc<dyn Clock>,
        timings: SessionTimings,
    ) -> Self {
        let (published, _) = watch::channel(SessionState::initial());
        Self {
            inner: Arc::new(Inner {
                tracked: Mutex::new(Tracked {
                    state: SessionState::initial(),
                    epoch: 0,
                    auto_logout: None,
                }),
                published,
                entries,
                directory,
                themes,
                admins: RwLock::new(HashMap::new()),
                clock,
                timings,
            }),
        }
    }

    /// Latest published state.
    pub fn snapshot(&self) -> SessionState {
        self.inner.published.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.published.subscribe()
    }

    pub async fn navigate(&self, screen: Screen) -> Result<SessionState, SessionError> {
        let mut tracked = self.inner.tracked.lock().await;
        let events = decide_navigate(&tracked.state, screen)?;
        Ok(self.inner.commit(&mut tracked, events))
    }

    pub async fn register_admin(
        &self,
        form: AdminRegistrationForm,
    ) -> Result<SessionState, SessionError> {
        let profile = form.validate(self.inner.themes.catalog())?;
        self.inner.themes.select(&profile.brand_theme);
        self.inner
            .admins
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(profile.property_id.clone(), profile.clone());
        info!(property_id = %profile.property_id, theme = %profile.brand_theme, "admin registered");

        self.complete_login(
            self.inner.timings.admin_login_delay,
            SessionEvent::AdminLoggedIn {
                property_id: profile.property_id,
                user_name: profile.name,
            },
        )
        .await
    }

    pub async fn login_admin(&self, property_id: &str) -> Result<SessionState, SessionError> {
        let property_id = property_id.trim();
        if property_id.is_empty() {
            return Err(ValidationErrors::single("propertyId", "Please enter a valid Property ID").into());
        }

        let registered = self
            .inner
            .admins
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(property_id)
            .cloned();
        let user_name = match registered {
            Some(profile) => {
                self.inner.themes.select(&profile.brand_theme);
                profile.name
            }
            None => DEFAULT_ADMIN_NAME.to_string(),
        };

        self.complete_login(
            self.inner.timings.admin_login_delay,
            SessionEvent::AdminLoggedIn {
                property_id: property_id.to_string(),
                user_name,
            },
        )
        .await
    }

    /// Format problems and unknown codes are rejected before the session
    /// is touched.
    pub async fn login_employee(&self, access_code: &str) -> Result<SessionState, SessionError> {
        validate_access_code(access_code)?;
        let identity = self
            .inner
            .directory
            .lookup(access_code)
            .cloned()
            .ok_or(SessionError::AccessDenied)?;

        self.complete_login(
            self.inner.timings.employee_login_delay,
            SessionEvent::EmployeeLoggedIn { identity },
        )
        .await
    }

    pub async fn clock_in(&self) -> Result<SessionState, SessionError> {
        self.clock(ClockType::ClockIn).await
    }

    pub async fn clock_out(&self) -> Result<SessionState, SessionError> {
        self.clock(ClockType::ClockOut).await
    }

    pub async fn logout(&self) -> SessionState {
        let mut tracked = self.inner.tracked.lock().await;
        let user_id = tracked.state.user_id.clone();
        let snapshot = self.inner.commit(&mut tracked, vec![SessionEvent::LoggedOut]);
        info!(user_id = user_id.as_deref().unwrap_or("-"), "logged out");
        snapshot
    }

    // The entry hits the local store before the session sees it.
    async fn clock(&self, clock_type: ClockType) -> Result<SessionState, SessionError> {
        let mut tracked = self.inner.tracked.lock().await;
        let entry = decide_clock(&tracked.state, clock_type, self.inner.clock.now())?;
        let stored = self.inner.entries.append(entry).await?;
        info!(
            entry_id = %stored.id,
            employee_id = %stored.employee_id,
            %clock_type,
            "clock entry recorded"
        );
        Ok(self
            .inner
            .commit(&mut tracked, vec![SessionEvent::ClockRecorded { entry: stored }]))
    }

    async fn complete_login(
        &self,
        delay: Duration,
        event: SessionEvent,
    ) -> Result<SessionState, SessionError> {
        {
            let mut tracked = self.inner.tracked.lock().await;
            self.inner
                .commit(&mut tracked, vec![SessionEvent::LoadingChanged { is_loading: true }]);
        }

        tokio::time::sleep(delay).await;

        let mut tracked = self.inner.tracked.lock().await;
        let snapshot = self.inner.commit(&mut tracked, vec![event]);
        info!(
            role = ?snapshot.role,
            user_id = snapshot.user_id.as_deref().unwrap_or("-"),
            "logged in"
        );
        Ok(snapshot)
    }
}

impl Inner {
    fn commit(self: &Arc<Self>, tracked: &mut Tracked, events: Vec<SessionEvent>) -> SessionState {
        let mut transitioned = false;
        for event in events {
            transitioned |= event.is_transition();
            tracked.state = evolve(std::mem::take(&mut tracked.state), event);
        }

        if transitioned {
            tracked.epoch += 1;
            if let Some(task) = tracked.auto_logout.take() {
                task.cancel();
            }
            if tracked.state.role == Some(Role::Employee)
                && tracked.state.current_screen == Screen::EmployeeDashboard
            {
                tracked.auto_logout = Some(self.arm_auto_logout(tracked.epoch));
            }
        }

        let snapshot = tracked.state.clone();
        self.published.send_replace(snapshot.clone());
        snapshot
    }

    fn arm_auto_logout(self: &Arc<Self>, epoch: u64) -> DeferredTask {
        let inner = Arc::downgrade(self);
        DeferredTask::schedule(self.timings.auto_logout_after, async move {
            if let Some(inner) = inner.upgrade() {
                inner.expire(epoch).await;
            }
        })
    }

    async fn expire(self: Arc<Self>, epoch: u64) {
        let mut tracked = self.tracked.lock().await;
        if tracked.epoch != epoch {
            return;
        }
        if let Some(task) = tracked.auto_logout.take() {
            task.detach();
        }
        let user_id = tracked.state.user_id.clone();
        self.commit(&mut tracked, vec![SessionEvent::LoggedOut]);
        info!(
            user_id = user_id.as_deref().unwrap_or("-"),
            "employee session expired, logged out"
        );
    }
}
