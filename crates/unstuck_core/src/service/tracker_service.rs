//! Routine-tracker use-case service.
//!
//! # Responsibility
//! - Bootstrap application state from the store with per-slice seeding.
//! - Provide the add/toggle/delete mutation surface for activities.
//! - Persist the affected slice after every successful mutation.
//!
//! # Invariants
//! - Every mutation is an explicit mutate-then-persist step; there is no
//!   reactive re-persistence mechanism.
//! - Invalid mutation input and missing entities degrade to a no-op, never
//!   an error.
//! - Notification delivery is best-effort and never affects a mutation
//!   result.

use crate::model::activity::{Activity, ActivityId};
use crate::notify::{Notifier, NotifyPermission};
use crate::seed;
use crate::state::AppState;
use crate::store::{
    KvStore, StoreError, ACTIVITIES_KEY, APPS_KEY, GOALS_KEY, POINTS_KEY, SLEEP_KEY,
};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Points awarded for completing an activity, and reclaimed on undo.
pub const POINT_AWARD: u64 = 10;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service-layer error for tracker use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Persistence-layer failure.
    Store(StoreError),
    /// A slice failed to serialize for persistence.
    Encode {
        key: &'static str,
        source: serde_json::Error,
    },
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode { key, source } => {
                write!(f, "failed to encode slice `{key}`: {source}")
            }
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Encode { source, .. } => Some(source),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case service owning the store handle, the notification capability,
/// and the in-memory application state.
pub struct TrackerService<S: KvStore, N: Notifier> {
    store: S,
    notifier: N,
    permission: NotifyPermission,
    state: AppState,
}

impl<S: KvStore, N: Notifier> TrackerService<S, N> {
    /// Bootstraps the service, seeding absent slices for the local date.
    ///
    /// # Side effects
    /// - Requests notification permission once, best-effort.
    /// - Persists every slice that had to be seeded.
    pub fn bootstrap(store: S, notifier: N) -> ServiceResult<Self> {
        let today = seed::local_date_string();
        Self::bootstrap_on(store, notifier, &today)
    }

    /// Bootstraps the service with an explicit seed date.
    ///
    /// Seeded demo activities are dated `today`; slices that already exist
    /// in the store are loaded as-is regardless of the date.
    pub fn bootstrap_on(store: S, mut notifier: N, today: &str) -> ServiceResult<Self> {
        let permission = notifier.request_permission();
        info!(
            "event=bootstrap module=service status=start notify_permission={}",
            permission.as_str()
        );

        let mut seeded_slices = 0u8;
        let activities = load_or_seed(&store, ACTIVITIES_KEY, &mut seeded_slices, || {
            seed::demo_activities(today)
        })?;
        let sleep_logs =
            load_or_seed(&store, SLEEP_KEY, &mut seeded_slices, seed::demo_sleep_logs)?;
        let app_usage = load_or_seed(&store, APPS_KEY, &mut seeded_slices, seed::demo_app_usage)?;
        let goals = load_or_seed(&store, GOALS_KEY, &mut seeded_slices, seed::demo_goals)?;
        let points = load_or_seed_points(&store, &mut seeded_slices)?;

        info!(
            "event=bootstrap module=service status=ok seeded_slices={seeded_slices} activities={} points={points}",
            activities.len()
        );

        Ok(Self {
            store,
            notifier,
            permission,
            state: AppState {
                activities,
                sleep_logs,
                app_usage,
                goals,
                points,
            },
        })
    }

    /// Current in-memory state, for the rendering surface and derived
    /// computations.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Current points balance.
    pub fn points(&self) -> u64 {
        self.state.points
    }

    /// Permission the notification surface reported at bootstrap.
    pub fn notify_permission(&self) -> NotifyPermission {
        self.permission
    }

    /// Appends a new incomplete activity and persists the slice.
    ///
    /// Returns `Ok(None)` without touching anything when `title` is
    /// empty/whitespace-only or `time` is empty.
    pub fn add_activity(
        &mut self,
        title: &str,
        time: &str,
        date: &str,
    ) -> ServiceResult<Option<ActivityId>> {
        if title.trim().is_empty() || time.is_empty() {
            debug!("event=activity_add module=service status=skip reason=invalid_input");
            return Ok(None);
        }

        let activity = Activity::new(title, time, date);
        let id = activity.id.clone();
        self.state.activities.push(activity);
        self.persist_activities()?;

        info!("event=activity_add module=service status=ok id={id} date={date}");
        Ok(Some(id))
    }

    /// Flips the completion flag of the activity with the given id.
    ///
    /// Completion awards points and emits a best-effort notification;
    /// un-completion reclaims the same award, floored at zero. Returns
    /// `Ok(false)` when the id is unknown.
    pub fn toggle_activity(&mut self, id: &str) -> ServiceResult<bool> {
        let Some(activity) = self
            .state
            .activities
            .iter_mut()
            .find(|activity| activity.id == id)
        else {
            debug!("event=activity_toggle module=service status=skip reason=not_found id={id}");
            return Ok(false);
        };

        activity.completed = !activity.completed;
        let completed_now = activity.completed;
        let title = activity.title.clone();

        if completed_now {
            self.state.points += POINT_AWARD;
        } else {
            // Symmetric undo: the award is reclaimed blindly, floored at
            // zero. Toggling through the floor loses point-accounting
            // fidelity.
            self.state.points = self.state.points.saturating_sub(POINT_AWARD);
        }

        self.persist_activities()?;
        self.persist_points()?;

        if completed_now && self.permission == NotifyPermission::Granted {
            self.notifier.notify(
                "Well done!",
                &format!("You completed: {title}. +{POINT_AWARD} points!"),
            );
        }

        info!(
            "event=activity_toggle module=service status=ok id={id} completed={completed_now} points={}",
            self.state.points
        );
        Ok(true)
    }

    /// Removes the activity with the given id and persists the slice.
    ///
    /// Points are never adjusted on delete, even for a completed activity.
    /// Returns `Ok(false)` when the id is unknown.
    pub fn delete_activity(&mut self, id: &str) -> ServiceResult<bool> {
        let before = self.state.activities.len();
        self.state.activities.retain(|activity| activity.id != id);
        if self.state.activities.len() == before {
            debug!("event=activity_delete module=service status=skip reason=not_found id={id}");
            return Ok(false);
        }

        self.persist_activities()?;
        info!("event=activity_delete module=service status=ok id={id}");
        Ok(true)
    }

    fn persist_activities(&self) -> ServiceResult<()> {
        save_slice(&self.store, ACTIVITIES_KEY, &self.state.activities)
    }

    fn persist_points(&self) -> ServiceResult<()> {
        self.store
            .save(POINTS_KEY, &self.state.points.to_string())?;
        Ok(())
    }
}

/// Loads one collection slice, falling back to its seed when the key was
/// never saved or holds text that no longer parses.
fn load_or_seed<S, T, F>(
    store: &S,
    key: &'static str,
    seeded_slices: &mut u8,
    seed_fn: F,
) -> ServiceResult<Vec<T>>
where
    S: KvStore,
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    if let Some(raw) = store.load(key)? {
        match serde_json::from_str(&raw) {
            Ok(items) => return Ok(items),
            Err(err) => {
                warn!(
                    "event=slice_decode module=service status=error key={key} error={err} action=reseed"
                );
            }
        }
    }

    let items = seed_fn();
    save_slice(store, key, &items)?;
    *seeded_slices += 1;
    Ok(items)
}

/// Loads the points counter, falling back to zero when the key was never
/// saved or holds a non-numeric value.
fn load_or_seed_points<S: KvStore>(store: &S, seeded_slices: &mut u8) -> ServiceResult<u64> {
    if let Some(raw) = store.load(POINTS_KEY)? {
        match raw.trim().parse::<u64>() {
            Ok(points) => return Ok(points),
            Err(err) => {
                warn!(
                    "event=slice_decode module=service status=error key={POINTS_KEY} error={err} action=reseed"
                );
            }
        }
    }

    store.save(POINTS_KEY, &seed::INITIAL_POINTS.to_string())?;
    *seeded_slices += 1;
    Ok(seed::INITIAL_POINTS)
}

fn save_slice<S: KvStore, T: Serialize>(
    store: &S,
    key: &'static str,
    items: &[T],
) -> ServiceResult<()> {
    let raw = serde_json::to_string(items).map_err(|source| ServiceError::Encode { key, source })?;
    store.save(key, &raw)?;
    Ok(())
}
