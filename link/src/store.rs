//! Cached job collection with optimistic mutations.
//!
//! [`JobStore`] keeps a client-side copy of the jobs collection, always sorted
//! newest application first. Updates and deletes are applied to the cache
//! before the service answers and rolled back if it refuses; every successful
//! mutation is followed by a full refetch, so the cache never keeps an
//! optimistic value once the mutation has settled.
//!
//! Overlapping mutations on the same job are not serialized. The last
//! optimistic write wins until the reconciling refetch lands. A failed
//! mutation restores its own snapshot; if the cache was written after that
//! snapshot was taken, the restored view is marked stale and refetched.

use crate::{
    error::{JobLinkError, MutationKind, StoreError},
    filter::JobFilter,
    models::{DeleteResponse, Job, JobId, JobUpdate, NewJob},
    transport::JobTransport,
};
use log::{debug, warn};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Identifies one in-flight mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MutationId(u64);

impl fmt::Display for MutationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mut_{}", self.0)
    }
}

/// Store behavior knobs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Refetch after a failed update/delete, once the snapshot is restored.
    /// Off by default: a failed mutation then leaves the cache exactly as it
    /// was before the call.
    pub reconcile_on_error: bool,
}

impl StoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reconcile_on_error(mut self, enabled: bool) -> Self {
        self.reconcile_on_error = enabled;
        self
    }
}

/// Point-in-time view of the store's activity flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStatus {
    pub is_loading: bool,
    pub is_creating: bool,
    pub is_updating: bool,
    pub is_deleting: bool,
    /// Cache is known to lag behind the service
    pub is_stale: bool,
    /// Whether a successful refresh has ever populated the cache
    pub has_data: bool,
    pub pending_mutations: usize,
    pub last_load_error: Option<JobLinkError>,
}

#[derive(Default)]
struct StoreState {
    cache: Option<Vec<Job>>,
    pending: HashMap<MutationId, MutationKind>,
    next_mutation: u64,
    loading: usize,
    stale: bool,
    last_load_error: Option<JobLinkError>,
    // Bumped on every cache write; a rollback compares it to spot writes it
    // would otherwise undo.
    cache_version: u64,
    // Refresh tickets: a fetch only lands if it started after the latest
    // optimistic edit and after the last fetch that landed.
    next_ticket: u64,
    applied_ticket: u64,
    min_ticket: u64,
}

impl StoreState {
    fn replace_cache(&mut self, jobs: Vec<Job>) {
        self.cache = Some(jobs);
        self.cache_version += 1;
    }
}

struct StoreInner<T> {
    transport: T,
    options: StoreOptions,
    state: Mutex<StoreState>,
}

impl<T> StoreInner<T> {
    fn state(&self) -> MutexGuard<'_, StoreState> {
        // No invariant spans a panic point, so a poisoned lock is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Removes a mutation from the pending set when it settles or is dropped.
struct PendingGuard<'a, T> {
    inner: &'a StoreInner<T>,
    id: MutationId,
}

impl<T> Drop for PendingGuard<'_, T> {
    fn drop(&mut self) {
        self.inner.state().pending.remove(&self.id);
    }
}

struct LoadingGuard<'a, T> {
    inner: &'a StoreInner<T>,
}

impl<T> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        let mut state = self.inner.state();
        state.loading = state.loading.saturating_sub(1);
    }
}

/// Shared, cached view of the jobs collection.
///
/// Cloning is cheap; all clones share one cache.
///
/// # Example
///
/// ```rust,no_run
/// use job_link::{JobLinkClient, JobStatus, JobStore, JobUpdate};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = JobLinkClient::builder()
///     .base_url("http://localhost:5000/api")
///     .build()?;
/// let store = JobStore::new(client);
///
/// store.refresh().await?;
/// if let Some(id) = store.jobs().first().and_then(|job| job.id.clone()) {
///     store.update(id, JobUpdate::status(JobStatus::Interview)).await?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct JobStore<T> {
    inner: Arc<StoreInner<T>>,
}

impl<T> Clone for JobStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: JobTransport> JobStore<T> {
    pub fn new(transport: T) -> Self {
        Self::with_options(transport, StoreOptions::default())
    }

    pub fn with_options(transport: T, options: StoreOptions) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                transport,
                options,
                state: Mutex::new(StoreState::default()),
            }),
        }
    }

    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    pub fn options(&self) -> &StoreOptions {
        &self.inner.options
    }

    // ---------------------------------------------------------------------
    // Read side
    // ---------------------------------------------------------------------

    /// Cached jobs, newest first. Empty while nothing has been loaded.
    pub fn jobs(&self) -> Vec<Job> {
        self.inner.state().cache.clone().unwrap_or_default()
    }

    /// Cached jobs, or `None` if no refresh has succeeded yet.
    pub fn cached(&self) -> Option<Vec<Job>> {
        self.inner.state().cache.clone()
    }

    pub fn filtered(&self, filter: &JobFilter) -> Vec<Job> {
        let state = self.inner.state();
        match state.cache.as_ref() {
            Some(jobs) => filter.apply(jobs),
            None => Vec::new(),
        }
    }

    pub fn get(&self, id: &JobId) -> Option<Job> {
        let state = self.inner.state();
        state
            .cache
            .as_ref()
            .and_then(|jobs| jobs.iter().find(|job| job.has_id(id)).cloned())
    }

    pub fn status(&self) -> StoreStatus {
        let state = self.inner.state();
        let in_flight = |kind: MutationKind| state.pending.values().any(|k| *k == kind);
        StoreStatus {
            is_loading: state.loading > 0,
            is_creating: in_flight(MutationKind::Create),
            is_updating: in_flight(MutationKind::Update),
            is_deleting: in_flight(MutationKind::Delete),
            is_stale: state.stale,
            has_data: state.cache.is_some(),
            pending_mutations: state.pending.len(),
            last_load_error: state.last_load_error.clone(),
        }
    }

    pub fn is_stale(&self) -> bool {
        self.inner.state().stale
    }

    /// Mark the cache as lagging behind the service without fetching.
    pub fn invalidate(&self) {
        self.inner.state().stale = true;
    }

    // ---------------------------------------------------------------------
    // Loading
    // ---------------------------------------------------------------------

    /// Replace the cache with the service's current collection.
    ///
    /// On failure the cache is left untouched and the error is recorded for
    /// [`JobStore::status`]. A fetch that was overtaken by a newer fetch or by
    /// an optimistic edit is discarded silently.
    pub async fn refresh(&self) -> Result<(), StoreError> {
        let ticket = {
            let mut state = self.inner.state();
            state.loading += 1;
            state.next_ticket += 1;
            state.next_ticket
        };
        let loading = LoadingGuard { inner: &self.inner };

        debug!("[JOB_STORE] Refresh #{} started", ticket);
        let result = self.inner.transport.list().await;
        drop(loading);

        let mut state = self.inner.state();
        let superseded = ticket < state.min_ticket || ticket <= state.applied_ticket;
        match result {
            Ok(_) if superseded => {
                debug!("[JOB_STORE] Refresh #{} superseded, result discarded", ticket);
                Ok(())
            },
            Ok(mut jobs) => {
                sort_jobs(&mut jobs);
                debug!("[JOB_STORE] Refresh #{} loaded {} jobs", ticket, jobs.len());
                state.replace_cache(jobs);
                state.applied_ticket = ticket;
                state.stale = false;
                state.last_load_error = None;
                Ok(())
            },
            Err(err) => {
                warn!("[JOB_STORE] Refresh #{} failed: {}", ticket, err);
                if !superseded {
                    state.last_load_error = Some(err.clone());
                }
                Err(StoreError::Load(err))
            },
        }
    }

    /// Refresh only if nothing is cached yet or the cache was invalidated.
    pub async fn ensure_fresh(&self) -> Result<(), StoreError> {
        let needs_fetch = {
            let state = self.inner.state();
            state.cache.is_none() || state.stale
        };
        if needs_fetch {
            self.refresh().await
        } else {
            Ok(())
        }
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Create a job. Nothing is inserted optimistically: the id is unknown
    /// until the service answers, so the new record appears with the
    /// reconciling refresh.
    pub async fn create(&self, job: NewJob) -> Result<Job, StoreError> {
        if let Err(err) = job.validate() {
            return Err(StoreError::mutation(MutationKind::Create, err));
        }
        let transport = &self.inner.transport;
        self.mutate(MutationKind::Create, None::<fn(&mut Vec<Job>)>, transport.create(&job))
            .await
    }

    /// Merge `fields` into the cached job right away, then send the update.
    pub async fn update(&self, id: JobId, fields: JobUpdate) -> Result<Job, StoreError> {
        let transport = &self.inner.transport;
        let optimistic = |jobs: &mut Vec<Job>| {
            if let Some(job) = jobs.iter_mut().find(|job| job.has_id(&id)) {
                fields.apply_to(job);
            }
        };
        self.mutate(MutationKind::Update, Some(optimistic), transport.update(&id, &fields))
            .await
    }

    /// Drop the cached job right away, then send the delete.
    pub async fn delete(&self, id: JobId) -> Result<DeleteResponse, StoreError> {
        let transport = &self.inner.transport;
        let optimistic = |jobs: &mut Vec<Job>| jobs.retain(|job| !job.has_id(&id));
        self.mutate(MutationKind::Delete, Some(optimistic), transport.delete(&id))
            .await
    }

    /// Snapshot, apply `optimistic`, await `call`; restore the snapshot on
    /// failure, refetch on success or when the rollback was overtaken.
    async fn mutate<R, F, Fut>(
        &self,
        kind: MutationKind,
        optimistic: Option<F>,
        call: Fut,
    ) -> Result<R, StoreError>
    where
        F: FnOnce(&mut Vec<Job>),
        Fut: Future<Output = Result<R, JobLinkError>>,
    {
        let (id, snapshot, version) = {
            let mut state = self.inner.state();
            state.next_mutation += 1;
            let id = MutationId(state.next_mutation);
            state.pending.insert(id, kind);

            let snapshot = match optimistic {
                Some(edit) => {
                    // Fetches already in flight would overwrite the edit.
                    state.min_ticket = state.next_ticket + 1;
                    let snapshot = state.cache.clone();
                    let edited = match state.cache.as_mut() {
                        Some(jobs) => {
                            edit(jobs);
                            sort_jobs(jobs);
                            true
                        },
                        None => false,
                    };
                    if edited {
                        state.cache_version += 1;
                    }
                    snapshot
                },
                None => None,
            };
            (id, snapshot, state.cache_version)
        };
        let pending = PendingGuard {
            inner: &self.inner,
            id,
        };

        debug!("[JOB_STORE] {} {} started", id, kind);
        let result = call.await;
        drop(pending);

        match result {
            Ok(value) => {
                debug!("[JOB_STORE] {} {} succeeded", id, kind);
                self.reconcile(id).await;
                Ok(value)
            },
            Err(err) => {
                warn!("[JOB_STORE] {} {} failed: {}", id, kind, err);
                let overtaken = match snapshot {
                    Some(previous) => self.roll_back(id, kind, previous, version),
                    None => false,
                };
                if overtaken || self.inner.options.reconcile_on_error {
                    self.reconcile(id).await;
                }
                Err(StoreError::mutation(kind, err))
            },
        }
    }

    /// Restore the pre-edit snapshot. Returns true when the cache was written
    /// since the edit (a refresh landed, another mutation edited or rolled
    /// back): the snapshot then predates that write, so the cache is marked
    /// stale and must be refetched.
    fn roll_back(
        &self,
        id: MutationId,
        kind: MutationKind,
        previous: Vec<Job>,
        version: u64,
    ) -> bool {
        let mut state = self.inner.state();
        let overtaken = state.cache_version != version;
        debug!(
            "[JOB_STORE] {} rolling back optimistic {} (overtaken={})",
            id, kind, overtaken
        );
        state.replace_cache(previous);
        if overtaken {
            state.stale = true;
        }
        overtaken
    }

    /// Invalidate and refetch after a settled mutation. A failed refetch
    /// leaves the cache stale; the mutation's own outcome is unaffected.
    async fn reconcile(&self, id: MutationId) {
        self.invalidate();
        if let Err(err) = self.refresh().await {
            warn!("[JOB_STORE] {} reconciling refresh failed: {}", id, err);
        }
    }
}

/// Newest application first. Stable, so equal dates keep service order;
/// unparseable dates go last.
pub fn sort_jobs(jobs: &mut [Job]) {
    jobs.sort_by_cached_key(|job| Reverse(job.applied_at()));
}
