//! Stampede Coordinator
//!
//! In-flight table ensuring a population runs at most once per key at a
//! time. The first caller for a missing key becomes the owner and starts the
//! population as a spawned task; later callers attach as followers and wait
//! for the same published outcome.
//!
//! Each episode counts its interested callers. When the last one goes away
//! before the outcome is published, the episode is removed from the table and
//! its cancellation token fires.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use hycache_domain::error::{Error, Result};
use hycache_domain::value_objects::HybridCacheEntryFlags;
use std::any::{Any, TypeId};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Outcome published to every participant of an episode
type Outcome<T> = std::result::Result<T, Arc<Error>>;

type OutcomeReceiver<T> = watch::Receiver<Option<Outcome<T>>>;

/// Identity of a population episode
///
/// Callers asking for another value type, or with other effective flags,
/// never share an episode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlightKey {
    key: String,
    type_id: TypeId,
    flags: HybridCacheEntryFlags,
}

impl FlightKey {
    /// Build the episode identity for a value of type `T`
    pub fn new<T: Any>(key: impl Into<String>, flags: HybridCacheEntryFlags) -> Self {
        Self {
            key: key.into(),
            type_id: TypeId::of::<T>(),
            flags,
        }
    }

    /// The cache key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The effective flags of the episode
    pub fn flags(&self) -> HybridCacheEntryFlags {
        self.flags
    }
}

struct FlightSlot {
    interest: AtomicUsize,
    cancel: CancellationToken,
    // `OutcomeReceiver<T>` for the episode's value type
    receiver: Box<dyn Any + Send + Sync>,
}

type FlightTable = DashMap<FlightKey, Arc<FlightSlot>>;

/// Single-flight coordinator shared by every call on a cache instance
#[derive(Clone, Default)]
pub struct StampedeCoordinator {
    table: Arc<FlightTable>,
}

impl StampedeCoordinator {
    /// Create an empty coordinator
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live episodes
    pub fn in_flight(&self) -> usize {
        self.table.len()
    }

    /// Join the episode for `key`, starting it if none is live
    ///
    /// `populate` is only called, and its future only spawned, when this
    /// caller becomes the owner. Followers drop it unused, together with
    /// anything it captured. The token passed to `populate` fires when every
    /// interested caller has gone away.
    pub fn join<T, F, Fut>(
        &self,
        key: &str,
        flags: HybridCacheEntryFlags,
        populate: F,
    ) -> Result<FlightLease<T>>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let flight_key = FlightKey::new::<T>(key, flags);

        match self.table.entry(flight_key.clone()) {
            Entry::Occupied(occupied) => {
                let slot = Arc::clone(occupied.get());
                let receiver = slot
                    .receiver
                    .downcast_ref::<OutcomeReceiver<T>>()
                    .cloned()
                    .ok_or_else(|| {
                        Error::internal(format!(
                            "in-flight entry for key '{key}' holds another value type"
                        ))
                    })?;
                // Registered while the shard lock is held so a concurrent
                // release cannot tear the episode down underneath us.
                slot.interest.fetch_add(1, Ordering::AcqRel);
                drop(occupied);

                debug!(key, "Joined in-flight population");
                Ok(FlightLease {
                    key: flight_key,
                    slot,
                    table: Arc::clone(&self.table),
                    receiver,
                    owner: false,
                })
            }
            Entry::Vacant(vacant) => {
                let (sender, receiver) = watch::channel(None);
                let cancel = CancellationToken::new();
                let slot = Arc::new(FlightSlot {
                    interest: AtomicUsize::new(1),
                    cancel: cancel.clone(),
                    receiver: Box::new(receiver.clone()),
                });
                drop(vacant.insert(Arc::clone(&slot)));

                let cleanup = CleanupGuard {
                    table: Arc::clone(&self.table),
                    key: flight_key.clone(),
                    slot: Arc::clone(&slot),
                };
                let future = populate(cancel.clone());
                tokio::spawn(async move {
                    let _cleanup = cleanup;
                    let outcome = tokio::select! {
                        biased;
                        () = cancel.cancelled() => {
                            Err(Arc::new(Error::cancelled("population abandoned by every caller")))
                        }
                        result = future => result.map_err(Arc::new),
                    };
                    sender.send_replace(Some(outcome));
                });

                debug!(key, "Started population");
                Ok(FlightLease {
                    key: flight_key,
                    slot,
                    table: Arc::clone(&self.table),
                    receiver,
                    owner: true,
                })
            }
        }
    }
}

impl fmt::Debug for StampedeCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StampedeCoordinator")
            .field("in_flight", &self.table.len())
            .finish()
    }
}

/// Removes a finished episode from the table, unless it was already replaced
struct CleanupGuard {
    table: Arc<FlightTable>,
    key: FlightKey,
    slot: Arc<FlightSlot>,
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        self.table
            .remove_if(&self.key, |_, slot| Arc::ptr_eq(slot, &self.slot));
    }
}

/// A caller's interest in one episode
///
/// Dropping the lease, or its [`FlightLease::wait`] future, releases the
/// interest.
pub struct FlightLease<T> {
    key: FlightKey,
    slot: Arc<FlightSlot>,
    table: Arc<FlightTable>,
    receiver: OutcomeReceiver<T>,
    owner: bool,
}

impl<T> FlightLease<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Whether this caller started the episode
    pub fn is_owner(&self) -> bool {
        self.owner
    }

    /// Wait for the episode's outcome
    ///
    /// Returns [`Error::Cancelled`] when `cancel` fires first, and
    /// [`Error::Factory`] carrying the shared failure when population failed.
    pub async fn wait(mut self, cancel: &CancellationToken) -> Result<T> {
        let receiver = &mut self.receiver;
        let outcome = async move {
            receiver
                .wait_for(Option::is_some)
                .await
                .map(|published| Option::clone(&published))
        };
        let published = tokio::select! {
            biased;
            () = cancel.cancelled() => None,
            changed = outcome => Some(changed),
        };

        match published {
            None => Err(Error::cancelled(format!(
                "wait for key '{}' cancelled by caller",
                self.key.key()
            ))),
            Some(Ok(Some(Ok(value)))) => Ok(value),
            Some(Ok(Some(Err(failure)))) if failure.is_cancelled() => Err(Error::cancelled(
                format!("population for key '{}' was abandoned", self.key.key()),
            )),
            Some(Ok(Some(Err(failure)))) => Err(Error::factory(failure)),
            Some(Ok(None) | Err(_)) => Err(Error::internal(format!(
                "population for key '{}' ended without publishing a result",
                self.key.key()
            ))),
        }
    }
}

impl<T> Drop for FlightLease<T> {
    fn drop(&mut self) {
        let mut counted = false;
        let removed = self.table.remove_if(&self.key, |_, slot| {
            if !Arc::ptr_eq(slot, &self.slot) {
                return false;
            }
            counted = true;
            self.slot.interest.fetch_sub(1, Ordering::AcqRel) == 1
        });

        let last = if counted {
            removed.is_some()
        } else {
            // Episode already left the table; nobody else can join it.
            self.slot.interest.fetch_sub(1, Ordering::AcqRel) == 1
        };

        if last {
            self.slot.cancel.cancel();
        }
    }
}

impl<T> fmt::Debug for FlightLease<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlightLease")
            .field("key", &self.key)
            .field("owner", &self.owner)
            .finish_non_exhaustive()
    }
}
