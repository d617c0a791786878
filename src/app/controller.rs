use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::observable::{Observable, Subscriber};
use crate::app::state::BirdsUiState;
use crate::catalog::source::BirdSource;
use crate::infra::config::SelectionPolicy;

pub type Notifier = Arc<dyn Fn() + Send + Sync>;

struct Shared {
    state: Observable<BirdsUiState>,
    latest_selection: AtomicU64,
    notifier: Mutex<Option<Notifier>>,
}

impl Shared {
    fn notify(&self) {
        let notifier = lock(&self.notifier).clone();
        if let Some(notifier) = notifier {
            notifier();
        }
    }
}

/// State holder for the home screen. Owned by the screen and dropped with it;
/// fetches that finish afterwards have nowhere to publish and are discarded.
pub struct BirdsViewModel {
    source: Arc<dyn BirdSource>,
    policy: SelectionPolicy,
    next_selection: AtomicU64,
    shared: Arc<Shared>,
    in_flight: Mutex<Vec<JoinHandle<()>>>,
}

impl BirdsViewModel {
    pub fn new(source: Arc<dyn BirdSource>, policy: SelectionPolicy) -> Self {
        Self {
            source,
            policy,
            next_selection: AtomicU64::new(0),
            shared: Arc::new(Shared {
                state: Observable::new(BirdsUiState::default()),
                latest_selection: AtomicU64::new(0),
                notifier: Mutex::new(None),
            }),
            in_flight: Mutex::new(Vec::new()),
        }
    }

    pub fn state(&self) -> Arc<BirdsUiState> {
        self.shared.state.get()
    }

    pub fn subscribe(&self) -> Subscriber<BirdsUiState> {
        self.shared.state.subscribe()
    }

    pub fn set_notifier(&self, notifier: Notifier) {
        *lock(&self.shared.notifier) = Some(notifier);
    }

    pub fn dispatch(&self, event: AppEvent) {
        match event {
            AppEvent::RefreshCategories => self.update_images(),
            AppEvent::SelectCategory(category) => self.select_category(&category),
        }
    }

    pub fn update_images(&self) {
        let source = Arc::clone(&self.source);
        let shared = Arc::downgrade(&self.shared);
        self.spawn_fetch("bird-categories", move || {
            debug!("fetching categories");
            let categories = match source.fetch_categories() {
                Ok(categories) => categories,
                Err(error) => {
                    warn!(%error, "category fetch failed");
                    return;
                }
            };
            let Some(shared) = shared.upgrade() else {
                return;
            };
            info!(count = categories.len(), "categories loaded");
            shared
                .state
                .update(|state| state.with_categories(categories));
            shared.notify();
        });
    }

    pub fn select_category(&self, category: &str) {
        let selection = self.next_selection.fetch_add(1, Ordering::SeqCst) + 1;
        self.shared
            .latest_selection
            .store(selection, Ordering::SeqCst);

        let source = Arc::clone(&self.source);
        let shared = Arc::downgrade(&self.shared);
        let policy = self.policy;
        let category = category.to_string();
        self.spawn_fetch("bird-images", move || {
            debug!(%category, selection, "fetching images");
            let images = match source.fetch_images(&category) {
                Ok(images) => images,
                Err(error) => {
                    warn!(%category, %error, "image fetch failed");
                    return;
                }
            };
            let Some(shared) = shared.upgrade() else {
                return;
            };
            let count = images.len();
            let applied = shared.state.try_update(|state| {
                let latest = shared.latest_selection.load(Ordering::SeqCst);
                if policy == SelectionPolicy::LatestRequest && latest != selection {
                    return None;
                }
                Some(state.with_selected_images(images))
            });
            if applied {
                info!(%category, count, "images published");
                shared.notify();
            } else {
                debug!(%category, selection, "dropping result of superseded selection");
            }
        });
    }

    /// Blocks until every fetch started so far has finished.
    #[cfg(test)]
    pub fn wait_idle(&self) {
        let handles = std::mem::take(&mut *lock(&self.in_flight));
        for handle in handles {
            if handle.join().is_err() {
                warn!("fetch thread panicked");
            }
        }
    }

    fn spawn_fetch(&self, name: &str, job: impl FnOnce() + Send + 'static) {
        match thread::Builder::new().name(name.to_string()).spawn(job) {
            Ok(handle) => {
                let mut in_flight = lock(&self.in_flight);
                in_flight.retain(|handle| !handle.is_finished());
                in_flight.push(handle);
            }
            Err(error) => warn!(%error, "failed to spawn fetch thread"),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
