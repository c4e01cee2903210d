//! Debounced page fetching.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::source::{DataSource, PageRequest};
use crate::ui::mvi::Reducer;
use crate::ui::results::{ResultState, ResultsIntent, ResultsReducer};
use crate::ui::table::LazyState;

use super::debounce::DebounceTimer;

/// Which results may still be applied.
///
/// `revision` counts recorded state changes. A fetch remembers the revision it
/// was armed for and is applied only if that is still the latest one.
struct Fence {
    revision: u64,
    mounted: bool,
}

/// Turns lazy-state changes into page requests and owns the result state.
///
/// Each change sets `loading` immediately and (re)arms a debounce timer.
/// When the timer fires, the page is requested on a detached task, so a
/// later change never aborts a request that is already on the wire. Results
/// for superseded states and results arriving after unmount are dropped.
pub struct FetchController<S: DataSource> {
    source: Arc<S>,
    results: Arc<watch::Sender<ResultState>>,
    fence: Arc<Mutex<Fence>>,
    timer: DebounceTimer,
}

impl<S: DataSource> FetchController<S> {
    pub fn new(source: Arc<S>, debounce: Duration) -> Self {
        let (results, _) = watch::channel(ResultState::default());
        Self {
            source,
            results: Arc::new(results),
            fence: Arc::new(Mutex::new(Fence {
                revision: 0,
                mounted: true,
            })),
            timer: DebounceTimer::new(debounce),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ResultState> {
        self.results.subscribe()
    }

    /// Snapshot of the current results.
    pub fn results(&self) -> ResultState {
        self.results.borrow().clone()
    }

    /// Record a new lazy state and schedule its fetch.
    pub fn schedule(&mut self, state: &LazyState) {
        let revision = {
            let mut fence = self.fence.lock();
            if !fence.mounted {
                return;
            }
            fence.revision += 1;
            apply(&self.results, ResultsIntent::Scheduled);
            fence.revision
        };

        if self.timer.cancel() {
            tracing::debug!(revision, "Superseded pending fetch");
        }

        let request = PageRequest {
            page: state.current_page(),
            limit: state.page_size.get(),
        };
        let source = Arc::clone(&self.source);
        let results = Arc::clone(&self.results);
        let fence = Arc::clone(&self.fence);

        tracing::debug!(
            revision,
            page = request.page,
            limit = request.limit,
            delay_ms = self.timer.delay().as_millis() as u64,
            "Fetch scheduled"
        );

        self.timer.arm(move || {
            tracing::debug!(revision, page = request.page, "Debounce elapsed, fetching");
            tokio::spawn(run_fetch(source, results, fence, revision, request));
        });
    }

    pub fn dismiss_error(&self) {
        let fence = self.fence.lock();
        if fence.mounted {
            apply(&self.results, ResultsIntent::DismissError);
        }
    }

    /// Cancel the pending timer and stop applying results.
    pub fn unmount(&mut self) {
        let was_mounted = std::mem::replace(&mut self.fence.lock().mounted, false);
        let cancelled = self.timer.cancel();
        if was_mounted {
            tracing::debug!(cancelled_pending = cancelled, "Fetch controller unmounted");
        }
    }
}

impl<S: DataSource> Drop for FetchController<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

async fn run_fetch<S: DataSource>(
    source: Arc<S>,
    results: Arc<watch::Sender<ResultState>>,
    fence: Arc<Mutex<Fence>>,
    revision: u64,
    request: PageRequest,
) {
    let outcome = source.fetch_page(request).await;

    let fence = fence.lock();
    if !fence.mounted {
        tracing::debug!(revision, "Dropping fetch result after unmount");
        return;
    }
    if fence.revision != revision {
        tracing::debug!(
            revision,
            latest = fence.revision,
            "Dropping stale fetch result"
        );
        return;
    }

    let intent = match outcome {
        Ok(page) => {
            tracing::info!(
                page = request.page,
                rows = page.data.len(),
                total = page.pagination.total,
                "Artworks page loaded"
            );
            ResultsIntent::Loaded { page }
        }
        Err(err) => {
            tracing::warn!(page = request.page, error = %err, "Error fetching artworks");
            ResultsIntent::Failed {
                message: err.user_message().to_string(),
            }
        }
    };
    apply(&results, intent);
}

fn apply(results: &watch::Sender<ResultState>, intent: ResultsIntent) {
    results.send_modify(|state| {
        let previous = std::mem::take(state);
        *state = ResultsReducer::reduce(previous, intent);
    });
}
