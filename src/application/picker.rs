use std::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use crate::application::debounce::{Debounce, Phase};
use crate::domain::model::{
    Dataset, Selection, Suggestion, DATA_LANGVAR, DATA_NAME, DATA_UID,
};
use crate::domain::traits::{Component, SuggestService};

/// Minimum gap between keystroke and fetch start.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

/// Name of the signal emitted once per committed selection.
pub const LANGUAGE_SELECT: &str = "language-select";

type SelectHandler = Box<dyn Fn(&Dataset) + Send + Sync>;

/// A text-input suggestion picker backed by a remote suggest service.
///
/// Feed it keystrokes with [`Picker::input`]; it debounces them,
/// queries the injected [`SuggestService`], and holds the rendered
/// candidate list until the host commits one with [`Picker::select`].
/// Cloning shares the same underlying component instance.
///
/// Must be used from within a tokio runtime: the debounce timer is a
/// spawned task on the runtime clock.
pub struct Picker {
    inner: Arc<Inner>,
}

impl Clone for Picker {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct Inner {
    service: Arc<dyn SuggestService>,
    window: Duration,
    state: Mutex<State>,
    handlers: Mutex<Vec<SelectHandler>>,
    // Fetches are tagged on issue; a response older than the newest
    // rendered one is discarded, so out-of-order completions cannot
    // overwrite the list with an earlier query's results.
    fetch_seq: AtomicU64,
    rendered_seq: AtomicU64,
    changed: watch::Sender<u64>,
}

#[derive(Default)]
struct State {
    text: String,
    suggestions: Vec<Suggestion>,
    selection: Option<Selection>,
    dataset: Dataset,
    debounce: Debounce,
}

impl Picker {
    pub fn new(service: Arc<dyn SuggestService>) -> Self {
        Self::with_window(service, DEBOUNCE_WINDOW)
    }

    pub fn with_window(service: Arc<dyn SuggestService>, window: Duration) -> Self {
        let (changed, _) = watch::channel(0);
        Self {
            inner: Arc::new(Inner {
                service,
                window,
                state: Mutex::new(State::default()),
                handlers: Mutex::new(Vec::new()),
                fetch_seq: AtomicU64::new(0),
                rendered_seq: AtomicU64::new(0),
                changed,
            }),
        }
    }

    /// Handle one input event: record the new text and (re)schedule the
    /// debounced lookup. The text is passed to the service unmodified,
    /// empty strings included.
    pub fn input(&self, text: &str) {
        let mut state = self.inner.state.lock().unwrap();
        state.text.clear();
        state.text.push_str(text);

        let now = Instant::now();
        if state.debounce.within_window(now, self.inner.window) {
            state.debounce.abort_pending();
        }
        state.debounce.last_scheduled = Some(now);
        state.debounce.phase = Phase::AwaitingDebounce;

        let inner = Arc::clone(&self.inner);
        let window = self.inner.window;
        let txt = text.to_string();
        state.debounce.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            Inner::fetch(inner, txt).await;
        }));
    }

    /// Commit a candidate: store the selection, mirror it into the
    /// dataset, replace the visible text with the display name, clear
    /// the list, and emit `language-select` exactly once.
    pub fn select(&self, item: &Suggestion) -> Selection {
        let (selection, dataset) = {
            let mut state = self.inner.state.lock().unwrap();
            let selection = Selection::of(item);
            state.dataset.insert(DATA_LANGVAR, &item.id);
            state.dataset.insert(DATA_UID, &item.uid);
            state.dataset.insert(DATA_NAME, &selection.display_name);
            state.text = selection.display_name.clone();
            state.suggestions.clear();
            state.selection = Some(selection.clone());
            state.debounce.phase = Phase::Idle;
            (selection, state.dataset.clone())
        };

        tracing::debug!(event = LANGUAGE_SELECT, uid = %selection.uid, "selection committed");
        let handlers = self.inner.handlers.lock().unwrap();
        for handler in handlers.iter() {
            handler(&dataset);
        }

        selection
    }

    /// Commit the candidate at a rendered list position, if any.
    pub fn select_index(&self, index: usize) -> Option<Selection> {
        let item = {
            let state = self.inner.state.lock().unwrap();
            state.suggestions.get(index).cloned()
        }?;
        Some(self.select(&item))
    }

    /// Register a `language-select` consumer. Handlers run on the
    /// committing task and receive the picker's dataset; the event
    /// itself carries no payload.
    pub fn on_select<F>(&self, handler: F)
    where
        F: Fn(&Dataset) + Send + Sync + 'static,
    {
        self.inner.handlers.lock().unwrap().push(Box::new(handler));
    }

    /// Replace the rendered list from the host side.
    pub fn set_suggestions(&self, items: Vec<Suggestion>) {
        {
            let mut state = self.inner.state.lock().unwrap();
            state.suggestions = items;
            state.debounce.phase = Phase::Rendered;
        }
        let seq = self.inner.rendered_seq.load(Ordering::SeqCst);
        self.inner.changed.send_replace(seq);
    }

    /// Watch render generations; the receiver is notified after every
    /// applied render.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.changed.subscribe()
    }

    pub fn text(&self) -> String {
        self.inner.state.lock().unwrap().text.clone()
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.inner.state.lock().unwrap().suggestions.clone()
    }

    pub fn selection(&self) -> Option<Selection> {
        self.inner.state.lock().unwrap().selection.clone()
    }

    pub fn dataset(&self) -> Dataset {
        self.inner.state.lock().unwrap().dataset.clone()
    }

    pub fn phase(&self) -> Phase {
        self.inner.state.lock().unwrap().debounce.phase
    }
}

impl Component for Picker {
    fn render(&self) -> String {
        let state = self.inner.state.lock().unwrap();
        let mut out = String::new();
        writeln!(out, "> {}", state.text).ok();
        for (i, item) in state.suggestions.iter().enumerate() {
            writeln!(out, "{}. {}  {}", i + 1, item.display_name(), item.uid).ok();
            writeln!(out, "   {}", item.gloss_line()).ok();
        }
        out
    }

    fn dispose(&self) {
        let mut state = self.inner.state.lock().unwrap();
        state.debounce.abort_pending();
        state.debounce.phase = Phase::Idle;
        drop(state);
        self.inner.handlers.lock().unwrap().clear();
    }
}

impl Inner {
    async fn fetch(inner: Arc<Inner>, txt: String) {
        let seq = inner.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = inner.state.lock().unwrap();
            state.debounce.phase = Phase::Fetching;
        }
        tracing::debug!(seq, txt = %txt, "requesting suggestions");

        match inner.service.suggest(&txt).await {
            Ok(items) => {
                let mut state = inner.state.lock().unwrap();
                if seq < inner.rendered_seq.load(Ordering::SeqCst) {
                    tracing::debug!(seq, "discarding stale suggest response");
                    return;
                }
                inner.rendered_seq.store(seq, Ordering::SeqCst);
                state.suggestions = items;
                state.debounce.phase = Phase::Rendered;
                drop(state);
                inner.changed.send_replace(seq);
            }
            Err(err) => {
                // The host sees nothing; the list stays as it was.
                tracing::warn!(seq, error = %err, "suggest request failed");
                let mut state = inner.state.lock().unwrap();
                state.debounce.phase = Phase::Idle;
            }
        }
    }
}
