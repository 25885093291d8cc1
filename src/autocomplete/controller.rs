//! The autocomplete controller
//!
//! Keystrokes, timer expiries and fetch completions are all events on one
//! channel, consumed by a single task. Only that task touches the input
//! field, the list view and the navigation state, so no locking is needed
//! and events are applied strictly in arrival order.
//!
//! Every dispatched fetch carries a sequence tag. A response is applied
//! only if its tag is still the latest one issued; anything older (or
//! anything issued before a dismiss/selection) is dropped.

use super::debounce::Debouncer;
use super::keys::Key;
use super::navigation::NavigationState;
use super::presenter::RowPresenter;
use super::templates::Templates;
use super::view::{InputField, ListView};
use crate::config::{AutocompleteSettings, Settings};
use crate::error::{Error, Result};
use crate::network::HttpClient;
use crate::results::{ResultRecord, ResultSet};
use crate::search::WpcomSearch;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Completion callback invoked with the committed record
pub type OnSelect = Box<dyn FnMut(&ResultRecord) + Send>;

/// Where the controller is in the keystroke-to-results cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Nothing pending, list hidden
    Idle,
    /// A keystroke was accepted and its query is waiting out the quiet period
    Debouncing,
    /// A query is in flight
    Awaiting,
    /// Rows are on screen
    ShowingResults,
}

/// Point-in-time view of the controller, for hosts and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub state: ControllerState,
    pub navigation: NavigationState,
    pub input: String,
    pub labels: Vec<String>,
}

pub(crate) enum Event {
    KeyUp,
    KeyDown(Key),
    Click(usize),
    DebounceElapsed {
        generation: u64,
        keyword: String,
    },
    FetchCompleted {
        tag: u64,
        keyword: String,
        outcome: Result<Vec<ResultRecord>>,
    },
    Snapshot(oneshot::Sender<Snapshot>),
    Shutdown,
}

/// Builder for [`AutocompleteController`]; every option is enumerated here
pub struct AutocompleteBuilder {
    input: Box<dyn InputField>,
    list: Box<dyn ListView>,
    results: ResultSet,
    min_keyword_length: usize,
    debounce: Duration,
    on_select: OnSelect,
    templates: Option<Templates>,
}

impl AutocompleteBuilder {
    /// Take keyword length and quiet period from settings
    pub fn settings(mut self, settings: &AutocompleteSettings) -> Self {
        self.min_keyword_length = settings.min_keyword_length;
        self.debounce = settings.debounce();
        self
    }

    /// Keywords of this many characters or fewer are not searched
    pub fn min_keyword_length(mut self, len: usize) -> Self {
        self.min_keyword_length = len;
        self
    }

    pub fn debounce(mut self, delay: Duration) -> Self {
        self.debounce = delay;
        self
    }

    pub fn on_select<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&ResultRecord) + Send + 'static,
    {
        self.on_select = Box::new(callback);
        self
    }

    /// Use a custom row renderer instead of the embedded template
    pub fn templates(mut self, templates: Templates) -> Self {
        self.templates = Some(templates);
        self
    }

    pub fn build(self) -> Result<AutocompleteController> {
        let templates = match self.templates {
            Some(templates) => templates,
            None => Templates::new()?,
        };
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Ok(AutocompleteController {
            input: self.input,
            list: self.list,
            results: self.results,
            templates,
            rows: Vec::new(),
            nav: NavigationState::new(),
            min_keyword_length: self.min_keyword_length,
            debouncer: Debouncer::new(self.debounce),
            last_tag: 0,
            in_flight: None,
            on_select: self.on_select,
            events_tx,
            events_rx,
        })
    }
}

/// Owns the bound input, the row list and the debounced query pipeline
pub struct AutocompleteController {
    input: Box<dyn InputField>,
    list: Box<dyn ListView>,
    results: ResultSet,
    templates: Templates,
    rows: Vec<RowPresenter>,
    nav: NavigationState,
    min_keyword_length: usize,
    debouncer: Debouncer,
    /// Tag of the most recently dispatched fetch
    last_tag: u64,
    /// Tag and keyword whose response will be applied, if one is outstanding
    in_flight: Option<(u64, String)>,
    on_select: OnSelect,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: mpsc::UnboundedReceiver<Event>,
}

impl AutocompleteController {
    pub fn builder(
        input: impl InputField + 'static,
        list: impl ListView + 'static,
        results: ResultSet,
    ) -> AutocompleteBuilder {
        let defaults = AutocompleteSettings::default();
        AutocompleteBuilder {
            input: Box::new(input),
            list: Box::new(list),
            results,
            min_keyword_length: defaults.min_keyword_length,
            debounce: defaults.debounce(),
            on_select: Box::new(|_| {}),
            templates: None,
        }
    }

    /// Builder wired to the WordPress.com search source described by `settings`
    pub fn from_settings(
        input: impl InputField + 'static,
        list: impl ListView + 'static,
        client: HttpClient,
        settings: &Settings,
    ) -> AutocompleteBuilder {
        let source = Arc::new(WpcomSearch::from_settings(client, &settings.search));
        let results = ResultSet::new(source, settings.search.clone());
        Self::builder(input, list, results).settings(&settings.autocomplete)
    }

    /// Attach to the input, mount the empty list and start handling events.
    ///
    /// Must be called within a tokio runtime.
    pub fn render(mut self) -> AutocompleteHandle {
        self.input.disable_native_autocomplete();
        self.list.mount();
        self.hide();

        let events = self.events_tx.clone();
        let task = tokio::spawn(self.run());

        AutocompleteHandle {
            events,
            task: Some(task),
        }
    }

    async fn run(mut self) {
        debug!("Autocomplete controller started");
        while let Some(event) = self.events_rx.recv().await {
            if !self.handle(event) {
                break;
            }
        }
        self.debouncer.cancel();
        debug!("Autocomplete controller stopped");
    }

    /// Apply one event; returns `false` when the loop should stop
    fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::KeyUp => self.on_key_up(),
            Event::KeyDown(key) => self.on_key_down(key),
            Event::Click(index) => self.on_click(index),
            Event::DebounceElapsed {
                generation,
                keyword,
            } => {
                if self.debouncer.fire(generation) {
                    self.dispatch(keyword);
                } else {
                    debug!("Ignoring superseded timer for '{}'", keyword);
                }
            }
            Event::FetchCompleted {
                tag,
                keyword,
                outcome,
            } => self.on_fetch_completed(tag, keyword, outcome),
            Event::Snapshot(reply) => {
                let _ = reply.send(self.snapshot());
            }
            Event::Shutdown => return false,
        }
        true
    }

    pub fn state(&self) -> ControllerState {
        if self.debouncer.is_pending() {
            ControllerState::Debouncing
        } else if self.in_flight.is_some() {
            ControllerState::Awaiting
        } else if self.nav.visible {
            ControllerState::ShowingResults
        } else {
            ControllerState::Idle
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state(),
            navigation: self.nav.clone(),
            input: self.input.value(),
            labels: self
                .rows
                .iter()
                .map(|row| row.record().label().to_string())
                .collect(),
        }
    }

    fn is_valid(&self, keyword: &str) -> bool {
        keyword.chars().count() > self.min_keyword_length
    }

    fn on_key_up(&mut self) {
        let keyword = self.input.value();
        if !self.nav.is_changed(&keyword) {
            // Back to the text already shown: drop work for abandoned keywords
            self.debouncer.cancel();
            if matches!(&self.in_flight, Some((_, pending)) if *pending != keyword) {
                self.in_flight = None;
            }
            return;
        }

        if self.is_valid(&keyword) {
            debug!(
                "Scheduling query for '{}' in {:?}",
                keyword,
                self.debouncer.delay()
            );
            self.debouncer
                .schedule(&self.events_tx, |generation| Event::DebounceElapsed {
                    generation,
                    keyword,
                });
        } else {
            debug!("Keyword '{}' too short, hiding", keyword);
            self.dismiss();
            self.nav.current_text.clear();
        }
    }

    fn on_key_down(&mut self, key: Key) {
        match key {
            Key::ArrowUp => self.move_by(-1),
            Key::ArrowDown => self.move_by(1),
            Key::Enter => {
                if let Some(index) = self.nav.active_index {
                    self.on_click(index);
                }
            }
            Key::Escape => {
                self.input.set_value("");
                self.dismiss();
                self.nav.current_text.clear();
            }
            Key::Other => {}
        }
    }

    /// Move the highlighted row; clamps at both ends
    fn move_by(&mut self, delta: isize) {
        if self.nav.move_by(delta, self.rows.len()) {
            self.list.set_active(self.nav.active_index);
        }
    }

    fn on_click(&mut self, index: usize) {
        let Some(row) = self.rows.get(index) else {
            debug!("Click on missing row {}", index);
            return;
        };
        let selected = row.select();
        self.dismiss();
        self.select(selected.record);
    }

    /// Commit a record: label into the input, list collapsed, callback fired
    fn select(&mut self, record: ResultRecord) {
        let label = record.label().to_string();
        info!("Selected '{}'", label);

        self.input.set_value(&label);
        self.nav.current_text = label;
        (self.on_select)(&record);
    }

    fn dispatch(&mut self, keyword: String) {
        self.last_tag += 1;
        let tag = self.last_tag;
        self.in_flight = Some((tag, keyword.clone()));

        info!("Querying '{}' (#{})", keyword, tag);

        let fetch = self.results.fetch(&keyword);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = fetch.await;
            let _ = events.send(Event::FetchCompleted {
                tag,
                keyword,
                outcome,
            });
        });
    }

    fn on_fetch_completed(
        &mut self,
        tag: u64,
        keyword: String,
        outcome: Result<Vec<ResultRecord>>,
    ) {
        if self.in_flight.as_ref().map(|(current, _)| *current) != Some(tag) {
            debug!(
                "Discarding stale response for '{}' (#{}, latest #{})",
                keyword, tag, self.last_tag
            );
            return;
        }
        self.in_flight = None;

        match outcome {
            Ok(records) => self.load_result(records, keyword),
            Err(e) => {
                warn!("Search for '{}' failed: {}", keyword, e);
                self.hide();
            }
        }
    }

    /// Rebuild the rows from an accepted response
    fn load_result(&mut self, records: Vec<ResultRecord>, keyword: String) {
        self.nav.current_text = keyword;
        self.reset();

        let live = self.results.replace(records);
        let rows: Vec<RowPresenter> = live
            .iter()
            .enumerate()
            .map(|(index, record)| RowPresenter::new(index, record.clone()))
            .collect();

        for row in &rows {
            match row.render(&self.templates) {
                Ok(rendered) => self.list.append(rendered),
                Err(e) => {
                    warn!("Failed to render row {}: {}", row.index(), e);
                    self.hide();
                    return;
                }
            }
        }
        self.rows = rows;

        if self.rows.is_empty() {
            self.hide();
        } else {
            debug!("Showing {} rows", self.rows.len());
            self.show();
        }
    }

    /// Hide the list and drop anything pending or in flight
    fn dismiss(&mut self) {
        self.debouncer.cancel();
        self.in_flight = None;
        self.hide();
    }

    fn show(&mut self) {
        self.nav.visible = true;
        self.list.set_visible(true);
    }

    fn hide(&mut self) {
        self.nav.visible = false;
        self.list.set_visible(false);
        self.reset();
    }

    fn reset(&mut self) {
        self.rows.clear();
        self.nav.clear_active();
        self.list.clear();
    }
}

/// Handle to a rendered controller; the host forwards input events here
pub struct AutocompleteHandle {
    events: mpsc::UnboundedSender<Event>,
    task: Option<JoinHandle<()>>,
}

impl AutocompleteHandle {
    fn send(&self, event: Event) -> Result<()> {
        self.events.send(event).map_err(|_| Error::ControllerClosed)
    }

    /// A key was released in the input field
    pub fn key_up(&self) -> Result<()> {
        self.send(Event::KeyUp)
    }

    /// A key was pressed in the input field
    pub fn key_down(&self, key: Key) -> Result<()> {
        self.send(Event::KeyDown(key))
    }

    /// A row was clicked
    pub fn click(&self, index: usize) -> Result<()> {
        self.send(Event::Click(index))
    }

    /// State after every previously sent event has been applied
    pub async fn snapshot(&self) -> Result<Snapshot> {
        let (tx, rx) = oneshot::channel();
        self.send(Event::Snapshot(tx))?;
        rx.await.map_err(|_| Error::ControllerClosed)
    }

    /// Stop the controller and wait for its task to finish
    pub async fn shutdown(mut self) -> Result<()> {
        self.send(Event::Shutdown)?;
        if let Some(task) = self.task.take() {
            task.await.map_err(|_| Error::ControllerClosed)?;
        }
        Ok(())
    }
}

impl Drop for AutocompleteHandle {
    fn drop(&mut self) {
        let _ = self.events.send(Event::Shutdown);
    }
}
