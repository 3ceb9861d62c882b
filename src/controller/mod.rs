//! Search controller: drives the search-and-inspect flow
//!
//! Owns the UI surface models for one dashboard page and a search backend.
//! The flow mirrors the page: the trigger click serializes the form and
//! issues the search, rows land in the result table with their payload
//! hidden alongside a Show button, and a Show click routes that payload
//! into the JSON formatter bound to the detail modal.

use crate::api::{QueryForm, SearchBackend};
use crate::core::error::{Error, Result};
use crate::formatter::JsonFormatter;
use crate::search::parse_hits;
use crate::surface::events::{EventKind, SurfaceEvent};
use crate::surface::{Button, Modal, ResultTable, ResultView};
use serde_json::Value;
use tracing::{debug, warn};

/// The one user-visible text for every search failure
pub const SEARCH_FAILED_PROMPT: &str = "Search failed, please try again using valid input";

/// Default title of the prompt modal
pub const PROMPT_DEFAULT_TITLE: &str = "Result";

/// Surface handles for one dashboard page, owned by the embedding application
/// and moved into the controller at construction
#[derive(Debug)]
pub struct DashboardSurfaces {
    pub trigger: Button,
    pub result_view: ResultView,
    pub prompt: Modal,
    pub detail: Modal,
}

impl DashboardSurfaces {
    /// Surfaces with the ids the stock dashboard markup uses
    pub fn with_default_ids() -> Self {
        Self {
            trigger: Button::new("search"),
            result_view: ResultView::new(ResultTable::new("result-table")),
            prompt: Modal::new("modal"),
            detail: Modal::new("thing-description-modal"),
        }
    }
}

/// Controller wiring the search form, result table, and detail view together
pub struct SearchController<B: SearchBackend> {
    backend: B,
    form: QueryForm,
    trigger: Button,
    result_view: ResultView,
    prompt: Modal,
    detail: Modal,
    formatter: JsonFormatter,
}

impl<B: SearchBackend> SearchController<B> {
    /// The formatter must be bound to the detail modal's body surface; the
    /// embedding application constructs both and hands them over here.
    pub fn new(backend: B, formatter: JsonFormatter, surfaces: DashboardSurfaces) -> Self {
        Self {
            backend,
            form: QueryForm::new(),
            trigger: surfaces.trigger,
            result_view: surfaces.result_view,
            prompt: surfaces.prompt,
            detail: surfaces.detail,
            formatter,
        }
    }

    pub fn form(&self) -> &QueryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut QueryForm {
        &mut self.form
    }

    pub fn trigger(&self) -> &Button {
        &self.trigger
    }

    pub fn result_view(&self) -> &ResultView {
        &self.result_view
    }

    pub fn prompt(&self) -> &Modal {
        &self.prompt
    }

    pub fn detail(&self) -> &Modal {
        &self.detail
    }

    pub fn formatter(&self) -> &JsonFormatter {
        &self.formatter
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    /// Serialize the form, lock the trigger, and hide the previous results
    ///
    /// Returns the query string to send. The trigger stays locked until
    /// `complete_search` or `fail_search` runs, so a second activation while
    /// a request is in flight is inert.
    pub fn begin_search(&mut self) -> String {
        let query = self.form.serialize();
        self.trigger.disable();
        self.result_view.hide();
        debug!(%query, "search started");
        query
    }

    /// Render a successful response and unlock the trigger
    ///
    /// A response that is not a sequence of well-formed result objects is
    /// routed to the failure path; the result view then stays hidden.
    pub fn complete_search(&mut self, items: &[Value]) {
        match self.render_rows(items) {
            Ok(()) => self.trigger.enable(),
            Err(err) => self.fail_search(&err),
        }
    }

    /// Show the generic failure prompt and unlock the trigger
    ///
    /// Every failure takes this path, so a search can never leave the
    /// trigger permanently disabled.
    pub fn fail_search(&mut self, err: &Error) {
        warn!(error = %err, "search failed");
        self.show_prompt(SEARCH_FAILED_PROMPT, PROMPT_DEFAULT_TITLE);
        self.trigger.enable();
    }

    /// The full search operation: begin, call the backend, resolve
    pub async fn search(&mut self) {
        // a click on a disabled trigger is inert, not queued
        if !self.trigger.is_enabled() {
            return;
        }
        let query = self.begin_search();
        match self.backend.search(&query).await {
            Ok(items) => self.complete_search(&items),
            Err(err) => self.fail_search(&err),
        }
    }

    fn render_rows(&mut self, items: &[Value]) -> Result<()> {
        let hits = parse_hits(items)?;
        let table = self.result_view.table_mut();
        table.clear();
        for hit in &hits {
            table.append(
                &hit.record.thing_id,
                &hit.record.thing_type,
                &hit.record.title,
                &hit.payload,
            );
        }
        self.result_view.show();
        Ok(())
    }

    // =========================================================================
    // DETAIL VIEW
    // =========================================================================

    /// Load one row's payload into the formatter and open the detail modal
    ///
    /// A payload that fails to parse leaves the previous dialog content in
    /// place; the user sees no error, only the log carries the cause.
    pub fn show_detail(&mut self, payload: &str) {
        if !self.formatter.set_text(payload) {
            warn!("stored payload does not parse as JSON; dialog keeps previous content");
        }
        self.detail.show();
    }

    /// Fill and open the prompt modal
    pub fn show_prompt(&mut self, text: &str, title: &str) {
        self.prompt.set_body(text);
        self.prompt.set_title(title);
        self.prompt.show();
    }

    // =========================================================================
    // EVENT DISPATCH
    // =========================================================================

    /// Single delegated entry point for surface events
    ///
    /// Dispatch inspects the originating element: the trigger starts a
    /// search, a Show button in the current table opens the detail view, and
    /// anything else is offered to the formatter. Rows appended after
    /// construction need no registration.
    pub async fn handle_event(&mut self, event: &SurfaceEvent) {
        match event.kind {
            EventKind::Click if event.target == *self.trigger.id() => {
                self.search().await;
            }
            EventKind::Click => {
                let payload = self
                    .result_view
                    .table()
                    .payload_for(&event.target)
                    .map(str::to_string);
                if let Some(payload) = payload {
                    self.show_detail(&payload);
                }
            }
            _ => self.formatter.handle_event(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::ViewMode;
    use crate::surface::TextSurface;
    use serde_json::json;
    use std::cell::{Cell, RefCell};

    enum StubReply {
        Items(Vec<Value>),
        Failure,
    }

    struct StubBackend {
        reply: StubReply,
        calls: Cell<usize>,
        last_query: RefCell<String>,
    }

    impl StubBackend {
        fn items(items: Vec<Value>) -> Self {
            Self {
                reply: StubReply::Items(items),
                calls: Cell::new(0),
                last_query: RefCell::new(String::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: StubReply::Failure,
                calls: Cell::new(0),
                last_query: RefCell::new(String::new()),
            }
        }
    }

    impl SearchBackend for StubBackend {
        async fn search(&self, query: &str) -> Result<Vec<Value>> {
            self.calls.set(self.calls.get() + 1);
            *self.last_query.borrow_mut() = query.to_string();
            match &self.reply {
                StubReply::Items(items) => Ok(items.clone()),
                StubReply::Failure => Err(Error::Request {
                    message: "connection refused".to_string(),
                }),
            }
        }
    }

    fn controller(backend: StubBackend) -> SearchController<StubBackend> {
        let formatter = JsonFormatter::with_mode(
            TextSurface::new("json-thingdescription"),
            ViewMode::ReadOnly,
        );
        SearchController::new(backend, formatter, DashboardSurfaces::with_default_ids())
    }

    #[tokio::test]
    async fn test_search_success_renders_rows() {
        let item = json!({"thing_id": "t1", "thing_type": "Sensor", "title": "Temp Sensor"});
        let mut ctl = controller(StubBackend::items(vec![item.clone()]));

        ctl.search().await;

        assert!(ctl.result_view().is_visible());
        let rows = ctl.result_view().table().rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].thing_id(), "t1");
        assert_eq!(rows[0].thing_type(), "Sensor");
        assert_eq!(rows[0].title(), "Temp Sensor");
        assert_eq!(rows[0].payload(), item.to_string());
        assert!(ctl.trigger().is_enabled());
        assert!(!ctl.prompt().is_visible());
    }

    #[tokio::test]
    async fn test_search_sends_serialized_form() {
        let backend = StubBackend::items(vec![]);
        let mut ctl = controller(backend);
        ctl.form_mut().append("thing_type", "Sensor");
        ctl.form_mut().append("location", "");

        ctl.search().await;

        assert_eq!(*ctl.backend.last_query.borrow(), "thing_type=Sensor");
    }

    #[tokio::test]
    async fn test_search_replaces_previous_rows() {
        let first = json!({"thing_id": "t1", "thing_type": "Sensor", "title": "A"});
        let mut ctl = controller(StubBackend::items(vec![first]));
        ctl.search().await;
        assert_eq!(ctl.result_view().table().rows().len(), 1);

        ctl.search().await;
        assert_eq!(ctl.result_view().table().rows().len(), 1);
    }

    #[tokio::test]
    async fn test_search_failure_shows_generic_prompt() {
        let mut ctl = controller(StubBackend::failing());

        ctl.search().await;

        assert!(!ctl.result_view().is_visible());
        assert!(ctl.prompt().is_visible());
        assert_eq!(ctl.prompt().body(), SEARCH_FAILED_PROMPT);
        assert_eq!(ctl.prompt().title(), PROMPT_DEFAULT_TITLE);
        assert!(ctl.trigger().is_enabled());
    }

    #[tokio::test]
    async fn test_search_bad_shape_takes_failure_path() {
        let mut ctl = controller(StubBackend::items(vec![json!("not an object")]));

        ctl.search().await;

        assert!(!ctl.result_view().is_visible());
        assert!(ctl.prompt().is_visible());
        assert_eq!(ctl.prompt().body(), SEARCH_FAILED_PROMPT);
        assert!(ctl.trigger().is_enabled());
    }

    #[test]
    fn test_trigger_locked_between_begin_and_resolution() {
        let mut ctl = controller(StubBackend::items(vec![]));

        ctl.begin_search();
        assert!(!ctl.trigger().is_enabled());
        assert!(!ctl.result_view().is_visible());

        ctl.complete_search(&[]);
        assert!(ctl.trigger().is_enabled());

        ctl.begin_search();
        assert!(!ctl.trigger().is_enabled());
        ctl.fail_search(&Error::BadStatus { status: 500 });
        assert!(ctl.trigger().is_enabled());
    }

    #[tokio::test]
    async fn test_click_while_locked_is_inert() {
        let mut ctl = controller(StubBackend::items(vec![]));
        ctl.begin_search();

        ctl.handle_event(&SurfaceEvent::click("search")).await;

        assert_eq!(ctl.backend.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_show_click_opens_detail_with_payload() {
        let item = json!({"thing_id": "t1", "thing_type": "Sensor", "title": "T", "foo": "bar"});
        let mut ctl = controller(StubBackend::items(vec![item.clone()]));
        ctl.handle_event(&SurfaceEvent::click("search")).await;

        let button = ctl.result_view().table().rows()[0].show_button().clone();
        ctl.handle_event(&SurfaceEvent::click(button.as_str())).await;

        assert!(ctl.detail().is_visible());
        assert_eq!(ctl.formatter().canonical_text(), Some(item.to_string().as_str()));
    }

    #[tokio::test]
    async fn test_show_detail_bad_payload_keeps_previous_content() {
        let mut ctl = controller(StubBackend::items(vec![]));
        ctl.show_detail("{\"good\": 1}");
        let before = ctl.formatter().host().markup().to_string();

        ctl.show_detail("{broken");

        assert!(ctl.detail().is_visible());
        assert_eq!(ctl.formatter().canonical_text(), Some("{\"good\": 1}"));
        assert_eq!(ctl.formatter().host().markup(), before);
    }

    #[tokio::test]
    async fn test_click_on_unknown_surface_is_ignored() {
        let mut ctl = controller(StubBackend::items(vec![]));
        ctl.handle_event(&SurfaceEvent::click("nowhere")).await;

        assert!(!ctl.detail().is_visible());
        assert_eq!(ctl.backend.calls.get(), 0);
    }
}
