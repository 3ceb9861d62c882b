//! JSON formatter component
//!
//! Wraps a host text surface and keeps a colorized rendering in sync with the
//! last successfully parsed JSON text. Invalid text never disturbs the stored
//! state: `set_text` is total and reports failure as `false`, so the surface
//! can tolerate transient invalid states (mid-typing) without losing the last
//! good rendering.

pub mod render;

use crate::surface::events::{EventKind, SurfaceEvent};
use crate::surface::TextSurface;
use render::Rendered;
use serde_json::Value;
use tracing::{debug, warn};

/// How the host surface treats user-originated edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Free text input, reformatted when focus leaves the surface
    #[default]
    Editable,
    /// User input is reverted; only programmatic updates render
    ReadOnly,
}

/// Formatter bound to one host surface
#[derive(Debug)]
pub struct JsonFormatter {
    host: TextSurface,
    mode: ViewMode,
    canonical: Option<String>,
    rendered: Option<Rendered>,
}

impl JsonFormatter {
    /// Editable formatter on the given host surface
    pub fn new(host: TextSurface) -> Self {
        Self::with_mode(host, ViewMode::default())
    }

    pub fn with_mode(host: TextSurface, mode: ViewMode) -> Self {
        Self {
            host,
            mode,
            canonical: None,
            rendered: None,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn host(&self) -> &TextSurface {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut TextSurface {
        &mut self.host
    }

    /// The last successfully parsed text, if any was ever set
    pub fn canonical_text(&self) -> Option<&str> {
        self.canonical.as_deref()
    }

    /// Parse `input` and render it into the host surface
    ///
    /// On success the canonical text and the rendered snapshot are replaced
    /// together and `true` is returned. On parse failure nothing changes and
    /// `false` is returned; this never panics.
    pub fn set_text(&mut self, input: &str) -> bool {
        let value: Value = match serde_json::from_str(input) {
            Ok(value) => value,
            Err(err) => {
                debug!(%err, "rejected content that does not parse as JSON");
                return false;
            }
        };

        let rendered = render::render(&value);
        self.host.set_content(&rendered.plain, &rendered.markup);
        self.canonical = Some(input.to_string());
        self.rendered = Some(rendered);
        true
    }

    /// React to an event on the host surface; events for other surfaces are
    /// ignored
    pub fn handle_event(&mut self, event: &SurfaceEvent) {
        if event.target != *self.host.id() {
            return;
        }
        match (self.mode, event.kind) {
            (ViewMode::ReadOnly, EventKind::Input) => self.revert(),
            (ViewMode::Editable, EventKind::Blur) => {
                let text = self.host.text().to_string();
                if !self.set_text(&text) {
                    warn!(surface = %self.host.id(), "ignored edit that does not parse as JSON");
                    self.revert();
                }
            }
            _ => {}
        }
    }

    /// Restore the last rendered markup, discarding whatever was typed
    fn revert(&mut self) {
        match &self.rendered {
            Some(rendered) => self.host.set_content(&rendered.plain, &rendered.markup),
            None => self.host.set_content("", ""),
        }
    }
}
