//! In-memory model of the dashboard's UI surfaces
//!
//! The controller never touches real markup or styling; it mutates these
//! DOM-equivalent structs and the embedding application decides how to
//! present them (the CLI prints them, a web shell would diff them into
//! actual elements).

pub mod events;

use std::fmt;

/// Identifier of a surface element, assigned by the embedding application
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SurfaceId(String);

impl SurfaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SurfaceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// TEXT SURFACE
// =============================================================================

/// A host surface for formatted text content
///
/// Tracks both the plain text (what `.text()` would return in a DOM) and the
/// rendered markup (what `.html()` would return). Programmatic rendering sets
/// the two together; a user edit replaces both with the raw typed text.
#[derive(Debug, Clone)]
pub struct TextSurface {
    id: SurfaceId,
    text: String,
    markup: String,
}

impl TextSurface {
    pub fn new(id: impl Into<SurfaceId>) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
            markup: String::new(),
        }
    }

    pub fn id(&self) -> &SurfaceId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Programmatic update: install rendered content
    pub fn set_content(&mut self, text: &str, markup: &str) {
        self.text = text.to_string();
        self.markup = markup.to_string();
    }

    /// User-originated edit: typed text carries no markup
    pub fn edit(&mut self, text: &str) {
        self.text = text.to_string();
        self.markup = text.to_string();
    }
}

// =============================================================================
// BUTTON
// =============================================================================

/// A trigger control that can be locked while work is in flight
#[derive(Debug, Clone)]
pub struct Button {
    id: SurfaceId,
    enabled: bool,
}

impl Button {
    pub fn new(id: impl Into<SurfaceId>) -> Self {
        Self {
            id: id.into(),
            enabled: true,
        }
    }

    pub fn id(&self) -> &SurfaceId {
        &self.id
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }
}

// =============================================================================
// MODAL
// =============================================================================

/// A modal dialog with a title and a body region
#[derive(Debug, Clone)]
pub struct Modal {
    id: SurfaceId,
    visible: bool,
    title: String,
    body: String,
}

impl Modal {
    pub fn new(id: impl Into<SurfaceId>) -> Self {
        Self {
            id: id.into(),
            visible: false,
            title: String::new(),
            body: String::new(),
        }
    }

    pub fn id(&self) -> &SurfaceId {
        &self.id
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_body(&mut self, body: &str) {
        self.body = body.to_string();
    }
}

// =============================================================================
// RESULT TABLE
// =============================================================================

/// One row of the result table: three display cells, a hidden payload, and
/// the id of its "Show" button
#[derive(Debug, Clone)]
pub struct TableRow {
    thing_id: String,
    thing_type: String,
    title: String,
    payload: String,
    show_button: SurfaceId,
}

impl TableRow {
    pub fn thing_id(&self) -> &str {
        &self.thing_id
    }

    pub fn thing_type(&self) -> &str {
        &self.thing_type
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn show_button(&self) -> &SurfaceId {
        &self.show_button
    }
}

/// The result table body; rows are replaced wholesale on each search
#[derive(Debug, Clone)]
pub struct ResultTable {
    id: SurfaceId,
    rows: Vec<TableRow>,
}

impl ResultTable {
    pub fn new(id: impl Into<SurfaceId>) -> Self {
        Self {
            id: id.into(),
            rows: Vec::new(),
        }
    }

    pub fn id(&self) -> &SurfaceId {
        &self.id
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Append a row; the Show button id is derived from the table id and the
    /// row position so delegated dispatch can resolve it later
    pub fn append(&mut self, thing_id: &str, thing_type: &str, title: &str, payload: &str) {
        let show_button = SurfaceId::new(format!("{}-row{}-show", self.id, self.rows.len()));
        self.rows.push(TableRow {
            thing_id: thing_id.to_string(),
            thing_type: thing_type.to_string(),
            title: title.to_string(),
            payload: payload.to_string(),
            show_button,
        });
    }

    /// Hidden payload of the row owning the given Show button, if any
    pub fn payload_for(&self, target: &SurfaceId) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.show_button == *target)
            .map(|row| row.payload.as_str())
    }
}

// =============================================================================
// RESULT VIEW
// =============================================================================

/// The result area: a visibility flag wrapping the result table
#[derive(Debug, Clone)]
pub struct ResultView {
    visible: bool,
    table: ResultTable,
}

impl ResultView {
    pub fn new(table: ResultTable) -> Self {
        Self {
            visible: false,
            table,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn table(&self) -> &ResultTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut ResultTable {
        &mut self.table
    }
}
