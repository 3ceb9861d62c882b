//! Surface events and delegated dispatch
//!
//! Components do not register per-element handlers. The embedding application
//! funnels every event through a single entry point (the controller's
//! `handle_event`), which inspects the originating surface id. Rows added
//! after construction therefore need no registration step.

use crate::surface::SurfaceId;

/// Kinds of user-originated surface events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Activation of a button
    Click,
    /// Content mutation of a text surface
    Input,
    /// Focus leaving a text surface
    Blur,
}

/// An event raised against one surface element
#[derive(Debug, Clone)]
pub struct SurfaceEvent {
    pub target: SurfaceId,
    pub kind: EventKind,
}

impl SurfaceEvent {
    pub fn click(target: impl Into<SurfaceId>) -> Self {
        Self {
            target: target.into(),
            kind: EventKind::Click,
        }
    }

    pub fn input(target: impl Into<SurfaceId>) -> Self {
        Self {
            target: target.into(),
            kind: EventKind::Input,
        }
    }

    pub fn blur(target: impl Into<SurfaceId>) -> Self {
        Self {
            target: target.into(),
            kind: EventKind::Blur,
        }
    }
}
