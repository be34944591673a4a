//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Which admin screen is showing. Page switching is plain signal state; the
/// backend owns URLs, this app owns one document.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminPage {
    Dashboard,
    FakemonList,
    /// `None` opens the create form, `Some(number)` edits that entry.
    FakemonForm(Option<String>),
    MonsterList,
    MonsterForm(Option<u32>),
    Items,
    Shops,
    Bosses,
    Trainers,
    Users,
    Content,
    WorldMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// One banner message shown at the top of the app.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently displayed page - read
    pub page: ReadSignal<AdminPage>,
    set_page: WriteSignal<AdminPage>,
    /// Global status banner - read
    pub status: ReadSignal<Option<StatusMessage>>,
    set_status: WriteSignal<Option<StatusMessage>>,
    /// Trigger to reload the current page's data - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<AdminPage>, WriteSignal<AdminPage>),
        status: (
            ReadSignal<Option<StatusMessage>>,
            WriteSignal<Option<StatusMessage>>,
        ),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            status: status.0,
            set_status: status.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Switch to another admin screen, clearing any banner.
    pub fn navigate(&self, page: AdminPage) {
        self.set_status.set(None);
        self.set_page.set(page);
    }

    /// Show a success banner.
    pub fn success(&self, text: impl Into<String>) {
        self.set_status.set(Some(StatusMessage {
            kind: StatusKind::Success,
            text: text.into(),
        }));
    }

    /// Show an error banner.
    pub fn error(&self, text: impl Into<String>) {
        self.set_status.set(Some(StatusMessage {
            kind: StatusKind::Error,
            text: text.into(),
        }));
    }

    pub fn clear_status(&self) {
        self.set_status.set(None);
    }

    /// Trigger a reload of the current page's data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
