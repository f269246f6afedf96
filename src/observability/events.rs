//! Observable events
//!
//! Every log line the server emits is keyed by one of these.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Store populated with the default books
    StoreSeeded,
    /// Listener bound, ready for requests
    Serving,
    /// Server could not start (FATAL)
    BootFailed,
    /// Server loop exited
    ShutdownComplete,

    // Store mutations
    /// A book was inserted or updated
    BookUpserted,
    /// A delete request was applied
    BookDeleted,

    // Requests
    /// A request finished
    RequestComplete,
    /// A request was refused at the boundary
    RequestRejected,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreSeeded => "STORE_SEEDED",
            Event::Serving => "SERVING",
            Event::BootFailed => "BOOT_FAILED",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::BookUpserted => "BOOK_UPSERTED",
            Event::BookDeleted => "BOOK_DELETED",
            Event::RequestComplete => "REQUEST_COMPLETE",
            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
