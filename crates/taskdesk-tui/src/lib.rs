/*
[INPUT]:  Public API exports for the taskdesk-tui crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod grouping;
pub mod paging;
pub mod review;

// Re-export main types for convenience
pub use config::PortalConfig;
pub use grouping::{GroupBy, SortOrder};
pub use paging::Pager;
pub use review::{FetchTicket, ListError, ReviewState};
