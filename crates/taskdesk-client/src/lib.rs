/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public task-portal client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    PortalClient,
    PortalError,
    Result,
    SessionToken,
    SESSION_COOKIE,
};

// Re-export all types
pub use types::*;
