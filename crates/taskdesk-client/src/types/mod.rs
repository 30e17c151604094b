/*
[INPUT]:  Type submodules for API communication
[OUTPUT]: Public data-layer type exports
[POS]:    Data layer - module wiring
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod models;
pub mod requests;

pub use enums::{Role, TaskStatus};
pub use models::{Department, Employee, FilterVocabulary, Task, TaskPage, UserProfile};
pub use requests::{
    DEFAULT_PAGE_LIMIT,
    FixTask,
    LoginRequest,
    NewTask,
    RegisterRequest,
    ReviewDecision,
    TaskQuery,
};
