//! Typed wrappers for the Clarity API endpoints.

pub mod dashboard;
pub mod documentation;
pub mod recordings;

pub use dashboard::{DashboardApi, DashboardQuery};
pub use documentation::{DocumentationApi, DocumentationQuery};
pub use recordings::{RecordingsApi, RecordingsQuery};
