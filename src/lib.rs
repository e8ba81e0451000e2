//! Client side of the report form: builds the request, calls the report
//! backend and turns the answer into UI state.

pub mod backend;
pub mod config;
pub mod constants;
pub mod error;
pub mod form;
pub mod orchestrator;
pub mod presenter;
pub mod timezone;
pub mod types;

pub use backend::{HttpBackend, ReportBackend};
pub use config::ClientConfig;
pub use error::TransportError;
pub use form::FormSource;
pub use orchestrator::{RequestOrchestrator, Submission};
pub use presenter::{Presenter, SurfaceSnapshot, TerminalPresenter, UiSurface};
pub use timezone::{tz_hours, FixedClock, LocalClock, OffsetClock};
pub use types::{FormInput, Place, RequestPayload, ResponseOutcome, Struggle, Trigger, UiState};
