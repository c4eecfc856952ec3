//! EcoCitizen engine - the reactive state core of a simulated
//! sustainability dashboard.
//!
//! A single engine task owns the session state (metrics snapshot, active
//! view, transient notifications) and serializes every mutation: user
//! intents arrive as commands through an [`engine::EngineHandle`], a
//! [`scheduler::RefreshScheduler`] replaces the metrics snapshot on a fixed
//! cadence, and each notification expires independently after a fixed
//! display duration. Presentation is out of scope; renderers read published
//! [`state::StateSnapshot`] values and never mutate state directly.

pub mod engine;
pub mod error;
pub mod models;
pub mod notifications;
pub mod scheduler;
pub mod source;
pub mod state;

pub use engine::{Engine, EngineConfig, EngineHandle};
pub use error::{EcoResult, EngineError};
pub use models::{ActivityKind, MetricsSnapshot, ViewId};
pub use source::{MetricsSource, SimulatedMetricsSource};
pub use state::StateSnapshot;
