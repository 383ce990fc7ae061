//! pipesim CI - simulated CI/CD pipeline
//!
//! Provides a scripted pipeline orchestrator that:
//! - Walks the analysis, setup, per-group execution and aggregation stages
//! - Draws outcomes through the core aggregator with an injected random source
//! - Paces console output cosmetically and reports through an event sink

pub mod gate;
pub mod pacing;
pub mod pipeline;
pub mod runner;
pub mod sink;
pub mod spec;
pub mod stage;

// Re-export key types
pub use gate::{Advice, AdviceTone, GateVerdict, OverallStatus, PipelineGate};
pub use pacing::Pacer;
pub use pipeline::{PipelineResult, SimulatedPipeline};
pub use runner::GroupRunner;
pub use sink::{EventSink, NullSink, PipelineEvent, RecordingSink};
pub use spec::PipelineSpec;
pub use stage::{PipelineStage, StageStatus};
