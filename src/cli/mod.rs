//! Command-line driver: the bump workflow behind the `report-version` binary

pub mod orchestration;

pub use orchestration::{run_bump_workflow, BumpWorkflowArgs, ReportFailure, WorkflowResult};
