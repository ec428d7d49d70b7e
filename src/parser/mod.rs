pub mod sprint;
pub mod workflow;

pub use sprint::parse_sprint_status;
pub use workflow::parse_workflow_status;
