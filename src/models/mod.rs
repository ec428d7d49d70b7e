pub mod sprint;
pub mod workflow;

pub use sprint::{Epic, SprintData, Story, StoryStatus};
pub use workflow::{WorkflowData, WorkflowItem};
