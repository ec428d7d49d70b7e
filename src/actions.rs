//! Mapping from story status to the workflow action that moves it forward.
//!
//! A closed lookup table rather than branching logic: adding an action for
//! another status is a one-line change.

use crate::models::StoryStatus;

/// A suggested next step for a story in a given status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowAction {
    pub label: &'static str,
    /// Command template; [`full_command`](WorkflowAction::full_command)
    /// appends the story id and the closing quote.
    pub command: &'static str,
}

impl WorkflowAction {
    /// Complete shell command for a specific story.
    pub fn full_command(&self, story_id: &str) -> String {
        format!("{} {story_id}\"", self.command)
    }
}

const WORKFLOW_ACTIONS: [(&str, WorkflowAction); 3] = [
    (
        "backlog",
        WorkflowAction {
            label: "Create Story",
            command: "claude \"/bmad:bmm:workflows:create-story",
        },
    ),
    (
        "ready-for-dev",
        WorkflowAction {
            label: "Start Dev",
            command: "claude \"/bmad:bmm:workflows:dev-story",
        },
    ),
    (
        "review",
        WorkflowAction {
            label: "Code Review",
            command: "claude \"/bmad:bmm:workflows:code-review",
        },
    ),
];

/// Action associated with a status, if any.
pub fn workflow_action(status: &StoryStatus) -> Option<&'static WorkflowAction> {
    WORKFLOW_ACTIONS
        .iter()
        .find(|(s, _)| *s == status.as_str())
        .map(|(_, action)| action)
}

/// Whether a status has an associated workflow action.
pub fn is_actionable(status: &StoryStatus) -> bool {
    workflow_action(status).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actionable_statuses() {
        assert!(is_actionable(&StoryStatus::Backlog));
        assert!(is_actionable(&StoryStatus::ReadyForDev));
        assert!(is_actionable(&StoryStatus::Review));
    }

    #[test]
    fn test_non_actionable_statuses() {
        assert!(!is_actionable(&StoryStatus::Drafted));
        assert!(!is_actionable(&StoryStatus::InProgress));
        assert!(!is_actionable(&StoryStatus::Done));
        assert!(!is_actionable(&StoryStatus::Completed));
        assert!(!is_actionable(&StoryStatus::Other("on-hold".to_string())));
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(workflow_action(&StoryStatus::Backlog).unwrap().label, "Create Story");
        assert_eq!(workflow_action(&StoryStatus::ReadyForDev).unwrap().label, "Start Dev");
        assert_eq!(workflow_action(&StoryStatus::Review).unwrap().label, "Code Review");
    }

    #[test]
    fn test_full_command_closes_the_quote() {
        let action = workflow_action(&StoryStatus::Backlog).unwrap();
        assert_eq!(
            action.full_command("1-1-setup"),
            "claude \"/bmad:bmm:workflows:create-story 1-1-setup\""
        );
    }
}
