use serde::{Deserialize, Serialize};

/// Parsed contents of a `sprint-status.yaml` file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SprintData {
    pub project: String,
    pub project_key: String,
    /// Epics in ascending numeric order, regardless of source key order.
    pub epics: Vec<Epic>,
}

/// A grouping unit identified by an `epic-<N>` key.
///
/// Owns its stories; story order is the order the keys appear in the
/// source document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Epic {
    pub id: String,
    pub name: String,
    pub status: StoryStatus,
    pub stories: Vec<Story>,
}

impl Epic {
    /// Number of stories in terminal `done` state, for progress display.
    pub fn done_count(&self) -> usize {
        self.stories
            .iter()
            .filter(|s| s.status == StoryStatus::Done)
            .count()
    }
}

/// A unit of work identified by a `<N>-<slug>` key, belonging to epic `N`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Story {
    pub id: String,
    pub status: StoryStatus,
    /// Id of the owning epic (`epic-<N>`), for lookup only.
    pub epic_id: String,
}

/// Progress state of an epic or story.
///
/// The recognized vocabulary is closed; values outside it are carried
/// through verbatim in `Other` so they still display, just without an
/// associated glyph or action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum StoryStatus {
    Backlog,
    Drafted,
    ReadyForDev,
    InProgress,
    Review,
    Done,
    Completed,
    Other(String),
}

impl StoryStatus {
    pub fn as_str(&self) -> &str {
        match self {
            StoryStatus::Backlog => "backlog",
            StoryStatus::Drafted => "drafted",
            StoryStatus::ReadyForDev => "ready-for-dev",
            StoryStatus::InProgress => "in-progress",
            StoryStatus::Review => "review",
            StoryStatus::Done => "done",
            StoryStatus::Completed => "completed",
            StoryStatus::Other(s) => s,
        }
    }
}

impl From<&str> for StoryStatus {
    fn from(s: &str) -> Self {
        match s {
            "backlog" => StoryStatus::Backlog,
            "drafted" => StoryStatus::Drafted,
            "ready-for-dev" => StoryStatus::ReadyForDev,
            "in-progress" => StoryStatus::InProgress,
            "review" => StoryStatus::Review,
            "done" => StoryStatus::Done,
            "completed" => StoryStatus::Completed,
            other => StoryStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for StoryStatus {
    fn from(s: String) -> Self {
        StoryStatus::from(s.as_str())
    }
}

impl From<StoryStatus> for String {
    fn from(status: StoryStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for StoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip_known_values() {
        for s in [
            "backlog",
            "drafted",
            "ready-for-dev",
            "in-progress",
            "review",
            "done",
            "completed",
        ] {
            let status = StoryStatus::from(s);
            assert!(
                !matches!(status, StoryStatus::Other(_)),
                "{s} should be recognized"
            );
            assert_eq!(status.as_str(), s);
        }
    }

    #[test]
    fn test_status_unrecognized_passes_through() {
        let status = StoryStatus::from("on-hold");
        assert_eq!(status, StoryStatus::Other("on-hold".to_string()));
        assert_eq!(status.to_string(), "on-hold");
    }

    #[test]
    fn test_done_count_ignores_completed() {
        let epic = Epic {
            id: "epic-1".to_string(),
            name: "Epic 1".to_string(),
            status: StoryStatus::InProgress,
            stories: vec![
                Story {
                    id: "1-1-a".to_string(),
                    status: StoryStatus::Done,
                    epic_id: "epic-1".to_string(),
                },
                Story {
                    id: "1-2-b".to_string(),
                    status: StoryStatus::Completed,
                    epic_id: "epic-1".to_string(),
                },
            ],
        };
        assert_eq!(epic.done_count(), 1);
    }
}
