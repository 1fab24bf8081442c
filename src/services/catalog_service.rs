use crate::dto::user_dto::UserResponse;
use crate::models::catalog::{IssueType, Label};
use crate::models::project::{Issue, Project};
use crate::utils::time::now;

/// Static sample data for the read-only endpoints.
#[derive(Clone)]
pub struct CatalogService {
    sample_user: UserResponse,
}

impl CatalogService {
    pub fn new(sample_user: UserResponse) -> Self {
        Self { sample_user }
    }

    pub fn projects(&self) -> Vec<Project> {
        vec![Project {
            id: "1".to_string(),
            name: "Sample QA Project".to_string(),
            description: "Test project for QA Bug Tracker".to_string(),
            status: "In Progress".to_string(),
            issue_count: 1,
            progress: 25,
        }]
    }

    /// `project_id` is echoed back, not used to filter.
    pub fn issues_for_project(&self, project_id: &str) -> Vec<Issue> {
        vec![Issue {
            id: "1".to_string(),
            project_id: project_id.to_string(),
            bug_id: "SAMPLE-001".to_string(),
            title: "Sample Issue for Testing".to_string(),
            description: "This is a sample issue to test functionality".to_string(),
            issue_type: "Bug".to_string(),
            severity: "Medium".to_string(),
            priority: "P2".to_string(),
            status: "Open".to_string(),
            assigned_to: self.sample_user.clone(),
            reported_by: self.sample_user.clone(),
            created_at: now(),
        }]
    }

    pub fn labels(&self) -> Vec<Label> {
        [
            ("1", "UI", "#3b82f6"),
            ("2", "Backend", "#10b981"),
            ("3", "Regression", "#ef4444"),
            ("4", "Performance", "#f59e0b"),
        ]
        .into_iter()
        .map(|(id, name, color)| Label {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
        })
        .collect()
    }

    pub fn issue_types(&self) -> Vec<IssueType> {
        [
            ("1", "Bug", "A defect in existing behavior"),
            ("2", "Feature", "New functionality request"),
            ("3", "Improvement", "Enhancement to existing functionality"),
            ("4", "Task", "General work item"),
        ]
        .into_iter()
        .map(|(id, name, description)| IssueType {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect()
    }
}
