//! Derived Views
//!
//! Pure computations over store state, recomputed on every read.

use crate::models::{Comment, Discussion, Task, TaskCategory};
use crate::store::AppState;

/// Mandatory tasks followed by custom tasks
pub fn all_tasks(state: &AppState) -> Vec<Task> {
    state.tasks.iter().chain(state.custom_tasks.iter()).cloned().collect()
}

pub fn completed_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| t.is_completed).count()
}

/// Completed share in percent, 0 for an empty list
pub fn progress_percentage(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    completed_count(tasks) as f64 / tasks.len() as f64 * 100.0
}

/// Distinct categories of incomplete tasks, in order of first appearance
pub fn pending_categories(tasks: &[Task]) -> Vec<TaskCategory> {
    let mut categories = Vec::new();
    for task in tasks.iter().filter(|t| !t.is_completed) {
        if !categories.contains(&task.category) {
            categories.push(task.category);
        }
    }
    categories
}

/// IRP and PPS deadlines run from the arrival date
pub fn is_time_sensitive(task: &Task) -> bool {
    matches!(task.category, TaskCategory::Irp | TaskCategory::Pps) && !task.is_completed
}

pub fn filter_comments(comments: &[Comment], category: Option<TaskCategory>) -> Vec<Comment> {
    match category {
        None => comments.to_vec(),
        Some(cat) => comments.iter().filter(|c| c.category == cat).cloned().collect(),
    }
}

/// Case-insensitive label match
pub fn filter_discussions(discussions: &[Discussion], category: Option<&str>) -> Vec<Discussion> {
    match category {
        None => discussions.to_vec(),
        Some(label) => {
            let wanted = label.to_lowercase();
            discussions
                .iter()
                .filter(|d| d.category.to_lowercase() == wanted)
                .cloned()
                .collect()
        }
    }
}

/// Newest `n` discussions for the overview preview
pub fn recent_discussions(discussions: &[Discussion], n: usize) -> Vec<Discussion> {
    discussions.iter().take(n).cloned().collect()
}

/// First letter of each name part, "U" for an empty name
pub fn initials(name: &str) -> String {
    let letters: String = name.split_whitespace().filter_map(|part| part.chars().next()).collect();
    if letters.is_empty() {
        "U".to_string()
    } else {
        letters
    }
}

pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Nationality, Sentiment};
    use crate::reference;
    use chrono::Utc;

    fn task(id: &str, category: TaskCategory, done: bool) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: String::new(),
            category,
            is_mandatory: false,
            is_completed: done,
            applicable_nationalities: Nationality::ALL.to_vec(),
            link: None,
            due_date: None,
        }
    }

    fn discussion(id: &str, category: &str) -> Discussion {
        Discussion {
            id: id.to_string(),
            user_id: "u".to_string(),
            user_name: "U".to_string(),
            user_avatar: None,
            title: id.to_string(),
            content: String::new(),
            category: category.to_string(),
            created_at: Utc::now(),
            replies: Vec::new(),
        }
    }

    #[test]
    fn test_progress_empty_is_zero() {
        assert_eq!(progress_percentage(&[]), 0.0);
    }

    #[test]
    fn test_progress_monotonic_to_hundred() {
        let mut tasks = reference::tasks_for_nationality(Nationality::NonEu);
        assert_eq!(progress_percentage(&tasks), 0.0);

        let mut last = 0.0;
        for i in 0..tasks.len() {
            tasks[i].is_completed = true;
            let p = progress_percentage(&tasks);
            assert!(p >= last);
            last = p;
        }
        assert_eq!(last, 100.0);
    }

    #[test]
    fn test_progress_half() {
        let tasks = vec![task("a", TaskCategory::Bank, true), task("b", TaskCategory::Bank, false)];
        assert_eq!(progress_percentage(&tasks), 50.0);
        assert_eq!(completed_count(&tasks), 1);
    }

    #[test]
    fn test_all_tasks_order() {
        let mut state = AppState::default();
        state.tasks = vec![task("m1", TaskCategory::Irp, false)];
        state.custom_tasks = vec![task("c1", TaskCategory::Other, false)];
        let ids: Vec<String> = all_tasks(&state).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["m1", "c1"]);
    }

    #[test]
    fn test_pending_categories_first_appearance() {
        let tasks = vec![
            task("1", TaskCategory::Fees, false),
            task("2", TaskCategory::Irp, true),
            task("3", TaskCategory::Bank, false),
            task("4", TaskCategory::Fees, false),
            task("5", TaskCategory::Irp, false),
        ];
        assert_eq!(
            pending_categories(&tasks),
            vec![TaskCategory::Fees, TaskCategory::Bank, TaskCategory::Irp]
        );
    }

    #[test]
    fn test_time_sensitive() {
        assert!(is_time_sensitive(&task("1", TaskCategory::Irp, false)));
        assert!(is_time_sensitive(&task("2", TaskCategory::Pps, false)));
        assert!(!is_time_sensitive(&task("3", TaskCategory::Pps, true)));
        assert!(!is_time_sensitive(&task("4", TaskCategory::Bank, false)));
    }

    #[test]
    fn test_filter_comments() {
        let comments = reference::seed_comments();
        assert_eq!(filter_comments(&comments, None), comments);

        let bank = filter_comments(&comments, Some(TaskCategory::Bank));
        assert_eq!(bank.len(), 1);
        assert_eq!(bank[0].sentiment, Sentiment::Positive);
        assert!(filter_comments(&comments, Some(TaskCategory::Fees)).is_empty());
    }

    #[test]
    fn test_filter_discussions_ignores_case() {
        let discussions = vec![
            discussion("1", "Accommodation"),
            discussion("2", "General"),
            discussion("3", "accommodation"),
        ];
        let ids: Vec<String> = filter_discussions(&discussions, Some("ACCOMMODATION"))
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(filter_discussions(&discussions, None), discussions);
    }

    #[test]
    fn test_recent_discussions() {
        let discussions: Vec<_> = (0..5).map(|i| discussion(&i.to_string(), "General")).collect();
        assert_eq!(recent_discussions(&discussions, 3).len(), 3);
        assert_eq!(recent_discussions(&discussions[..1], 3).len(), 1);
    }

    #[test]
    fn test_initials_and_first_name() {
        assert_eq!(initials("Maria Santos"), "MS");
        assert_eq!(initials("  "), "U");
        assert_eq!(first_name("Maria Santos"), "Maria");
        assert_eq!(first_name(""), "");
    }
}
