//! Global Application State Store
//!
//! `AppState` is a plain value; every transition goes through [`reduce`].
//! Components read it through a Leptos `reactive_stores::Store`.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::env::IdSource;
use crate::models::{
    Comment, CommentDraft, Discussion, DiscussionDraft, DiscussionReply, Nationality, Task,
    TaskDraft, User,
};
use crate::reference;

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Signed-in student (None = no session)
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_onboarded: bool,
    /// Mandatory tasks from the nationality templates
    pub tasks: Vec<Task>,
    /// User-authored tasks
    pub custom_tasks: Vec<Task>,
    /// Community feed, most recent first
    pub comments: Vec<Comment>,
    /// Forum threads, most recent first
    pub discussions: Vec<Discussion>,
}

impl AppState {
    /// Empty session with the community seed content
    pub fn seeded() -> Self {
        Self {
            comments: reference::seed_comments(),
            discussions: reference::seed_discussions(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Actions
// ========================

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Login { email: String, name: String },
    CompleteOnboarding { nationality: Nationality, degree: String },
    Logout,
    ToggleTask(String),
    AddCustomTask(TaskDraft),
    DeleteCustomTask(String),
    AddComment(CommentDraft),
    LikeComment(String),
    AddDiscussion(DiscussionDraft),
    AddReply { discussion_id: String, content: String },
}

/// Injected effects available to the reducer
pub struct ReduceEnv<'a> {
    pub ids: &'a mut dyn IdSource,
    pub now: DateTime<Utc>,
}

/// Author fields stamped on social content
struct Author {
    id: String,
    name: String,
    avatar: Option<String>,
}

fn current_author(state: &AppState) -> Option<Author> {
    state.user.as_ref().map(|u| Author {
        id: u.id.clone(),
        name: u.name.clone(),
        avatar: u.avatar.clone(),
    })
}

/// Apply one action. Unmet preconditions (no user, unknown id) leave the state unchanged.
pub fn reduce(mut state: AppState, action: Action, env: &mut ReduceEnv) -> AppState {
    match action {
        Action::Login { email, name } => {
            state.user = Some(User {
                id: env.ids.next_id(),
                email,
                name,
                nationality: Nationality::Eu,
                degree: String::new(),
                avatar: None,
                created_at: env.now,
            });
            state.is_authenticated = true;
        }
        Action::CompleteOnboarding { nationality, degree } => {
            if let Some(user) = state.user.as_mut() {
                user.nationality = nationality;
                user.degree = degree;
                state.is_onboarded = true;
                state.tasks = reference::tasks_for_nationality(nationality);
            }
        }
        Action::Logout => {
            state.user = None;
            state.is_authenticated = false;
            state.is_onboarded = false;
            state.tasks.clear();
            state.custom_tasks.clear();
        }
        Action::ToggleTask(task_id) => {
            if let Some(task) = state
                .tasks
                .iter_mut()
                .chain(state.custom_tasks.iter_mut())
                .find(|t| t.id == task_id)
            {
                task.is_completed = !task.is_completed;
            }
        }
        Action::AddCustomTask(draft) => {
            state.custom_tasks.push(Task {
                id: format!("custom-{}", env.ids.next_id()),
                title: draft.title,
                description: draft.description,
                category: draft.category,
                is_mandatory: false,
                is_completed: false,
                applicable_nationalities: Nationality::ALL.to_vec(),
                link: draft.link,
                due_date: draft.due_date,
            });
        }
        Action::DeleteCustomTask(task_id) => {
            state.custom_tasks.retain(|t| t.id != task_id);
        }
        Action::AddComment(draft) => {
            if let Some(author) = current_author(&state) {
                let comment = Comment {
                    id: env.ids.next_id(),
                    user_id: author.id,
                    user_name: author.name,
                    user_avatar: author.avatar,
                    content: draft.content,
                    category: draft.category,
                    sentiment: draft.sentiment,
                    created_at: env.now,
                    likes: 0,
                };
                state.comments.insert(0, comment);
            }
        }
        Action::LikeComment(comment_id) => {
            if let Some(comment) = state.comments.iter_mut().find(|c| c.id == comment_id) {
                comment.likes = comment.likes.saturating_add(1);
            }
        }
        Action::AddDiscussion(draft) => {
            if let Some(author) = current_author(&state) {
                let discussion = Discussion {
                    id: env.ids.next_id(),
                    user_id: author.id,
                    user_name: author.name,
                    user_avatar: author.avatar,
                    title: draft.title,
                    content: draft.content,
                    category: draft.category,
                    created_at: env.now,
                    replies: Vec::new(),
                };
                state.discussions.insert(0, discussion);
            }
        }
        Action::AddReply { discussion_id, content } => {
            if content.trim().is_empty() {
                return state;
            }
            let Some(author) = current_author(&state) else {
                return state;
            };
            if let Some(discussion) = state.discussions.iter_mut().find(|d| d.id == discussion_id) {
                discussion.replies.push(DiscussionReply {
                    id: env.ids.next_id(),
                    user_id: author.id,
                    user_name: author.name,
                    user_avatar: author.avatar,
                    content,
                    created_at: env.now,
                });
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SequentialIds;
    use crate::models::{Sentiment, TaskCategory};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 10, 0, 0).unwrap()
    }

    /// Run actions in order with deterministic ids
    fn run(state: AppState, actions: Vec<Action>, ids: &mut SequentialIds) -> AppState {
        actions.into_iter().fold(state, |s, a| {
            let mut env = ReduceEnv { ids: &mut *ids, now: now() };
            reduce(s, a, &mut env)
        })
    }

    fn login() -> Action {
        Action::Login {
            email: "a.student@universityofgalway.ie".to_string(),
            name: "Aoife Student".to_string(),
        }
    }

    fn onboard(nationality: Nationality) -> Action {
        Action::CompleteOnboarding { nationality, degree: "BA Arts".to_string() }
    }

    fn draft(title: &str) -> TaskDraft {
        TaskDraft { title: title.to_string(), ..Default::default() }
    }

    fn onboarded(nationality: Nationality, ids: &mut SequentialIds) -> AppState {
        run(AppState::seeded(), vec![login(), onboard(nationality)], ids)
    }

    #[test]
    fn test_login_creates_default_user() {
        let mut ids = SequentialIds::default();
        let state = run(AppState::default(), vec![login()], &mut ids);

        let user = state.user.as_ref().unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.nationality, Nationality::Eu);
        assert_eq!(user.degree, "");
        assert_eq!(user.created_at, now());
        assert!(state.is_authenticated);
        assert!(!state.is_onboarded);
    }

    #[test]
    fn test_onboarding_without_user_is_noop() {
        let mut ids = SequentialIds::default();
        let state = run(AppState::default(), vec![onboard(Nationality::Usa)], &mut ids);
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn test_onboarding_materializes_templates() {
        for n in Nationality::ALL {
            let mut ids = SequentialIds::default();
            let state = onboarded(n, &mut ids);
            assert_eq!(state.tasks, reference::tasks_for_nationality(n));
            assert!(state.is_onboarded);
            let user = state.user.as_ref().unwrap();
            assert_eq!(user.nationality, n);
            assert_eq!(user.degree, "BA Arts");

            // repeat with the same nationality changes nothing
            let again = run(state.clone(), vec![onboard(n)], &mut ids);
            assert_eq!(again, state);
        }
    }

    #[test]
    fn test_onboarding_keeps_custom_tasks() {
        let mut ids = SequentialIds::default();
        let state = run(
            AppState::default(),
            vec![login(), Action::AddCustomTask(draft("Buy a bike")), onboard(Nationality::NonEu)],
            &mut ids,
        );
        assert_eq!(state.custom_tasks.len(), 1);
        assert_eq!(state.custom_tasks[0].title, "Buy a bike");
    }

    #[test]
    fn test_logout_keeps_community_content() {
        let mut ids = SequentialIds::default();
        let state = onboarded(Nationality::Eu, &mut ids);
        let state = run(
            state,
            vec![
                Action::AddCustomTask(draft("Buy a bike")),
                Action::AddComment(CommentDraft {
                    content: "Hello".to_string(),
                    category: TaskCategory::Other,
                    sentiment: Sentiment::Neutral,
                }),
                Action::Logout,
            ],
            &mut ids,
        );

        assert!(state.user.is_none());
        assert!(!state.is_authenticated);
        assert!(!state.is_onboarded);
        assert!(state.tasks.is_empty());
        assert!(state.custom_tasks.is_empty());
        assert_eq!(state.comments.len(), 4);
        assert_eq!(state.discussions.len(), 1);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut ids = SequentialIds::default();
        let state = onboarded(Nationality::NonEu, &mut ids);
        let state = run(state, vec![Action::AddCustomTask(draft("Buy a bike"))], &mut ids);
        let mandatory_id = state.tasks[0].id.clone();
        let custom_id = state.custom_tasks[0].id.clone();

        let once = run(
            state.clone(),
            vec![Action::ToggleTask(mandatory_id.clone()), Action::ToggleTask(custom_id.clone())],
            &mut ids,
        );
        assert!(once.tasks[0].is_completed);
        assert!(once.custom_tasks[0].is_completed);
        assert!(once.tasks[1..].iter().all(|t| !t.is_completed));

        let twice = run(
            once,
            vec![Action::ToggleTask(mandatory_id), Action::ToggleTask(custom_id)],
            &mut ids,
        );
        assert_eq!(twice, state);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut ids = SequentialIds::default();
        let state = onboarded(Nationality::Eu, &mut ids);
        let after = run(state.clone(), vec![Action::ToggleTask("missing".to_string())], &mut ids);
        assert_eq!(after, state);
    }

    #[test]
    fn test_add_custom_task_fields() {
        let mut ids = SequentialIds::default();
        let task_draft = TaskDraft {
            title: "Get a Leap card".to_string(),
            description: "Student travel card".to_string(),
            category: TaskCategory::Other,
            link: Some("https://www.leapcard.ie".to_string()),
            due_date: Some("First week".to_string()),
        };
        let state = run(AppState::default(), vec![Action::AddCustomTask(task_draft)], &mut ids);

        let task = &state.custom_tasks[0];
        assert_eq!(task.id, "custom-1");
        assert!(!task.is_mandatory);
        assert!(!task.is_completed);
        assert_eq!(task.applicable_nationalities, Nationality::ALL.to_vec());
        assert_eq!(task.link.as_deref(), Some("https://www.leapcard.ie"));
        assert_eq!(task.due_date.as_deref(), Some("First week"));
    }

    #[test]
    fn test_add_then_delete_restores_custom_list() {
        let mut ids = SequentialIds::default();
        let state = onboarded(Nationality::Usa, &mut ids);
        let state = run(state, vec![Action::AddCustomTask(draft("First"))], &mut ids);
        let before = state.custom_tasks.clone();

        let added = run(state, vec![Action::AddCustomTask(draft("Second"))], &mut ids);
        let new_id = added.custom_tasks.last().unwrap().id.clone();
        let removed = run(added, vec![Action::DeleteCustomTask(new_id)], &mut ids);
        assert_eq!(removed.custom_tasks, before);
    }

    #[test]
    fn test_delete_cannot_remove_mandatory() {
        let mut ids = SequentialIds::default();
        let state = onboarded(Nationality::Usa, &mut ids);
        let mandatory_id = state.tasks[0].id.clone();
        let after = run(state.clone(), vec![Action::DeleteCustomTask(mandatory_id)], &mut ids);
        assert_eq!(after.tasks, state.tasks);
    }

    #[test]
    fn test_add_comment_requires_user_and_prepends() {
        let mut ids = SequentialIds::default();
        let comment = || {
            Action::AddComment(CommentDraft {
                content: "Great tips".to_string(),
                category: TaskCategory::Bank,
                sentiment: Sentiment::Positive,
            })
        };

        let anonymous = run(AppState::seeded(), vec![comment()], &mut ids);
        assert_eq!(anonymous.comments, reference::seed_comments());

        let state = run(AppState::seeded(), vec![login(), comment()], &mut ids);
        let first = &state.comments[0];
        assert_eq!(state.comments.len(), 4);
        assert_eq!(first.user_name, "Aoife Student");
        assert_eq!(first.user_id, state.user.as_ref().unwrap().id);
        assert_eq!(first.likes, 0);
        assert_eq!(first.created_at, now());
        assert_eq!(&state.comments[1..], reference::seed_comments().as_slice());
    }

    #[test]
    fn test_like_increments_only_target() {
        let mut ids = SequentialIds::default();
        let state = run(
            AppState::seeded(),
            vec![Action::LikeComment("2".to_string()), Action::LikeComment("2".to_string())],
            &mut ids,
        );
        let likes: Vec<u32> = state.comments.iter().map(|c| c.likes).collect();
        assert_eq!(likes, vec![12, 10, 15]);

        let unchanged = run(state.clone(), vec![Action::LikeComment("nope".to_string())], &mut ids);
        assert_eq!(unchanged, state);
    }

    #[test]
    fn test_add_discussion_prepends_with_empty_replies() {
        let mut ids = SequentialIds::default();
        let action = Action::AddDiscussion(DiscussionDraft {
            title: "Where to buy bedding?".to_string(),
            content: "Just arrived".to_string(),
            category: "Accommodation".to_string(),
        });
        let state = run(AppState::seeded(), vec![login(), action.clone()], &mut ids);
        let user = state.user.as_ref().unwrap();
        let first = &state.discussions[0];
        assert_eq!(state.discussions.len(), 2);
        assert_eq!(first.title, "Where to buy bedding?");
        assert_eq!(first.content, "Just arrived");
        assert_eq!(first.category, "Accommodation");
        assert_eq!(first.user_id, user.id);
        assert_eq!(first.user_name, "Aoife Student");
        assert_eq!(first.user_avatar, None);
        assert_eq!(first.created_at, now());
        assert_ne!(first.id, user.id);
        assert!(first.replies.is_empty());

        let anonymous = run(AppState::seeded(), vec![action], &mut ids);
        assert_eq!(anonymous.discussions, reference::seed_discussions());
    }

    #[test]
    fn test_add_reply_appends_at_end() {
        let mut ids = SequentialIds::default();
        let state = run(
            AppState::seeded(),
            vec![
                login(),
                Action::AddDiscussion(DiscussionDraft {
                    title: "Other thread".to_string(),
                    content: "...".to_string(),
                    category: "General".to_string(),
                }),
            ],
            &mut ids,
        );
        let before = state.clone();

        let state = run(
            state,
            vec![Action::AddReply { discussion_id: "1".to_string(), content: "hello".to_string() }],
            &mut ids,
        );
        let target = state.discussions.iter().find(|d| d.id == "1").unwrap();
        let original = before.discussions.iter().find(|d| d.id == "1").unwrap();
        assert_eq!(target.replies.len(), original.replies.len() + 1);
        assert_eq!(&target.replies[..original.replies.len()], original.replies.as_slice());
        let reply = target.replies.last().unwrap();
        let user = state.user.as_ref().unwrap();
        assert_eq!(reply.content, "hello");
        assert_eq!(reply.user_id, user.id);
        assert_eq!(reply.user_name, "Aoife Student");
        assert_eq!(reply.created_at, now());
        assert!(target.replies.iter().filter(|r| r.id == reply.id).count() == 1);
        assert_eq!(state.discussions[0], before.discussions[0]);
    }

    #[test]
    fn test_add_reply_noops() {
        let mut ids = SequentialIds::default();
        let state = run(AppState::seeded(), vec![login()], &mut ids);

        let unknown = run(
            state.clone(),
            vec![Action::AddReply {
                discussion_id: "zzz".to_string(),
                content: "hello".to_string(),
            }],
            &mut ids,
        );
        assert_eq!(unknown.discussions, state.discussions);

        let blank = run(
            state.clone(),
            vec![Action::AddReply { discussion_id: "1".to_string(), content: "   ".to_string() }],
            &mut ids,
        );
        assert_eq!(blank.discussions, state.discussions);

        let anonymous = run(
            AppState::seeded(),
            vec![Action::AddReply { discussion_id: "1".to_string(), content: "hello".to_string() }],
            &mut ids,
        );
        assert_eq!(anonymous.discussions, reference::seed_discussions());
    }
}
