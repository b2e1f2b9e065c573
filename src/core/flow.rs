//! Wizard flow validation.
//!
//! The four ordered screens (Landing → FormatSelection → Converting →
//! Results, with Settings off Landing) form a small state machine. The
//! entry guards that used to live scattered in view effects are pulled
//! out here as a pure function: given a step and the current session,
//! either the step is valid or the user is redirected to the step that
//! can repair the missing state.

use crate::core::session::Session;
use crate::models::Route;

/// Named wizard steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Landing,
    FormatSelection,
    Converting,
    Results,
    Settings,
}

impl Step {
    /// The wizard step a route lands on.
    pub fn for_route(route: &Route) -> Step {
        match route {
            Route::Home => Step::Landing,
            Route::Select { .. } => Step::FormatSelection,
            Route::Convert => Step::Converting,
            Route::Results => Step::Results,
            Route::Settings => Step::Settings,
        }
    }
}

/// Validate entering `step` with the given session.
///
/// Returns the step to redirect to when required state is missing:
/// Converting needs a file and an output format. Results tolerates a
/// missing result (the view renders a terminal empty state instead of
/// redirecting), so only Converting guards.
pub fn entry_guard(step: Step, session: &Session) -> Option<Step> {
    match step {
        Step::Converting if !session.ready_to_convert() => Some(Step::FormatSelection),
        _ => None,
    }
}

/// Route for a redirect target produced by [`entry_guard`].
pub fn redirect_route(step: Step) -> Route {
    match step {
        Step::Landing => Route::Home,
        Step::FormatSelection => Route::Select { category: None },
        Step::Converting => Route::Convert,
        Step::Results => Route::Results,
        Step::Settings => Route::Settings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, FileDescriptor};

    fn ready_session() -> Session {
        let mut session = Session::default();
        session.set_file(Some(FileDescriptor {
            name: "photo.png".to_string(),
            size: 100,
            mime_type: "image/png".to_string(),
            last_modified: 0.0,
        }));
        session.set_output_format(Some("webp".to_string()));
        session
    }

    #[test]
    fn test_converting_requires_file_and_format() {
        let empty = Session::default();
        assert_eq!(
            entry_guard(Step::Converting, &empty),
            Some(Step::FormatSelection)
        );

        let mut file_only = ready_session();
        file_only.set_output_format(None);
        assert_eq!(
            entry_guard(Step::Converting, &file_only),
            Some(Step::FormatSelection)
        );

        assert_eq!(entry_guard(Step::Converting, &ready_session()), None);
    }

    #[test]
    fn test_other_steps_are_always_enterable() {
        let empty = Session::default();
        for step in [
            Step::Landing,
            Step::FormatSelection,
            Step::Results,
            Step::Settings,
        ] {
            assert_eq!(entry_guard(step, &empty), None);
        }
    }

    #[test]
    fn test_step_for_route() {
        assert_eq!(Step::for_route(&Route::Home), Step::Landing);
        assert_eq!(
            Step::for_route(&Route::Select {
                category: Some(Category::Images),
            }),
            Step::FormatSelection
        );
        assert_eq!(Step::for_route(&Route::Convert), Step::Converting);
        assert_eq!(Step::for_route(&Route::Results), Step::Results);
        assert_eq!(Step::for_route(&Route::Settings), Step::Settings);
    }

    #[test]
    fn test_redirect_route_round_trips_through_steps() {
        for step in [
            Step::Landing,
            Step::FormatSelection,
            Step::Converting,
            Step::Results,
            Step::Settings,
        ] {
            assert_eq!(Step::for_route(&redirect_route(step)), step);
        }
    }
}
