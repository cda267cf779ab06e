use crate::ui::mvi::Reducer;
use crate::ui::nav::intent::NavIntent;
use crate::ui::nav::state::NavState;

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut stack = state.into_stack();
        match intent {
            NavIntent::Navigate(route) => {
                // Re-selecting the screen already on top is not a new visit.
                if stack.last() != Some(&route) {
                    stack.push(route);
                }
            }
            NavIntent::NavigateUp => {
                if stack.len() > 1 {
                    stack.pop();
                }
            }
        }
        NavState::from_stack(stack)
    }
}
