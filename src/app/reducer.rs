use crate::app::action::AppAction;
use crate::app::state::AppState;
use crate::counter::CounterReducer;
use crate::mvi::Reducer;
use crate::other::OtherReducer;

/// Root reducer. Delegates to sub-reducers by action family.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(state: Option<Self::State>, action: &Self::Action) -> Self::State {
        let mut state = state.unwrap_or_default();

        // Independent checks: an action matching several families hits each of them.
        if action.is_counter() {
            state.counter_state = CounterReducer::reduce(Some(state.counter_state), action);
        }
        if action.as_other().is_some() {
            state.other_state = OtherReducer::reduce(Some(state.other_state), action);
        }

        state
    }
}
