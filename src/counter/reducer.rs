use crate::app::AppAction;
use crate::counter::action::CounterAction;
use crate::counter::state::CounterState;
use crate::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = AppAction;

    fn reduce(state: Option<Self::State>, action: &Self::Action) -> Self::State {
        let mut state = state.unwrap_or_default();

        match action {
            AppAction::Counter(CounterAction::Increase) => {
                state.counter = state.counter.saturating_add(1);
            }
            AppAction::Counter(CounterAction::Decrease) => {
                state.counter = state.counter.saturating_sub(1);
            }
            _ => {}
        }
        tracing::debug!(counter = state.counter, "counter reducer state");

        state
    }
}
