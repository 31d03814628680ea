use crate::app::AppAction;
use crate::mvi::Reducer;
use crate::other::action::OtherAction;
use crate::other::state::OtherState;

pub struct OtherReducer;

impl Reducer for OtherReducer {
    type State = OtherState;
    type Action = AppAction;

    fn reduce(state: Option<Self::State>, action: &Self::Action) -> Self::State {
        let state = state.unwrap_or_default();
        let Some(action) = action.as_other() else {
            tracing::debug!("other reducer nothing");
            return state;
        };

        // The carried value or message is observed only; OtherState stays empty.
        match action {
            OtherAction::Ok(value) => {
                tracing::debug!(value = *value, "other reducer ok");
            }
            OtherAction::Err(message) => {
                tracing::debug!(error = %message, "other reducer err");
            }
        }
        state
    }
}
