use crate::{AppState, Effect, Location, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted { location, contacts } => {
            state.clear_pending();
            state.commit(location, contacts);
            let text = state.display_committed();
            vec![Effect::SetFieldValue(text)]
        }
        Msg::InputChanged(value) => {
            // Decided from the committed query before this keystroke, never
            // from whatever is still in flight.
            let location = Location::search(&value);
            let mode = state.history_mode_for_search(&location);
            state.begin_editing(value);
            vec![Effect::Navigate { location, mode }]
        }
        Msg::NavigationStarted { target } => {
            state.set_pending(target);
            Vec::new()
        }
        Msg::NavigationCommitted { location, contacts } => {
            let previous_query = state.committed_query().map(ToOwned::to_owned);
            let previous_text = state.field_value().to_owned();
            state.clear_pending();
            state.commit(location, contacts);
            let query_changed = state.committed_query() != previous_query.as_deref();
            let text = state.display_committed();
            if query_changed || text != previous_text {
                vec![Effect::SetFieldValue(text)]
            } else {
                Vec::new()
            }
        }
        Msg::NavigationAbandoned => {
            state.clear_pending();
            Vec::new()
        }
        Msg::CreateContactClicked => vec![Effect::CreateContact],
    };

    (state, effects)
}
