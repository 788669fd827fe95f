use shared::widget::{WidgetAction, WidgetState};
use std::rc::Rc;
use yew::prelude::*;

use crate::services::date_utils::get_current_date;
use crate::services::logging::Logger;

/// Selection state owned by the root component
#[derive(Clone, PartialEq)]
pub struct WidgetStore {
    pub state: WidgetState,
}

impl Reducible for WidgetStore {
    type Action = WidgetAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.state.clone();
        let description = format!("{:?}", action);
        let effect = next.apply(action);

        if next == self.state {
            Logger::debug_with_component("widget", &format!("Ignored {}", description));
            return self;
        }
        Logger::debug_with_component("widget", &format!("{} -> {:?}", description, effect));
        Rc::new(Self { state: next })
    }
}

#[hook]
pub fn use_widget() -> UseReducerHandle<WidgetStore> {
    use_reducer(|| WidgetStore {
        state: WidgetState::new(get_current_date()),
    })
}
