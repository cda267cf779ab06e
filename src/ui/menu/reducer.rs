use crate::ui::menu::intent::MenuIntent;
use crate::ui::menu::state::{MenuEntry, MenuState};
use crate::ui::mvi::Reducer;

pub struct MenuReducer;

impl Reducer for MenuReducer {
    type State = MenuState;
    type Intent = MenuIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let len = MenuEntry::ALL.len();
        let focused = match intent {
            MenuIntent::MoveUp => {
                if state.focused == 0 {
                    len - 1
                } else {
                    state.focused - 1
                }
            }
            MenuIntent::MoveDown => {
                if state.focused + 1 >= len {
                    0
                } else {
                    state.focused + 1
                }
            }
            MenuIntent::Focus(index) if index < len => index,
            MenuIntent::Focus(_) => state.focused,
        };
        MenuState { focused }
    }
}
