use crate::ui::grid::intent::{Direction, GridIntent};
use crate::ui::grid::state::GridState;
use crate::ui::mvi::Reducer;

pub struct GridReducer;

impl Reducer for GridReducer {
    type State = GridState;
    type Intent = GridIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GridIntent::Reset => GridState::default(),
            GridIntent::Move { len: 0, .. } => GridState::default(),
            GridIntent::Move {
                direction,
                len,
                columns,
            } => {
                let columns = columns.max(1);
                let current = state.focused.min(len - 1);
                let focused = match direction {
                    Direction::Up => current.checked_sub(columns).unwrap_or(current),
                    Direction::Down if current + columns < len => current + columns,
                    Direction::Down => current,
                    Direction::Left if current % columns != 0 => current - 1,
                    Direction::Left => current,
                    Direction::Right if (current + 1) % columns != 0 && current + 1 < len => {
                        current + 1
                    }
                    Direction::Right => current,
                };
                GridState { focused }
            }
        }
    }
}
