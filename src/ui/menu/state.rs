use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Movies,
    About,
    Exit,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 3] = [MenuEntry::Movies, MenuEntry::About, MenuEntry::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Movies => "Movies",
            MenuEntry::About => "About",
            MenuEntry::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuState {
    pub focused: usize,
}

impl UiState for MenuState {}

impl MenuState {
    pub fn focused_entry(&self) -> MenuEntry {
        MenuEntry::ALL[self.focused.min(MenuEntry::ALL.len() - 1)]
    }
}
