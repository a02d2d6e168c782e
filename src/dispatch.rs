use crate::catalog::Category;
use crate::clipboard::export_text;
use crate::keyboard::{command_for_key, KeyCommand, KeyInput};
use crate::render::{project, RenderOptions, ViewModel};
use crate::selection::SelectionState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    SelectCategory(String),
    SelectTab(usize),
    Search(String),
    ToggleExpand(String),
    Copy(String),
    FocusSearch,
    ClearSearch,
}

impl From<KeyCommand> for Intent {
    fn from(command: KeyCommand) -> Self {
        match command {
            KeyCommand::FocusSearch => Intent::FocusSearch,
            KeyCommand::ClearSearch => Intent::ClearSearch,
            KeyCommand::SelectTab(index) => Intent::SelectTab(index),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiCommand {
    Render(ViewModel),
    ResetSearchInput,
    FocusSearch,
    BlurSearch,
    Copy(String),
}

/// Everything the dispatcher needs from whatever draws the page.
pub trait Presenter {
    fn apply(&mut self, command: UiCommand);
}

pub struct Dispatcher {
    state: SelectionState,
    options: RenderOptions,
}

impl Dispatcher {
    pub fn new(
        catalog: &'static [Category],
        initial_category: Option<&str>,
        options: RenderOptions,
    ) -> Option<Self> {
        let state = SelectionState::new(catalog, initial_category)?;
        Some(Self { state, options })
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn view(&self) -> ViewModel {
        project(&self.state, &self.options)
    }

    /// Key presses that map to nothing are left to the browser.
    pub fn key_command(&self, input: &KeyInput) -> Option<KeyCommand> {
        command_for_key(input, self.state.catalog().len())
    }

    pub fn handle<P: Presenter>(&mut self, intent: Intent, presenter: &mut P) {
        match intent {
            Intent::SelectCategory(id) => {
                if self.state.select_category(&id).changed() {
                    presenter.apply(UiCommand::ResetSearchInput);
                    presenter.apply(UiCommand::Render(self.view()));
                }
            }
            Intent::SelectTab(index) => {
                if self.state.select_category_at(index).changed() {
                    presenter.apply(UiCommand::ResetSearchInput);
                    presenter.apply(UiCommand::Render(self.view()));
                }
            }
            Intent::Search(term) => {
                self.state.search(&term);
                presenter.apply(UiCommand::Render(self.view()));
            }
            Intent::ToggleExpand(note_id) => {
                if self.state.toggle_expand(&note_id).changed() {
                    presenter.apply(UiCommand::Render(self.view()));
                }
            }
            Intent::Copy(note_id) => match self.state.note_by_id(&note_id) {
                Some(note) => presenter.apply(UiCommand::Copy(export_text(note))),
                None => log::debug!("ignoring copy of unknown note `{note_id}`"),
            },
            Intent::FocusSearch => presenter.apply(UiCommand::FocusSearch),
            Intent::ClearSearch => {
                self.state.search("");
                presenter.apply(UiCommand::ResetSearchInput);
                presenter.apply(UiCommand::BlurSearch);
                presenter.apply(UiCommand::Render(self.view()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATEGORIES;
    use crate::render::DisplayUnit;

    #[derive(Default)]
    struct Recorder(Vec<UiCommand>);

    impl Presenter for Recorder {
        fn apply(&mut self, command: UiCommand) {
            self.0.push(command);
        }
    }

    impl Recorder {
        fn last_view(&self) -> &ViewModel {
            self.0
                .iter()
                .rev()
                .find_map(|command| match command {
                    UiCommand::Render(view) => Some(view),
                    _ => None,
                })
                .expect("a render was emitted")
        }
    }

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(CATEGORIES, None, RenderOptions::default()).unwrap()
    }

    #[test]
    fn category_switch_resets_input_and_renders() {
        let mut dispatcher = dispatcher();
        let mut presenter = Recorder::default();
        dispatcher.handle(Intent::SelectCategory("econ".into()), &mut presenter);

        assert_eq!(presenter.0[0], UiCommand::ResetSearchInput);
        let view = presenter.last_view();
        assert_eq!(view.search_placeholder, "搜尋 Econ 筆記...");
        assert_eq!(view.units.len(), 2);
    }

    #[test]
    fn repeated_or_unknown_selection_emits_nothing() {
        let mut dispatcher = dispatcher();
        let mut presenter = Recorder::default();
        dispatcher.handle(Intent::SelectCategory("chinese".into()), &mut presenter);
        dispatcher.handle(Intent::SelectCategory("physics".into()), &mut presenter);
        dispatcher.handle(Intent::SelectTab(9), &mut presenter);
        dispatcher.handle(Intent::ToggleExpand("nope".into()), &mut presenter);
        dispatcher.handle(Intent::Copy("nope".into()), &mut presenter);
        assert!(presenter.0.is_empty());
    }

    #[test]
    fn search_without_matches_renders_placeholder() {
        let mut dispatcher = dispatcher();
        let mut presenter = Recorder::default();
        dispatcher.handle(Intent::Search("zzz".into()), &mut presenter);
        assert_eq!(presenter.last_view().units, vec![DisplayUnit::NoResults]);
    }

    #[test]
    fn toggle_rerenders_the_expanded_card() {
        let mut dispatcher = dispatcher();
        let mut presenter = Recorder::default();
        dispatcher.handle(Intent::ToggleExpand("essay_writing".into()), &mut presenter);
        assert!(presenter.last_view().is_expanded("essay_writing"));
        assert!(!presenter.last_view().is_expanded("classical_chinese"));
    }

    #[test]
    fn copy_emits_export_text_for_current_category() {
        let mut dispatcher = dispatcher();
        let mut presenter = Recorder::default();
        dispatcher.handle(Intent::SelectTab(1), &mut presenter);
        dispatcher.handle(Intent::Copy("grammar_hacks".into()), &mut presenter);

        let Some(UiCommand::Copy(text)) = presenter.0.last() else {
            panic!("expected a copy command, got {:?}", presenter.0.last());
        };
        assert!(text.starts_with("Grammar Hacks\n\n"));
        assert!(text.ends_with("Tags: grammar, tenses, DSE English"));
    }

    #[test]
    fn escape_in_search_clears_filter_and_blurs() {
        let mut dispatcher = dispatcher();
        let mut presenter = Recorder::default();
        dispatcher.handle(Intent::Search("文言".into()), &mut presenter);
        assert_eq!(presenter.last_view().units.len(), 1);

        let input = KeyInput {
            search_focused: true,
            ..KeyInput::new("Escape")
        };
        let intent = Intent::from(dispatcher.key_command(&input).unwrap());
        dispatcher.handle(intent, &mut presenter);

        assert!(presenter.0.contains(&UiCommand::BlurSearch));
        assert_eq!(dispatcher.state().search_term(), "");
        assert_eq!(presenter.last_view().units.len(), 2);
    }

    #[test]
    fn digit_keys_switch_tabs() {
        let mut dispatcher = dispatcher();
        let mut presenter = Recorder::default();
        let intent = Intent::from(dispatcher.key_command(&KeyInput::new("3")).unwrap());
        dispatcher.handle(intent, &mut presenter);
        assert_eq!(dispatcher.state().category().id, "econ");
        assert!(dispatcher.key_command(&KeyInput::new("x")).is_none());
    }
}
