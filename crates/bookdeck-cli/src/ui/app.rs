use bookdeck_engine::Browser;
use bookdeck_types::{
    AuthorId, AuthorSelect, BookFilter, BookId, Catalog, GenreId, GenreSelect, Theme,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which surface currently owns key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Search,
    Settings,
    Detail,
}

/// Focused field inside the search overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Genre,
}

/// Search overlay state. Select indices count 0 as the "All ..." entry,
/// then the name-sorted option list shifted by one.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub title: String,
    pub author_ix: usize,
    pub genre_ix: usize,
    pub field: SearchField,
}

pub struct BrowseApp {
    pub(crate) browser: Browser,
    pub(crate) theme: Theme,
    pub(crate) mode: Mode,
    pub(crate) cursor: usize,
    pub(crate) search: SearchForm,
    pub(crate) pending_theme: Theme,
    pub(crate) active_book: Option<BookId>,
    pub(crate) author_options: Vec<(AuthorId, String)>,
    pub(crate) genre_options: Vec<(GenreId, String)>,
    quit: bool,
}

impl BrowseApp {
    pub fn new(catalog: Catalog, page_size: usize, theme: Theme) -> Self {
        let author_options = catalog
            .author_options()
            .into_iter()
            .map(|(id, name)| (id.clone(), name.to_string()))
            .collect();
        let genre_options = catalog
            .genre_options()
            .into_iter()
            .map(|(id, name)| (id.clone(), name.to_string()))
            .collect();

        Self {
            browser: Browser::new(catalog, page_size),
            theme,
            mode: Mode::List,
            cursor: 0,
            search: SearchForm::default(),
            pending_theme: theme,
            active_book: None,
            author_options,
            genre_options,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        match self.mode {
            Mode::List => self.on_list_key(key.code),
            Mode::Search => self.on_search_key(key.code),
            Mode::Settings => self.on_settings_key(key.code),
            Mode::Detail => self.on_detail_key(key.code),
        }
    }

    fn visible_len(&self) -> usize {
        self.browser.visible().len()
    }

    fn on_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.visible_len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Enter => {
                let selected = self
                    .browser
                    .visible()
                    .get(self.cursor)
                    .map(|book| book.id.clone());
                if let Some(id) = selected {
                    self.active_book = Some(id);
                    self.mode = Mode::Detail;
                }
            }
            KeyCode::Char('m') | KeyCode::Char(' ') => self.browser.advance_page(),
            KeyCode::Char('/') => self.mode = Mode::Search,
            KeyCode::Char('s') => {
                self.pending_theme = self.theme;
                self.mode = Mode::Settings;
            }
            _ => {}
        }
    }

    fn on_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.mode = Mode::List,
            KeyCode::Enter => {
                let filter = self.form_filter();
                self.browser.apply_filter(filter);
                self.cursor = 0;
                self.mode = Mode::List;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.search.field = match self.search.field {
                    SearchField::Title => SearchField::Author,
                    SearchField::Author => SearchField::Genre,
                    SearchField::Genre => SearchField::Title,
                };
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.search.field = match self.search.field {
                    SearchField::Title => SearchField::Genre,
                    SearchField::Author => SearchField::Title,
                    SearchField::Genre => SearchField::Author,
                };
            }
            KeyCode::Left => self.cycle_select(false),
            KeyCode::Right => self.cycle_select(true),
            KeyCode::Backspace => {
                if self.search.field == SearchField::Title {
                    self.search.title.pop();
                }
            }
            KeyCode::Char(c) => {
                if self.search.field == SearchField::Title {
                    self.search.title.push(c);
                }
            }
            _ => {}
        }
    }

    fn on_settings_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.mode = Mode::List,
            KeyCode::Enter => {
                self.theme = self.pending_theme;
                self.mode = Mode::List;
            }
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::Char(' ') => {
                self.pending_theme = self.pending_theme.toggled();
            }
            _ => {}
        }
    }

    fn on_detail_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                self.active_book = None;
                self.mode = Mode::List;
            }
            _ => {}
        }
    }

    /// Select indices cycle through "All ..." plus every option
    fn cycle_select(&mut self, forward: bool) {
        match self.search.field {
            SearchField::Author => {
                let count = self.author_options.len() + 1;
                self.search.author_ix = cycle(self.search.author_ix, count, forward);
            }
            SearchField::Genre => {
                let count = self.genre_options.len() + 1;
                self.search.genre_ix = cycle(self.search.genre_ix, count, forward);
            }
            SearchField::Title => {}
        }
    }

    /// Normalize the form into the filter the view model consumes
    pub(crate) fn form_filter(&self) -> BookFilter {
        let author = match self.search.author_ix.checked_sub(1) {
            None => AuthorSelect::Any,
            Some(ix) => AuthorSelect::Id(self.author_options[ix].0.clone()),
        };
        let genre = match self.search.genre_ix.checked_sub(1) {
            None => GenreSelect::Any,
            Some(ix) => GenreSelect::Id(self.genre_options[ix].0.clone()),
        };

        BookFilter {
            title: self.search.title.clone(),
            author,
            genre,
        }
    }
}

fn cycle(ix: usize, count: usize, forward: bool) -> usize {
    if forward {
        (ix + 1) % count
    } else {
        (ix + count - 1) % count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookdeck_testing::small_catalog;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> BrowseApp {
        BrowseApp::new(small_catalog(), 2, Theme::Day)
    }

    #[test]
    fn typing_a_search_applies_a_title_filter() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('/')));
        assert_eq!(app.mode, Mode::Search);

        for c in "book a".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::List);
        assert_eq!(app.browser.match_count(), 1);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn genre_select_cycles_through_all_entry() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('/')));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.search.field, SearchField::Genre);

        // Two genres: cycling three times wraps back to "All Genres"
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.search.genre_ix, 1);
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.search.genre_ix, 0);

        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.search.genre_ix, 2);
    }

    #[test]
    fn show_more_reveals_the_next_page() {
        let mut app = app();
        assert_eq!(app.browser.visible().len(), 2);

        app.handle_key(key(KeyCode::Char('m')));
        assert_eq!(app.browser.visible().len(), 3);

        // Fully revealed: further presses are no-ops
        app.handle_key(key(KeyCode::Char('m')));
        assert_eq!(app.browser.visible().len(), 3);
    }

    #[test]
    fn enter_opens_detail_and_esc_closes_it() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Detail);
        assert_eq!(app.active_book.as_ref().map(|id| id.as_str()), Some("b"));

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::List);
        assert!(app.active_book.is_none());
    }

    #[test]
    fn settings_applies_on_enter_and_cancels_on_esc() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('s')));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.theme(), Theme::Day);

        app.handle_key(key(KeyCode::Char('s')));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.theme(), Theme::Night);
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('/')));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }
}
