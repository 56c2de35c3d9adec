use crossterm::event::{KeyCode, KeyEvent};

use ql_core::MissionIcon;
use ql_session::{GameSession, Screen};

/// State for the mission creation form popup.
pub struct MissionForm {
    pub title: String,
    pub icon_index: usize,
}

impl MissionForm {
    fn new() -> Self {
        Self {
            title: String::new(),
            icon_index: 0,
        }
    }

    pub fn icon(&self) -> MissionIcon {
        MissionIcon::ALL[self.icon_index]
    }
}

/// Top-level TUI state: the game session plus view-local state.
pub struct App {
    pub session: GameSession,
    pub should_quit: bool,
    pub show_help: bool,
    /// One-line message shown in the status bar until the next keypress.
    pub status: Option<String>,
    /// Cursor into the missions list.
    pub list_cursor: usize,
    /// Creation form state while the popup is open.
    pub form: Option<MissionForm>,
    /// Marker position currently drawn; trails the session position while
    /// the step animation runs.
    display_position: u32,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            should_quit: false,
            show_help: false,
            status: None,
            list_cursor: 0,
            form: None,
            display_position: 0,
        }
    }

    pub fn display_position(&self) -> u32 {
        self.display_position
    }

    pub fn is_animating(&self) -> bool {
        self.display_position < self.session.position()
    }

    /// Advance the drawn marker one tile toward the real position.
    pub fn advance_animation(&mut self) {
        if self.display_position < self.session.position() {
            self.display_position += 1;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status = None;

        if self.form.is_some() {
            self.handle_form_key(key);
            return;
        }
        if self.show_help {
            self.show_help = false;
            return;
        }
        match self.session.screen() {
            Screen::MissionsList => self.handle_list_key(key),
            Screen::Game => self.handle_game_key(key),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('j') | KeyCode::Down => {
                if self.list_cursor + 1 < self.session.missions().len() {
                    self.list_cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.list_cursor = self.list_cursor.saturating_sub(1);
            }
            KeyCode::Char('a') => self.form = Some(MissionForm::new()),
            KeyCode::Char('d') => self.delete_under_cursor(),
            KeyCode::Enter => self.open_under_cursor(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.form = None,
            KeyCode::Enter => self.submit_form(),
            KeyCode::Left => {
                if let Some(form) = self.form.as_mut() {
                    form.icon_index = if form.icon_index == 0 {
                        MissionIcon::ALL.len() - 1
                    } else {
                        form.icon_index - 1
                    };
                }
            }
            KeyCode::Right => {
                if let Some(form) = self.form.as_mut() {
                    form.icon_index = (form.icon_index + 1) % MissionIcon::ALL.len();
                }
            }
            KeyCode::Backspace => {
                if let Some(form) = self.form.as_mut() {
                    form.title.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(form) = self.form.as_mut() {
                    form.title.push(c);
                }
            }
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        let Some(form) = self.form.as_ref() else {
            return;
        };
        let title = form.title.clone();
        let icon = form.icon();
        match self.session.create_mission(&title, icon) {
            Ok(_) => {
                self.form = None;
                self.list_cursor = self.session.missions().len() - 1;
                self.status = Some("Mission created".to_string());
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn delete_under_cursor(&mut self) {
        let Some(mission) = self.session.missions().get(self.list_cursor) else {
            return;
        };
        let id = mission.id;
        let title = mission.title.clone();
        match self.session.delete_mission(id) {
            Ok(_) => {
                self.status = Some(format!("Deleted '{title}'"));
                let len = self.session.missions().len();
                if self.list_cursor >= len && len > 0 {
                    self.list_cursor = len - 1;
                }
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn open_under_cursor(&mut self) {
        let Some(mission) = self.session.missions().get(self.list_cursor) else {
            return;
        };
        let id = mission.id;
        match self.session.select_mission(id) {
            Ok(()) => self.display_position = self.session.position(),
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        // Open prompts take all input until answered.
        if self.session.choice_open() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.choose(true),
                KeyCode::Char('n') | KeyCode::Char('N') => self.choose(false),
                _ => {}
            }
            return;
        }
        if self.session.dice_open() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                self.roll_or_continue();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('r') => {
                if let Err(e) = self.session.report_progress() {
                    self.status = Some(e.to_string());
                }
            }
            KeyCode::Char('R') => match self.session.reset_game() {
                Ok(()) => {
                    self.display_position = 0;
                    self.status = Some("Mission restarted".to_string());
                }
                Err(e) => self.status = Some(e.to_string()),
            },
            KeyCode::Char('b') | KeyCode::Esc => self.session.go_back(),
            _ => {}
        }
    }

    fn choose(&mut self, made_it: bool) {
        if let Err(e) = self.session.handle_progress_choice(made_it) {
            self.status = Some(e.to_string());
        }
    }

    fn roll_or_continue(&mut self) {
        if self.session.last_roll().is_none() {
            if let Err(e) = self.session.roll_dice() {
                self.status = Some(e.to_string());
            }
            return;
        }
        match self.session.complete_roll() {
            Ok(report) => {
                // display_position stays behind; the run loop walks it up
                // to report.to one tile per tick.
                self.status = Some(if report.completed {
                    "Mission complete!".to_string()
                } else {
                    format!("+{} steps", report.steps_taken)
                });
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }
}
