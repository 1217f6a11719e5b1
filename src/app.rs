use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Serialize;

use crate::config::Config;
use crate::game::rain::{self, GamePhase, WordRain};
use crate::game::words::{self, Difficulty};
use crate::keyboard::layout;
use crate::lessons::{self, Lesson};
use crate::placement::classify::{self, FreeTypingSample, PlacementResult};
use crate::session::report::SessionReport;
use crate::session::state::TypingSession;

/// Text the placement test's free-typing stage asks for.
const PLACEMENT_TEXT: &str = "הילד רץ לגן ואמא אופה לחם חם";

/// Letters the key-recognition stage shows, one at a time.
const PLACEMENT_KEYS: &[char] = &['ש', 'ל', 'ם', 'ב', 'ק', 'ו', 'ת', 'נ'];

/// Shortcut-recognition prompts: description shown, id recorded, key expected
/// with Ctrl held.
const PLACEMENT_SHORTCUTS: &[(&str, &str, char)] = &[
    ("העתקה", "ctrl+c", 'c'),
    ("הדבקה", "ctrl+v", 'v'),
    ("ביטול פעולה", "ctrl+z", 'z'),
    ("בחירת הכל", "ctrl+a", 'a'),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Menu,
    Practice,
    PracticeResult,
    PlacementTyping,
    PlacementKeys,
    PlacementShortcuts,
    PlacementResult,
    Rain,
    RainResult,
}

const MENU_ITEMS: &[&str] = &["תרגול שיעור", "מבדק שיבוץ", "גשם מילים", "יציאה"];

/// Word-rain outcome for the external XP consumer.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RainSummary {
    pub final_score: u32,
    pub words_typed: u32,
    pub best_combo: u32,
    pub xp: u32,
}

pub struct App {
    pub screen: AppScreen,
    pub config: Config,
    pub should_quit: bool,
    pub menu_selected: usize,

    pub session: TypingSession,
    pub current_lesson: u8,
    line_index: usize,
    pub last_report: Option<SessionReport>,
    /// Consecutive practice days, supplied by the external progress store.
    pub streak_days: u32,

    placement_sample: Option<FreeTypingSample>,
    placement_known_keys: Vec<char>,
    placement_key_index: usize,
    placement_known_shortcuts: Vec<String>,
    placement_shortcut_index: usize,
    pub placement_result: Option<PlacementResult>,

    pub rain: Option<WordRain>,
    pub rain_summary: Option<RainSummary>,
    seed: u64,
}

impl App {
    pub fn new(config: Config, lesson: Option<u8>, seed: Option<u64>) -> Self {
        Self {
            screen: AppScreen::Menu,
            config,
            should_quit: false,
            menu_selected: 0,
            session: TypingSession::new(),
            current_lesson: lesson.unwrap_or(1).clamp(1, lessons::LESSONS.len() as u8),
            line_index: 0,
            last_report: None,
            streak_days: 0,
            placement_sample: None,
            placement_known_keys: Vec::new(),
            placement_key_index: 0,
            placement_known_shortcuts: Vec::new(),
            placement_shortcut_index: 0,
            placement_result: None,
            rain: None,
            rain_summary: None,
            seed: seed.unwrap_or_else(rand::random),
        }
    }

    pub fn lesson(&self) -> &'static Lesson {
        // current_lesson is clamped to the catalog on every write.
        lessons::lesson(self.current_lesson).unwrap_or(&lessons::LESSONS[0])
    }

    pub fn current_menu_items(&self) -> &'static [&'static str] {
        MENU_ITEMS
    }

    pub fn placement_key_prompt(&self) -> Option<char> {
        PLACEMENT_KEYS.get(self.placement_key_index).copied()
    }

    pub fn placement_shortcut_prompt(&self) -> Option<&'static str> {
        PLACEMENT_SHORTCUTS
            .get(self.placement_shortcut_index)
            .map(|(label, _, _)| *label)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            AppScreen::Menu => self.handle_menu_key(key),
            AppScreen::Practice => self.handle_practice_key(key),
            AppScreen::PlacementTyping => self.handle_placement_typing_key(key),
            AppScreen::PlacementKeys => self.handle_placement_keys_key(key),
            AppScreen::PlacementShortcuts => self.handle_placement_shortcuts_key(key),
            AppScreen::Rain => self.handle_rain_key(key),
            AppScreen::PracticeResult | AppScreen::PlacementResult | AppScreen::RainResult => {
                match key.code {
                    KeyCode::Enter | KeyCode::Esc => self.screen = AppScreen::Menu,
                    KeyCode::Char('q') => self.should_quit = true,
                    _ => {}
                }
            }
        }
    }

    /// External clock signal; only the word-rain consumes it.
    pub fn on_tick(&mut self) {
        if self.screen != AppScreen::Rain {
            return;
        }
        let game_over = match &mut self.rain {
            Some(rain) => {
                rain.tick();
                rain.phase == GamePhase::GameOver
            }
            None => false,
        };
        if game_over {
            self.finish_rain();
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.menu_selected = self.menu_selected.saturating_sub(1);
            }
            KeyCode::Down => {
                self.menu_selected = (self.menu_selected + 1).min(MENU_ITEMS.len() - 1);
            }
            KeyCode::Enter => match self.menu_selected {
                0 => self.start_practice(),
                1 => self.start_placement(),
                2 => self.start_rain(),
                _ => self.should_quit = true,
            },
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    // --- Practice ---

    pub fn start_practice(&mut self) {
        let lesson = self.lesson();
        self.line_index = 0;
        self.session.start_session(lesson.lines[0], Some(lesson.id));
        self.screen = AppScreen::Practice;
    }

    fn handle_practice_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.finish_practice(),
            KeyCode::Tab => {
                if self.session.is_paused {
                    self.session.resume();
                } else {
                    self.session.pause();
                }
            }
            KeyCode::Char(ch) => {
                self.feed_session_key(ch);
                self.advance_line_if_complete();
            }
            _ => {}
        }
    }

    fn feed_session_key(&mut self, ch: char) {
        // Terminal input carries no scan codes; the physical key is derived
        // from the typed character via the layout, best-effort.
        let code = layout::key_for(ch).map(|m| m.code);
        self.session.type_key(ch, code);
    }

    fn advance_line_if_complete(&mut self) {
        if !self.session.is_complete() {
            return;
        }
        let lesson = self.lesson();
        if self.line_index + 1 < lesson.lines.len() {
            self.line_index += 1;
            self.session.next_line(lesson.lines[self.line_index]);
        } else {
            self.finish_practice();
        }
    }

    fn finish_practice(&mut self) {
        let lesson = self.lesson();
        self.session.end_session();
        self.last_report = SessionReport::from_session(
            &self.session,
            lesson.pass_wpm,
            lesson.pass_accuracy,
            self.streak_days,
        );
        self.screen = if self.last_report.is_some() {
            AppScreen::PracticeResult
        } else {
            AppScreen::Menu
        };
    }

    // --- Placement ---

    pub fn start_placement(&mut self) {
        self.placement_sample = None;
        self.placement_known_keys.clear();
        self.placement_key_index = 0;
        self.placement_known_shortcuts.clear();
        self.placement_shortcut_index = 0;
        self.placement_result = None;
        self.session.start_session(PLACEMENT_TEXT, None);
        self.screen = AppScreen::PlacementTyping;
    }

    fn handle_placement_typing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.finish_placement_typing(),
            KeyCode::Char(ch) => {
                self.feed_session_key(ch);
                if self.session.is_complete() {
                    self.finish_placement_typing();
                }
            }
            _ => {}
        }
    }

    fn finish_placement_typing(&mut self) {
        let duration_ms = self.session.elapsed_ms();
        self.session.end_session();
        self.placement_sample = Some(FreeTypingSample {
            keystrokes: self.session.keystrokes.clone(),
            duration_ms,
        });
        self.screen = AppScreen::PlacementKeys;
    }

    fn handle_placement_keys_key(&mut self, key: KeyEvent) {
        let Some(expected) = self.placement_key_prompt() else {
            return;
        };
        if let KeyCode::Char(ch) = key.code {
            if ch == expected {
                self.placement_known_keys.push(expected);
            }
            self.placement_key_index += 1;
            if self.placement_key_index >= PLACEMENT_KEYS.len() {
                self.screen = AppScreen::PlacementShortcuts;
            }
        }
    }

    fn handle_placement_shortcuts_key(&mut self, key: KeyEvent) {
        let Some((_, id, expected)) = PLACEMENT_SHORTCUTS.get(self.placement_shortcut_index)
        else {
            return;
        };
        let matched = key.modifiers.contains(KeyModifiers::CONTROL)
            && key.code == KeyCode::Char(*expected);
        if matched {
            self.placement_known_shortcuts.push((*id).to_string());
        }
        self.placement_shortcut_index += 1;
        if self.placement_shortcut_index >= PLACEMENT_SHORTCUTS.len() {
            self.finish_placement();
        }
    }

    fn finish_placement(&mut self) {
        let sample = self.placement_sample.take().unwrap_or(FreeTypingSample {
            keystrokes: Vec::new(),
            duration_ms: 0,
        });
        self.placement_result = Some(classify::compute_placement_result(
            &sample,
            std::mem::take(&mut self.placement_known_keys),
            std::mem::take(&mut self.placement_known_shortcuts),
        ));
        if let Some(result) = &self.placement_result {
            self.current_lesson = result.recommended_lesson;
        }
        self.screen = AppScreen::PlacementResult;
    }

    // --- Word rain ---

    pub fn start_rain(&mut self) {
        let difficulty = Difficulty::from_name(&self.config.difficulty);
        // A broken embedded asset is a build defect; fall back to an empty
        // pool rather than crashing mid-game.
        let pool = words::pool_for(difficulty).unwrap_or_default();
        let mut game = WordRain::new(difficulty, pool, self.config.lives, self.seed);
        game.start();
        self.rain = Some(game);
        self.rain_summary = None;
        self.screen = AppScreen::Rain;
    }

    fn handle_rain_key(&mut self, key: KeyEvent) {
        if self.rain.is_none() {
            return;
        }
        if key.code == KeyCode::Esc {
            self.finish_rain();
            return;
        }
        let Some(rain) = &mut self.rain else {
            return;
        };
        match key.code {
            KeyCode::Backspace => {
                let mut input = rain.input.clone();
                input.pop();
                rain.process_input(&input);
            }
            KeyCode::Char(ch) => {
                let mut input = rain.input.clone();
                input.push(ch);
                rain.process_input(&input);
            }
            _ => {}
        }
    }

    fn finish_rain(&mut self) {
        if let Some(rain) = &self.rain {
            let final_score = rain.calculate_final_score();
            self.rain_summary = Some(RainSummary {
                final_score,
                words_typed: rain.words_typed,
                best_combo: rain.best_combo,
                xp: rain::xp_for_score(final_score),
            });
        }
        self.screen = AppScreen::RainResult;
    }
}
