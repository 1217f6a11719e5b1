mod app;
mod config;
mod engine;
mod event;
mod game;
mod keyboard;
mod lessons;
mod placement;
mod session;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use app::{App, AppScreen};
use event::{AppEvent, EventHandler};
use game::rain::TICK_MS;
use ui::rain_field::RainField;
use ui::stats_panel::StatsPanel;
use ui::typing_area::TypingArea;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Practice,
    Placement,
    Rain,
}

#[derive(Parser)]
#[command(name = "maklid", version, about = "Terminal Hebrew typing tutor for kids")]
struct Cli {
    #[arg(value_enum, help = "Jump straight into a mode instead of the menu")]
    mode: Option<Mode>,

    #[arg(short, long, help = "Lesson number to practice (1-20)")]
    lesson: Option<u8>,

    #[arg(short, long, help = "Word-rain difficulty (easy, medium, hard)")]
    difficulty: Option<String>,

    #[arg(short, long, help = "Seed for reproducible word-rain runs")]
    seed: Option<u64>,

    #[arg(long, help = "Print session results as JSON on exit")]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::Config::load().unwrap_or_default();
    config.normalize();
    if let Some(difficulty) = cli.difficulty {
        config.difficulty = difficulty;
        config.normalize();
    }
    if cli.json {
        config.emit_json = true;
    }

    let mut app = App::new(config, cli.lesson, cli.seed);
    match cli.mode {
        Some(Mode::Practice) => app.start_practice(),
        Some(Mode::Placement) => app.start_placement(),
        Some(Mode::Rain) => app.start_rain(),
        None => {}
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(TICK_MS));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    emit_reports(&app);

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => {
                if key.kind != crossterm::event::KeyEventKind::Release {
                    app.handle_key(key);
                }
            }
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Final results go to the external gamification consumer as JSON on stdout.
fn emit_reports(app: &App) {
    if !app.config.emit_json {
        return;
    }
    if let Some(report) = &app.last_report {
        if let Ok(json) = serde_json::to_string(report) {
            println!("{json}");
        }
    }
    if let Some(result) = &app.placement_result {
        if let Ok(json) = serde_json::to_string(result) {
            println!("{json}");
        }
    }
    if let Some(summary) = &app.rain_summary {
        if let Ok(json) = serde_json::to_string(summary) {
            println!("{json}");
        }
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    match app.screen {
        AppScreen::Menu => render_menu(frame, app, area),
        AppScreen::Practice => render_practice(frame, app, area),
        AppScreen::PracticeResult => {
            if let Some(report) = &app.last_report {
                frame.render_widget(StatsPanel::new(report), area);
            }
        }
        AppScreen::PlacementTyping => {
            frame.render_widget(TypingArea::new(&app.session, "מבדק שיבוץ - הקלידו את המשפט"), area);
        }
        AppScreen::PlacementKeys => render_placement_keys(frame, app, area),
        AppScreen::PlacementShortcuts => render_placement_shortcuts(frame, app, area),
        AppScreen::PlacementResult => render_placement_result(frame, app, area),
        AppScreen::Rain => {
            if let Some(rain) = &app.rain {
                frame.render_widget(RainField::new(rain), area);
            }
        }
        AppScreen::RainResult => render_rain_result(frame, app, area),
    }
}

fn render_menu(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("מקליד - לומדים להקליד"), Line::from("")];
    for (i, item) in app.current_menu_items().iter().enumerate() {
        let style = if i == app.menu_selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::styled(format!("  {item}"), style));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_practice(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    frame.render_widget(TypingArea::new(&app.session, app.lesson().title), chunks[0]);

    let status = if app.session.is_paused {
        "מושהה - Tab להמשך".to_string()
    } else {
        format!(
            "שיעור {} | שורה {} | {} מילים לדקה",
            app.current_lesson,
            app.session.current_line + 1,
            app.session.realtime_wpm()
        )
    };
    frame.render_widget(Paragraph::new(status), chunks[1]);
}

fn render_placement_keys(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let prompt = app.placement_key_prompt().unwrap_or(' ');
    let lines = vec![
        Line::from("מבדק שיבוץ - זיהוי אותיות"),
        Line::from(""),
        Line::styled(
            format!("הקישו על האות: {prompt}"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_placement_shortcuts(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let prompt = app.placement_shortcut_prompt().unwrap_or("");
    let lines = vec![
        Line::from("מבדק שיבוץ - קיצורי מקלדת"),
        Line::from(""),
        Line::styled(
            format!("הקישו את הקיצור של: {prompt}"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_placement_result(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let Some(result) = &app.placement_result else {
        return;
    };
    let lines = vec![
        Line::styled(
            format!("הרמה שלך: {}", result.level.as_str()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("מהירות: {} מילים לדקה", result.wpm)),
        Line::from(format!("דיוק: {}%", result.accuracy)),
        Line::from(format!("אותיות מוכרות: {}", result.known_keys.len())),
        Line::from(format!("קיצורים מוכרים: {}", result.known_shortcuts.len())),
        Line::from(format!("מתחילים בשיעור {}", result.recommended_lesson)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_rain_result(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let Some(summary) = &app.rain_summary else {
        return;
    };
    let lines = vec![
        Line::styled("המשחק נגמר", Style::default().add_modifier(Modifier::BOLD)),
        Line::from(format!("ניקוד סופי: {}", summary.final_score)),
        Line::from(format!("מילים שנתפסו: {}", summary.words_typed)),
        Line::from(format!("רצף שיא: {}", summary.best_combo)),
        Line::from(format!("נקודות ניסיון: {}", summary.xp)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
