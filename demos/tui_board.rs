//! Terminal demo driving kana_air with a keyboard-simulated hand.
//!
//! Arrow keys move the virtual hand, `g` toggles the grip gesture,
//! `[` / `]` yaw the hand, Enter commits the selected character,
//! Backspace deletes, `m` applies a phonetic transform, `q` quits.
//! Run with: cargo run --example tui_board

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

use kana_air::{
    Cell, Command, DEFAULT_INTERVAL, Hand, InputEvent, InputSession, KanaGrid, Pose, StringBuffer,
    Vec3,
};

/// One keypress worth of hand travel: half a cell.
const STEP: f32 = DEFAULT_INTERVAL / 2.0;

struct App {
    session: InputSession,
    grid: KanaGrid,
    buffer: StringBuffer,
    hand: Vec3,
    yaw: f32,
    gripping: bool,
    board_visible: bool,
    selected: Option<Cell>,
    pulses: u32,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        Self {
            session: InputSession::new(Hand::Right),
            grid: KanaGrid::standard(),
            buffer: StringBuffer::new(),
            hand: Vec3::ZERO,
            yaw: 0.0,
            gripping: false,
            board_visible: false,
            selected: None,
            pulses: 0,
            should_quit: false,
        }
    }

    fn dispatch(&mut self, event: InputEvent) {
        for cmd in self.session.handle_event(&mut self.buffer, event) {
            match cmd {
                Command::ShowBoard { .. } => self.board_visible = true,
                Command::HideBoard => {
                    self.board_visible = false;
                    self.selected = None;
                }
                Command::RenderCell { cell, .. } => self.selected = Some(cell),
                Command::SelectionChanged { .. } => self.pulses += 1,
            }
        }
    }

    fn handle_key(&mut self, code: CKeyCode) {
        match code {
            CKeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            CKeyCode::Char('g') => {
                if self.gripping {
                    self.gripping = false;
                    self.dispatch(InputEvent::GripEnd);
                } else {
                    self.gripping = true;
                    self.dispatch(InputEvent::GripStart {
                        pose: Pose::new(self.hand, self.yaw),
                    });
                }
            }
            CKeyCode::Left => self.hand.x -= STEP,
            CKeyCode::Right => self.hand.x += STEP,
            CKeyCode::Up => self.hand.z -= STEP,
            CKeyCode::Down => self.hand.z += STEP,
            CKeyCode::Char('[') => self.yaw -= 15.0,
            CKeyCode::Char(']') => self.yaw += 15.0,
            CKeyCode::Enter => self.dispatch(InputEvent::Commit),
            CKeyCode::Backspace => self.dispatch(InputEvent::Backspace),
            CKeyCode::Char('m') => self.dispatch(InputEvent::Modify),
            _ => {}
        }

        // A held grip tracks the hand every tick.
        if self.gripping {
            self.dispatch(InputEvent::Track { position: self.hand });
        }
    }
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if !app.board_visible {
        lines.push(Line::from("press g to open the board"));
        return lines;
    }

    // Columns are laid out right-to-left, matching increasing x' walking
    // toward column 0.
    for row in 0..5u8 {
        let mut spans = Vec::new();
        for col in 0..10u8 {
            let display_col = 9 - col;
            let ch = app.grid.char_at(Cell::new(display_col, row));
            let selected = app.selected == Some(Cell::new(display_col, row));
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!(" {ch} "), style));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(7),
                Constraint::Length(3),
                Constraint::Min(3),
            ]
            .as_ref(),
        )
        .split(f.size());

    let board = Paragraph::new(board_lines(app)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("kana_air board"),
    );
    f.render_widget(board, chunks[0]);

    let text = Paragraph::new(app.buffer.as_str().to_string())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("committed"));
    f.render_widget(text, chunks[1]);

    let status = format!(
        "hand ({:+.3}, {:+.3})  yaw {:+.0}°  grip {}  pulses {}   \
         arrows move | g grip | [ ] yaw | Enter commit | Bksp delete | m modify | q quit",
        app.hand.x,
        app.hand.z,
        app.yaw,
        if app.gripping { "held" } else { "off" },
        app.pulses,
    );
    let help = Paragraph::new(status).block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

fn main() -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key.code);
            if app.should_quit {
                break;
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
