use crate::config::Config;
use crate::pieces::PieceTheme;
use crate::render::{render_presentation, Orientation};
use crate::state::{BoardController, ClickOutcome};
use crate::ui::input::InputBuffer;
use crate::ui::theme::Theme;
use crate::ui::widgets::{
    BoardGeometry, BoardWidget, ControlsPanel, GameInfoPanel, MoveHistoryPanel,
};
use anyhow::Context;
use chess::{RulesEngine, Square};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Everything the event loop owns: the controller plus view settings.
pub struct App<E: RulesEngine> {
    controller: BoardController<E>,
    pieces: PieceTheme,
    theme: Theme,
    orientation: Orientation,
    input: InputBuffer,
    /// Where the board was drawn last frame, for mouse hit-testing
    board_area: Rect,
    should_quit: bool,
}

impl<E: RulesEngine> App<E> {
    pub fn new(
        controller: BoardController<E>,
        pieces: PieceTheme,
        theme: Theme,
        orientation: Orientation,
    ) -> Self {
        Self {
            controller,
            pieces,
            theme,
            orientation,
            input: InputBuffer::new(),
            board_area: Rect::default(),
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &BoardController<E> {
        &self.controller
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Geometry of the board as last drawn.
    pub fn board_geometry(&self) -> BoardGeometry {
        BoardGeometry::for_area(self.board_area, self.orientation)
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(50), Constraint::Length(35)])
            .split(frame.area());

        self.board_area = chunks[0];
        let presentation = self.controller.presentation();
        let view = render_presentation(presentation, &self.pieces, self.orientation);
        frame.render_widget(BoardWidget::new(&view, &self.theme), chunks[0]);

        // Split right side into three panels
        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9), // Game Info
                Constraint::Min(5),    // Move History
                Constraint::Length(10), // Controls
            ])
            .split(chunks[1]);

        frame.render_widget(GameInfoPanel::new(presentation, &self.theme), right_chunks[0]);
        frame.render_widget(
            MoveHistoryPanel::new(
                &presentation.history,
                presentation.history_start,
                &self.theme,
            ),
            right_chunks[1],
        );
        frame.render_widget(
            ControlsPanel::new(self.input.as_str(), &self.theme),
            right_chunks[2],
        );
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('r') => {
                self.input.clear();
                self.controller.reset();
            }
            KeyCode::Char('u') => {
                self.input.clear();
                self.controller.undo();
            }
            KeyCode::Esc => self.input.clear(),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Char(c) => {
                self.input.push_char(c.to_ascii_lowercase());
                if let Some(square) = self.input.take_square() {
                    self.click(square);
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(square) = self.board_geometry().square_at(mouse.column, mouse.row) {
            self.click(square);
        }
    }

    fn click(&mut self, square: Square) {
        if let ClickOutcome::Moved { .. } = self.controller.handle_square_click(square) {
            tracing::debug!(status = %self.controller.presentation().status, "position updated");
        }
    }
}

/// Run the TUI until the player quits.
pub fn run_app<E: RulesEngine>(
    controller: BoardController<E>,
    config: &Config,
) -> anyhow::Result<()> {
    let pieces = config.piece_theme().context("failed to load piece images")?;
    let mut app = App::new(controller, pieces, config.board_theme(), config.orientation);

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend, E: RulesEngine>(
    terminal: &mut Terminal<B>,
    app: &mut App<E>,
) -> anyhow::Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| app.draw(f))?;
        if event::poll(POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }
    }
    tracing::info!("quit requested");
    Ok(())
}
