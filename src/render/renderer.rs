use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::Renderer;
use crate::game::{Position, Snake};

/// Contents of one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Head,
    Body,
    Food,
}

/// Everything the controller last asked to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub grid_size: usize,
    /// Row-major, `grid_size * grid_size` entries
    pub cells: Vec<Cell>,
    pub score: u32,
    pub debug: String,
    pub game_over: bool,
}

impl BoardView {
    fn new() -> Self {
        Self {
            grid_size: 0,
            cells: Vec::new(),
            score: 0,
            debug: String::new(),
            game_over: false,
        }
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    fn set(&mut self, pos: Position, cell: Cell) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = cell;
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let size = self.grid_size as i32;
        if pos.x < 0 || pos.y < 0 || pos.x >= size || pos.y >= size {
            return None;
        }
        Some(pos.y as usize * self.grid_size + pos.x as usize)
    }
}

/// Buffers draw calls and paints them with ratatui
pub struct TerminalRenderer {
    view: BoardView,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            view: BoardView::new(),
        }
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    pub fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(), chunks[0]);

        // Two terminal columns per cell plus the border
        let side = u16::try_from(self.view.grid_size).unwrap_or(u16::MAX);
        let board_area = centered(
            chunks[1],
            side.saturating_mul(2).saturating_add(2),
            side.saturating_add(2),
        );
        frame.render_widget(self.board_widget(), board_area);

        if self.view.game_over {
            let popup = centered(chunks[1], 36, 7);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(), popup);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn board_widget(&self) -> Paragraph<'_> {
        let lines: Vec<Line> = self
            .view
            .cells
            .chunks(self.view.grid_size.max(1))
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| match cell {
                        Cell::Head => Span::styled(
                            "■ ",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        ),
                        Cell::Body => Span::styled("■ ", Style::default().fg(Color::Green)),
                        Cell::Food => Span::styled(
                            "● ",
                            Style::default()
                                .fg(Color::LightRed)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Cell::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_stats(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    self.view.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                self.view.debug.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    self.view.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn render_grid(&mut self, grid_size: usize) {
        self.view.grid_size = grid_size;
        self.view.cells.clear();
        self.view.cells.resize(grid_size * grid_size, Cell::Empty);
    }

    fn render_snake(&mut self, snake: &Snake) {
        for (i, segment) in snake.body.iter().enumerate() {
            let cell = if i == 0 { Cell::Head } else { Cell::Body };
            self.view.set(*segment, cell);
        }
    }

    fn render_food(&mut self, food: Position) {
        self.view.set(food, Cell::Food);
    }

    fn render_score(&mut self, score: u32) {
        self.view.score = score;
    }

    fn render_debug(&mut self, message: &str) {
        self.view.debug.clear();
        self.view.debug.push_str(message);
    }

    fn show_game_over(&mut self) {
        self.view.game_over = true;
    }

    fn hide_game_over(&mut self) {
        self.view.game_over = false;
    }
}

/// A `width` x `height` rect centered in `area`, clipped to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
