use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, Direction as MoveDirection, SnakeEngine};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, engine: &SnakeEngine, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Render header with basic stats
        let stats = self.render_stats(chunks[0], engine, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the maze horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        // Render the maze or the win screen
        if engine.is_ended() {
            let won = self.render_won(game_area, engine);
            frame.render_widget(won, game_area);
        } else {
            let maze = self.render_maze(game_area, engine);
            frame.render_widget(maze, game_area);
        }

        // Render footer with controls
        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    /// Draw the maze as a character lattice: cell rows interleaved with wall
    /// rows, both derived from connectivity queries. A wall segment is drawn
    /// exactly where the edge between two neighboring cells is closed.
    fn render_maze(&self, _area: Rect, engine: &SnakeEngine) -> Paragraph<'_> {
        let grid = engine.grid();
        let body: Vec<Cell> = engine.body().collect();
        let head = engine.head();
        let food = engine.food();

        let wall_style = Style::default().fg(Color::White);
        let mut lines = Vec::new();

        for y in 0..grid.y_size() as i32 {
            // Wall row above the cells: closed edges and the top border
            let mut wall_spans = Vec::new();
            for x in 0..grid.x_size() as i32 {
                wall_spans.push(Span::styled("+", wall_style));
                let open_above = grid.is_connected(Cell::new(x, y), MoveDirection::Up);
                wall_spans.push(Span::styled(if open_above { "  " } else { "--" }, wall_style));
            }
            wall_spans.push(Span::styled("+", wall_style));
            lines.push(Line::from(wall_spans));

            // Cell row: vertical walls interleaved with cell contents
            let mut cell_spans = Vec::new();
            for x in 0..grid.x_size() as i32 {
                let cell = Cell::new(x, y);
                let open_left = grid.is_connected(cell, MoveDirection::Left);
                cell_spans.push(Span::styled(if open_left { " " } else { "|" }, wall_style));

                let content = if cell == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if body.contains(&cell) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if cell == food {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::raw("  ")
                };
                cell_spans.push(content);
            }
            cell_spans.push(Span::styled("|", wall_style));
            lines.push(Line::from(cell_spans));
        }

        // Bottom border
        let mut bottom = Vec::new();
        for _ in 0..grid.x_size() {
            bottom.push(Span::styled("+", wall_style));
            bottom.push(Span::styled("--", wall_style));
        }
        bottom.push(Span::styled("+", wall_style));
        lines.push(Line::from(bottom));

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Maze Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        _area: Rect,
        engine: &SnakeEngine,
        metrics: &GameMetrics,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}/{}", engine.len(), engine.target_length()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Solved: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.mazes_solved.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_won(&self, _area: Rect, engine: &SnakeEngine) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "MAZE CLEARED",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Length: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    engine.len().to_string(),
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
                Span::styled(" for a new maze or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
