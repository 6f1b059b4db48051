use std::borrow::Cow;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, EndReason, Game, Position};
use crate::metrics::SessionStats;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render<R>(&self, frame: &mut Frame, game: &Game<R>, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(game, stats), chunks[0]);

        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if game.is_game_over() {
            frame.render_widget(self.render_game_over(game), board_area);
        } else {
            frame.render_widget(self.render_board(game), board_area);
        }

        frame.render_widget(self.render_controls(stats), chunks[2]);
    }

    /// `x` runs across the screen and `y` down it, so `Up` heads for the top row
    fn render_board<R>(&self, game: &Game<R>) -> Paragraph<'static> {
        let board = game.board();
        let lines: Vec<Line> = (0..board.width())
            .map(|y| {
                let spans: Vec<Span> = (0..board.height())
                    .map(|x| Self::cell_span(board.get_piece(Position::new(x as i32, y as i32))))
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn cell_span(cell: Cell) -> Span<'static> {
        match cell {
            Cell::SnakeHead => Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::SnakeBody => Span::styled("□ ", Style::default().fg(Color::Green)),
            Cell::Apple => Span::styled(
                "O ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Cell::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
        }
    }

    fn render_stats<R>(&self, game: &Game<R>, stats: &SessionStats) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);
        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(game.score().to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(game.snake().len().to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(stats.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over<R>(&self, game: &Game<R>) -> Paragraph<'static> {
        let reason = match game.end_reason() {
            Some(EndReason::Wall) => "You hit the wall",
            Some(EndReason::SelfCollision) => "You bit yourself",
            Some(EndReason::BoardFull) => "The board is full!",
            None => "",
        };
        let text = vec![
            Line::from(""),
            Line::from(bold("GAME OVER", Color::Red)),
            Line::from(Span::styled(reason, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                bold(game.score().to_string(), Color::White),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                bold("R", Color::Green),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                bold("Q", Color::Red),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, stats: &SessionStats) -> Paragraph<'static> {
        let mut spans = Vec::new();
        if !stats.is_running() && stats.last_end.is_none() {
            spans.push(Span::styled(
                "Press a direction to start | ",
                Style::default().fg(Color::Green),
            ));
        }
        spans.extend([
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

fn bold(text: impl Into<Cow<'static, str>>, color: Color) -> Span<'static> {
    Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
