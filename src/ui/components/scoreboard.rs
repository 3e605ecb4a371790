//! Scoreboard header and innings grid

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use super::theme::{
    team_color, CURRENT_CELL_BG, HOME, OUT_FILLED, TEXT_FAINT, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY, VISITOR,
};
use crate::game::Team;
use crate::ui::view::{InningRow, ScoreboardView};

/// Rows taken by the header block
pub const HEADER_HEIGHT: u16 = 4;

/// Half-inning title, outs, run cap and time left
pub struct ScoreHeader<'a> {
    view: &'a ScoreboardView,
}

impl<'a> ScoreHeader<'a> {
    pub fn new(view: &'a ScoreboardView) -> Self {
        Self { view }
    }

    fn outs_spans(&self) -> Vec<Span<'static>> {
        let mut spans = vec![Span::styled("Outs ", Style::default().fg(TEXT_SECONDARY))];
        for i in 0..3 {
            if i < self.view.outs {
                spans.push(Span::styled("● ", Style::default().fg(OUT_FILLED)));
            } else {
                spans.push(Span::styled("○ ", Style::default().fg(TEXT_FAINT)));
            }
        }
        spans
    }
}

impl Widget for ScoreHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(TEXT_FAINT));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let batting = self.view.half.batting_team();
        let mut first = vec![
            Span::styled(
                format!(" {} ", self.view.title),
                Style::default()
                    .fg(team_color(batting))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("({} batting)   ", batting.label()),
                Style::default().fg(TEXT_MUTED),
            ),
        ];
        first.extend(self.outs_spans());

        let second = Line::from(vec![
            Span::styled(" Run cap ", Style::default().fg(TEXT_SECONDARY)),
            Span::styled(
                self.view.run_cap.clone(),
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Time left ", Style::default().fg(TEXT_SECONDARY)),
            Span::styled(
                self.view.time_left.clone(),
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            ),
        ]);

        Paragraph::new(vec![Line::from(first), second]).render(inner, buf);
    }
}

/// Runs per inning for both teams, totals in the column headers
pub struct InningsGrid<'a> {
    view: &'a ScoreboardView,
}

impl<'a> InningsGrid<'a> {
    pub fn new(view: &'a ScoreboardView) -> Self {
        Self { view }
    }

    fn cell(row: &InningRow, team: Team) -> Cell<'static> {
        let runs = match team {
            Team::Visitor => row.visitor,
            Team::Home => row.home,
        };
        let style = if row.highlight == Some(team) {
            Style::default()
                .fg(team_color(team))
                .bg(CURRENT_CELL_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_PRIMARY)
        };
        Cell::from(format!("{:>3}", runs)).style(style)
    }

    /// Rows that fit, keeping the latest innings in view
    fn visible_rows(&self, height: u16) -> &'a [InningRow] {
        // Border, header and header margin
        let capacity = height.saturating_sub(4) as usize;
        let rows = &self.view.rows;
        &rows[rows.len().saturating_sub(capacity.max(1))..]
    }
}

impl Widget for InningsGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(vec![
            Cell::from("Inn").style(Style::default().fg(TEXT_MUTED)),
            Cell::from(format!("{} {}", Team::Visitor.label(), self.view.visitor_total))
                .style(Style::default().fg(VISITOR).add_modifier(Modifier::BOLD)),
            Cell::from(format!("{} {}", Team::Home.label(), self.view.home_total))
                .style(Style::default().fg(HOME).add_modifier(Modifier::BOLD)),
        ])
        .bottom_margin(1);

        let rows = self.visible_rows(area.height).iter().map(|row| {
            Row::new(vec![
                Cell::from(format!("{:>3}", row.inning)).style(Style::default().fg(TEXT_MUTED)),
                Self::cell(row, Team::Visitor),
                Self::cell(row, Team::Home),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(5),
                Constraint::Min(12),
                Constraint::Min(12),
            ],
        )
        .header(header)
        .column_spacing(2)
        .block(
            Block::default()
                .title(" Innings ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(TEXT_FAINT)),
        );
        Widget::render(table, area, buf);
    }
}

/// Header stacked over the grid
pub struct Scoreboard<'a> {
    view: &'a ScoreboardView,
}

impl<'a> Scoreboard<'a> {
    pub fn new(view: &'a ScoreboardView) -> Self {
        Self { view }
    }
}

impl Widget for Scoreboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
            .split(area);
        ScoreHeader::new(self.view).render(chunks[0], buf);
        InningsGrid::new(self.view).render(chunks[1], buf);
    }
}
