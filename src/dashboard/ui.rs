//! Terminal UI for the interactive dashboard
//!
//! This module implements the terminal user interface using ratatui: an
//! editable platform table, the CPS readout, and a chart of CPS over a range
//! of search volumes with the current point highlighted.

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table},
    Frame,
};

use crate::config::{Config, DisplayConfig};
use crate::cost::{
    compute_cps, evaluate_range, CostBreakdown, PlatformCost, SweepPoint, SweepRange,
};

/// Editable columns of the platform table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    FixedCost,
    CostPerCall,
    CallsPerSearch,
}

impl Column {
    fn next(self) -> Self {
        match self {
            Self::Name => Self::FixedCost,
            Self::FixedCost => Self::CostPerCall,
            Self::CostPerCall => Self::CallsPerSearch,
            Self::CallsPerSearch => Self::CallsPerSearch,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Name => Self::Name,
            Self::FixedCost => Self::Name,
            Self::CostPerCall => Self::FixedCost,
            Self::CallsPerSearch => Self::CostPerCall,
        }
    }
}

/// Application state for the dashboard
pub struct DashboardApp {
    pub platforms: Vec<PlatformCost>,
    pub volume: f64,
    pub sweep: SweepRange,
    pub show_chart: bool,
    pub display: DisplayConfig,
    pub selected_row: usize,
    pub selected_col: Column,
    /// In-progress cell edit; `None` outside edit mode
    pub edit_buffer: Option<String>,
    pub breakdown: Option<CostBreakdown>,
    pub series: Vec<SweepPoint>,
    pub error_message: Option<String>,
    pub last_update: Option<DateTime<Utc>>,
    defaults: Config,
}

impl DashboardApp {
    /// Create a new dashboard application from the loaded configuration
    pub fn new(cfg: &Config) -> Self {
        let mut app = Self {
            platforms: cfg.platforms.clone(),
            volume: cfg.search.volume,
            sweep: cfg.sweep.range(),
            show_chart: cfg.sweep.enabled,
            display: cfg.display.clone(),
            selected_row: 0,
            selected_col: Column::Name,
            edit_buffer: None,
            breakdown: None,
            series: Vec::new(),
            error_message: None,
            last_update: None,
            defaults: cfg.clone(),
        };
        app.recompute();
        app
    }

    /// Recompute the breakdown and sweep series from the current inputs
    ///
    /// On failure the stale numbers are blanked and the error is shown on the
    /// footer line; the readout never keeps a value the inputs no longer
    /// produce.
    pub fn recompute(&mut self) {
        self.last_update = Some(Utc::now());

        match compute_cps(&self.platforms, self.volume) {
            Ok(breakdown) => {
                self.breakdown = Some(breakdown);
                self.error_message = None;
            }
            Err(e) => {
                self.breakdown = None;
                self.series.clear();
                self.error_message = Some(e.to_string());
                return;
            }
        }

        if self.show_chart {
            match evaluate_range(&self.platforms, &self.sweep) {
                Ok(points) => self.series = points,
                Err(e) => {
                    self.series.clear();
                    self.error_message = Some(e.to_string());
                }
            }
        } else {
            self.series.clear();
        }
    }

    /// Handle keyboard input, returning true when the app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.edit_buffer.is_some() {
            self.handle_edit_key(key);
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Up => {
                if self.selected_row > 0 {
                    self.selected_row -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_row + 1 < self.platforms.len() {
                    self.selected_row += 1;
                }
            }
            KeyCode::Left => self.selected_col = self.selected_col.prev(),
            KeyCode::Right => self.selected_col = self.selected_col.next(),
            KeyCode::Enter => self.start_edit(),
            KeyCode::Char('a') => self.add_platform(),
            KeyCode::Char('d') => self.delete_platform(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_volume(self.sweep.step),
            KeyCode::Char('-') | KeyCode::Char('_') => self.adjust_volume(-self.sweep.step),
            KeyCode::Char('c') => {
                self.show_chart = !self.show_chart;
                self.recompute();
            }
            KeyCode::Char('r') => self.reset(),
            _ => {}
        }
        false
    }

    /// Handle keyboard input while a cell edit is in progress
    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Esc => {
                self.edit_buffer = None;
            }
            KeyCode::Backspace => {
                if let Some(buffer) = &mut self.edit_buffer {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = &mut self.edit_buffer {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    /// Start editing the selected cell, seeding the buffer with its value
    fn start_edit(&mut self) {
        let Some(platform) = self.platforms.get(self.selected_row) else {
            return;
        };

        let current = match self.selected_col {
            Column::Name => platform.name.clone(),
            Column::FixedCost => format_volume(platform.fixed_cost),
            Column::CostPerCall => format_volume(platform.cost_per_call),
            Column::CallsPerSearch => format_volume(platform.calls_per_search),
        };
        self.edit_buffer = Some(current);
    }

    /// Commit the edit buffer into the selected cell and recompute
    fn commit_edit(&mut self) {
        let Some(buffer) = self.edit_buffer.take() else {
            return;
        };
        let input = buffer.trim().to_string();

        if self.selected_row >= self.platforms.len() {
            return;
        }

        if self.selected_col == Column::Name {
            if input.is_empty() {
                self.error_message = Some("platform name cannot be empty".to_string());
                return;
            }
            self.platforms[self.selected_row].name = input;
        } else {
            let value = match input.parse::<f64>() {
                Ok(value) => value,
                Err(_) => {
                    self.error_message = Some(format!("not a number: '{}'", input));
                    return;
                }
            };

            let platform = &mut self.platforms[self.selected_row];
            match self.selected_col {
                Column::FixedCost => platform.fixed_cost = value,
                Column::CostPerCall => platform.cost_per_call = value,
                Column::CallsPerSearch => platform.calls_per_search = value,
                Column::Name => {}
            }
        }

        self.recompute();
    }

    /// Append a blank platform row and select it
    fn add_platform(&mut self) {
        let name = format!("platform-{}", self.platforms.len() + 1);
        self.platforms.push(PlatformCost::new(name, 0.0, 0.0, 0.0));
        self.selected_row = self.platforms.len() - 1;
        self.selected_col = Column::Name;
        self.recompute();
    }

    /// Delete the selected platform row
    fn delete_platform(&mut self) {
        if self.selected_row < self.platforms.len() {
            self.platforms.remove(self.selected_row);
            if self.selected_row > 0 && self.selected_row >= self.platforms.len() {
                self.selected_row = self.platforms.len() - 1;
            }
            self.recompute();
        }
    }

    /// Change the search volume by `delta`, keeping it positive
    fn adjust_volume(&mut self, delta: f64) {
        let next = self.volume + delta;
        if next > 0.0 {
            self.volume = next;
            self.recompute();
        }
    }

    /// Restore the inputs loaded from the configuration
    fn reset(&mut self) {
        self.platforms = self.defaults.platforms.clone();
        self.volume = self.defaults.search.volume;
        self.sweep = self.defaults.sweep.range();
        self.show_chart = self.defaults.sweep.enabled;
        self.selected_row = 0;
        self.selected_col = Column::Name;
        self.edit_buffer = None;
        self.recompute();
    }

    /// Render the UI
    pub fn render(&self, f: &mut Frame) {
        let mut constraints = vec![
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Table
            Constraint::Length(4), // Readout
        ];
        if self.show_chart {
            constraints.push(Constraint::Length(12)); // Chart
        }
        constraints.push(Constraint::Length(3)); // Footer

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_table(f, chunks[1]);
        self.render_readout(f, chunks[2]);
        if self.show_chart {
            self.render_chart(f, chunks[3]);
            self.render_footer(f, chunks[4]);
        } else {
            self.render_footer(f, chunks[3]);
        }
    }

    /// Render header with title and metadata
    fn render_header(&self, f: &mut Frame, area: Rect) {
        let last_update = self
            .last_update
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "Never".to_string());

        let title = vec![
            Line::from(vec![
                Span::styled(
                    "Cost per Search",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" - Searches: "),
                Span::styled(format_volume(self.volume), Style::default().fg(Color::Yellow)),
                Span::raw("  |  Last update: "),
                Span::styled(last_update, Style::default().fg(Color::Green)),
            ]),
            Line::from(Span::styled(
                "'q' quit | arrows select | Enter edit | 'a'/'d' add/delete | '+'/'-' volume | 'c' chart | 'r' reset",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Render the editable platform table
    fn render_table(&self, f: &mut Frame, area: Rect) {
        let header_cells = [
            "PLATFORM",
            "FIXED COST",
            "COST/CALL",
            "CALLS/SEARCH",
            "VARIABLE/SEARCH",
        ]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows: Vec<Row> = if self.platforms.is_empty() {
            vec![Row::new(vec![Cell::from(
                "No platforms. Press 'a' to add one.",
            )])]
        } else {
            self.platforms
                .iter()
                .enumerate()
                .map(|(i, platform)| {
                    let cells = vec![
                        self.cell(i, Column::Name, platform.name.clone()),
                        self.cell(i, Column::FixedCost, format!("{:.2}", platform.fixed_cost)),
                        self.cell(
                            i,
                            Column::CostPerCall,
                            format!("{:.4}", platform.cost_per_call),
                        ),
                        self.cell(
                            i,
                            Column::CallsPerSearch,
                            format_volume(platform.calls_per_search),
                        ),
                        Cell::from(format!("{:.4}", platform.variable_cost())),
                    ];
                    Row::new(cells).height(1)
                })
                .collect()
        };

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(28),
                Constraint::Percentage(18),
                Constraint::Percentage(18),
                Constraint::Percentage(18),
                Constraint::Percentage(18),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Platforms"))
        .column_spacing(1);

        f.render_widget(table, area);
    }

    /// Build a table cell, highlighting the selection and showing an
    /// in-progress edit in place
    fn cell(&self, row: usize, col: Column, value: String) -> Cell<'static> {
        if row == self.selected_row && col == self.selected_col {
            if let Some(buffer) = &self.edit_buffer {
                return Cell::from(format!("{}_", buffer))
                    .style(Style::default().fg(Color::Black).bg(Color::Yellow));
            }
            return Cell::from(value).style(Style::default().add_modifier(Modifier::REVERSED));
        }
        Cell::from(value)
    }

    /// Render the CPS readout
    fn render_readout(&self, f: &mut Frame, area: Rect) {
        let content = match &self.breakdown {
            Some(breakdown) => vec![
                Line::from(vec![
                    Span::styled("CPS: ", Style::default().fg(Color::Cyan)),
                    Span::styled(
                        self.display.format_amount(breakdown.total),
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Fixed: ", Style::default().fg(Color::Cyan)),
                    Span::raw(format!(
                        "{} per search",
                        self.display.format_amount(breakdown.fixed_cost_per_search)
                    )),
                    Span::raw("  |  "),
                    Span::styled("Variable: ", Style::default().fg(Color::Cyan)),
                    Span::raw(format!(
                        "{} per search",
                        self.display.format_amount(breakdown.variable_cost_per_search)
                    )),
                ]),
            ],
            None => vec![Line::from(Span::styled(
                "No result. Fix the inputs to recompute.",
                Style::default().fg(Color::DarkGray),
            ))],
        };

        let paragraph =
            Paragraph::new(content).block(Block::default().borders(Borders::ALL).title("Result"));
        f.render_widget(paragraph, area);
    }

    /// Render the CPS-over-volume chart with the current point highlighted
    fn render_chart(&self, f: &mut Frame, area: Rect) {
        let line_data: Vec<(f64, f64)> = self.series.iter().map(|p| (p.searches, p.cps)).collect();
        let current: Vec<(f64, f64)> = self
            .breakdown
            .as_ref()
            .map(|b| vec![(self.volume, b.total)])
            .unwrap_or_default();

        if line_data.is_empty() && current.is_empty() {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                "No data to chart",
                Style::default().fg(Color::DarkGray),
            )))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("CPS over search volume"),
            );
            f.render_widget(paragraph, area);
            return;
        }

        let (x_bounds, y_bounds) = chart_bounds(&line_data, &current);

        let datasets = vec![
            Dataset::default()
                .name("CPS")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&line_data),
            Dataset::default()
                .name("current")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::Magenta))
                .data(&current),
        ];

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("CPS over search volume"),
            )
            .x_axis(
                Axis::default()
                    .title("Searches")
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([x_bounds.0, x_bounds.1])
                    .labels(vec![
                        Span::raw(format_volume(x_bounds.0)),
                        Span::raw(format_volume((x_bounds.0 + x_bounds.1) / 2.0)),
                        Span::raw(format_volume(x_bounds.1)),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .title("CPS")
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([y_bounds.0, y_bounds.1])
                    .labels(vec![
                        Span::raw(format!("{:.4}", y_bounds.0)),
                        Span::raw(format!("{:.4}", (y_bounds.0 + y_bounds.1) / 2.0)),
                        Span::raw(format!("{:.4}", y_bounds.1)),
                    ]),
            );

        f.render_widget(chart, area);
    }

    /// Render footer with summary and errors
    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let content = if let Some(error) = &self.error_message {
            Line::from(Span::styled(
                format!("Error: {}", error),
                Style::default().fg(Color::Red),
            ))
        } else {
            let total_fixed: f64 = self.platforms.iter().map(|p| p.fixed_cost).sum();
            Line::from(vec![
                Span::styled("Total: ", Style::default().fg(Color::Cyan)),
                Span::raw(format!(
                    "{} platforms | {}{:.2} fixed costs | sweep {} to {} step {}",
                    self.platforms.len(),
                    self.display.currency,
                    total_fixed,
                    format_volume(self.sweep.min),
                    format_volume(self.sweep.max),
                    format_volume(self.sweep.step),
                )),
            ])
        };

        let paragraph =
            Paragraph::new(content).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

/// Axis bounds covering the sweep series and the current point
fn chart_bounds(line: &[(f64, f64)], current: &[(f64, f64)]) -> ((f64, f64), (f64, f64)) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for &(x, y) in line.iter().chain(current.iter()) {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if x_min >= x_max {
        x_min -= 1.0;
        x_max += 1.0;
    }

    // Head room so the line does not hug the frame
    let mut pad = (y_max - y_min) * 0.1;
    if pad == 0.0 {
        pad = y_max.abs().max(1e-4) * 0.1;
    }

    ((x_min, x_max), ((y_min - pad).max(0.0), y_max + pad))
}

/// Format a value, dropping the fraction when it is a whole number
fn format_volume(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
