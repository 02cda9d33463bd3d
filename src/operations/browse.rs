use std::io;

use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::{
    prelude::{Alignment, Color, Constraint, Direction, Layout, Rect, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::Result;
use crate::models::period::Period;
use crate::models::transaction::{Transaction, TransactionType};
use crate::operations::summary::{
    self, CategoryShare, ChartSlice, MonthlySummary, chart_series, expense_breakdown,
    income_breakdown, summarize,
};

// Palettes from the web version of the tracker, one per category set.
const INCOME_COLORS: [Color; 5] = [
    Color::Rgb(5, 150, 105),
    Color::Rgb(16, 185, 129),
    Color::Rgb(52, 211, 153),
    Color::Rgb(110, 231, 183),
    Color::Rgb(167, 243, 208),
];

const EXPENSE_COLORS: [Color; 12] = [
    Color::Rgb(59, 130, 246),
    Color::Rgb(99, 102, 241),
    Color::Rgb(139, 92, 246),
    Color::Rgb(168, 85, 247),
    Color::Rgb(217, 70, 239),
    Color::Rgb(236, 72, 153),
    Color::Rgb(244, 63, 94),
    Color::Rgb(249, 115, 22),
    Color::Rgb(234, 179, 8),
    Color::Rgb(6, 182, 212),
    Color::Rgb(100, 116, 139),
    Color::Rgb(148, 163, 184),
];

fn slice_color(slice: &ChartSlice) -> Color {
    match slice.transaction_type {
        TransactionType::Income => INCOME_COLORS[slice.color_index % INCOME_COLORS.len()],
        TransactionType::Expense => EXPENSE_COLORS[slice.color_index % EXPENSE_COLORS.len()],
    }
}

fn share_color(share: &CategoryShare) -> Color {
    match share.category.transaction_type() {
        TransactionType::Income => Color::Green,
        TransactionType::Expense => {
            if share.category.is_savings() {
                Color::LightBlue
            } else {
                Color::Gray
            }
        }
    }
}

/// Interactive month dashboard: stats, the filtered transaction list, both
/// category breakdowns and a doughnut chart. Arrow keys switch the period
/// and scroll the list; q or Esc exits. Pure rendering, no mutation.
pub fn run_dashboard(transactions: &[Transaction], period: Period) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let result = run_loop(transactions, period);

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    result
}

fn run_loop(transactions: &[Transaction], mut period: Period) -> Result<()> {
    let backend = ratatui::backend::CrosstermBackend::new(io::stdout());
    let mut terminal = ratatui::Terminal::new(backend)?;
    let mut scroll = 0usize;

    loop {
        let filtered = summary::filter_by_period(transactions, period);
        let totals = summarize(&filtered);
        let income_shares = income_breakdown(&filtered);
        let expense_shares = expense_breakdown(&filtered);
        let slices = chart_series(&filtered);

        terminal.draw(|frame| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Percentage(55),
                    Constraint::Percentage(45),
                ])
                .split(frame.area());

            render_stats(frame, rows[0], period, &totals);

            let middle = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(rows[1]);

            render_transaction_list(frame, middle[0], &filtered, scroll);
            render_breakdowns(frame, middle[1], &income_shares, &expense_shares);

            let bottom = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(rows[2]);

            render_chart(frame, bottom[0], &slices);
            render_legend(frame, bottom[1], &slices);
        })?;

        if event::poll(std::time::Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Left => {
                        period = period.previous();
                        scroll = 0;
                    }
                    KeyCode::Right => {
                        period = period.next();
                        scroll = 0;
                    }
                    KeyCode::Up => scroll = scroll.saturating_sub(1),
                    KeyCode::Down => {
                        if scroll + 1 < filtered.len() {
                            scroll += 1;
                        }
                    }
                    _ => {}
                },
                Event::Resize(_, _) => continue,
                _ => {}
            }
        }
    }

    Ok(())
}

fn signed_amount(transaction: &Transaction) -> String {
    let sign = match transaction.transaction_type() {
        TransactionType::Income => '+',
        TransactionType::Expense => '-',
    };
    format!("{}{}", sign, transaction.amount.round_dp(2))
}

fn render_stats(frame: &mut ratatui::Frame, area: Rect, period: Period, totals: &MonthlySummary) {
    let balance_color = if totals.balance >= Decimal::ZERO {
        Color::Green
    } else {
        Color::Red
    };
    let balance_sign = if totals.balance >= Decimal::ZERO {
        "+"
    } else {
        ""
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {}  (←/→ month, q to exit) ", period),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Income +{}  ", totals.income.round_dp(2)),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!("Spent -{}  ", totals.real_expenses.round_dp(2)),
            Style::default().fg(Color::Red),
        ),
        Span::styled(
            format!("Saved {}  ", totals.savings.round_dp(2)),
            Style::default().fg(Color::LightBlue),
        ),
        Span::styled(
            format!("Balance {}{}", balance_sign, totals.balance.round_dp(2)),
            Style::default().fg(balance_color),
        ),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_transaction_list(
    frame: &mut ratatui::Frame,
    area: Rect,
    filtered: &[&Transaction],
    scroll: usize,
) {
    let block = Block::default().title("Transactions").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if filtered.is_empty() {
        let empty = Paragraph::new("No entries in this period").alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let visible = inner.height as usize;
    let mut lines = Vec::new();
    for transaction in filtered.iter().skip(scroll).take(visible) {
        let amount_color = match transaction.transaction_type() {
            TransactionType::Income => Color::Green,
            TransactionType::Expense if transaction.category.is_savings() => Color::LightBlue,
            TransactionType::Expense => Color::White,
        };
        let label = if transaction.description.is_empty() {
            transaction.category.as_str().to_string()
        } else {
            transaction.description.clone()
        };
        let fixed_marker = if transaction.is_fixed { " [fix]" } else { "" };

        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", transaction.date.format("%Y-%m-%d")),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{:>10} ", signed_amount(transaction)),
                Style::default().fg(amount_color),
            ),
            Span::styled(
                format!("{:<17} ", transaction.category.as_str()),
                Style::default().fg(Color::Gray),
            ),
            Span::raw(label),
            Span::styled(fixed_marker, Style::default().fg(Color::DarkGray)),
        ]));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, inner);
}

fn render_breakdowns(
    frame: &mut ratatui::Frame,
    area: Rect,
    income_shares: &[CategoryShare],
    expense_shares: &[CategoryShare],
) {
    let block = Block::default().title("Breakdown").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if income_shares.is_empty() && expense_shares.is_empty() {
        let empty = Paragraph::new("No entries in this period").alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let bar_width = inner.width.saturating_sub(2) as usize;
    let mut lines = Vec::new();

    for (title, shares) in [("Income", income_shares), ("Expenses", expense_shares)] {
        if shares.is_empty() {
            continue;
        }
        lines.push(Line::from(Span::styled(
            title,
            Style::default().fg(Color::White),
        )));
        for share in shares {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<17}", share.category.as_str()),
                    Style::default().fg(share_color(share)),
                ),
                Span::raw(format!(
                    " {:>10}  {:>5.1}%",
                    share.amount.round_dp(2),
                    share.percentage
                )),
            ]));

            let filled = (share.percentage / 100.0 * bar_width as f64).round() as usize;
            let filled = filled.min(bar_width);
            lines.push(Line::from(vec![
                Span::styled("█".repeat(filled), Style::default().fg(share_color(share))),
                Span::styled(
                    "░".repeat(bar_width - filled),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, inner);
}

fn render_chart(frame: &mut ratatui::Frame, area: Rect, slices: &[ChartSlice]) {
    let block = Block::default().title("Category Chart").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if slices.is_empty() {
        let empty = Paragraph::new("No entries in this period").alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let total: f64 = slices
        .iter()
        .map(|slice| slice.value.to_f64().unwrap_or(0.0))
        .sum();
    let total = total.max(f64::MIN_POSITIVE);

    let mut segments = Vec::new();
    let mut start_angle = 0.0_f64;
    for slice in slices {
        let value = slice.value.to_f64().unwrap_or(0.0);
        let sweep = value / total * std::f64::consts::TAU;
        segments.push((start_angle, start_angle + sweep, slice_color(slice)));
        start_angle += sweep;
    }

    let canvas = Canvas::default()
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(move |ctx| {
            let step = 0.04;
            for (start, end, color) in &segments {
                let mut points = Vec::new();
                // Doughnut: leave the inner 55% of the radius empty.
                let mut r = 0.55;
                while r <= 1.0 {
                    let mut angle = *start;
                    while angle <= *end {
                        points.push((r * angle.cos(), r * angle.sin()));
                        angle += 0.05;
                    }
                    r += step;
                }
                if !points.is_empty() {
                    ctx.draw(&Points {
                        coords: &points,
                        color: *color,
                    });
                }
            }
        });

    frame.render_widget(canvas, inner);
}

fn render_legend(frame: &mut ratatui::Frame, area: Rect, slices: &[ChartSlice]) {
    let block = Block::default().title("Legend").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if slices.is_empty() {
        return;
    }

    let mut lines = Vec::new();
    for slice in slices.iter().take(inner.height as usize) {
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(slice_color(slice))),
            Span::raw(format!(
                "{} ({})  {}",
                slice.label,
                slice.transaction_type,
                slice.value.round_dp(2)
            )),
        ]));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_colors_wrap_around_their_palette() {
        let slice = ChartSlice {
            label: "Gehalt",
            value: Decimal::ONE,
            transaction_type: TransactionType::Income,
            color_index: INCOME_COLORS.len(),
        };
        assert_eq!(slice_color(&slice), INCOME_COLORS[0]);

        let slice = ChartSlice {
            label: "Miete",
            value: Decimal::ONE,
            transaction_type: TransactionType::Expense,
            color_index: 3,
        };
        assert_eq!(slice_color(&slice), EXPENSE_COLORS[3]);
    }
}
