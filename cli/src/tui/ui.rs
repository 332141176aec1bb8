use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use staygrid_core::{stay_span, Rgb, RoomRow, WeekBoard, DAYS_PER_WEEK};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::app::App;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
};

const ROOM_COL_WIDTH: u16 = 30;

pub fn draw(f: &mut Frame, app: &App) {
    let board = app.board();
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Controls
            Constraint::Min(5),    // Grid
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    draw_header(f, main_chunks[0]);
    draw_controls(f, app, &board, main_chunks[1]);
    draw_grid(f, app, &board, main_chunks[2]);
    draw_footer(f, main_chunks[3]);

    // The dropdown paints over the grid, so it goes last.
    if app.state.week_picker_open {
        draw_week_picker(f, app, main_chunks[1]);
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let today = chrono::Local::now().format("%a %b %e").to_string();
    let title = Line::from(vec![
        Span::styled(
            "LUXURY PLACE",
            Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Dashboard", Style::default().fg(THEME.muted)),
        Span::raw("  |  "),
        Span::styled(today, Style::default().fg(THEME.muted)),
    ]);
    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, area);
}

fn draw_controls(f: &mut Frame, app: &App, board: &WeekBoard, area: Rect) {
    let can_prev = app.state.selected_week > 0;
    let can_next = app.state.selected_week + 1 < app.state.week_count;

    let line = Line::from(vec![
        Span::styled("Today [t]", Style::default().fg(THEME.muted)),
        Span::raw("   "),
        Span::styled(
            " < ",
            Style::default().fg(if can_prev { THEME.text } else { THEME.muted }),
        ),
        Span::styled(
            format!(" {} ", board.range_label),
            Style::default().fg(THEME.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            if app.state.week_picker_open { "▲" } else { "▼" },
            Style::default().fg(THEME.muted),
        ),
        Span::styled(
            " > ",
            Style::default().fg(if can_next { THEME.text } else { THEME.muted }),
        ),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_grid(f: &mut Frame, app: &App, board: &WeekBoard, area: Rect) {
    let room_w = ROOM_COL_WIDTH as usize;
    let day_col = day_column_width(area.width);
    let mut lines: Vec<Line> = Vec::new();

    // Days header row
    let mut spans = vec![Span::raw(pad_left("", room_w))];
    for day in &board.days {
        spans.push(Span::styled(
            pad_center(&format!("{} {}", day.weekday, day.day_of_month), day_col as usize),
            Style::default().fg(THEME.text).add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(spans));

    let mut spans = vec![Span::styled(
        pad_left("Occupancy", room_w),
        Style::default().fg(THEME.muted),
    )];
    for day in &board.days {
        spans.push(Span::styled(
            pad_center(&format!("{}%", day.occupancy_percent), day_col as usize),
            Style::default().fg(THEME.muted),
        ));
    }
    lines.push(Line::from(spans));

    for section in &board.sections {
        let collapsed = app.state.is_collapsed(section.category);
        let marker = if collapsed { ">" } else { "v" };

        // Section summary row: title plus the average incomes.
        let mut spans = vec![Span::styled(
            pad_left(&format!("{} {}", marker, section.title), room_w),
            Style::default().fg(THEME.text).add_modifier(Modifier::BOLD),
        )];
        for day in &board.days {
            spans.push(Span::styled(
                pad_center(&format!("${}", day.average_income), day_col as usize),
                Style::default().fg(THEME.text),
            ));
        }
        lines.push(Line::from(spans));

        if collapsed {
            continue;
        }

        for row in &section.rooms {
            lines.push(room_row_line(row, room_w, day_col));
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}

/// One room row: the room label, then the stay blocks laid out with the
/// column-grid span math. Vacant days stay unstyled.
fn room_row_line(row: &RoomRow, room_w: usize, day_col: u16) -> Line<'static> {
    let mut spans = vec![Span::styled(
        pad_left(&format!("  {}", row.room), room_w),
        Style::default().fg(THEME.muted),
    )];
    let mut cursor: u16 = 0;

    for block in &row.blocks {
        let span = stay_span(block.start_index, block.end_index, day_col);
        if span.x > cursor {
            spans.push(Span::raw(" ".repeat((span.x - cursor) as usize)));
        }
        spans.push(Span::styled(
            pad_center(&block.guest_name, span.width as usize),
            Style::default().fg(color(block.text)).bg(color(block.fill)),
        ));
        cursor = span.x + span.width;
    }

    let row_width = day_col * DAYS_PER_WEEK as u16;
    if cursor < row_width {
        spans.push(Span::raw(" ".repeat((row_width - cursor) as usize)));
    }

    Line::from(spans)
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new("h/l: Week | w: Pick week | s/d: Sections | t: Today | q: Quit")
        .style(Style::default().fg(THEME.muted))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn draw_week_picker(f: &mut Frame, app: &App, anchor: Rect) {
    let width: u16 = 24;
    let height = app.service.week_count() as u16 + 2;
    let area = Rect {
        x: anchor.x + anchor.width.saturating_sub(width) / 2,
        y: anchor.y + 1,
        width,
        height,
    }
    .intersection(f.area());

    let mut lines = Vec::new();
    for (index, window) in app.service.weeks().iter().enumerate() {
        let marker = if index == app.state.selected_week { "* " } else { "  " };
        let style = if index == app.picker_cursor {
            Style::default().fg(THEME.text).bg(THEME.muted).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(THEME.text)
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, window.range_label()),
            style,
        )));
    }

    f.render_widget(Clear, area);
    let picker = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Week "),
    );
    f.render_widget(picker, area);
}

fn day_column_width(total: u16) -> u16 {
    let available = total.saturating_sub(ROOM_COL_WIDTH);
    (available / DAYS_PER_WEEK as u16).clamp(6, 14)
}

fn color(c: Rgb) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Truncates to `max` display columns, unicode-aware.
fn fit_width(text: &str, max: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}

fn pad_left(text: &str, width: usize) -> String {
    let text = fit_width(text, width);
    let fill = width - text.as_str().width();
    format!("{}{}", text, " ".repeat(fill))
}

fn pad_center(text: &str, width: usize) -> String {
    let text = fit_width(text, width);
    let text_width = text.as_str().width();
    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
