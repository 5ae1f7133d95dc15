use crate::application::App;
use crate::domain::{FormField, Step};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_body(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let booking = &app.booking;
    let mut lines = vec![
        Line::from(Span::styled(
            "Consultation",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} min · Web conferencing details provided upon confirmation.",
                booking.config.slot_minutes
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    // Booking bar once a date and time are locked in
    if matches!(booking.step, Step::Details | Step::Done) {
        if let Some(summary) = booking.summary() {
            lines.push(Line::from(vec![
                Span::styled(summary, Style::default().fg(Color::Gray)),
                Span::styled(" · European Time", Style::default().fg(Color::DarkGray)),
            ]));
        }
    }

    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn render_body(f: &mut Frame, app: &App, area: Rect) {
    match app.booking.step {
        Step::Calendar => render_calendar(f, app, area),
        Step::Time => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(40), Constraint::Min(24)])
                .split(area);
            render_calendar(f, app, columns[0]);
            render_time_panel(f, app, columns[1]);
        }
        Step::Details => render_details(f, app, area),
        Step::Done => render_done(f, app, area),
    }
}

fn render_calendar(f: &mut Frame, app: &App, area: Rect) {
    let booking = &app.booking;

    let nav = Line::from(vec![
        Span::styled("‹", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("  {} {}  ", booking.month_name(), booking.year),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("›", Style::default().fg(Color::Yellow)),
    ]);

    let header_cells: Vec<Cell> = booking
        .config
        .weekday_labels
        .iter()
        .map(|label| {
            Cell::from(format!("{:>4}", label))
                .style(Style::default().fg(Color::DarkGray))
        })
        .collect();
    let mut rows = vec![Row::new(header_cells).height(1)];

    // Selection only renders while picking a time; it survives month
    // navigation keyed by day number alone.
    let show_selected = booking.step == Step::Time;

    for week in booking.day_cells().chunks(7) {
        let cells: Vec<Cell> = week
            .iter()
            .map(|cell| match cell {
                None => Cell::from("    "),
                Some(day) => {
                    let available = booking.is_available_day(*day);
                    let selected = show_selected && booking.selected_day == Some(*day);
                    let mut style = if selected {
                        Style::default()
                            .bg(Color::Yellow)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD)
                    } else if available {
                        Style::default().fg(Color::Yellow)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    if *day == app.cursor_day {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Cell::from(format!("{:>3} ", day)).style(style)
                }
            })
            .collect();
        rows.push(Row::new(cells).height(1));
    }

    let title = if booking.step == Step::Calendar {
        "Select a Date & Time"
    } else {
        ""
    };
    let widths = vec![Constraint::Length(4); 7];
    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(1);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    f.render_widget(Paragraph::new(nav).alignment(Alignment::Center), chunks[0]);
    f.render_widget(table, chunks[1]);
    f.render_widget(
        Paragraph::new("Central European Time").style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn render_time_panel(f: &mut Frame, app: &App, area: Rect) {
    let booking = &app.booking;

    let heading = match booking.selected_day {
        Some(day) => format!(
            "{}, {} {}",
            booking.day_name(day),
            booking.month_name(),
            day
        ),
        None => String::new(),
    };

    let visible = area.height.saturating_sub(4) as usize;
    let start = (app.slot_cursor + 1).saturating_sub(visible.max(1));

    let mut lines = Vec::new();
    for (i, slot) in booking.config.slots.iter().enumerate().skip(start) {
        if lines.len() >= visible {
            break;
        }
        let selected = booking.selected_time.as_deref() == Some(slot.as_str());
        let mut style = if selected {
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        if i == app.slot_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::from(Span::styled(format!("  {:<7}", slot), style)));
    }

    let next_style = if booking.selected_time.is_some() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Next (Tab)  ", next_style)));

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(heading));
    f.render_widget(panel, area);
}

fn render_details(f: &mut Frame, app: &App, area: Rect) {
    let booking = &app.booking;
    let mut lines = vec![
        Line::from(Span::styled(
            "Enter details",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_label("Name *"),
        input_line(app, FormField::Name),
        Line::from(""),
        field_label("Email *"),
        input_line(app, FormField::Email),
        Line::from(""),
    ];

    let guest_toggle = if booking.show_guest_field {
        "− Remove Guest (Ctrl+G)"
    } else {
        "+ Add Guests (Ctrl+G)"
    };
    lines.push(Line::from(Span::styled(
        guest_toggle,
        Style::default().fg(Color::Yellow),
    )));

    if booking.show_guest_field {
        lines.push(field_label("Guest email address"));
        lines.push(input_line(app, FormField::GuestEmail));
    }
    lines.push(Line::from(""));
    lines.push(field_label(
        "Please share anything that will help prepare our meeting",
    ));
    lines.push(input_line(app, FormField::Notes));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Schedule Event (Enter)  ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));

    let panel = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(panel, area);
}

fn field_label(label: &str) -> Line<'_> {
    Line::from(Span::styled(label, Style::default().fg(Color::Gray)))
}

/// A form input rendered as text with a reversed cell marking the text
/// cursor when the field has focus.
fn input_line(app: &App, field: FormField) -> Line<'static> {
    let value = app.booking.form.get(field);
    let focused = app.focused_field == field;
    let base = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    if !focused {
        return Line::from(Span::styled(format!("> {}", value), base));
    }

    let at = app.cursor_position.min(value.len());
    let before = value[..at].to_string();
    let (cursor, after) = match value[at..].chars().next() {
        Some(c) => (
            c.to_string(),
            value[at + c.len_utf8()..].to_string(),
        ),
        None => (" ".to_string(), String::new()),
    };
    Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Yellow)),
        Span::styled(before, base),
        Span::styled(cursor, base.add_modifier(Modifier::REVERSED)),
        Span::styled(after, base),
    ])
}

fn render_done(f: &mut Frame, app: &App, area: Rect) {
    let booking = &app.booking;
    let lines = vec![
        Line::from(Span::styled(
            "You are scheduled",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "A calendar invitation has been sent to your email address.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Schedule eClosing",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("  {}", booking.form.name)),
        Line::from(format!("  {}", booking.summary().unwrap_or_default())),
        Line::from(Span::styled(
            "  European Time",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(card, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = if let Some(ref status) = app.status_message {
        status.clone()
    } else {
        match app.booking.step {
            Step::Calendar => {
                "arrows/hjkl: move | [ ]: month | Enter/Space: select day | q: quit".to_string()
            }
            Step::Time => {
                "jk: slot | Enter: pick/confirm | Tab: next | h l: day | Space: change day | q: quit"
                    .to_string()
            }
            Step::Details => {
                "Tab: next field | Ctrl+G: guests | Enter: schedule | Ctrl+C: quit".to_string()
            }
            Step::Done => "r: book another | c: copy details | q: quit".to_string(),
        }
    };

    let style = match app.booking.step {
        Step::Calendar => Style::default(),
        Step::Time => Style::default().fg(Color::Yellow),
        Step::Details => Style::default().fg(Color::Green),
        Step::Done => Style::default().fg(Color::Cyan),
    };

    let bar = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(bar, area);
}
