//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Mode};

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Match list
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_match_list(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);

    // Render overlays based on mode
    match app.mode {
        Mode::Confirm => render_confirm_dialog(app, frame),
        Mode::Help => render_help_overlay(frame),
        Mode::Normal => {}
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let total = humansize::format_size(app.total_size(), humansize::BINARY);
    let header_text = format!(
        " {}  │  {} match{}  │  {}",
        app.root.display(),
        app.matches.len(),
        if app.matches.len() == 1 { "" } else { "es" },
        total
    );

    let block = Block::default()
        .title(" Depsweep ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(header_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn render_match_list(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if app.matches.is_empty() {
        let paragraph = Paragraph::new("No dependency caches found")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));

        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .matches
        .iter()
        .map(|m| {
            let size_str = humansize::format_size(m.size, humansize::BINARY);
            let line = Line::from(vec![
                Span::styled(
                    format!("[{:<12}] ", m.name),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(m.path.display().to_string()),
                Span::styled(
                    format!("  {:>10}", size_str),
                    Style::default().fg(Color::Green),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let keys = " j/k: navigate  d: delete  r: rescan  ?: help  q: quit";
    let status = app.status_message.as_deref().unwrap_or("");

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(keys, Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(status, Style::default().fg(Color::Cyan))),
    ]);

    frame.render_widget(footer, area);
}

fn render_confirm_dialog(app: &App, frame: &mut Frame) {
    let Some(m) = app.selected_match() else {
        return;
    };

    let area = centered_rect(60, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm Delete ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let text = vec![
        Line::from(""),
        Line::from(format!("Delete {} ?", m.path.display())),
        Line::from(Span::styled(
            format!(
                "This permanently removes {} of data.",
                humansize::format_size(m.size, humansize::BINARY)
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[y] delete    [n/Esc] cancel",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect(50, 12, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let text = vec![
        Line::from(""),
        Line::from("  j / Down      move down"),
        Line::from("  k / Up        move up"),
        Line::from("  g / G         first / last entry"),
        Line::from("  d / Delete    delete selected folder"),
        Line::from("  r             rescan"),
        Line::from("  ?             toggle this help"),
        Line::from("  q / Esc       quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Deletion is permanent; there is no undo.",
            Style::default().fg(Color::Red),
        )),
    ];

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

/// Centered rectangle with the given percentage width and fixed height.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (area.width as u32 * percent_x as u32 / 100) as u16;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height: height.min(area.height),
    }
}
