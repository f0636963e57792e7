use crate::advisor::Role;
use crate::ui::helpers::wrap_width;
use crate::ui::theme::Theme;
use crate::ui::{App, SPINNER_FRAMES};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub(super) fn render_advisor(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Min(1),    // transcript
            Constraint::Length(3), // input
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_transcript(frame, chunks[1], app);
    render_input(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let status = if crate::advisor::client::is_available() {
        Span::styled("  ● 在线 · 为您提供选车建议", Theme::muted())
    } else {
        Span::styled("  ○ 离线 · 未配置服务密钥", Theme::muted())
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("  光阳智选顾问", Theme::title())),
            Line::from(status),
        ]),
        area,
    );
}

fn render_transcript(frame: &mut Frame, area: Rect, app: &App) {
    let bubble_width = (area.width.saturating_sub(10) as usize).max(8);
    let mut lines: Vec<Line> = Vec::new();

    for message in app.session.messages() {
        let (speaker, style, alignment) = match message.role {
            Role::Advisor => ("顾问", Theme::text(), Alignment::Left),
            Role::User => ("你", Style::default().fg(Theme::ACCENT), Alignment::Right),
        };
        let stamp = message.at.with_timezone(&chrono::Local).format("%H:%M");
        lines.push(
            Line::from(Span::styled(format!("{} · {}", speaker, stamp), Theme::muted()))
                .alignment(alignment),
        );
        for wrapped in wrap_width(&message.text, bubble_width) {
            lines.push(Line::from(Span::styled(wrapped, style)).alignment(alignment));
        }
        lines.push(Line::default());
    }

    if app.session.is_pending() {
        let frame_idx = app.pending_frame % SPINNER_FRAMES.len();
        lines.push(Line::from(vec![
            Span::styled("顾问 ", Theme::muted()),
            Span::styled(format!("{} 正在输入…", SPINNER_FRAMES[frame_idx]), Theme::muted()),
        ]));
    }

    // Pin to the bottom of the transcript; Up/Down scrolls back through
    // history.
    let visible = area.height as usize;
    let max_scroll = lines.len().saturating_sub(visible);
    let offset = max_scroll.saturating_sub(app.chat_scroll.min(max_scroll));

    frame.render_widget(
        Paragraph::new(lines).scroll((offset as u16, 0)),
        area,
    );
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let content = if app.session.input().is_empty() {
        Span::styled("描述您的需求（如：3万以内水冷踏板）…", Theme::muted())
    } else {
        Span::styled(format!("{}▏", app.session.input()), Theme::text())
    };

    let title = if app.session.is_pending() {
        " 输入（回复到达前不可发送） "
    } else {
        " 输入（回车发送） "
    };

    frame.render_widget(
        Paragraph::new(Line::from(content)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(title),
        ),
        area,
    );
}
