//! Render dispatch: one function per screen plus the shared chrome
//! (footer hints, toasts, floating comparison badge).

mod advisor;
mod compare;
mod detail;
mod footer;
mod list;
mod toast;

use crate::ui::helpers::display_width;
use crate::ui::theme::Theme;
use crate::ui::App;
use crate::view::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Clear, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(Theme::BG)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    match app.view.view() {
        View::List => list::render_list(frame, chunks[0], app),
        View::Detail => detail::render_detail(frame, chunks[0], app),
        View::Compare => compare::render_compare(frame, chunks[0], app),
        View::Advisory => advisor::render_advisor(frame, chunks[0], app),
    }

    footer::render_footer(frame, chunks[1], app);

    // Floating badge: derived from the selection set and the current view,
    // never stored.
    if app.view.compare_badge_visible(&app.compare) {
        render_compare_badge(frame, area, app);
    }

    if let Some(toast) = &app.toast {
        toast::render_toast(frame, toast);
    }
}

fn render_compare_badge(frame: &mut Frame, area: Rect, app: &App) {
    // The chat owns printable keys, so the activation hint differs there.
    let hint = if app.input_mode == crate::ui::InputMode::Chat {
        "Tab 查看"
    } else {
        "按 2 查看"
    };
    let label = format!(" ⚖ 对比 ({}) · {} ", app.compare.len(), hint);
    let width = (display_width(&label) as u16).min(area.width);
    let rect = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height: 1,
    };
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(label).style(Style::default().fg(Theme::WHITE).bg(Theme::ACCENT)),
        rect,
    );
}
