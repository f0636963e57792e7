use crate::ui::helpers::display_width;
use crate::ui::theme::Theme;
use crate::ui::{Toast, ToastKind};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Clear, Paragraph},
    Frame,
};

pub(super) fn render_toast(frame: &mut Frame, toast: &Toast) {
    let area = frame.area();

    let (prefix, bg) = match toast.kind {
        ToastKind::Error => ("  x ", Theme::RED),
        ToastKind::Info => ("  › ", Theme::GREY_700),
    };

    let text = format!("{}{}  ", prefix, toast.message);
    let width = (display_width(&text) as u16).min(area.width);
    let rect = Rect {
        x: area.right().saturating_sub(width),
        y: area.bottom().saturating_sub(2),
        width,
        height: 1,
    };

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Theme::WHITE).bg(bg)),
        rect,
    );
}
