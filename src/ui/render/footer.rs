use crate::ui::theme::Theme;
use crate::ui::App;
use crate::view::View;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub(super) fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw("  ")];

    for (key, label, target) in [
        ("1", "车型", View::List),
        ("2", "对比", View::Compare),
        ("3", "顾问", View::Advisory),
    ] {
        let active = app.view.view() == target
            || (target == View::List && app.view.view() == View::Detail);
        let style = if active { Theme::accent() } else { Theme::muted() };
        spans.push(Span::styled(format!("{} {}  ", key, label), style));
    }

    spans.push(Span::styled("│  ", Theme::muted()));
    let hints = match app.view.view() {
        View::List => "↵ 详情  ␣ 对比  / 搜索  Tab 分类  q 退出",
        View::Detail => "Esc 返回  ␣ 对比  q 退出",
        View::Compare => "x 移除末位  C 清空  Esc 返回  q 退出",
        View::Advisory => "回车 发送  ↑↓ 翻阅  Tab 对比  Esc 返回列表",
    };
    spans.push(Span::styled(hints, Theme::muted()));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
