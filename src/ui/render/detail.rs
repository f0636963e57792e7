use crate::ui::helpers::wrap_width;
use crate::ui::theme::Theme;
use crate::ui::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

pub(super) fn render_detail(frame: &mut Frame, area: Rect, app: &App) {
    // A dangling focus id has no record to show; the slot clears on the next
    // navigation anyway.
    let Some(record) = app.view.focus().and_then(|id| app.catalog.get(id)) else {
        frame.render_widget(
            Paragraph::new("该车型已不在售").style(Theme::muted()),
            area,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // title block
            Constraint::Length(4), // description
            Constraint::Min(3),    // spec table
        ])
        .split(area);

    let in_compare = app.compare.contains(&record.id);
    let compare_hint = if in_compare {
        Span::styled("⚖ 已加入对比（空格移除）", Theme::accent())
    } else {
        Span::styled("按空格加入对比", Theme::muted())
    };

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(format!("  {}", record.name), Theme::title())),
            Line::from(vec![
                Span::styled(
                    format!("  {} 系列 · {}", record.series, record.category),
                    Theme::muted(),
                ),
                Span::styled(format!("   ¥{} 官方指导价", record.price), Theme::accent()),
            ]),
            Line::from(vec![Span::raw("  "), compare_hint]),
        ]),
        chunks[0],
    );

    let desc_width = area.width.saturating_sub(4) as usize;
    let desc_lines: Vec<Line> = wrap_width(&record.description, desc_width)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Theme::text())))
        .collect();
    frame.render_widget(
        Paragraph::new(desc_lines).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Theme::border())
                .title(" 产品简述 "),
        ),
        chunks[1],
    );

    let rows: Vec<Row> = record
        .specs
        .iter()
        .map(|spec| {
            Row::new(vec![
                Span::styled(spec.label.clone(), Theme::muted()),
                Span::styled(spec.value.clone(), Theme::text()),
            ])
        })
        .collect();
    let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(10)]).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Theme::border())
            .title(" 技术参数 "),
    );
    frame.render_widget(table, chunks[2]);
}
