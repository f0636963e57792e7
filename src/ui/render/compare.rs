use crate::catalog::Record;
use crate::ui::theme::Theme;
use crate::ui::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub(super) fn render_compare(frame: &mut Frame, area: Rect, app: &App) {
    // Ids are resolved lazily; anything no longer in the catalog is skipped.
    let records: Vec<&Record> = app
        .compare
        .ids()
        .iter()
        .filter_map(|id| app.catalog.get(id))
        .collect();

    if records.is_empty() {
        frame.render_widget(
            Paragraph::new("尚未选择对比车型 · 在列表或详情页按空格添加")
                .style(Theme::muted())
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    // Union of spec labels in first-seen order, so rows line up across
    // columns even when a model omits a field.
    let mut labels: Vec<&str> = Vec::new();
    for record in &records {
        for spec in &record.specs {
            if !labels.contains(&spec.label.as_str()) {
                labels.push(&spec.label);
            }
        }
    }

    let constraints: Vec<Constraint> =
        records.iter().map(|_| Constraint::Ratio(1, records.len() as u32)).collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (record, column) in records.iter().zip(columns.iter()) {
        render_column(frame, *column, record, &labels);
    }
}

fn render_column(frame: &mut Frame, area: Rect, record: &Record, labels: &[&str]) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} · {}", record.series, record.category),
            Theme::muted(),
        )),
        Line::from(Span::styled(format!("¥{}", record.price), Theme::accent())),
        Line::default(),
    ];

    for label in labels {
        let value = record
            .specs
            .iter()
            .find(|s| s.label == *label)
            .map(|s| s.value.as_str())
            .unwrap_or("—");
        lines.push(Line::from(Span::styled(label.to_string(), Theme::muted())));
        lines.push(Line::from(Span::styled(value.to_string(), Theme::text())));
    }

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(format!(" {} ", record.name)),
        ),
        area,
    );
}
