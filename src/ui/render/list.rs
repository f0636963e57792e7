use crate::catalog::Category;
use crate::filter::CategoryFilter;
use crate::ui::theme::Theme;
use crate::ui::{App, InputMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub(super) fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Length(3), // search
            Constraint::Length(1), // category tabs
            Constraint::Length(1), // count
            Constraint::Min(1),    // model list
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_search(frame, chunks[1], app);
    render_tabs(frame, chunks[2], app);

    let filtered = app.filtered();

    frame.render_widget(
        Paragraph::new(format!("  在售车型 ({})", filtered.len())).style(Theme::muted()),
        chunks[3],
    );

    if filtered.is_empty() {
        frame.render_widget(
            Paragraph::new("未找到匹配车型")
                .style(Theme::muted())
                .alignment(Alignment::Center),
            chunks[4],
        );
        return;
    }

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|record| {
            let marker = if app.compare.contains(&record.id) {
                Span::styled("⚖ ", Theme::accent())
            } else {
                Span::raw("  ")
            };
            ListItem::new(Line::from(vec![
                marker,
                Span::styled(record.name.clone(), Theme::text()),
                Span::styled(
                    format!("  {} · {}", record.series, record.category),
                    Theme::muted(),
                ),
                Span::styled(format!("  ¥{}", record.price), Theme::accent()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Theme::selected())
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    state.select(Some(app.list_selected.min(filtered.len() - 1)));
    frame.render_stateful_widget(list, chunks[4], &mut state);
}

fn render_header(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("  KYMCO · 车型库", Theme::title())),
            Line::from(Span::styled("  MOTORCYCLE DATABASE", Theme::muted())),
        ]),
        area,
    );
}

fn render_search(frame: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Search;
    let content = if app.criteria.query.is_empty() && !editing {
        Span::styled("搜索车型名称或系列…（按 / 开始）", Theme::muted())
    } else if editing {
        Span::styled(format!("{}▏", app.criteria.query), Theme::text())
    } else {
        Span::styled(app.criteria.query.clone(), Theme::text())
    };

    let border = if editing {
        Style::default().fg(Theme::ACCENT)
    } else {
        Theme::border()
    };

    frame.render_widget(
        Paragraph::new(Line::from(content)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(" 搜索 "),
        ),
        area,
    );
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw("  ")];
    let selectors = std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.iter().map(|c| CategoryFilter::Only(*c)));
    for selector in selectors {
        let style = if selector == app.criteria.category {
            Style::default().fg(Theme::WHITE).bg(Theme::ACCENT)
        } else {
            Theme::muted()
        };
        spans.push(Span::styled(format!(" {} ", selector.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("（Tab 切换）", Theme::muted()));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
