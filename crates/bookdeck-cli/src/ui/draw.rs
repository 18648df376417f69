use bookdeck_types::Rgb;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{BrowseApp, Mode, SearchField};
use crate::display_model::{BookDetail, PageDisplay};

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

pub(crate) fn draw(f: &mut Frame, app: &BrowseApp) {
    let palette = app.theme.palette();
    let base = Style::default()
        .fg(to_color(palette.dark))
        .bg(to_color(palette.light));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.area());

    let page = PageDisplay::from_browser(&app.browser);

    render_header(f, chunks[0], app, &page, base);
    render_list(f, chunks[1], app, &page, base);
    render_footer(f, chunks[2], app, &page, base);

    match app.mode {
        Mode::Search => render_search(f, app, base),
        Mode::Settings => render_settings(f, app, base),
        Mode::Detail => render_detail(f, app, base),
        Mode::List => {}
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &BrowseApp, page: &PageDisplay, base: Style) {
    let filter_note = if app.browser.filter().is_unconstrained() {
        String::new()
    } else {
        "  [filtered]".to_string()
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" bookdeck ", base.add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            " {} of {} book(s){}",
            page.shown, page.total, filter_note
        )),
    ]))
    .style(base);

    f.render_widget(header, area);
}

fn render_list(f: &mut Frame, area: Rect, app: &BrowseApp, page: &PageDisplay, base: Style) {
    let items: Vec<ListItem> = page
        .previews
        .iter()
        .map(|preview| {
            ListItem::new(Line::from(vec![
                Span::styled(preview.title.clone(), base.add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(preview.author.clone(), base.add_modifier(Modifier::ITALIC)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Books"))
        .style(base)
        .highlight_style(base.add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !page.previews.is_empty() {
        state.select(Some(app.cursor.min(page.previews.len() - 1)));
    }

    f.render_stateful_widget(list, area, &mut state);
}

fn render_footer(f: &mut Frame, area: Rect, app: &BrowseApp, page: &PageDisplay, base: Style) {
    let footer = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {}", page.more_label()),
            base.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(format!(
            " j/k move  enter open  m more  / search  s settings ({})  q quit",
            app.theme
        ))),
    ])
    .style(base);

    f.render_widget(footer, area);
}

fn render_search(f: &mut Frame, app: &BrowseApp, base: Style) {
    let area = centered_rect(60, 40, f.area());
    let focused = base.add_modifier(Modifier::REVERSED);

    let author_value = match app.search.author_ix.checked_sub(1) {
        None => "All Authors",
        Some(ix) => app.author_options[ix].1.as_str(),
    };
    let genre_value = match app.search.genre_ix.checked_sub(1) {
        None => "All Genres",
        Some(ix) => app.genre_options[ix].1.as_str(),
    };

    let field_style = |field: SearchField| {
        if app.search.field == field {
            focused
        } else {
            base
        }
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Title:  "),
            Span::styled(format!("{}_", app.search.title), field_style(SearchField::Title)),
        ]),
        Line::from(vec![
            Span::raw("Author: "),
            Span::styled(format!("< {} >", author_value), field_style(SearchField::Author)),
        ]),
        Line::from(vec![
            Span::raw("Genre:  "),
            Span::styled(format!("< {} >", genre_value), field_style(SearchField::Genre)),
        ]),
        Line::default(),
        Line::from(Span::raw(
            "enter apply  esc cancel  tab field  left/right choose",
        )),
    ];

    let form = Paragraph::new(lines)
        .style(base)
        .block(Block::default().borders(Borders::ALL).title("Search"));

    f.render_widget(Clear, area);
    f.render_widget(form, area);
}

fn render_settings(f: &mut Frame, app: &BrowseApp, base: Style) {
    let area = centered_rect(40, 30, f.area());
    let selected = base.add_modifier(Modifier::REVERSED);

    let row = |theme: bookdeck_types::Theme| {
        let style = if app.pending_theme == theme { selected } else { base };
        Line::from(Span::styled(format!("  {}  ", theme), style))
    };

    let lines = vec![
        Line::from(Span::raw("Theme")),
        Line::default(),
        row(bookdeck_types::Theme::Day),
        row(bookdeck_types::Theme::Night),
        Line::default(),
        Line::from(Span::raw("enter apply  esc cancel")),
    ];

    let form = Paragraph::new(lines)
        .style(base)
        .block(Block::default().borders(Borders::ALL).title("Settings"));

    f.render_widget(Clear, area);
    f.render_widget(form, area);
}

fn render_detail(f: &mut Frame, app: &BrowseApp, base: Style) {
    let Some(book) = app
        .active_book
        .as_ref()
        .and_then(|id| app.browser.book(id))
    else {
        return;
    };
    let detail = BookDetail::from_book(book, app.browser.catalog());

    let area = centered_rect(70, 70, f.area());

    let mut lines = vec![
        Line::from(Span::styled(
            detail.title.clone(),
            base.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(detail.subtitle.clone())),
    ];
    if !detail.genres.is_empty() {
        lines.push(Line::from(Span::styled(
            detail.genres.join(", "),
            base.add_modifier(Modifier::ITALIC),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::raw(detail.description.clone())));
    lines.push(Line::default());
    lines.push(Line::from(Span::raw(format!("Cover: {}", detail.image))));
    lines.push(Line::default());
    lines.push(Line::from(Span::raw("esc close")));

    let overlay = Paragraph::new(lines)
        .style(base)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Book"));

    f.render_widget(Clear, area);
    f.render_widget(overlay, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
