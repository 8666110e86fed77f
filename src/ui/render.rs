use crate::deck::{Candidate, Decision, Deck};
use crate::ui::app::{App, GalleryTab};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions, shifted_rect};
use crate::ui::session::SessionState;
use crate::ui::theme::{ACCENT, CARD_BORDER, DISLIKE, HEADER_TEXT, LIKE, MUTED};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let session = app.session();

    frame.render_widget(Header::new().widget(session), header);
    frame.render_widget(Clear, body);

    match session.state() {
        SessionState::Idle | SessionState::Loading { .. } => draw_message(
            frame,
            body,
            "Fetching cats…",
            Style::default().fg(MUTED),
            None,
        ),
        SessionState::Failed { message, .. } => draw_message(
            frame,
            body,
            message,
            Style::default().fg(DISLIKE),
            Some("Press r to retry"),
        ),
        SessionState::Loaded { deck, .. } => match deck.current() {
            Some(candidate) => draw_card(frame, body, app, deck, candidate),
            None => draw_gallery(frame, body, app, deck),
        },
    }

    frame.render_widget(
        Footer::new().widget(footer, session.phase(), app.notice()),
        footer,
    );
}

fn draw_message(frame: &mut Frame<'_>, body: Rect, text: &str, style: Style, hint: Option<&str>) {
    let mut lines = vec![Line::from(Span::styled(text.to_string(), style))];
    if let Some(hint) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(HEADER_TEXT),
        )));
    }
    let area = centered_rect(60, 30, body);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_card(frame: &mut Frame<'_>, body: Rect, app: &App, deck: &Deck, candidate: &Candidate) {
    let lean = app.drag().and_then(|drag| drag.lean());
    let offset = app.drag().map(|drag| drag.offset()).unwrap_or(0);
    let card = shifted_rect(centered_rect(60, 70, body), offset, body);

    let (border_color, badge) = match lean {
        Some(Decision::Like) => (LIKE, " LIKE "),
        Some(Decision::Dislike) => (DISLIKE, " NOPE "),
        None => (CARD_BORDER, ""),
    };

    let tags = if candidate.tags.is_empty() {
        "no tags".to_string()
    } else {
        candidate.tags.join(", ")
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("Cat {} of {}", deck.cursor() + 1, deck.total_count()),
            Style::default().fg(MUTED),
        )),
        Line::from(""),
        Line::from(Span::styled(
            candidate.id.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Tags: ", Style::default().fg(MUTED)),
            Span::styled(tags, Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(app.image_url(candidate), Style::default().fg(ACCENT))),
    ];

    let block = Block::default()
        .title(Span::styled(badge, Style::default().fg(border_color)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(Clear, card);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block),
        card,
    );
}

fn draw_gallery(frame: &mut Frame<'_>, body: Rect, app: &App, deck: &Deck) {
    let tab = app.gallery_tab();
    let (title, color) = match tab {
        GalleryTab::Liked => (format!(" Liked ({}) ", deck.liked_count()), LIKE),
        GalleryTab::Disliked => (format!(" Disliked ({}) ", deck.disliked_count()), DISLIKE),
    };

    let items: Vec<ListItem> = deck
        .decided(tab.decision())
        .enumerate()
        .map(|(idx, candidate)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3}. ", idx + 1), Style::default().fg(MUTED)),
                Span::styled(app.image_url(candidate), Style::default().fg(HEADER_TEXT)),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(color)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    if items.is_empty() {
        let empty = match tab {
            GalleryTab::Liked => "No liked cats this round",
            GalleryTab::Disliked => "No disliked cats this round",
        };
        frame.render_widget(
            Paragraph::new(Span::styled(empty, Style::default().fg(MUTED)))
                .alignment(Alignment::Center)
                .block(block),
            body,
        );
        return;
    }

    frame.render_widget(List::new(items).block(block), body);
}
