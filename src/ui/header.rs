use crate::ui::session::Session;
use crate::ui::theme::{ACCENT, DISLIKE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, LIKE};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, session: &Session) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "catswipe",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ];

        if let Some(deck) = session.deck() {
            spans.extend([
                Span::styled("  │  ", separator_style),
                Span::styled(
                    format!("{}/{}", deck.cursor(), deck.total_count()),
                    text_style,
                ),
                Span::styled("  │  ", separator_style),
                Span::styled(format!("♥ {}", deck.liked_count()), Style::default().fg(LIKE)),
                Span::styled("  ", text_style),
                Span::styled(
                    format!("✗ {}", deck.disliked_count()),
                    Style::default().fg(DISLIKE),
                ),
            ]);
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
