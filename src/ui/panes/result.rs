//! Parser result pane rendering

use crate::analysis::Analysis;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the verdict, warnings and a staleness hint.
pub fn render_result_pane(
    frame: &mut Frame,
    area: Rect,
    analysis: Option<&Analysis>,
    is_stale: bool,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Parser Result ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut lines = Vec::new();

    match analysis {
        None => lines.push(Line::styled(
            "(not analyzed yet)",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Some(analysis) => {
            let verdict_color = if analysis.is_valid() {
                DEFAULT_THEME.success
            } else {
                DEFAULT_THEME.error
            };
            lines.push(Line::from(Span::styled(
                analysis.verdict(),
                Style::default()
                    .fg(verdict_color)
                    .add_modifier(Modifier::BOLD),
            )));

            for warning in &analysis.warnings {
                lines.push(Line::default());
                lines.push(Line::from(vec![
                    Span::styled("warning: ", Style::default().fg(DEFAULT_THEME.secondary)),
                    Span::styled(warning.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
                ]));
            }
        }
    }

    if is_stale && analysis.is_some() {
        lines.push(Line::default());
        lines.push(Line::styled(
            "(source edited since this analysis; press F5)",
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let max_scroll = lines.len().saturating_sub(1);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(*scroll_offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}
