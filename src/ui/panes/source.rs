//! Source editor pane rendering with syntax highlighting
//!
//! This module renders the editable source pane.
//!
//! # Features
//!
//! - Highlighting driven by the real [`Lexer`], so colors always agree with
//!   the token pane; text the lexer skips (comments) is dimmed
//! - Stray characters the grammar can never accept show in the error color
//! - The line holding the reported syntax error gets a red background
//! - Line numbering and cursor-following scroll

use crate::parser::parse::DATATYPES;
use crate::parser::{Lexer, SourceLocation, Token, TokenKind};
use crate::ui::editor::EditorBuffer;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the `"{:4} "` line-number gutter.
const GUTTER_WIDTH: u16 = 5;

fn token_style(token: &Token) -> Style {
    let text = token.text().unwrap_or_default();
    match token.kind {
        TokenKind::Keyword if DATATYPES.contains(&text) => {
            Style::default().fg(DEFAULT_THEME.type_name) // Types
        }
        TokenKind::Keyword => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        TokenKind::Identifier => Style::default().fg(DEFAULT_THEME.fg),
        TokenKind::Number => Style::default().fg(DEFAULT_THEME.number),
        TokenKind::Operator => Style::default().fg(DEFAULT_THEME.operator),
        TokenKind::Special => match text {
            "{" | "}" | "(" | ")" => Style::default().fg(DEFAULT_THEME.primary), // Brackets
            ";" | "," => Style::default().fg(DEFAULT_THEME.fg),
            _ => Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        },
        TokenKind::EndOfInput => Style::default(),
    }
}

/// Style every char of every line by the token covering it.
fn highlight_lines(lines: &[String]) -> Vec<Line<'static>> {
    let comment = Style::default().fg(DEFAULT_THEME.comment);

    // Chars no token covers were skipped by the lexer: whitespace or comments
    let mut styles: Vec<Vec<Style>> = lines
        .iter()
        .map(|line| {
            line.chars()
                .map(|c| if c.is_whitespace() { Style::default() } else { comment })
                .collect()
        })
        .collect();

    for token in Lexer::new(&lines.join("\n")).tokenize() {
        let Some(lexeme) = token.text() else {
            continue;
        };
        let Some(row) = styles.get_mut(token.line().saturating_sub(1)) else {
            continue;
        };
        let style = token_style(&token);
        for cell in row
            .iter_mut()
            .skip(token.column().saturating_sub(1))
            .take(lexeme.chars().count())
        {
            *cell = style;
        }
    }

    lines
        .iter()
        .zip(styles)
        .map(|(line, styles)| styled_line(line, &styles))
        .collect()
}

/// Merge runs of equally styled chars into spans.
fn styled_line(line: &str, styles: &[Style]) -> Line<'static> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();

    for (ch, style) in line.chars().zip(styles) {
        if *style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = *style;
        run.push(ch);
    }

    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }

    Line::from(spans)
}

/// Keep `cursor_row` inside the visible window.
fn follow_cursor(scroll_offset: &mut usize, cursor_row: usize, visible_height: usize) {
    if cursor_row < *scroll_offset {
        *scroll_offset = cursor_row;
    } else if cursor_row >= *scroll_offset + visible_height {
        *scroll_offset = cursor_row + 1 - visible_height;
    }
}

/// Render the source editor pane.
///
/// Returns the on-screen cursor position when the pane has focus.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    editor: &EditorBuffer,
    error_location: Option<SourceLocation>,
    is_focused: bool,
    scroll_offset: &mut usize,
) -> Option<Position> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1
    let (cursor_row, cursor_col) = editor.cursor();
    follow_cursor(scroll_offset, cursor_row, visible_height);

    let error_line = error_location.map(|loc| loc.line);
    let highlighted = highlight_lines(editor.lines());

    let visible_lines: Vec<Line> = highlighted
        .into_iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, mut content)| {
            let line_num = idx + 1;
            let is_error = error_line == Some(line_num);

            let num_style = if is_error {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment) // Line numbers
            };

            if is_error {
                let bg = Style::default().bg(DEFAULT_THEME.error_line_bg);
                for span in &mut content.spans {
                    span.style = span.style.patch(bg);
                }
            }

            let mut spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);

    if !is_focused || area.width <= 2 + GUTTER_WIDTH || area.height <= 2 {
        return None;
    }

    let max_x = area.x + area.width - 2;
    let x = (area.x + 1 + GUTTER_WIDTH).saturating_add(cursor_col.min(u16::MAX as usize) as u16);
    let y = area.y + 1 + (cursor_row - *scroll_offset) as u16;
    Some(Position::new(x.min(max_x), y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_highlight_preserves_text() {
        let lines = vec![
            "int main() { // entry".to_string(),
            "  x = 1.5 @ y;".to_string(),
            String::new(),
        ];
        let highlighted = highlight_lines(&lines);

        assert_eq!(highlighted.len(), 3);
        for (line, source) in highlighted.iter().zip(&lines) {
            assert_eq!(plain(line), *source);
        }
    }

    #[test]
    fn test_comment_and_stray_char_styles() {
        let lines = vec!["x @ // note".to_string()];
        let highlighted = highlight_lines(&lines);
        let spans = &highlighted[0].spans;

        let stray = spans.iter().find(|s| s.content == "@").expect("stray span");
        assert_eq!(stray.style.fg, Some(DEFAULT_THEME.error));

        let comment = spans.iter().find(|s| s.content.contains("note")).expect("comment span");
        assert_eq!(comment.style.fg, Some(DEFAULT_THEME.comment));
    }

    #[test]
    fn test_block_comment_across_lines_is_dimmed() {
        let lines = vec!["/* a".to_string(), "b */ int".to_string()];
        let highlighted = highlight_lines(&lines);

        let second = &highlighted[1].spans;
        assert_eq!(second[0].content, "b");
        assert_eq!(second[0].style.fg, Some(DEFAULT_THEME.comment));
        assert_eq!(second.last().map(|s| s.content.as_ref()), Some("int"));
    }

    #[test]
    fn test_follow_cursor() {
        let mut offset = 0;
        follow_cursor(&mut offset, 12, 10);
        assert_eq!(offset, 3);

        follow_cursor(&mut offset, 5, 10);
        assert_eq!(offset, 3);

        follow_cursor(&mut offset, 1, 10);
        assert_eq!(offset, 1);
    }
}
