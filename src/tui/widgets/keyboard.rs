//! On-screen keyboard panel: key geometry, hit-testing and rendering.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::keyboard::BOTTOM_ROW;
use crate::model::{KeyboardKey, VirtualKeyboard};

/// Columns taken by one glyph key, including the gap after it.
const GLYPH_KEY_WIDTH: u16 = 4;

fn key_width(key: KeyboardKey, shift: bool) -> u16 {
    key.caption(shift).chars().count() as u16 + 2
}

/// The panel's interior, below its top border.
fn panel_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::TOP).inner(area)
}

/// Positions of every key inside the keyboard panel `area`.
///
/// Line 0 holds the hide control (right-aligned), lines 1–4 the glyph rows
/// (centred), line 5 the special keys (centred). Keys that do not fit
/// entirely inside the panel are left out.
pub fn key_rects(kb: &VirtualKeyboard, area: Rect) -> Vec<(KeyboardKey, Rect)> {
    let inner = panel_inner(area);
    let shift = kb.is_shifted();
    let mut keys = Vec::new();

    let toggle_width = key_width(KeyboardKey::Toggle, shift).min(inner.width);
    keys.push((
        KeyboardKey::Toggle,
        Rect::new(
            inner.right().saturating_sub(toggle_width),
            inner.y,
            toggle_width,
            1,
        ),
    ));

    for (i, row) in kb.rows().iter().enumerate() {
        let y = inner.y + 1 + i as u16;
        let row_width = row.len() as u16 * GLYPH_KEY_WIDTH;
        let mut x = inner.x + inner.width.saturating_sub(row_width) / 2;
        for &ch in row.iter() {
            keys.push((KeyboardKey::Glyph(ch), Rect::new(x, y, GLYPH_KEY_WIDTH - 1, 1)));
            x += GLYPH_KEY_WIDTH;
        }
    }

    let y = inner.y + 1 + kb.rows().len() as u16;
    let bottom_width: u16 = BOTTOM_ROW.iter().map(|k| key_width(*k, shift) + 1).sum();
    let mut x = inner.x + inner.width.saturating_sub(bottom_width) / 2;
    for &key in BOTTOM_ROW {
        let width = key_width(key, shift);
        keys.push((key, Rect::new(x, y, width, 1)));
        x += width + 1;
    }

    keys.retain(|(_, rect)| !rect.is_empty() && inner.intersection(*rect) == *rect);
    keys
}

/// Returns the key under `pos`, if any.
pub fn key_at(kb: &VirtualKeyboard, area: Rect, pos: Position) -> Option<KeyboardKey> {
    key_rects(kb, area)
        .into_iter()
        .find(|(_, rect)| rect.contains(pos))
        .map(|(key, _)| key)
}

/// Renders the keyboard panel.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_keyboard(kb: &VirtualKeyboard, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Virtual Keyboard ")
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, area);

    let shift = kb.is_shifted();
    for (key, rect) in key_rects(kb, area) {
        let style = match key {
            KeyboardKey::Shift if shift => Style::default()
                .fg(Color::Black)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            KeyboardKey::Enter => Style::default().fg(Color::Black).bg(Color::Blue),
            KeyboardKey::Toggle => Style::default().fg(Color::Black).bg(Color::Gray),
            _ => Style::default().fg(Color::White),
        };
        let caption = format!("[{}]", key.caption(shift));
        frame.render_widget(Paragraph::new(caption).style(style), rect);
    }
}
