//! Property tests for the cell buffer and its diff.
//!
//! 1. Writes never change the buffer dimensions.
//! 2. Every continuation cell follows a wide head cell.
//! 3. Drawn text never passes the clip column.
//! 4. Applying a diff to the previous buffer yields the next one.

use ordertrack_render::buffer::Buffer;
use ordertrack_render::cell::Cell;
use ordertrack_render::diff::BufferDiff;
use ordertrack_render::style::Style;
use ordertrack_render::text::{char_width, display_width};
use proptest::prelude::*;

fn char_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('a', 'z'),
        Just('ç'),
        Just('日'),
        Just('本'),
        Just('•'),
    ]
}

fn writes_strategy() -> impl Strategy<Value = Vec<(u16, u16, char)>> {
    prop::collection::vec((0u16..24, 0u16..6, char_strategy()), 0..60)
}

fn continuations_have_heads(buf: &Buffer) -> bool {
    (0..buf.height()).all(|y| {
        let mut remaining = 0usize;
        (0..buf.width()).all(|x| {
            let Some(cell) = buf.get(x, y) else {
                return false;
            };
            if cell.is_continuation() {
                if remaining == 0 {
                    return false;
                }
                remaining -= 1;
                true
            } else {
                remaining = char_width(cell.content).saturating_sub(1);
                true
            }
        })
    })
}

proptest! {
    #[test]
    fn dimensions_are_stable(w in 0u16..20, h in 0u16..5, writes in writes_strategy()) {
        let mut buf = Buffer::new(w, h);
        for (x, y, c) in writes {
            buf.set(x, y, Cell::from_char(c));
        }
        prop_assert_eq!(buf.width(), w);
        prop_assert_eq!(buf.height(), h);
        prop_assert_eq!(buf.cells().len(), w as usize * h as usize);
    }

    #[test]
    fn wide_chars_stay_whole(writes in writes_strategy()) {
        let mut buf = Buffer::new(20, 5);
        for (x, y, c) in writes {
            buf.set(x, y, Cell::from_char(c));
        }
        prop_assert!(continuations_have_heads(&buf));
    }

    #[test]
    fn draw_text_respects_clip(text in "[a-zç日 ]{0,30}", x in 0u16..10, max_x in 0u16..30) {
        let mut buf = Buffer::new(20, 1);
        let end = buf.draw_text(x, 0, &text, Style::new(), max_x);
        let limit = max_x.min(20);
        prop_assert!(end <= limit.max(x));
        for col in limit..20 {
            prop_assert_eq!(buf.get(col, 0).map(|c| c.content), Some(' '));
        }
        prop_assert!(display_width(buf.row_text(0).trim_end()) <= 20);
    }

    #[test]
    fn diff_replays_to_next(a in writes_strategy(), b in writes_strategy()) {
        let mut prev = Buffer::new(20, 5);
        for (x, y, c) in a {
            prev.set(x, y, Cell::from_char(c));
        }
        let mut next = prev.clone();
        for (x, y, c) in b {
            next.set(x, y, Cell::from_char(c));
        }
        let diff = BufferDiff::compute(&prev, &next);
        let mut replay = prev.clone();
        for (x, y) in diff.iter() {
            if let (Some(dst), Some(src)) = (replay.get_mut(x, y), next.get(x, y)) {
                *dst = *src;
            }
        }
        prop_assert_eq!(replay, next);
    }
}
