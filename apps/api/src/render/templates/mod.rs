// The four template variants. Each exposes
// `layout(&ResumeDocument, RenderMode) -> Layout` and asks `Sections` which
// sections and fields to paint.

pub mod classy;
pub mod professional;
pub mod simple;
pub mod stylish;

use crate::render::display::Element;

/// A template's paint list and the y coordinate where its content ends.
pub type Layout = (Vec<Element>, f32);

const BOTTOM_PADDING: f32 = 40.0;

/// Concatenates column outputs in paint order. The layout ends below the
/// lowest column.
fn stack(parts: Vec<(Vec<Element>, f32)>) -> Layout {
    let mut elements = Vec::new();
    let mut bottom: f32 = 0.0;
    for (mut part, part_bottom) in parts {
        elements.append(&mut part);
        bottom = bottom.max(part_bottom);
    }
    (elements, bottom + BOTTOM_PADDING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::display::Color;

    #[test]
    fn test_stack_keeps_order_and_lowest_bottom() {
        let rect = |y: f32| Element::Rect {
            x: 0.0,
            y,
            width: 1.0,
            height: 1.0,
            fill: Color::INK,
        };
        let (elements, bottom) = stack(vec![(vec![rect(1.0)], 300.0), (vec![rect(2.0)], 120.0)]);
        assert_eq!(elements, vec![rect(1.0), rect(2.0)]);
        assert_eq!(bottom, 300.0 + BOTTOM_PADDING);
    }
}
