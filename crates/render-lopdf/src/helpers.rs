use freightdoc_layout::{FontFace, LayoutElement, PositionedElement, RectElement, TextElement};
use freightdoc_render_core::utils::{flip_y, to_win_ansi};
use freightdoc_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Resource name of a face in the shared font dictionary.
pub(crate) fn font_resource_name(font: FontFace) -> &'static str {
    match font {
        FontFace::Regular => "F1",
        FontFace::Bold => "F2",
    }
}

/// Converts the positioned elements of one page into a content stream.
pub fn render_page_content(elements: &[PositionedElement], page_height: f32) -> Content {
    let mut ctx = PageContext::new(page_height);
    for el in elements {
        ctx.draw_element(el);
    }
    ctx.finish()
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(FontFace, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

struct PageContext {
    page_height: f32,
    content: Content,
    state: PageRenderState,
}

impl PageContext {
    fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: Default::default(),
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw_element(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Rectangle(rect) => self.draw_rect(rect, el),
            LayoutElement::Text(text) => self.draw_text(text, el),
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.unit_components();
            self.op("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color, width: f32) {
        if self.state.stroke_color != Some(color) {
            let [r, g, b] = color.unit_components();
            self.op("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(color);
        }
        if self.state.line_width != Some(width) {
            self.op("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    fn draw_rect(&mut self, rect: &RectElement, el: &PositionedElement) {
        let y = flip_y(el.y + el.height, self.page_height);
        let bounds: Vec<Object> = vec![el.x.into(), y.into(), el.width.into(), el.height.into()];
        if let Some(fill) = rect.fill {
            self.set_fill_color(fill);
            self.op("re", bounds.clone());
            self.op("f", vec![]);
        }
        if let Some(stroke) = rect.stroke {
            self.set_stroke(stroke, rect.line_width);
            self.op("re", bounds);
            self.op("S", vec![]);
        }
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) {
        if text.content.trim().is_empty() {
            return;
        }
        self.op("BT", vec![]);
        let font = (text.style.font, text.style.size);
        if self.state.font != Some(font) {
            self.op(
                "Tf",
                vec![
                    Object::Name(font_resource_name(font.0).as_bytes().to_vec()),
                    font.1.into(),
                ],
            );
            self.state.font = Some(font);
        }
        self.set_fill_color(text.style.color);
        let pdf_y = flip_y(el.baseline(), self.page_height);
        self.op("Td", vec![el.x.into(), pdf_y.into()]);
        self.op(
            "Tj",
            vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)],
        );
        self.op("ET", vec![]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freightdoc_layout::TextStyle;

    fn text(content: &str, font: FontFace) -> PositionedElement {
        let style = TextStyle {
            font,
            ..TextStyle::regular(8.0)
        };
        PositionedElement {
            x: 20.0,
            y: 100.0,
            width: 50.0,
            height: 8.0,
            element: LayoutElement::Text(TextElement {
                content: content.to_string(),
                style,
            }),
        }
    }

    fn operators(content: &Content) -> Vec<&str> {
        content.operations.iter().map(|op| op.operator.as_str()).collect()
    }

    #[test]
    fn filled_and_stroked_rectangles() {
        let el = PositionedElement {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 30.0,
            element: LayoutElement::Rectangle(RectElement {
                stroke: Some(Color::black()),
                fill: Some(Color::gray(200)),
                line_width: 0.5,
            }),
        };
        let content = render_page_content(&[el], 842.0);
        assert_eq!(operators(&content), ["rg", "re", "f", "RG", "w", "re", "S"]);
        let re = &content.operations[1];
        assert!(matches!(re.operands[1], Object::Real(y) if (y - 792.0).abs() < 0.001));
    }

    #[test]
    fn font_is_only_switched_when_it_changes() {
        let content = render_page_content(
            &[
                text("one", FontFace::Regular),
                text("two", FontFace::Regular),
                text("three", FontFace::Bold),
            ],
            842.0,
        );
        let fonts: Vec<_> = content
            .operations
            .iter()
            .filter(|op| op.operator == "Tf")
            .map(|op| op.operands[0].as_name().unwrap().to_vec())
            .collect();
        assert_eq!(fonts, vec![b"F1".to_vec(), b"F2".to_vec()]);
    }

    #[test]
    fn blank_text_is_skipped() {
        let content = render_page_content(&[text("  ", FontFace::Regular)], 842.0);
        assert!(content.operations.is_empty());
    }
}
