use freightdoc_types::{Color, Rect};

/// The two standard faces the forms are set in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Regular,
    Bold,
}

impl FontFace {
    /// PostScript name of the matching standard Type1 font.
    pub fn postscript_name(&self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: FontFace,
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub fn regular(size: f32) -> Self {
        Self {
            font: FontFace::Regular,
            size,
            color: Color::black(),
        }
    }

    pub fn bold(size: f32) -> Self {
        Self {
            font: FontFace::Bold,
            size,
            color: Color::black(),
        }
    }

    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectElement {
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub line_width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Rectangle(RectElement),
    Text(TextElement),
}

/// An element with its final page position.
///
/// For text the rectangle is the line box: `y` is its top and `height` equals the font
/// size, so the baseline sits at [`PositionedElement::baseline`].
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

/// Share of the line box above the baseline.
const BASELINE_RATIO: f32 = 0.8;

impl PositionedElement {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn baseline(&self) -> f32 {
        self.y + self.height * BASELINE_RATIO
    }

    pub fn text(&self) -> Option<&str> {
        match &self.element {
            LayoutElement::Text(text) => Some(&text.content),
            LayoutElement::Rectangle(_) => None,
        }
    }
}
