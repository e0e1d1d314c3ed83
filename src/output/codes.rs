use colored::{ColoredString, Colorize};
use regex::Regex;
use std::sync::LazyLock;

static FORMAT_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)&([0-9a-fk-or])").expect("valid format code pattern"));

#[derive(Debug, Clone, Copy, Default)]
struct Style {
    color: Option<(u8, u8, u8)>,
    bold: bool,
    italic: bool,
    underline: bool,
    strikethrough: bool,
}

impl Style {
    /// Apply one formatting code; colour codes clear the other flags
    fn apply(&mut self, code: char) {
        if let Some(rgb) = color_rgb(code) {
            *self = Style {
                color: Some(rgb),
                ..Style::default()
            };
            return;
        }

        match code {
            'l' => self.bold = true,
            'o' => self.italic = true,
            'n' => self.underline = true,
            'm' => self.strikethrough = true,
            'r' => *self = Style::default(),
            _ => {}
        }
    }

    fn paint(&self, text: &str) -> ColoredString {
        let mut painted = text.normal();
        if let Some((r, g, b)) = self.color {
            painted = painted.truecolor(r, g, b);
        }
        if self.bold {
            painted = painted.bold();
        }
        if self.italic {
            painted = painted.italic();
        }
        if self.underline {
            painted = painted.underline();
        }
        if self.strikethrough {
            painted = painted.strikethrough();
        }
        painted
    }
}

fn color_rgb(code: char) -> Option<(u8, u8, u8)> {
    let rgb = match code {
        '0' => (0x00, 0x00, 0x00),
        '1' => (0x00, 0x00, 0xAA),
        '2' => (0x00, 0xAA, 0x00),
        '3' => (0x00, 0xAA, 0xAA),
        '4' => (0xAA, 0x00, 0x00),
        '5' => (0xAA, 0x00, 0xAA),
        '6' => (0xFF, 0xAA, 0x00),
        '7' => (0xAA, 0xAA, 0xAA),
        '8' => (0x55, 0x55, 0x55),
        '9' => (0x55, 0x55, 0xFF),
        'a' => (0x55, 0xFF, 0x55),
        'b' => (0x55, 0xFF, 0xFF),
        'c' => (0xFF, 0x55, 0x55),
        'd' => (0xFF, 0x55, 0xFF),
        'e' => (0xFF, 0xFF, 0x55),
        'f' => (0xFF, 0xFF, 0xFF),
        _ => return None,
    };
    Some(rgb)
}

/// Render `&` formatting codes as terminal colours
pub fn colourify(text: &str) -> String {
    let mut rendered = String::with_capacity(text.len());
    let mut style = Style::default();
    let mut last = 0;

    for captures in FORMAT_CODE.captures_iter(text) {
        let (Some(whole), Some(code)) = (captures.get(0), captures.get(1)) else {
            continue;
        };

        push_segment(&mut rendered, &text[last..whole.start()], &style);
        if let Some(code) = code.as_str().chars().next() {
            style.apply(code.to_ascii_lowercase());
        }
        last = whole.end();
    }
    push_segment(&mut rendered, &text[last..], &style);

    rendered
}

/// Drop `&` formatting codes
pub fn strip_codes(text: &str) -> String {
    FORMAT_CODE.replace_all(text, "").into_owned()
}

fn push_segment(rendered: &mut String, segment: &str, style: &Style) {
    if !segment.is_empty() {
        rendered.push_str(&style.paint(segment).to_string());
    }
}
