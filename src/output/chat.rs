use super::codes::{colourify, strip_codes};

const PREFIX: &str = "&6[GoldenStats]&r ";

/// Writes chat-style lines to stdout
#[derive(Debug, Clone, Copy)]
pub struct Chat {
    plain: bool,
}

impl Chat {
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }

    /// Status line with the tool prefix
    pub fn info(&self, message: &str) {
        println!("{}", self.render(&format!("{}{}", PREFIX, message)));
    }

    /// Bare content line
    pub fn small(&self, message: &str) {
        println!("{}", self.render(message));
    }

    pub fn render(&self, message: &str) -> String {
        if self.plain {
            strip_codes(message)
        } else {
            colourify(message)
        }
    }
}
