use crate::core::PdfConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A single line of text placed on a page. Coordinates are in mm from the
/// bottom-left corner, as PDF expects.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub size: f32,
    pub bold: bool,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<TextLine>,
}

/// Flows text top to bottom, starting a new page whenever the next line would
/// cross the bottom margin.
pub struct PdfBuilder {
    config: PdfConfig,
    pages: Vec<Page>,
    cursor: f32,
}

impl PdfBuilder {
    pub fn new(config: PdfConfig) -> Self {
        let cursor = config.page_height() - config.margin.top;
        PdfBuilder {
            config,
            pages: vec![Page::default()],
            cursor,
        }
    }

    pub fn add_title(&mut self, title: &str) -> &mut Self {
        let size = self.config.title_size;
        self.place(title, size, true, Align::Center);
        self
    }

    pub fn add_paragraph(&mut self, text: &str) -> &mut Self {
        let size = self.config.font_size;
        for line in wrap_text(text, self.config.chars_per_line()) {
            self.place(&line, size, false, Align::Left);
        }
        self
    }

    pub fn add_line_break(&mut self) -> &mut Self {
        let advance = self.config.line_advance(self.config.font_size);
        self.advance(advance);
        self
    }

    /// Numbered list, `1. first`, `2. second`, ...
    pub fn add_list(&mut self, items: &[String]) -> &mut Self {
        for (i, item) in items.iter().enumerate() {
            self.add_paragraph(&format!("{}. {}", i + 1, item));
        }
        self
    }

    pub fn add_right_aligned(&mut self, text: &str, bold: bool) -> &mut Self {
        let size = self.config.font_size;
        self.place(text, size, bold, Align::Right);
        self
    }

    pub fn build(self) -> Vec<Page> {
        self.pages
    }

    fn place(&mut self, text: &str, size: f32, bold: bool, align: Align) {
        let advance = self.config.line_advance(size);
        self.advance(advance);

        let margin = &self.config.margin;
        let x = match align {
            Align::Left => margin.left,
            Align::Center => {
                (self.config.page_width() - self.config.text_width(text, size)) / 2.0
            }
            Align::Right => {
                self.config.page_width() - margin.right - self.config.text_width(text, size)
            }
        };

        let line = TextLine {
            text: text.to_string(),
            size,
            bold,
            x: x.max(margin.left),
            y: self.cursor,
        };
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(line);
        }
    }

    fn advance(&mut self, advance: f32) {
        self.cursor -= advance;
        if self.cursor < self.config.margin.bottom {
            self.pages.push(Page::default());
            self.cursor = self.config.page_height() - self.config.margin.top - advance;
        }
    }
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let current_len = current.chars().count();
        if !current.is_empty() && current_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
