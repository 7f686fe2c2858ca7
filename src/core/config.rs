#[derive(Debug, Clone)]
pub enum PageSize {
    A4,
    Letter,
    Custom(f32, f32), // width, height in mm
}

impl PageSize {
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
            PageSize::Custom(w, h) => (*w, *h),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Margin {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for Margin {
    fn default() -> Self {
        Margin::uniform(20.0)
    }
}

impl Margin {
    pub fn uniform(size: f32) -> Self {
        Margin {
            top: size,
            bottom: size,
            left: size,
            right: size,
        }
    }
}

/// Page geometry and typography for rendered invoices. Sizes are in mm and pt.
#[derive(Debug, Clone)]
pub struct PdfConfig {
    pub page_size: PageSize,
    pub margin: Margin,
    pub title_size: f32,
    pub font_size: f32,
    pub line_height: f32,
}

impl Default for PdfConfig {
    fn default() -> Self {
        PdfConfig {
            page_size: PageSize::A4,
            margin: Margin::default(),
            title_size: 20.0,
            font_size: 12.0,
            line_height: 1.5,
        }
    }
}

const PT_TO_MM: f32 = 0.352_778;

// Helvetica averages roughly half an em per glyph.
const AVG_GLYPH_EM: f32 = 0.5;

impl PdfConfig {
    pub fn builder() -> PdfConfigBuilder {
        PdfConfigBuilder::default()
    }

    pub fn page_width(&self) -> f32 {
        self.page_size.dimensions().0
    }

    pub fn page_height(&self) -> f32 {
        self.page_size.dimensions().1
    }

    pub fn printable_width(&self) -> f32 {
        self.page_width() - self.margin.left - self.margin.right
    }

    /// Vertical advance for one line of text at `size` pt.
    pub fn line_advance(&self, size: f32) -> f32 {
        size * self.line_height * PT_TO_MM
    }

    /// Approximate rendered width of `text` at `size` pt.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * AVG_GLYPH_EM * PT_TO_MM
    }

    /// Characters that fit on one body line.
    pub fn chars_per_line(&self) -> usize {
        let glyph = self.font_size * AVG_GLYPH_EM * PT_TO_MM;
        ((self.printable_width() / glyph).floor() as usize).max(1)
    }
}

#[derive(Default)]
pub struct PdfConfigBuilder {
    page_size: Option<PageSize>,
    margin: Option<Margin>,
    title_size: Option<f32>,
    font_size: Option<f32>,
    line_height: Option<f32>,
}

impl PdfConfigBuilder {
    pub fn page_size(mut self, size: PageSize) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn title_size(mut self, size: f32) -> Self {
        self.title_size = Some(size);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }

    pub fn build(self) -> PdfConfig {
        let default = PdfConfig::default();
        PdfConfig {
            page_size: self.page_size.unwrap_or(default.page_size),
            margin: self.margin.unwrap_or(default.margin),
            title_size: self.title_size.unwrap_or(default.title_size),
            font_size: self.font_size.unwrap_or(default.font_size),
            line_height: self.line_height.unwrap_or(default.line_height),
        }
    }
}
