use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::borrow::Cow;

use super::builder::Page;
use crate::core::{PdfConfig, RenderError, RenderResult};

/// Turns laid-out pages into PDF bytes using the built-in Helvetica faces.
pub struct PdfGenerator {
    config: PdfConfig,
}

impl PdfGenerator {
    pub fn new(config: PdfConfig) -> Self {
        PdfGenerator { config }
    }

    pub fn render(&self, title: &str, pages: &[Page]) -> RenderResult<Vec<u8>> {
        let width = Mm(self.config.page_width());
        let height = Mm(self.config.page_height());

        let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(format!("{:?}", e)))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Pdf(format!("{:?}", e)))?;

        for (index, page) in pages.iter().enumerate() {
            let (page_index, layer_index) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(width, height, "Layer 1")
            };
            let layer = doc.get_page(page_index).get_layer(layer_index);

            for line in &page.lines {
                let font = if line.bold { &bold } else { &regular };
                let text = win_ansi_text(&line.text);
                if let Cow::Owned(_) = text {
                    tracing::warn!("Replaced glyphs outside WinAnsi in {:?}", line.text);
                }
                layer.use_text(text, line.size, Mm(line.x), Mm(line.y), font);
            }
        }

        doc.save_to_bytes()
            .map_err(|e| RenderError::Pdf(format!("{:?}", e)))
    }
}

// Punctuation WinAnsi places in 0x80..=0x9F.
const WIN_ANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";

/// The built-in fonts only cover WinAnsi; anything else becomes `?` instead of
/// silently disappearing from the page.
pub fn win_ansi_text(text: &str) -> Cow<'_, str> {
    let supported =
        |c: char| matches!(c, ' '..='~' | '\u{A0}'..='\u{FF}') || WIN_ANSI_EXTRAS.contains(c);

    if text.chars().all(supported) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| if supported(c) { c } else { '?' })
            .collect(),
    )
}
