//! Format-independent report structure.

use serde::{Deserialize, Serialize};

/// One block of a report, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportBlock {
    /// Document title
    Title(String),
    /// Section heading
    Heading(String),
    /// Body paragraph; may be empty
    Paragraph(String),
}

impl ReportBlock {
    /// The block's text.
    pub fn text(&self) -> &str {
        match self {
            Self::Title(text) | Self::Heading(text) | Self::Paragraph(text) => text,
        }
    }
}

/// An ordered sequence of report blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Blocks in reading order
    pub blocks: Vec<ReportBlock>,
}

impl ReportDocument {
    /// Create an empty document.
    pub const fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Append a title block.
    pub fn title(&mut self, text: impl Into<String>) {
        self.blocks.push(ReportBlock::Title(text.into()));
    }

    /// Append a heading followed by one paragraph.
    pub fn section(&mut self, heading: impl Into<String>, body: impl Into<String>) {
        self.heading(heading);
        self.paragraph(body);
    }

    /// Append a heading block.
    pub fn heading(&mut self, text: impl Into<String>) {
        self.blocks.push(ReportBlock::Heading(text.into()));
    }

    /// Append a paragraph block.
    pub fn paragraph(&mut self, text: impl Into<String>) {
        self.blocks.push(ReportBlock::Paragraph(text.into()));
    }

    /// Heading texts in order.
    pub fn headings(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                ReportBlock::Heading(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Paragraphs between `heading` and the next heading.
    ///
    /// Returns an empty vector when the heading does not appear.
    pub fn section_paragraphs(&self, heading: &str) -> Vec<&str> {
        self.blocks
            .iter()
            .skip_while(|block| !matches!(block, ReportBlock::Heading(h) if h == heading))
            .skip(1)
            .take_while(|block| matches!(block, ReportBlock::Paragraph(_)))
            .map(ReportBlock::text)
            .collect()
    }
}
