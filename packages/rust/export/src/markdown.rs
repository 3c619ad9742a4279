//! Markdown backend.
//!
//! Headings use `#` markers, labels are bold, bullets are `- ` items.
//! Consecutive bullets form one list; every other block is separated by a
//! blank line. Empty paragraphs carry no meaning in Markdown and are skipped.
//! Newlines inside paragraph text become hard breaks (`\` at line end).

use std::path::Path;

use tracing::debug;

use flashdeck_shared::Result;

use crate::sink::{DocumentBackend, DocumentSink, write_file};

/// Deepest heading Markdown supports.
const MAX_HEADING_DEPTH: usize = 6;

/// Join the lines of `text` with CommonMark hard breaks, indenting
/// continuations by `indent`.
fn hard_breaks(text: &str, indent: &str) -> String {
    text.trim_end_matches('\n')
        .split('\n')
        .collect::<Vec<_>>()
        .join(&format!("\\\n{indent}"))
}

/// Backend producing `.md` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownBackend;

impl DocumentBackend for MarkdownBackend {
    fn name(&self) -> &str {
        "markdown"
    }

    fn extension(&self) -> &str {
        "md"
    }

    fn new_document(&self) -> Box<dyn DocumentSink> {
        Box::new(MarkdownDocument::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Block {
    Text(String),
    Bullet(String),
}

/// A Markdown document under construction.
#[derive(Debug, Clone, Default)]
pub struct MarkdownDocument {
    blocks: Vec<Block>,
}

impl MarkdownDocument {
    /// Render the document body. Always ends with exactly one newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut prev: Option<&Block> = None;

        for block in &self.blocks {
            if let Some(prev) = prev {
                let joined_list =
                    matches!(prev, Block::Bullet(_)) && matches!(block, Block::Bullet(_));
                out.push_str(if joined_list { "\n" } else { "\n\n" });
            }
            match block {
                Block::Text(text) => out.push_str(text),
                Block::Bullet(text) => {
                    out.push_str("- ");
                    out.push_str(text);
                }
            }
            prev = Some(block);
        }

        let trimmed = out.trim_end_matches('\n');
        format!("{trimmed}\n")
    }
}

impl DocumentSink for MarkdownDocument {
    fn add_heading(&mut self, text: &str, level: u8) {
        let depth = usize::from(level).clamp(1, MAX_HEADING_DEPTH);
        // ATX headings are single-line.
        let text = text.replace('\n', " ");
        self.blocks
            .push(Block::Text(format!("{} {text}", "#".repeat(depth))));
    }

    fn add_paragraph(&mut self, label: Option<&str>, text: &str) {
        let text = hard_breaks(text, "");
        let rendered = match label {
            Some(label) => format!("**{}** {text}", label.trim_end()),
            None => text,
        };
        let rendered = rendered.trim_end();
        if !rendered.is_empty() {
            self.blocks.push(Block::Text(rendered.to_string()));
        }
    }

    fn add_bullet_item(&mut self, text: &str) {
        self.blocks.push(Block::Bullet(hard_breaks(text, "  ")));
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        let body = self.render();
        write_file(path, body.as_bytes())?;
        debug!(path = %path.display(), bytes = body.len(), "wrote markdown document");
        Ok(())
    }
}
