//! Extraction of chain-of-thought blocks from chat responses.
//!
//! Some models wrap their reasoning in `<think>`, `<thinking>` or
//! `<reasoning>` tags. The extractor walks the text left to right and yields
//! the inner span of each non-overlapping block, purely for diagnostic
//! display.

const DELIMITERS: [(&str, &str); 3] = [
    ("<think>", "</think>"),
    ("<thinking>", "</thinking>"),
    ("<reasoning>", "</reasoning>"),
];

/// Lazy iterator over think-block contents. Construct a fresh one to restart
/// the scan; cloning preserves the current position.
#[derive(Debug, Clone)]
pub struct ThinkBlocks<'a> {
    text: &'a str,
    pos: usize,
}

pub fn think_blocks(text: &str) -> ThinkBlocks<'_> {
    ThinkBlocks { text, pos: 0 }
}

impl<'a> Iterator for ThinkBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = &self.text[self.pos..];

        // Earliest opening delimiter of any style wins.
        let (offset, open, close) = DELIMITERS
            .iter()
            .filter_map(|(open, close)| rest.find(open).map(|i| (i, *open, *close)))
            .min_by_key(|(i, _, _)| *i)?;

        let content_start = self.pos + offset + open.len();
        match self.text[content_start..].find(close) {
            Some(rel) => {
                let content_end = content_start + rel;
                self.pos = content_end + close.len();
                Some(&self.text[content_start..content_end])
            }
            // Unterminated block: runs to end of text.
            None => {
                self.pos = self.text.len();
                Some(&self.text[content_start..])
            }
        }
    }
}
