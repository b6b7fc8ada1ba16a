//! A byte cursor over SFC source text.

use source_map::Span;

/// A forward-only cursor over the SFC source.
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Current byte offset.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The unconsumed remainder of the source.
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Peek the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume and return the next character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    pub fn starts_with(&self, s: &str) -> bool {
        self.rest().starts_with(s)
    }

    /// Consume `s` if the remainder starts with it.
    pub fn eat(&mut self, s: &str) -> bool {
        if self.starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    /// Consume characters while the predicate holds.
    pub fn eat_while<F>(&mut self, pred: F) -> &'a str
    where
        F: Fn(char) -> bool,
    {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.bump();
        }
        &self.source[start..self.pos]
    }

    /// Consume up to (but not including) the first occurrence of `s`.
    pub fn eat_until(&mut self, s: &str) -> &'a str {
        let start = self.pos;
        while !self.is_eof() && !self.starts_with(s) {
            self.bump();
        }
        &self.source[start..self.pos]
    }

    pub fn skip_whitespace(&mut self) {
        self.eat_while(|c| c.is_whitespace());
    }

    /// Read a tag or attribute name.
    pub fn read_name(&mut self) -> Option<&'a str> {
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return None,
        }
        let name =
            self.eat_while(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':');
        Some(name)
    }

    /// Read a quoted attribute value, returning the text between the quotes.
    pub fn read_quoted(&mut self) -> Option<&'a str> {
        let quote = self.peek()?;
        if quote != '"' && quote != '\'' {
            return None;
        }
        self.bump();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == quote {
                let value = &self.source[start..self.pos];
                self.bump();
                return Some(value);
            }
            self.bump();
        }
        // Unterminated value, take what is there
        Some(&self.source[start..self.pos])
    }

    /// Read block content up to the closing tag for `tag`, leaving the
    /// cursor on the `</tag` sequence. Returns `None` when no closing tag
    /// exists.
    pub fn read_block_content(&mut self, tag: &str) -> Option<&'a str> {
        let start = self.pos;
        let closing = format!("</{}", tag);
        while !self.is_eof() {
            if self.rest().len() >= closing.len() {
                let head = &self.rest()[..closing.len()];
                if head.eq_ignore_ascii_case(&closing) {
                    let after = self.rest().chars().nth(closing.len());
                    match after {
                        None => return Some(&self.source[start..self.pos]),
                        Some(c) if c == '>' || c.is_whitespace() => {
                            return Some(&self.source[start..self.pos])
                        }
                        _ => {}
                    }
                }
            }
            self.bump();
        }
        None
    }

    /// Skip an HTML comment if the cursor is on one.
    pub fn skip_comment(&mut self) -> bool {
        if !self.eat("<!--") {
            return false;
        }
        self.eat_until("-->");
        self.eat("-->");
        true
    }

    /// Span from `start` to the current position.
    pub fn span_from(&self, start: usize) -> Span {
        Span::new(start as u32, self.pos as u32)
    }
}
