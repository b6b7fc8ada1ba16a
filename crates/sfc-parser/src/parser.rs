//! Single-pass block splitter for Vue SFC sources.

use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::Cursor;
use smol_str::SmolStr;
use source_map::Span;

/// Split a Vue SFC source into its top-level blocks.
pub fn parse_sfc(source: &str) -> ParseResult<Sfc> {
    let mut parser = SfcParser::new(source);
    parser.parse()
}

struct SfcParser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> SfcParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    fn parse(&mut self) -> ParseResult<Sfc> {
        let mut sfc = Sfc::default();

        while !self.cursor.is_eof() {
            self.cursor.skip_whitespace();
            if self.cursor.is_eof() {
                break;
            }

            if self.cursor.skip_comment() {
                continue;
            }

            if self.cursor.starts_with("<") && !self.cursor.starts_with("</") {
                self.parse_block(&mut sfc)?;
                continue;
            }

            // Stray content between blocks is ignored.
            self.cursor.bump();
        }

        Ok(sfc)
    }

    fn parse_block(&mut self, sfc: &mut Sfc) -> ParseResult<()> {
        let start = self.cursor.pos();
        self.cursor.eat("<");

        let tag = match self.cursor.read_name() {
            Some(name) => name.to_lowercase(),
            None => return Ok(()),
        };

        let attrs = self.parse_attributes();
        self.cursor.skip_whitespace();

        let self_closing = self.cursor.eat("/>");
        if !self_closing {
            self.cursor.eat(">");
        }

        let (content, content_span) = if self_closing {
            let here = self.cursor.pos() as u32;
            (String::new(), Span::empty(here))
        } else {
            let content_start = self.cursor.pos();
            let content = match self.cursor.read_block_content(&tag) {
                Some(content) => content,
                None => {
                    return Err(ParseError::unclosed_block(
                        &tag,
                        self.cursor.span_from(start),
                    ))
                }
            };
            let content_span = self.cursor.span_from(content_start);
            // Consume `</tag ... >`
            self.cursor.eat("</");
            self.cursor.read_name();
            self.cursor.eat_until(">");
            self.cursor.eat(">");
            (content.to_string(), content_span)
        };

        let span = self.cursor.span_from(start);
        let block = SfcBlock {
            span,
            content_span,
            content,
            attrs,
        };

        match tag.as_str() {
            "template" => {
                if sfc.template.is_some() {
                    return Err(ParseError::duplicate_block("template", span));
                }
                let lang = block.attr("lang").map(String::from);
                sfc.template = Some(TemplateBlock { block, lang });
            }
            "script" => {
                let lang = block.attr("lang").map(String::from);
                if block.has_attr("setup") {
                    if sfc.script_setup.is_some() {
                        return Err(ParseError::duplicate_block("script setup", span));
                    }
                    sfc.script_setup = Some(ScriptSetupBlock { block, lang });
                } else {
                    if sfc.script.is_some() {
                        return Err(ParseError::duplicate_block("script", span));
                    }
                    sfc.script = Some(ScriptBlock { block, lang });
                }
            }
            "style" => {
                let lang = block.attr("lang").map(String::from);
                let scoped = block.has_attr("scoped");
                sfc.styles.push(StyleBlock {
                    block,
                    lang,
                    scoped,
                });
            }
            // Custom blocks (<i18n>, <docs>, ...) are consumed and dropped;
            // the converter has no use for them.
            _ => {}
        }

        Ok(())
    }

    fn parse_attributes(&mut self) -> Vec<BlockAttr> {
        let mut attrs = Vec::new();

        loop {
            self.cursor.skip_whitespace();
            if self.cursor.starts_with(">") || self.cursor.starts_with("/>") || self.cursor.is_eof()
            {
                break;
            }

            let attr_start = self.cursor.pos();
            let name: SmolStr = match self.cursor.read_name() {
                Some(n) => n.into(),
                None => {
                    self.cursor.bump();
                    continue;
                }
            };

            self.cursor.skip_whitespace();
            if self.cursor.eat("=") {
                self.cursor.skip_whitespace();
                let value = if let Some(v) = self.cursor.read_quoted() {
                    v.to_string()
                } else {
                    self.cursor
                        .eat_while(|c| !c.is_whitespace() && c != '>' && c != '/')
                        .to_string()
                };
                attrs.push(BlockAttr {
                    name,
                    value: Some(value),
                    span: self.cursor.span_from(attr_start),
                });
            } else {
                attrs.push(BlockAttr {
                    name,
                    value: None,
                    span: self.cursor.span_from(attr_start),
                });
            }
        }

        attrs
    }
}
