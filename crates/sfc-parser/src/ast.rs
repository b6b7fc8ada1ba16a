//! Block types for a parsed Vue Single File Component.

use smol_str::SmolStr;
use source_map::Span;

/// A parsed Vue Single File Component, split into its top-level blocks.
///
/// The converter only reads the script blocks; template and style blocks are
/// parsed so the splitter walks over them correctly, then left untouched.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sfc {
    /// The template block, if present.
    pub template: Option<TemplateBlock>,
    /// The plain script block (Options API), if present.
    pub script: Option<ScriptBlock>,
    /// The script setup block, if present.
    pub script_setup: Option<ScriptSetupBlock>,
    /// All style blocks.
    pub styles: Vec<StyleBlock>,
}

impl Sfc {
    /// Check if this SFC already uses script setup.
    pub fn has_script_setup(&self) -> bool {
        self.script_setup.is_some()
    }

    /// The script language attribute (`ts`, `tsx`, `js`, `jsx`), if any.
    pub fn script_lang(&self) -> Option<&str> {
        self.script_setup
            .as_ref()
            .and_then(|s| s.lang.as_deref())
            .or_else(|| self.script.as_ref().and_then(|s| s.lang.as_deref()))
    }

    /// Check if the script uses TypeScript.
    pub fn is_typescript(&self) -> bool {
        matches!(self.script_lang(), Some("ts" | "tsx"))
    }
}

/// Properties shared by every block.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SfcBlock {
    /// Span of the entire block including its tags.
    pub span: Span,
    /// Span of the content only.
    pub content_span: Span,
    /// The raw block content.
    pub content: String,
    /// Attributes on the opening tag.
    pub attrs: Vec<BlockAttr>,
}

impl SfcBlock {
    /// Attribute value by name, `None` for missing or boolean attributes.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .and_then(|a| a.value.as_deref())
    }

    /// Check if a (possibly boolean) attribute is present.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name.eq_ignore_ascii_case(name))
    }
}

/// An attribute on a block's opening tag.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockAttr {
    /// The attribute name.
    pub name: SmolStr,
    /// The attribute value (`None` for boolean attributes).
    pub value: Option<String>,
    /// Span of the whole attribute.
    pub span: Span,
}

/// The `<template>` block.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateBlock {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub block: SfcBlock,
    /// The template language (html, pug, ...).
    pub lang: Option<String>,
}

impl std::ops::Deref for TemplateBlock {
    type Target = SfcBlock;
    fn deref(&self) -> &Self::Target {
        &self.block
    }
}

/// A `<script>` block without the `setup` attribute.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptBlock {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub block: SfcBlock,
    /// The script language (ts, tsx, js, jsx).
    pub lang: Option<String>,
}

impl std::ops::Deref for ScriptBlock {
    type Target = SfcBlock;
    fn deref(&self) -> &Self::Target {
        &self.block
    }
}

/// A `<script setup>` block.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptSetupBlock {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub block: SfcBlock,
    /// The script language (ts, tsx, js, jsx).
    pub lang: Option<String>,
}

impl std::ops::Deref for ScriptSetupBlock {
    type Target = SfcBlock;
    fn deref(&self) -> &Self::Target {
        &self.block
    }
}

/// A `<style>` block.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleBlock {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub block: SfcBlock,
    /// The style language (css, scss, ...).
    pub lang: Option<String>,
    /// Whether the block is scoped.
    pub scoped: bool,
}

impl std::ops::Deref for StyleBlock {
    type Target = SfcBlock;
    fn deref(&self) -> &Self::Target {
        &self.block
    }
}
