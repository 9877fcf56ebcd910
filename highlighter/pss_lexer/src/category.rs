//! Token categories and the token record emitted by the engine.
//!
//! `TokenCategory` is a closed, one-byte enumeration: highlighting renderers
//! match on it exhaustively, so adding a variant is a breaking change.
//! Discriminants are grouped into semantic ranges (keywords, names, strings,
//! numbers) to keep renderer dispatch tables compact.

use std::fmt;

/// A classified, positioned substring of the input.
///
/// `text` borrows from the source buffer handed to the lexer; concatenating
/// the `text` of every emitted token in order reproduces the source exactly.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    /// Classification of the slice.
    pub category: TokenCategory,
    /// The matched slice of the input. Never empty.
    pub text: &'src str,
    /// Byte offset of `text` within the input.
    pub offset: u32,
}

impl<'src> Token<'src> {
    /// Create a token. Test helpers and the engine use this; renderers only
    /// read fields.
    #[inline]
    pub fn new(category: TokenCategory, text: &'src str, offset: u32) -> Self {
        Token {
            category,
            text,
            offset,
        }
    }

    /// Byte offset one past the end of `text`.
    #[inline]
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "token text is a slice of a source already bounded to u32::MAX bytes"
    )]
    pub fn end(&self) -> u32 {
        self.offset + self.text.len() as u32
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.category, self.text, self.offset)
    }
}

/// Token classification for syntax highlighting.
///
/// One byte; discriminants are grouped into semantic ranges:
/// text/trivia 0-7, keywords 16-19, names 32-35, strings 48-49,
/// numbers 64-68, symbols 80-81.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum TokenCategory {
    /// Plain text: whitespace, newlines, and anything no rule claims.
    Text = 0,
    /// `//` comment, up to but not including the line end.
    CommentSingle = 1,
    /// `/* ... */` comment, possibly spanning lines.
    CommentMultiline = 2,

    /// Reserved keyword (`while`, `constraint`, ...).
    Keyword = 16,
    /// Declaration qualifier (`rand`, `public`, ...) or type-introducing
    /// keyword (`component`, `struct`, ...).
    KeywordDeclaration = 17,
    /// Built-in primitive type name (`bit`, `string`, ...).
    KeywordType = 18,
    /// `true`, `false`, `null`.
    KeywordConstant = 19,

    /// Ordinary identifier, optionally `$`-prefixed.
    Name = 32,
    /// Identifier naming a user-defined type, right after a
    /// type-introducing keyword.
    NameClass = 33,
    /// Identifier qualifying a `::` path.
    NameNamespace = 34,
    /// Label identifier, trailing `:` included.
    NameLabel = 35,

    /// `"..."` string literal.
    String = 48,
    /// `"""..."""` multi-line string literal.
    StringHeredoc = 49,

    /// Decimal integer literal, optional `L` suffix.
    NumberInteger = 64,
    /// Float literal with mandatory decimal point.
    NumberFloat = 65,
    /// `0b`/`0B` binary literal.
    NumberBin = 66,
    /// `0x`/`0X` hexadecimal literal.
    NumberHex = 67,
    /// `0`-prefixed octal literal.
    NumberOct = 68,

    /// One of `[](){}:;,` (or the `::` path separator).
    Punctuation = 80,
    /// One of `~^*!%&<>|+=./?-`.
    Operator = 81,
}

impl TokenCategory {
    /// Short CSS class used by HTML formatters, following the conventional
    /// highlighter class names (`k` keyword, `nc` class name, `mh` hex
    /// number, ...). `Text` renders unstyled and maps to the empty string.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            TokenCategory::Text => "",
            TokenCategory::CommentSingle => "c1",
            TokenCategory::CommentMultiline => "cm",
            TokenCategory::Keyword => "k",
            TokenCategory::KeywordDeclaration => "kd",
            TokenCategory::KeywordType => "kt",
            TokenCategory::KeywordConstant => "kc",
            TokenCategory::Name => "n",
            TokenCategory::NameClass => "nc",
            TokenCategory::NameNamespace => "nn",
            TokenCategory::NameLabel => "nl",
            TokenCategory::String => "s",
            TokenCategory::StringHeredoc => "sh",
            TokenCategory::NumberInteger => "mi",
            TokenCategory::NumberFloat => "mf",
            TokenCategory::NumberBin => "mb",
            TokenCategory::NumberHex => "mh",
            TokenCategory::NumberOct => "mo",
            TokenCategory::Punctuation => "p",
            TokenCategory::Operator => "o",
        }
    }

    /// Whether tokens of this category carry no highlighting information
    /// (plain text and comments). Renderers use this to skip span wrapping.
    #[must_use]
    pub fn is_plain(self) -> bool {
        self == TokenCategory::Text
    }
}
