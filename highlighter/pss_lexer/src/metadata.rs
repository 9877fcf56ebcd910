//! Registration metadata for an external lexer registry.
//!
//! A registry maps file names and MIME types to lexers; this record is
//! everything it needs to advertise and select this one. It carries no
//! behavior.

/// Identification record consumed by a lexer registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LexerMetadata {
    /// Human-readable language name.
    pub title: &'static str,
    /// One-line description shown in lexer listings.
    pub description: &'static str,
    /// Short machine tag, unique within a registry.
    pub tag: &'static str,
    /// Filename glob patterns this lexer claims.
    pub filenames: &'static [&'static str],
    /// MIME types this lexer claims.
    pub mimetypes: &'static [&'static str],
}

/// Registration record for the PSS lexer.
pub const PSS: LexerMetadata = LexerMetadata {
    title: "Portable Test and Stimulus",
    description: "The Accellera Portable Test and Stimulus language \
                  (https://www.accellera.org/downloads/standards/portable-stimulus)",
    tag: "pss",
    filenames: &["*.pss"],
    mimetypes: &["text/x-pss"],
};
