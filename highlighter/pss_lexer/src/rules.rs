//! Ordered rule tables for the two lexer states.
//!
//! Each state owns a prioritized list of rules; the engine tries them in
//! declared order and the first match wins. Order is load-bearing: the
//! word-set rules must precede the generic identifier rule (so `while` is a
//! keyword, not a name), the heredoc rule must precede the plain string
//! rule, and the namespace rule must precede the label rule.
//!
//! Matchers are anchored: each inspects only the head of the unconsumed
//! tail and reports how many bytes it matched. They never allocate and
//! never look behind the tail they are given.

use crate::category::TokenCategory;
use crate::keywords;

/// Named lexer state selecting the active rule table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateId {
    /// Default state; handles the full token grammar.
    Root,
    /// Entered after a type-introducing keyword; expects whitespace and one
    /// identifier (the new type's name), then pops.
    Type,
}

/// State transition applied after a rule fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Keep the current state.
    Stay,
    /// Push a state; subsequent input is matched against its table.
    Push(StateId),
    /// Return to the previous state. The root table never pops.
    Pop,
}

/// Byte lengths matched by a rule pattern at the head of the tail slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Matched {
    /// The entire match becomes one token.
    Whole(u32),
    /// The match splits into two adjacent tokens of the given lengths.
    Groups(u32, u32),
}

/// Category assignment aligned to a rule's match shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categories {
    /// One category for the whole match.
    Single(TokenCategory),
    /// One category per group of a [`Matched::Groups`] match.
    Groups([TokenCategory; 2]),
}

/// One prioritized lexical rule: an anchored pattern, the categories its
/// match emits, and the state transition that follows.
pub struct Rule {
    /// Anchored matcher applied to the unconsumed tail of the input.
    pub pattern: fn(&str) -> Option<Matched>,
    /// Categories for the matched text.
    pub categories: Categories,
    /// Transition applied after the match is emitted.
    pub action: Action,
}

/// The rules of `state`, in priority order.
///
/// Pure lookup over `static` tables; sessions on different threads share
/// them freely.
#[must_use]
pub fn lookup(state: StateId) -> &'static [Rule] {
    match state {
        StateId::Root => ROOT_RULES,
        StateId::Type => TYPE_RULES,
    }
}

const fn rule(
    pattern: fn(&str) -> Option<Matched>,
    category: TokenCategory,
    action: Action,
) -> Rule {
    Rule {
        pattern,
        categories: Categories::Single(category),
        action,
    }
}

static ROOT_RULES: &[Rule] = &[
    rule(inline_whitespace, TokenCategory::Text, Action::Stay),
    rule(line_comment, TokenCategory::CommentSingle, Action::Stay),
    rule(block_comment, TokenCategory::CommentMultiline, Action::Stay),
    // Keywords outrank the qualifier/type/constant sets and the identifier
    // rules below.
    rule(keyword, TokenCategory::Keyword, Action::Stay),
    rule(declaration, TokenCategory::KeywordDeclaration, Action::Stay),
    rule(type_name, TokenCategory::KeywordType, Action::Stay),
    rule(constant, TokenCategory::KeywordConstant, Action::Stay),
    rule(
        type_introducer,
        TokenCategory::KeywordDeclaration,
        Action::Push(StateId::Type),
    ),
    rule(heredoc, TokenCategory::StringHeredoc, Action::Stay),
    rule(string, TokenCategory::String, Action::Stay),
    Rule {
        pattern: namespace,
        categories: Categories::Groups([TokenCategory::NameNamespace, TokenCategory::Punctuation]),
        action: Action::Stay,
    },
    rule(label, TokenCategory::NameLabel, Action::Stay),
    rule(name, TokenCategory::Name, Action::Stay),
    rule(punctuation, TokenCategory::Punctuation, Action::Stay),
    rule(operator, TokenCategory::Operator, Action::Stay),
    rule(float, TokenCategory::NumberFloat, Action::Stay),
    rule(binary, TokenCategory::NumberBin, Action::Stay),
    rule(hex, TokenCategory::NumberHex, Action::Stay),
    rule(octal, TokenCategory::NumberOct, Action::Stay),
    rule(integer, TokenCategory::NumberInteger, Action::Stay),
    rule(newline, TokenCategory::Text, Action::Stay),
];

static TYPE_RULES: &[Rule] = &[
    rule(any_whitespace, TokenCategory::Text, Action::Stay),
    rule(identifier, TokenCategory::NameClass, Action::Pop),
];

// ─── Character classes ─────────────────────────────────────────

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte length of the identifier at the head of `rest`, if one starts there.
fn ident_len(rest: &str) -> Option<usize> {
    let mut chars = rest.chars();
    let first = chars.next()?;
    if !is_ident_start(first) {
        return None;
    }
    let mut len = first.len_utf8();
    for c in chars {
        if !is_ident_continue(c) {
            break;
        }
        len += c.len_utf8();
    }
    Some(len)
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "matched lengths are bounded by the source length, which was validated against u32::MAX"
)]
fn whole(len: usize) -> Matched {
    Matched::Whole(len as u32)
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "matched lengths are bounded by the source length, which was validated against u32::MAX"
)]
fn split(first: usize, second: usize) -> Matched {
    Matched::Groups(first as u32, second as u32)
}

// ─── Whitespace & Comments ─────────────────────────────────────

/// Whitespace run excluding newlines. Newlines are emitted one per token
/// by [`newline`] so renderers can track line boundaries.
fn inline_whitespace(rest: &str) -> Option<Matched> {
    let mut len = 0;
    for c in rest.chars() {
        if c.is_whitespace() && c != '\n' {
            len += c.len_utf8();
        } else {
            break;
        }
    }
    (len > 0).then(|| whole(len))
}

fn newline(rest: &str) -> Option<Matched> {
    rest.starts_with('\n').then(|| whole(1))
}

/// `//` to end of line. The newline is not part of the comment.
fn line_comment(rest: &str) -> Option<Matched> {
    let tail = rest.strip_prefix("//")?;
    let body = memchr::memchr(b'\n', tail.as_bytes()).unwrap_or(tail.len());
    Some(whole(2 + body))
}

/// `/*` ... `*/`, spanning newlines. An unterminated comment does not
/// match; the opener then lexes as two operators.
fn block_comment(rest: &str) -> Option<Matched> {
    let tail = rest.strip_prefix("/*")?;
    let close = memchr::memmem::find(tail.as_bytes(), b"*/")?;
    Some(whole(2 + close + 2))
}

// ─── Word sets ─────────────────────────────────────────────────

/// Match a maximal identifier-shaped word and test set membership. Taking
/// the maximal word gives the trailing word boundary for free: `whiles`
/// never matches the keyword `while`.
fn word_in(rest: &str, contains: fn(&str) -> bool) -> Option<Matched> {
    let len = ident_len(rest)?;
    contains(&rest[..len]).then(|| whole(len))
}

fn keyword(rest: &str) -> Option<Matched> {
    word_in(rest, keywords::is_keyword)
}

fn declaration(rest: &str) -> Option<Matched> {
    word_in(rest, keywords::is_declaration)
}

fn type_name(rest: &str) -> Option<Matched> {
    word_in(rest, keywords::is_type)
}

fn constant(rest: &str) -> Option<Matched> {
    word_in(rest, keywords::is_constant)
}

fn type_introducer(rest: &str) -> Option<Matched> {
    word_in(rest, keywords::is_type_introducer)
}

// ─── Strings ───────────────────────────────────────────────────

/// Triple-quoted heredoc: `"""`, a whitespace run containing at least one
/// newline, then minimal content up to a `"""` whose preceding byte is not
/// a backslash. The body begins after the last newline of the leading run.
///
/// An opener on a line of its own content (no newline before the body)
/// does not match; neither does an unterminated heredoc. Both then fall
/// through to the plain string rule, which reads the opener as an empty
/// string `""`.
fn heredoc(rest: &str) -> Option<Matched> {
    let tail = rest.strip_prefix("\"\"\"")?;
    let ws = tail.len() - tail.trim_start().len();
    let bytes = tail.as_bytes();
    let last_newline = memchr::memrchr(b'\n', &bytes[..ws])?;
    let body_start = last_newline + 1;

    for q in memchr::memchr_iter(b'"', &bytes[body_start..]) {
        let p = body_start + q;
        if bytes.get(p + 1) == Some(&b'"')
            && bytes.get(p + 2) == Some(&b'"')
            && bytes[p - 1] != b'\\'
        {
            return Some(whole(3 + p + 3));
        }
    }
    None
}

/// `"` ... `"` with `\\` and `\"` escapes. A backslash before any other
/// byte is ordinary content. Newlines are permitted inside the literal.
/// Unterminated strings do not match.
fn string(rest: &str) -> Option<Matched> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'"') {
        return None;
    }
    let mut i = 1;
    loop {
        i += memchr::memchr2(b'"', b'\\', &bytes[i..])?;
        if bytes[i] == b'"' {
            return Some(whole(i + 1));
        }
        if matches!(bytes.get(i + 1).copied(), Some(b'"' | b'\\')) {
            i += 2;
        } else {
            i += 1;
        }
    }
}

// ─── Names ─────────────────────────────────────────────────────

/// Identifier immediately followed by `::`: a namespace qualifier. Splits
/// into a namespace token and a punctuation token.
fn namespace(rest: &str) -> Option<Matched> {
    let len = ident_len(rest)?;
    rest[len..].starts_with("::").then(|| split(len, 2))
}

/// Identifier immediately followed by a single `:`: a label. The colon is
/// part of the token.
fn label(rest: &str) -> Option<Matched> {
    let len = ident_len(rest)?;
    rest[len..].starts_with(':').then(|| whole(len + 1))
}

/// Plain identifier, optionally `$`-prefixed.
fn name(rest: &str) -> Option<Matched> {
    if let Some(tail) = rest.strip_prefix('$') {
        Some(whole(1 + ident_len(tail)?))
    } else {
        Some(whole(ident_len(rest)?))
    }
}

/// Identifier with no lookahead; the `type` state's class-name rule.
fn identifier(rest: &str) -> Option<Matched> {
    Some(whole(ident_len(rest)?))
}

// ─── Symbols ───────────────────────────────────────────────────

fn punctuation(rest: &str) -> Option<Matched> {
    matches!(
        rest.as_bytes().first().copied()?,
        b'[' | b']' | b'(' | b')' | b'{' | b'}' | b':' | b';' | b','
    )
    .then(|| whole(1))
}

fn operator(rest: &str) -> Option<Matched> {
    const OPERATORS: &[u8] = b"~^*!%&<>|+=./?-";
    OPERATORS
        .contains(rest.as_bytes().first()?)
        .then(|| whole(1))
}

// ─── Numbers ───────────────────────────────────────────────────

fn is_dec(b: u8) -> bool {
    b.is_ascii_digit()
}

fn is_bin(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

fn is_oct(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

fn is_hex(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Length of the digit run at the head of `bytes`: one or more units, each
/// either `digit underscore+ digit` or a bare digit.
///
/// A digit cannot close one unit and open the next, so `1_2_3` stops after
/// `1_2` (the grammar's separator quirk, kept as-is).
fn digit_run(bytes: &[u8], is_digit: fn(u8) -> bool) -> usize {
    let mut i = 0;
    while i < bytes.len() && is_digit(bytes[i]) {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j] == b'_' {
            j += 1;
        }
        if j > i + 1 && j < bytes.len() && is_digit(bytes[j]) {
            i = j + 1;
        } else {
            i += 1;
        }
    }
    i
}

/// `digits . digits`, optional unsigned `e`/`E` exponent, optional
/// lowercase `f`/`d` suffix. The decimal point and fraction digits are
/// mandatory; `1.` and `.5` are not floats.
fn float(rest: &str) -> Option<Matched> {
    let bytes = rest.as_bytes();
    let int = digit_run(bytes, is_dec);
    if int == 0 || bytes.get(int) != Some(&b'.') {
        return None;
    }
    let frac = digit_run(&bytes[int + 1..], is_dec);
    if frac == 0 {
        return None;
    }
    let mut len = int + 1 + frac;
    if matches!(bytes.get(len).copied(), Some(b'e' | b'E')) {
        let exp = digit_run(&bytes[len + 1..], is_dec);
        if exp > 0 {
            len += 1 + exp;
        }
    }
    if matches!(bytes.get(len).copied(), Some(b'f' | b'd')) {
        len += 1;
    }
    Some(whole(len))
}

fn binary(rest: &str) -> Option<Matched> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'0') || !matches!(bytes.get(1).copied(), Some(b'b' | b'B')) {
        return None;
    }
    let digits = digit_run(&bytes[2..], is_bin);
    (digits > 0).then(|| whole(2 + digits))
}

fn hex(rest: &str) -> Option<Matched> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'0') || !matches!(bytes.get(1).copied(), Some(b'x' | b'X')) {
        return None;
    }
    let digits = digit_run(&bytes[2..], is_hex);
    (digits > 0).then(|| whole(2 + digits))
}

fn octal(rest: &str) -> Option<Matched> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'0') {
        return None;
    }
    let digits = digit_run(&bytes[1..], is_oct);
    (digits > 0).then(|| whole(1 + digits))
}

/// Decimal integer with optional uppercase `L` suffix.
fn integer(rest: &str) -> Option<Matched> {
    let bytes = rest.as_bytes();
    let digits = digit_run(bytes, is_dec);
    if digits == 0 {
        return None;
    }
    let len = if bytes.get(digits) == Some(&b'L') {
        digits + 1
    } else {
        digits
    };
    Some(whole(len))
}

// ─── Type state ────────────────────────────────────────────────

/// Whitespace run, newlines included, as a single token.
fn any_whitespace(rest: &str) -> Option<Matched> {
    let len = rest.len() - rest.trim_start().len();
    (len > 0).then(|| whole(len))
}
