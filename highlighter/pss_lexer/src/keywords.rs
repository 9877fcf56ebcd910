//! PSS reserved-word tables.
//!
//! Five disjoint-by-rule (not disjoint-by-content) word sets drive the
//! keyword rules: reserved keywords, declaration qualifiers, primitive type
//! names, literal constants, and the type-introducing keywords that switch
//! the lexer into its `type` state.
//!
//! `static` appears in both the keyword and qualifier sets; the rule table
//! consults the keyword set first, so as a token it is always plain
//! `Keyword`. The tables must preserve that redundancy.
//!
//! Each table is sorted for binary search, with a length pre-filter that
//! rejects most identifiers before any comparison.

/// Reserved keywords (75). Sorted.
const KEYWORDS: &[&str] = &[
    "activity",
    "array",
    "as",
    "assert",
    "bind",
    "bins",
    "body",
    "break",
    "chandle",
    "compile",
    "constraint",
    "continue",
    "covergroup",
    "coverpoint",
    "cross",
    "declaration",
    "default",
    "disable",
    "do",
    "dynamic",
    "else",
    "enum",
    "exec",
    "export",
    "extend",
    "file",
    "forall",
    "foreach",
    "function",
    "has",
    "header",
    "if",
    "iff",
    "ignore_bins",
    "illegal_bins",
    "import",
    "in",
    "init",
    "init_down",
    "init_up",
    "inout",
    "input",
    "instance",
    "join_branch",
    "join_first",
    "join_none",
    "join_select",
    "lock",
    "match",
    "output",
    "override",
    "package",
    "parallel",
    "pool",
    "post_solve",
    "pre_solve",
    "repeat",
    "replicate",
    "return",
    "run_end",
    "run_start",
    "schedule",
    "select",
    "sequence",
    "share",
    "solve",
    "static",
    "super",
    "symbol",
    "target",
    "type",
    "typedef",
    "unique",
    "while",
    "with",
];

/// Declaration qualifiers (visibility, storage, randomization). Sorted.
const DECLARATIONS: &[&str] = &[
    "abstract",
    "const",
    "private",
    "protected",
    "public",
    "pure",
    "rand",
    "ref",
    "static",
];

/// Built-in primitive type names. Sorted.
const TYPES: &[&str] = &[
    "bit", "bool", "int", "list", "map", "set", "string", "void",
];

/// Keywords that declare a new named type and switch the lexer into the
/// `type` state. Sorted.
const TYPE_INTRODUCERS: &[&str] = &[
    "action",
    "buffer",
    "class",
    "component",
    "resource",
    "state",
    "stream",
    "struct",
];

/// Is `word` a reserved keyword?
///
/// Keywords are 2-12 characters; the length guard rejects anything outside
/// that range without a comparison.
#[inline]
pub(crate) fn is_keyword(word: &str) -> bool {
    (2..=12).contains(&word.len()) && KEYWORDS.binary_search(&word).is_ok()
}

/// Is `word` a declaration qualifier?
#[inline]
pub(crate) fn is_declaration(word: &str) -> bool {
    (3..=9).contains(&word.len()) && DECLARATIONS.binary_search(&word).is_ok()
}

/// Is `word` a primitive type name?
#[inline]
pub(crate) fn is_type(word: &str) -> bool {
    (3..=6).contains(&word.len()) && TYPES.binary_search(&word).is_ok()
}

/// Is `word` a literal constant keyword?
#[inline]
pub(crate) fn is_constant(word: &str) -> bool {
    matches!(word, "true" | "false" | "null")
}

/// Is `word` a type-introducing keyword?
#[inline]
pub(crate) fn is_type_introducer(word: &str) -> bool {
    (5..=9).contains(&word.len()) && TYPE_INTRODUCERS.binary_search(&word).is_ok()
}
