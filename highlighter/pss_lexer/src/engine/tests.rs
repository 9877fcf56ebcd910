use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::category::TokenCategory::{
    CommentMultiline, CommentSingle, Keyword, KeywordConstant, KeywordDeclaration, KeywordType,
    Name, NameClass, NameLabel, NameNamespace, NumberBin, NumberFloat, NumberHex, NumberInteger,
    NumberOct, Operator, Punctuation, StringHeredoc, Text,
};

/// Helper: collect every token of a source.
fn lex(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}

/// Helper: collect `(category, text)` pairs.
fn pairs(source: &str) -> Vec<(TokenCategory, &str)> {
    Lexer::new(source).map(|t| (t.category, t.text)).collect()
}

/// Helper: concatenated token texts.
fn rebuilt(source: &str) -> String {
    Lexer::new(source).map(|t| t.text).collect()
}

// ─── Lossless tokenization ─────────────────────────────────────

#[test]
fn concatenated_texts_reproduce_the_source() {
    let sources = [
        "",
        "x",
        "component top { action a { } }",
        "// comment\nrand bit[4] addr;\n",
        "\"str\" \"\"\"\nheredoc\n\"\"\" 0x1F 0b101 3.14",
        "Pkg::Item foo: $var",
        "\u{0}\u{1}\u{7f}h\u{e9}llo \u{4e16}\u{754c}",
        "/* multi\nline */ /* unterminated",
        "  \t\r\n  \n",
        "@ # ` \\",
    ];
    for source in sources {
        assert_eq!(rebuilt(source), source, "lossy lexing of {source:?}");
    }
}

#[test]
fn offsets_are_contiguous_from_zero() {
    let source = "component top { import Pkg::*; }\n\"\"\"\nx\n\"\"\"";
    let mut expected_offset = 0;
    for token in lex(source) {
        assert_eq!(token.offset, expected_offset, "gap before {token:?}");
        assert!(!token.text.is_empty(), "empty token {token:?}");
        expected_offset = token.end();
    }
    assert_eq!(expected_offset as usize, source.len());
}

#[test]
fn empty_source_yields_no_tokens() {
    assert_eq!(lex("").len(), 0);
}

// ─── Rule priority ─────────────────────────────────────────────

#[test]
fn keywords_outrank_identifiers() {
    assert_eq!(pairs("while"), vec![(Keyword, "while")]);
    assert_eq!(pairs("whiles"), vec![(Name, "whiles")]);
    assert_eq!(pairs("while_loop"), vec![(Name, "while_loop")]);
}

#[test]
fn static_is_always_a_plain_keyword() {
    // `static` sits in both the keyword and qualifier sets; the keyword
    // rule is consulted first and always wins.
    assert_eq!(pairs("static"), vec![(Keyword, "static")]);
}

#[test]
fn word_set_categories() {
    assert_eq!(
        pairs("import rand bit true"),
        vec![
            (Keyword, "import"),
            (Text, " "),
            (KeywordDeclaration, "rand"),
            (Text, " "),
            (KeywordType, "bit"),
            (Text, " "),
            (KeywordConstant, "true"),
        ]
    );
}

#[test]
fn keywords_with_underscores() {
    assert_eq!(
        pairs("init_down illegal_bins join_select"),
        vec![
            (Keyword, "init_down"),
            (Text, " "),
            (Keyword, "illegal_bins"),
            (Text, " "),
            (Keyword, "join_select"),
        ]
    );
}

#[test]
fn keyword_then_colon_is_not_a_label() {
    // The keyword rule fires before the label rule can see `if:`.
    assert_eq!(pairs("if:"), vec![(Keyword, "if"), (Punctuation, ":")]);
}

// ─── The type state ────────────────────────────────────────────

#[test]
fn type_introducer_classifies_the_next_identifier() {
    assert_eq!(
        pairs("class Foo { }"),
        vec![
            (KeywordDeclaration, "class"),
            (Text, " "),
            (NameClass, "Foo"),
            (Text, " "),
            (Punctuation, "{"),
            (Text, " "),
            (Punctuation, "}"),
        ]
    );
}

#[test]
fn type_name_may_sit_on_the_next_line() {
    assert_eq!(
        pairs("component\n  top;"),
        vec![
            (KeywordDeclaration, "component"),
            (Text, "\n  "),
            (NameClass, "top"),
            (Punctuation, ";"),
        ]
    );
}

#[test]
fn all_type_introducers_push() {
    for kw in [
        "action",
        "buffer",
        "class",
        "component",
        "resource",
        "state",
        "stream",
        "struct",
    ] {
        let source = format!("{kw} T");
        let tokens = lex(&source);
        assert_eq!(tokens[0].category, KeywordDeclaration, "{kw}");
        assert_eq!(tokens[2].category, NameClass, "{kw}");
    }
}

#[test]
fn type_state_survives_non_identifier_input() {
    // With no identifier after `struct`, the pushed state stays on the
    // stack: the braces fall through to the one-character fallback (plain
    // text, not punctuation) and the next identifier anywhere is tagged a
    // class name. Deliberate quirk of the highlighting grammar.
    assert_eq!(
        pairs("struct { } x"),
        vec![
            (KeywordDeclaration, "struct"),
            (Text, " "),
            (Text, "{"),
            (Text, " "),
            (Text, "}"),
            (Text, " "),
            (NameClass, "x"),
        ]
    );
}

#[test]
fn type_state_at_end_of_input() {
    assert_eq!(pairs("struct"), vec![(KeywordDeclaration, "struct")]);
    assert_eq!(
        pairs("struct "),
        vec![(KeywordDeclaration, "struct"), (Text, " ")]
    );
}

#[test]
fn introducer_inside_type_state_is_the_class_name() {
    // The type state has no keyword rules, so a second introducer is just
    // an identifier: it becomes the class name and pops.
    assert_eq!(
        pairs("component struct A B"),
        vec![
            (KeywordDeclaration, "component"),
            (Text, " "),
            (NameClass, "struct"),
            (Text, " "),
            (Name, "A"),
            (Text, " "),
            (Name, "B"),
        ]
    );
}

// ─── Names, namespaces, labels ─────────────────────────────────

#[test]
fn namespace_path_splits_into_two_tokens() {
    assert_eq!(
        pairs("Pkg::Item"),
        vec![
            (NameNamespace, "Pkg"),
            (Punctuation, "::"),
            (Name, "Item"),
        ]
    );
}

#[test]
fn namespace_offsets() {
    let tokens = lex("Pkg::Item");
    assert_eq!(tokens[0].offset, 0);
    assert_eq!(tokens[1].offset, 3);
    assert_eq!(tokens[2].offset, 5);
}

#[test]
fn chained_namespace_path() {
    assert_eq!(
        pairs("a::b::c"),
        vec![
            (NameNamespace, "a"),
            (Punctuation, "::"),
            (NameNamespace, "b"),
            (Punctuation, "::"),
            (Name, "c"),
        ]
    );
}

#[test]
fn label_keeps_its_colon() {
    assert_eq!(
        pairs("again: x"),
        vec![(NameLabel, "again:"), (Text, " "), (Name, "x")]
    );
}

#[test]
fn dollar_prefixed_name() {
    assert_eq!(pairs("$var"), vec![(Name, "$var")]);
    // A bare dollar is not a name; it falls through to plain text.
    assert_eq!(pairs("x$"), vec![(Name, "x"), (Text, "$")]);
}

#[test]
fn unicode_identifiers() {
    assert_eq!(
        pairs("\u{4e16}\u{754c} = 5"),
        vec![
            (Name, "\u{4e16}\u{754c}"),
            (Text, " "),
            (Operator, "="),
            (Text, " "),
            (NumberInteger, "5"),
        ]
    );
}

// ─── Comments ──────────────────────────────────────────────────

#[test]
fn line_comment_stops_before_the_newline() {
    assert_eq!(
        pairs("// a\nb"),
        vec![(CommentSingle, "// a"), (Text, "\n"), (Name, "b")]
    );
}

#[test]
fn block_comment_spans_lines() {
    assert_eq!(
        pairs("/* a\nb */c"),
        vec![(CommentMultiline, "/* a\nb */"), (Name, "c")]
    );
}

#[test]
fn unterminated_block_comment_lexes_as_operators() {
    assert_eq!(
        pairs("/* x"),
        vec![
            (Operator, "/"),
            (Operator, "*"),
            (Text, " "),
            (Name, "x"),
        ]
    );
}

// ─── Strings ───────────────────────────────────────────────────

#[test]
fn plain_string_with_escapes() {
    assert_eq!(
        pairs(r#"s = "a\"b";"#),
        vec![
            (Name, "s"),
            (Text, " "),
            (Operator, "="),
            (Text, " "),
            (TokenCategory::String, r#""a\"b""#),
            (Punctuation, ";"),
        ]
    );
}

#[test]
fn heredoc_is_one_token_including_newlines() {
    let source = "\"\"\"\nhello\nworld\n\"\"\"";
    assert_eq!(pairs(source), vec![(StringHeredoc, source)]);
}

#[test]
fn heredoc_embedded_in_code() {
    assert_eq!(
        pairs("x = \"\"\"\nmsg\n\"\"\";"),
        vec![
            (Name, "x"),
            (Text, " "),
            (Operator, "="),
            (Text, " "),
            (StringHeredoc, "\"\"\"\nmsg\n\"\"\""),
            (Punctuation, ";"),
        ]
    );
}

#[test]
fn triple_quote_without_newline_is_an_empty_string() {
    // The heredoc rule needs a newline before the body, so `"""x` reads as
    // the empty string `""` and re-lexing resumes at the third quote.
    assert_eq!(
        pairs("\"\"\"x"),
        vec![
            (TokenCategory::String, "\"\""),
            (Text, "\""),
            (Name, "x"),
        ]
    );
}

#[test]
fn unterminated_heredoc_degrades_the_same_way() {
    assert_eq!(
        pairs("\"\"\"\nx"),
        vec![
            (TokenCategory::String, "\"\""),
            (Text, "\""),
            (Text, "\n"),
            (Name, "x"),
        ]
    );
}

// ─── Numbers ───────────────────────────────────────────────────

#[test]
fn numeric_literal_disambiguation() {
    assert_eq!(pairs("0x1F"), vec![(NumberHex, "0x1F")]);
    assert_eq!(pairs("0b101"), vec![(NumberBin, "0b101")]);
    assert_eq!(pairs("3.14e2f"), vec![(NumberFloat, "3.14e2f")]);
    assert_eq!(pairs("017"), vec![(NumberOct, "017")]);
    assert_eq!(pairs("42L"), vec![(NumberInteger, "42L")]);
    assert_eq!(pairs("0"), vec![(NumberInteger, "0")]);
}

#[test]
fn broken_radix_prefixes_fall_back_to_integer_plus_name() {
    assert_eq!(
        pairs("0x"),
        vec![(NumberInteger, "0"), (Name, "x")]
    );
    assert_eq!(
        pairs("0b2"),
        vec![(NumberInteger, "0"), (Name, "b2")]
    );
    // `08` is not octal, but the plain integer rule still takes both digits.
    assert_eq!(pairs("08"), vec![(NumberInteger, "08")]);
}

#[test]
fn underscore_separator_quirk() {
    // A digit cannot both close one separator group and open the next, so
    // the run ends after `1_2` and `_3` lexes as a name.
    assert_eq!(
        pairs("1_2_3"),
        vec![(NumberInteger, "1_2"), (Name, "_3")]
    );
    assert_eq!(pairs("1_000"), vec![(NumberInteger, "1_000")]);
}

#[test]
fn float_lexes_before_octal() {
    // `07.5` would satisfy the octal rule's prefix, but floats have
    // priority.
    assert_eq!(pairs("07.5"), vec![(NumberFloat, "07.5")]);
}

#[test]
fn lowercase_integer_suffix_is_a_name() {
    assert_eq!(
        pairs("42l"),
        vec![(NumberInteger, "42"), (Name, "l")]
    );
}

// ─── Fallback ──────────────────────────────────────────────────

#[test]
fn unmatched_characters_become_single_text_tokens() {
    assert_eq!(pairs("@"), vec![(Text, "@")]);
    assert_eq!(pairs("@@"), vec![(Text, "@"), (Text, "@")]);
    // Multi-byte characters advance as one scalar value.
    assert_eq!(pairs("\u{a7}"), vec![(Text, "\u{a7}")]);
}

// ─── Whole snippets ────────────────────────────────────────────

#[test]
fn action_declaration_snippet() {
    assert_eq!(
        pairs("action A { rand int x; }"),
        vec![
            (KeywordDeclaration, "action"),
            (Text, " "),
            (NameClass, "A"),
            (Text, " "),
            (Punctuation, "{"),
            (Text, " "),
            (KeywordDeclaration, "rand"),
            (Text, " "),
            (KeywordType, "int"),
            (Text, " "),
            (Name, "x"),
            (Punctuation, ";"),
            (Text, " "),
            (Punctuation, "}"),
        ]
    );
}

#[test]
fn tokenize_entry_point() {
    let categories: Vec<_> = tokenize("while (1)").map(|t| t.category).collect();
    assert_eq!(
        categories,
        vec![Keyword, Text, Punctuation, NumberInteger, Punctuation]
    );
}

// ─── Properties ────────────────────────────────────────────────

proptest! {
    #[test]
    fn lossless_on_arbitrary_input(source in any::<String>()) {
        prop_assert_eq!(rebuilt(&source), source);
    }

    #[test]
    fn token_count_is_bounded_by_scalar_count(source in any::<String>()) {
        // Every token covers at least one scalar value.
        let count = Lexer::new(&source).count();
        prop_assert!(count <= source.chars().count());
    }

    #[test]
    fn offsets_partition_arbitrary_input(source in any::<String>()) {
        let mut expected_offset = 0u32;
        for token in Lexer::new(&source) {
            prop_assert_eq!(token.offset, expected_offset);
            prop_assert!(!token.text.is_empty());
            expected_offset = token.end();
        }
        prop_assert_eq!(expected_offset as usize, source.len());
    }

    #[test]
    fn lossless_on_pss_shaped_input(
        fragments in prop::collection::vec(
            prop::sample::select(vec![
                "component ", "action ", "struct ", "rand bit x; ",
                "Pkg::Item", "// note\n", "/* block */", "\"\"\"\nh\n\"\"\"",
                "\"s\" ", "0x1F ", "3.14 ", "{ } ", "done: ",
            ]),
            0..16,
        )
    ) {
        let source: String = fragments.concat();
        prop_assert_eq!(rebuilt(&source), source.clone());
        // Re-lexing is deterministic.
        let first = pairs(&source);
        let second = pairs(&source);
        prop_assert_eq!(first, second);
    }
}
