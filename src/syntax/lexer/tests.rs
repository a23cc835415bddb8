//! Tests for the lexer.

use super::*;

fn lex(src: &str) -> Vec<Token<'_>> {
    tokens(src).expect("failed to lex")
}

fn lex_err(src: &str) -> Failure<'_> {
    match tokens(src) {
        Ok(tokens) => panic!("expected lexing to fail, got {:?}", tokens),
        Err(failure) => failure,
    }
}

fn texts<'s>(tokens: &[Token<'s>]) -> Vec<&'s str> {
    tokens.iter().map(Token::text).collect()
}

#[test]
fn check_val_binding() {
    let tokens = lex("val x = 0");
    assert_eq!(tokens[0].kind(), TokenKind::Reserved(Reserved::Val));
    assert_eq!(tokens[0].text(), "val");
    assert_eq!(tokens[1].kind(), TokenKind::Identifier);
    assert_eq!(tokens[1].text(), "x");
    assert_eq!(tokens[2].kind(), TokenKind::Reserved(Reserved::Equal));
    assert_eq!(tokens[2].text(), "=");
    assert_eq!(tokens[3].kind(), TokenKind::Integer);
    assert_eq!(tokens[3].text(), "0");
    assert_eq!(tokens.len(), 4);
}

#[test]
fn check_hex_word_constant() {
    let tokens = lex("0wx1A");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind(), TokenKind::Word);
    assert_eq!(tokens[0].text(), "0wx1A");
}

#[test]
fn check_dec_word_constant() {
    let tokens = lex("0w42");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind(), TokenKind::Word);
    assert_eq!(tokens[0].text(), "0w42");
}

#[test]
fn check_negated_hex_constant() {
    let tokens = lex("~0x10");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind(), TokenKind::Integer);
    assert_eq!(tokens[0].text(), "~0x10");
}

#[test]
fn check_word_prefix_backoff() {
    // Without a digit after the `w`, the `0` stands alone and the `w`
    // starts an identifier.
    let tokens = lex("0w");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind(), TokenKind::Integer);
    assert_eq!(tokens[0].text(), "0");
    assert_eq!(tokens[1].kind(), TokenKind::Identifier);
    assert_eq!(tokens[1].text(), "w");
}

#[test]
fn check_hex_prefix_backoff() {
    let tokens = lex("0xg");
    assert_eq!(texts(&tokens), ["0", "xg"]);
    assert_eq!(tokens[0].kind(), TokenKind::Integer);
    assert_eq!(tokens[1].kind(), TokenKind::Identifier);
}

#[test]
fn check_real_constant() {
    let tokens = lex("~3.25 10.0");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind(), TokenKind::Real);
    assert_eq!(tokens[0].text(), "~3.25");
    assert_eq!(tokens[1].kind(), TokenKind::Real);
    assert_eq!(tokens[1].text(), "10.0");
}

#[test]
fn check_qualified_identifier() {
    let tokens = lex("Foo.bar");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind(), TokenKind::Qualifier);
    assert_eq!(tokens[0].text(), "Foo");
    assert_eq!(tokens[1].kind(), TokenKind::Identifier);
    assert_eq!(tokens[1].text(), "bar");
}

#[test]
fn check_qualifier_chain() {
    let tokens = lex("Foo.Bar.baz");
    assert_eq!(texts(&tokens), ["Foo", "Bar", "baz"]);
    assert_eq!(tokens[0].kind(), TokenKind::Qualifier);
    assert_eq!(tokens[1].kind(), TokenKind::Qualifier);
    assert_eq!(tokens[2].kind(), TokenKind::Identifier);
}

#[test]
fn check_qualified_symbolic_identifier() {
    let tokens = lex("Foo.+");
    assert_eq!(tokens[0].kind(), TokenKind::Qualifier);
    assert_eq!(tokens[1].kind(), TokenKind::Identifier);
    assert_eq!(tokens[1].text(), "+");
}

#[test]
fn check_string_with_escapes() {
    let src = r#""a\t\065\u00FFz""#;
    let tokens = lex(src);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind(), TokenKind::String);
    assert_eq!(tokens[0].text(), src);
}

#[test]
fn check_control_escape() {
    let tokens = lex(r#""\^A\^B""#);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind(), TokenKind::String);
}

#[test]
fn check_format_escape() {
    let tokens = lex("\"broken \\\n   \\ over lines\"");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind(), TokenKind::String);
}

#[test]
fn check_nested_comment() {
    let src = "(* outer (* inner *) still outer *) 1";
    let tokens = lex(src);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind(), TokenKind::Comment);
    assert_eq!(tokens[0].text(), "(* outer (* inner *) still outer *)");
    assert_eq!(tokens[1].kind(), TokenKind::Integer);
    assert_eq!(tokens[1].text(), "1");
}

#[test]
fn check_lone_tilde() {
    let tokens = lex("~ f");
    assert_eq!(tokens[0].kind(), TokenKind::Identifier);
    assert_eq!(tokens[0].text(), "~");
    assert_eq!(tokens[1].text(), "f");
}

#[test]
fn check_symbolic_tilde_identifier() {
    let tokens = lex("~~");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind(), TokenKind::Identifier);
    assert_eq!(tokens[0].text(), "~~");
}

#[test]
fn check_type_variable() {
    let tokens = lex("'a 'equality");
    assert_eq!(tokens.len(), 2);
    assert!(tokens[0].is_ty_var());
    assert_eq!(tokens[0].text(), "'a");
    assert!(tokens[1].is_ty_var());
}

#[test]
fn check_dot_dot_dot() {
    let tokens = lex("{x, ...}");
    assert_eq!(
        texts(&tokens),
        ["{", "x", ",", "...", "}"]
    );
    assert_eq!(tokens[3].kind(), TokenKind::Reserved(Reserved::DotDotDot));
}

#[test]
fn check_close_comment_at_top_level() {
    // A stray `*)` is not special: the star lexes as a symbolic
    // identifier and the parenthesis as punctuation.
    let tokens = lex("*)");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind(), TokenKind::Identifier);
    assert_eq!(tokens[0].text(), "*");
    assert_eq!(tokens[1].kind(), TokenKind::Reserved(Reserved::RParen));
}

#[test]
fn check_punctuation_and_symbolic_reserved() {
    let tokens = lex("( ) [ ] { } , ; _ : | = => -> # :>");
    let expected = [
        Reserved::LParen,
        Reserved::RParen,
        Reserved::LSquare,
        Reserved::RSquare,
        Reserved::LCurly,
        Reserved::RCurly,
        Reserved::Comma,
        Reserved::Semicolon,
        Reserved::Underscore,
        Reserved::Colon,
        Reserved::Bar,
        Reserved::Equal,
        Reserved::BigArrow,
        Reserved::Arrow,
        Reserved::Pound,
        Reserved::ColonGt,
    ];
    assert_eq!(tokens.len(), expected.len());
    for (token, &word) in tokens.iter().zip(expected.iter()) {
        assert_eq!(token.kind(), TokenKind::Reserved(word));
        assert_eq!(token.text(), word.as_str());
    }
}

#[test]
fn check_symbolic_identifier_splits_on_reserved_lookup() {
    // `==>` is not reserved, so it stays one symbolic identifier.
    let tokens = lex("==>");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind(), TokenKind::Identifier);
}

#[test]
fn check_slices_are_disjoint_and_in_order() {
    let src = "val rec f = fn x => (* id *) x  andalso Foo.bar \"s\" 0wx1F ~2.5";
    let tokens = lex(src);
    assert!(!tokens.is_empty());
    let mut prev_end = 0;
    for token in &tokens {
        assert!(!token.slice().is_empty());
        assert!(token.slice().start() >= prev_end);
        prev_end = token.slice().end();
    }
    assert!(prev_end <= src.len());
}

#[test]
fn check_slicing_is_idempotent() {
    let src = "val x = (1, [~0x2, 0w3], \"four\") (* five *)";
    for token in lex(src) {
        let slice = token.slice();
        assert_eq!(&src[slice.start()..slice.end()], token.text());
        assert_eq!(slice.len(), token.text().len());
    }
}

#[test]
fn check_reserved_words_never_lex_as_identifiers() {
    use std::str::FromStr;

    let src = "val rec andalso orelse => fn nonsense x";
    for token in lex(src) {
        match token.kind() {
            TokenKind::Identifier => assert!(Reserved::from_str(token.text()).is_err()),
            TokenKind::Reserved(word) => assert_eq!(word.as_str(), token.text()),
            kind => panic!("unexpected token class {:?}", kind),
        }
    }
}

#[test]
fn check_comment_token_keeps_delimiters() {
    let src = "(* a (* b (* c *) *) d *)";
    let tokens = lex(src);
    assert_eq!(tokens.len(), 1);
    let text = tokens[0].text();
    assert!(text.starts_with("(*"));
    assert!(text.ends_with("*)"));
    assert_eq!(text, src);
}

#[test]
fn check_failure_reports_prefix() {
    let failure = lex_err("val x = 1.0E2");
    assert_eq!(
        failure.error.message(),
        "real constants with exponents not supported yet"
    );
    // The partial tokens match what lexing the untouched prefix yields.
    assert_eq!(failure.partial, lex("val x = "));
    assert_eq!(texts(&failure.partial), ["val", "x", "="]);
}

#[test]
fn check_reserved_word_after_qualifier_fails() {
    let failure = lex_err("Foo.val");
    assert_eq!(
        failure.error.message(),
        "reserved word 'val' prefaced by qualifiers"
    );
    assert_eq!(failure.partial.len(), 1);
    assert_eq!(failure.partial[0].kind(), TokenKind::Qualifier);
    assert_eq!(failure.partial[0].text(), "Foo");
}

#[test]
fn check_reserved_symbolic_after_qualifier_fails() {
    let failure = lex_err("Foo.=");
    assert_eq!(
        failure.error.message(),
        "reserved word '=' prefaced by qualifiers"
    );
}

#[test]
fn check_reserved_word_as_qualifier_fails() {
    let failure = lex_err("val.x");
    assert_eq!(
        failure.error.message(),
        "reserved word 'val' cannot be used as qualifier"
    );
    assert!(failure.partial.is_empty());
}

#[test]
fn check_prime_qualifier_fails() {
    let failure = lex_err("'a.b");
    assert_eq!(
        failure.error.message(),
        "structure identifiers cannot start with prime"
    );
}

#[test]
fn check_dangling_qualifier_fails() {
    let failure = lex_err("Foo. bar");
    assert_eq!(
        failure.error.message(),
        "unexpected end of qualified identifier"
    );
    assert_eq!(texts(&failure.partial), ["Foo"]);
}

#[test]
fn check_lone_dot_fails() {
    let failure = lex_err("x . y");
    assert_eq!(failure.error.message(), "unexpected '.'");
    assert_eq!(texts(&failure.partial), ["x"]);
}

#[test]
fn check_two_dots_fail() {
    let failure = lex_err("..");
    assert_eq!(failure.error.message(), "unexpected '.'");
}

#[test]
fn check_real_without_fraction_fails() {
    let failure = lex_err("1.");
    assert_eq!(failure.error.message(), "unexpected end of real constant");
    assert!(failure.partial.is_empty());
}

#[test]
fn check_unclosed_string_fails() {
    let failure = lex_err("\"abc");
    assert_eq!(failure.error.message(), "unclosed string starting at 0");
    assert!(failure.partial.is_empty());
}

#[test]
fn check_unclosed_string_position() {
    let failure = lex_err("val s = \"abc");
    assert_eq!(failure.error.message(), "unclosed string starting at 8");
    assert_eq!(texts(&failure.partial), ["val", "s", "="]);
}

#[test]
fn check_unclosed_escape_fails_as_unclosed_string() {
    let failure = lex_err("\"abc\\");
    assert_eq!(failure.error.message(), "unclosed string starting at 0");
}

#[test]
fn check_non_printable_in_string_fails() {
    let failure = lex_err("\"a\u{1}b\"");
    assert_eq!(failure.error.message(), "non-printable character at 2");
}

#[test]
fn check_bad_decimal_escape_fails() {
    let failure = lex_err("\"\\0a1\"");
    assert_eq!(
        failure.error.message(),
        "in string, expected escape sequence \\ddd but found 0a1"
    );
}

#[test]
fn check_bad_unicode_escape_fails() {
    let failure = lex_err("\"\\u12G4x\"");
    assert_eq!(
        failure.error.message(),
        "in string, expected escape sequence \\uxxxx but found 12G4"
    );
}

#[test]
fn check_invalid_control_escape_fails() {
    let failure = lex_err("\"\\^a\"");
    assert_eq!(
        failure.error.message(),
        "invalid control escape sequence at 3"
    );
}

#[test]
fn check_incomplete_control_escape_fails() {
    let failure = lex_err("\"\\^");
    assert_eq!(
        failure.error.message(),
        "incomplete control escape sequence at 3"
    );
}

#[test]
fn check_invalid_format_escape_fails() {
    let failure = lex_err("\"\\  x\"");
    assert_eq!(
        failure.error.message(),
        "invalid format escape sequence at 4"
    );
}

#[test]
fn check_incomplete_format_escape_fails() {
    let failure = lex_err("\"\\ ");
    assert_eq!(
        failure.error.message(),
        "incomplete format escape sequence at 3"
    );
}

#[test]
fn check_unclosed_comment_fails() {
    let failure = lex_err("val x (* comment (* nested *)");
    assert_eq!(failure.error.message(), "unclosed comment starting at 6");
    assert_eq!(texts(&failure.partial), ["val", "x"]);
}

#[test]
fn check_token_predicates() {
    let tokens = lex("val 'a Foo.bar 1 0w2 3.0 \"s\" (* c *)");
    assert!(tokens[0].is_dec_start_token());
    assert!(!tokens[0].is_constant());
    assert!(tokens[1].is_ty_var());
    assert!(!tokens[1].is_maybe_long_identifier());
    assert!(tokens[2].is_maybe_long_identifier());
    assert!(tokens[3].is_maybe_long_identifier());
    assert!(tokens[4].is_constant());
    assert!(tokens[4].is_pattern_constant());
    assert!(tokens[5].is_pattern_constant());
    assert!(tokens[6].is_constant());
    assert!(!tokens[6].is_pattern_constant());
    assert!(tokens[7].is_pattern_constant());
    assert!(tokens[8].is_comment());
}

#[test]
fn check_empty_input() {
    assert!(lex("").is_empty());
    assert!(lex("  \n\t  ").is_empty());
}
