use proptest::prelude::*;

use super::*;

fn token_text<'a>(token: &Token, text: &'a str) -> &'a str {
    &text[token.range]
}

fn kinds_and_texts(text: &str) -> Vec<(TokenKind, &str)> {
    tokenize(text).iter().map(|token| (token.kind, token_text(token, text))).collect()
}

#[test]
fn test_empty_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t\r\n\x0C").is_empty());
}

#[test]
fn test_syntax_statement() {
    let text = r#"syntax = "proto3";"#;
    assert_eq!(
        kinds_and_texts(text),
        vec![
            (TokenKind::Keyword(Keyword::Syntax), "syntax"),
            (TokenKind::Eq, "="),
            (TokenKind::String, "\"proto3\""),
            (TokenKind::Semicolon, ";"),
        ]
    );
}

#[test]
fn test_token_offsets() {
    let text = "message  Foo{}";
    let tokens = tokenize(text);
    let ranges: Vec<_> =
        tokens.iter().map(|token| (u32::from(token.start()), u32::from(token.end()))).collect();
    assert_eq!(ranges, vec![(0, 7), (9, 12), (12, 13), (13, 14)]);
}

#[test]
fn test_word_classification() {
    let text = "inf nan true false int32 string repeated map stream Foo _bar baz9";
    assert_eq!(
        kinds_and_texts(text),
        vec![
            (TokenKind::Float, "inf"),
            (TokenKind::Float, "nan"),
            (TokenKind::Boolean, "true"),
            (TokenKind::Boolean, "false"),
            (TokenKind::Primitive(PrimitiveType::Int32), "int32"),
            (TokenKind::Primitive(PrimitiveType::String), "string"),
            (TokenKind::Keyword(Keyword::Repeated), "repeated"),
            (TokenKind::Keyword(Keyword::Map), "map"),
            (TokenKind::Keyword(Keyword::Stream), "stream"),
            (TokenKind::Identifier, "Foo"),
            (TokenKind::Identifier, "_bar"),
            (TokenKind::Identifier, "baz9"),
        ]
    );
}

#[test]
fn test_words_are_maximal() {
    assert_eq!(
        kinds_and_texts("int32x messages infinity"),
        vec![
            (TokenKind::Identifier, "int32x"),
            (TokenKind::Identifier, "messages"),
            (TokenKind::Identifier, "infinity"),
        ]
    );
}

#[test]
fn test_numbers_in_context() {
    let text = "[default = -0x1F, max = 1e3, min = -inf, octal = 017, f = .5]";
    let numbers: Vec<_> = kinds_and_texts(text)
        .into_iter()
        .filter(|(kind, _)| matches!(kind, TokenKind::Integer(_) | TokenKind::Float))
        .collect();
    assert_eq!(
        numbers,
        vec![
            (TokenKind::Integer(Radix::Hexadecimal), "-0x1F"),
            (TokenKind::Float, "1e3"),
            (TokenKind::Float, "-inf"),
            (TokenKind::Integer(Radix::Octal), "017"),
            (TokenKind::Float, ".5"),
        ]
    );
}

#[test]
fn test_dotted_names() {
    assert_eq!(
        kinds_and_texts(".foo.Bar"),
        vec![
            (TokenKind::Dot, "."),
            (TokenKind::Identifier, "foo"),
            (TokenKind::Dot, "."),
            (TokenKind::Identifier, "Bar"),
        ]
    );
}

#[test]
fn test_comments() {
    let text = "// line\r\n/* block\n spans */ x /* open";
    assert_eq!(
        kinds_and_texts(text),
        vec![
            (TokenKind::Comment { block: false }, "// line"),
            (TokenKind::Comment { block: true }, "/* block\n spans */"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Comment { block: true }, "/* open"),
        ]
    );
}

#[test]
fn test_strings() {
    let text = r#"'single' "with \" quote" "unterminated"#;
    assert_eq!(
        kinds_and_texts(text),
        vec![
            (TokenKind::String, "'single'"),
            (TokenKind::String, r#""with \" quote""#),
            (TokenKind::String, "\"unterminated"),
        ]
    );
}

#[test]
fn test_invalid_characters_do_not_stop_tokenizing() {
    let text = "a / b - @ é c";
    assert_eq!(
        kinds_and_texts(text),
        vec![
            (TokenKind::Identifier, "a"),
            (TokenKind::Invalid, "/"),
            (TokenKind::Identifier, "b"),
            (TokenKind::Invalid, "-"),
            (TokenKind::Invalid, "@"),
            (TokenKind::Invalid, "é"),
            (TokenKind::Identifier, "c"),
        ]
    );
}

#[test]
fn test_punctuation() {
    let text = "(){}[]<>.,;:=";
    let kinds: Vec<_> = tokenize(text).into_iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::LeftBracket,
            TokenKind::RightBracket,
            TokenKind::LeftAngle,
            TokenKind::RightAngle,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Eq,
        ]
    );
}

const FRAGMENTS: &[&str] = &[
    "syntax = \"proto3\";",
    "package foo.bar;",
    "import public \"a.proto\";",
    "message A { repeated int32 a = 1 [packed = true]; }",
    "map<string, .pkg.Msg> m = 2;",
    "option (my.opt).field = { a: 1 b: [1, 2] };",
    "enum E { X = -0x10; Y = 017; }",
    "rpc M (stream Req) returns (Resp) {}",
    "// comment\n",
    "/* block */",
    "1.5e-3 -inf nan .25",
    "'it\\'s'",
    "@#$%^&",
    "é ü 😀",
];

fn source() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,200}",
        prop::collection::vec(prop::sample::select(FRAGMENTS), 0..16)
            .prop_map(|fragments| fragments.join(" ")),
    ]
}

fn is_gap_whitespace(gap: &str) -> bool {
    gap.chars().all(cursor::is_whitespace)
}

proptest! {
    #[test]
    fn tokens_tile_the_input(text in source()) {
        let tokens = tokenize(&text);
        let mut previous_end = 0usize;

        for token in &tokens {
            let start = usize::from(token.start());
            let end = usize::from(token.end());
            prop_assert!(start >= previous_end, "overlapping token {:?}", token);
            prop_assert!(end > start, "empty token {:?}", token);
            prop_assert!(is_gap_whitespace(&text[previous_end..start]));
            previous_end = end;
        }

        prop_assert!(is_gap_whitespace(&text[previous_end..]));
    }

    #[test]
    fn integers_parse_under_their_radix(text in source()) {
        for token in tokenize(&text) {
            if let TokenKind::Integer(radix) = token.kind {
                let literal = token_text(&token, &text);
                let digits = literal.trim_start_matches(['-', '+']);
                let digits = match radix {
                    Radix::Hexadecimal => &digits[2..],
                    Radix::Octal => &digits[1..],
                    Radix::Decimal => digits,
                };
                prop_assert!(!digits.is_empty());
                prop_assert!(digits.chars().all(|c| c.is_digit(radix.value())), "{}", literal);
            }
        }
    }

    #[test]
    fn tokenizing_is_deterministic(text in source()) {
        prop_assert_eq!(tokenize(&text), tokenize(&text));
    }
}
