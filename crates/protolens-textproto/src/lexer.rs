use protolens_tokenizer::cursor::{is_ident_continue, is_ident_start};
use protolens_tokenizer::{Cursor, Radix, Token, TokenKind, scan};
use text_size::TextRange;

pub fn tokenize(text: &str) -> Vec<Token> {
    Lexer::new(text).collect()
}

/// Tokenizer for text-format data. Shares numbers and strings with the
/// proto3 tokenizer but has `#` comments and no reserved words.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { cursor: Cursor::new(text) }
    }

    pub fn next_token(&mut self) -> Option<Token> {
        self.cursor.skip_whitespace();
        if self.cursor.is_eof() {
            return None;
        }

        let start = self.cursor.offset();
        let kind = self.token_kind();
        Some(Token::new(kind, TextRange::new(start, self.cursor.offset())))
    }

    fn token_kind(&mut self) -> TokenKind {
        let cursor = &mut self.cursor;

        match cursor.current() {
            '#' => {
                cursor.skip_to_line_break();
                TokenKind::Comment { block: false }
            }
            '\'' | '"' => {
                scan::string(cursor);
                TokenKind::String
            }
            _ if scan::starts_number(cursor) => {
                let kind = scan::number(cursor);
                float_suffix(cursor, kind)
            }
            c if is_ident_start(c) => match scan::word(cursor) {
                "true" | "false" => TokenKind::Boolean,
                "inf" | "nan" => TokenKind::Float,
                _ => TokenKind::Identifier,
            },
            c => match TokenKind::punctuation(c) {
                Some(kind) if is_punctuation(kind) => {
                    cursor.advance(1);
                    kind
                }
                _ => {
                    cursor.advance_char();
                    TokenKind::Invalid
                }
            },
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// `1.5f` and `2f` are floats.
fn float_suffix(cursor: &mut Cursor<'_>, kind: TokenKind) -> TokenKind {
    let suffixed = matches!(kind, TokenKind::Float | TokenKind::Integer(Radix::Decimal))
        && matches!(cursor.current(), 'f' | 'F')
        && !is_ident_continue(cursor.peek(1));
    if !suffixed {
        return kind;
    }
    cursor.advance(1);
    TokenKind::Float
}

fn is_punctuation(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::LeftBrace
            | TokenKind::RightBrace
            | TokenKind::LeftBracket
            | TokenKind::RightBracket
            | TokenKind::LeftAngle
            | TokenKind::RightAngle
            | TokenKind::Colon
            | TokenKind::Semicolon
            | TokenKind::Comma
            | TokenKind::Dot
            | TokenKind::Slash
    )
}

#[cfg(test)]
mod tests {
    use protolens_tokenizer::{Token, TokenKind};

    use super::tokenize;

    fn kinds_and_texts(text: &str) -> Vec<(TokenKind, &str)> {
        tokenize(text).iter().map(|token: &Token| (token.kind, &text[token.range])).collect()
    }

    #[test]
    fn hash_comments() {
        assert_eq!(
            kinds_and_texts("# one\nname: 1 # two"),
            vec![
                (TokenKind::Comment { block: false }, "# one"),
                (TokenKind::Identifier, "name"),
                (TokenKind::Colon, ":"),
                (TokenKind::Integer(protolens_tokenizer::Radix::Decimal), "1"),
                (TokenKind::Comment { block: false }, "# two"),
            ]
        );
    }

    #[test]
    fn words_are_never_keywords() {
        assert_eq!(
            kinds_and_texts("message int32 true inf Nan"),
            vec![
                (TokenKind::Identifier, "message"),
                (TokenKind::Identifier, "int32"),
                (TokenKind::Boolean, "true"),
                (TokenKind::Float, "inf"),
                (TokenKind::Identifier, "Nan"),
            ]
        );
    }

    #[test]
    fn float_suffixes() {
        assert_eq!(
            kinds_and_texts("1.5f 2F -3f 0x1f 4fx"),
            vec![
                (TokenKind::Float, "1.5f"),
                (TokenKind::Float, "2F"),
                (TokenKind::Float, "-3f"),
                (TokenKind::Integer(protolens_tokenizer::Radix::Hexadecimal), "0x1f"),
                (TokenKind::Integer(protolens_tokenizer::Radix::Decimal), "4"),
                (TokenKind::Identifier, "fx"),
            ]
        );
    }

    #[test]
    fn type_url_punctuation() {
        assert_eq!(
            kinds_and_texts("[a.com/b.C] = ( //"),
            vec![
                (TokenKind::LeftBracket, "["),
                (TokenKind::Identifier, "a"),
                (TokenKind::Dot, "."),
                (TokenKind::Identifier, "com"),
                (TokenKind::Slash, "/"),
                (TokenKind::Identifier, "b"),
                (TokenKind::Dot, "."),
                (TokenKind::Identifier, "C"),
                (TokenKind::RightBracket, "]"),
                (TokenKind::Invalid, "="),
                (TokenKind::Invalid, "("),
                (TokenKind::Slash, "/"),
                (TokenKind::Slash, "/"),
            ]
        );
    }
}
