use std::fmt;

use serde::Serialize;
use text_size::{TextRange, TextSize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub range: TextRange,
}

impl Token {
    pub fn new(kind: TokenKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    pub fn start(&self) -> TextSize {
        self.range.start()
    }

    pub fn end(&self) -> TextSize {
        self.range.end()
    }

    pub fn len(&self) -> TextSize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Integer(Radix),
    Float,
    Boolean,
    String,
    Comment { block: bool },
    Keyword(Keyword),
    Primitive(PrimitiveType),
    Identifier,

    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    LeftAngle,
    RightAngle,
    Dot,
    Comma,
    Semicolon,
    Colon,
    Eq,
    /// Only produced by the text-format tokenizer, inside type URLs.
    Slash,

    Invalid,
}

impl TokenKind {
    pub fn is_comment(self) -> bool {
        matches!(self, Self::Comment { .. })
    }

    /// Tokens that may stand for a name: identifiers and reserved words.
    pub fn is_word(self) -> bool {
        matches!(self, Self::Identifier | Self::Keyword(_) | Self::Primitive(_))
    }

    pub fn punctuation(c: char) -> Option<Self> {
        Some(match c {
            '(' => Self::LeftParen,
            ')' => Self::RightParen,
            '{' => Self::LeftBrace,
            '}' => Self::RightBrace,
            '[' => Self::LeftBracket,
            ']' => Self::RightBracket,
            '<' => Self::LeftAngle,
            '>' => Self::RightAngle,
            '.' => Self::Dot,
            ',' => Self::Comma,
            ';' => Self::Semicolon,
            ':' => Self::Colon,
            '=' => Self::Eq,
            '/' => Self::Slash,
            _ => return None,
        })
    }

    /// Human readable description used in parse errors.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::String => "string literal",
            Self::Comment { .. } => "comment",
            Self::Keyword(keyword) => keyword.as_str(),
            Self::Primitive(primitive) => primitive.as_str(),
            Self::Identifier => "identifier",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::LeftBrace => "'{'",
            Self::RightBrace => "'}'",
            Self::LeftBracket => "'['",
            Self::RightBracket => "']'",
            Self::LeftAngle => "'<'",
            Self::RightAngle => "'>'",
            Self::Dot => "'.'",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::Colon => "':'",
            Self::Eq => "'='",
            Self::Slash => "'/'",
            Self::Invalid => "invalid character",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(radix) => write!(f, "Integer({})", radix.value()),
            Self::Comment { block: true } => f.write_str("BlockComment"),
            Self::Comment { block: false } => f.write_str("LineComment"),
            Self::Keyword(keyword) => write!(f, "Keyword({})", keyword.as_str()),
            Self::Primitive(primitive) => write!(f, "Primitive({})", primitive.as_str()),
            other => write!(f, "{other:?}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Radix {
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub fn value(self) -> u32 {
        match self {
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    /// Strips the sign and radix prefix and parses the remaining digits.
    ///
    /// Returns `None` when the magnitude does not fit in 64 bits.
    pub fn parse(self, text: &str) -> Option<i128> {
        let (negative, digits) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let digits = match self {
            Self::Hexadecimal => &digits[2..],
            Self::Octal => &digits[1..],
            Self::Decimal => digits,
        };
        let magnitude = u64::from_str_radix(digits, self.value()).ok()?;
        let magnitude = i128::from(magnitude);
        Some(if negative { -magnitude } else { magnitude })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    Syntax,
    Import,
    Public,
    Weak,
    Package,
    Option,
    Message,
    Enum,
    Service,
    Rpc,
    Returns,
    Oneof,
    Repeated,
    Map,
    Optional,
    Reserved,
    To,
    Stream,
}

impl Keyword {
    pub fn from_text(text: &str) -> Option<Self> {
        Some(match text {
            "syntax" => Self::Syntax,
            "import" => Self::Import,
            "public" => Self::Public,
            "weak" => Self::Weak,
            "package" => Self::Package,
            "option" => Self::Option,
            "message" => Self::Message,
            "enum" => Self::Enum,
            "service" => Self::Service,
            "rpc" => Self::Rpc,
            "returns" => Self::Returns,
            "oneof" => Self::Oneof,
            "repeated" => Self::Repeated,
            "map" => Self::Map,
            "optional" => Self::Optional,
            "reserved" => Self::Reserved,
            "to" => Self::To,
            "stream" => Self::Stream,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Import => "import",
            Self::Public => "public",
            Self::Weak => "weak",
            Self::Package => "package",
            Self::Option => "option",
            Self::Message => "message",
            Self::Enum => "enum",
            Self::Service => "service",
            Self::Rpc => "rpc",
            Self::Returns => "returns",
            Self::Oneof => "oneof",
            Self::Repeated => "repeated",
            Self::Map => "map",
            Self::Optional => "optional",
            Self::Reserved => "reserved",
            Self::To => "to",
            Self::Stream => "stream",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveType {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,
}

impl PrimitiveType {
    pub fn from_text(text: &str) -> Option<Self> {
        Some(match text {
            "double" => Self::Double,
            "float" => Self::Float,
            "int32" => Self::Int32,
            "int64" => Self::Int64,
            "uint32" => Self::Uint32,
            "uint64" => Self::Uint64,
            "sint32" => Self::Sint32,
            "sint64" => Self::Sint64,
            "fixed32" => Self::Fixed32,
            "fixed64" => Self::Fixed64,
            "sfixed32" => Self::Sfixed32,
            "sfixed64" => Self::Sfixed64,
            "bool" => Self::Bool,
            "string" => Self::String,
            "bytes" => Self::Bytes,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Float => "float",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Sint32 => "sint32",
            Self::Sint64 => "sint64",
            Self::Fixed32 => "fixed32",
            Self::Fixed64 => "fixed64",
            Self::Sfixed32 => "sfixed32",
            Self::Sfixed64 => "sfixed64",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Bytes => "bytes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radix_parse_handles_signs_and_prefixes() {
        assert_eq!(Radix::Decimal.parse("42"), Some(42));
        assert_eq!(Radix::Decimal.parse("-42"), Some(-42));
        assert_eq!(Radix::Hexadecimal.parse("0x1F"), Some(31));
        assert_eq!(Radix::Hexadecimal.parse("-0XfF"), Some(-255));
        assert_eq!(Radix::Octal.parse("0755"), Some(0o755));
        assert_eq!(Radix::Octal.parse("+017"), Some(15));
        assert_eq!(Radix::Decimal.parse("99999999999999999999999"), None);
    }

    #[test]
    fn keyword_round_trip() {
        for text in ["syntax", "import", "rpc", "returns", "stream", "to"] {
            let keyword = Keyword::from_text(text).unwrap();
            assert_eq!(keyword.as_str(), text);
        }
        assert_eq!(Keyword::from_text("Message"), None);
    }

    #[test]
    fn primitive_round_trip() {
        for text in ["double", "sfixed64", "bytes", "bool"] {
            let primitive = PrimitiveType::from_text(text).unwrap();
            assert_eq!(primitive.as_str(), text);
        }
        assert_eq!(PrimitiveType::from_text("int16"), None);
    }
}
