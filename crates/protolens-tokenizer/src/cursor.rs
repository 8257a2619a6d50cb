use text_size::TextSize;

pub const EOF_CHAR: char = '\0';

/// Byte cursor over source text.
///
/// Every query past either end of the text yields [`EOF_CHAR`], so callers
/// can look ahead freely without bounds checks.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn offset(&self) -> TextSize {
        TextSize::new(self.pos as u32)
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub fn current(&self) -> char {
        self.peek(0)
    }

    pub fn peek(&self, offset: isize) -> char {
        self.pos
            .checked_add_signed(offset)
            .and_then(|index| self.text.as_bytes().get(index))
            .map_or(EOF_CHAR, |&byte| byte as char)
    }

    pub fn matches(&self, c: char) -> bool {
        !self.is_eof() && self.current() == c
    }

    /// Whether the text at the cursor starts with `word` and the word is not
    /// the prefix of a longer identifier.
    pub fn at_word(&self, offset: usize, word: &str) -> bool {
        let start = self.pos + offset;
        let rest = self.text.as_bytes().get(start..).unwrap_or_default();
        rest.starts_with(word.as_bytes())
            && !rest.get(word.len()).is_some_and(|&byte| is_ident_continue(byte as char))
    }

    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.text.len());
    }

    pub fn move_next(&mut self) -> bool {
        self.advance(1);
        !self.is_eof()
    }

    /// Steps over one whole character, keeping the cursor on a char boundary.
    pub fn advance_char(&mut self) {
        let len = self
            .text
            .get(self.pos..)
            .and_then(|rest| rest.chars().next())
            .map_or(1, char::len_utf8);
        self.advance(len);
    }

    pub fn advance_while(&mut self, f: impl Fn(char) -> bool) {
        while !self.is_eof() && f(self.current()) {
            self.pos += 1;
        }
    }

    pub fn is_at_whitespace(&self) -> bool {
        !self.is_eof() && is_whitespace(self.current())
    }

    pub fn is_at_line_break(&self) -> bool {
        !self.is_eof() && is_line_break(self.current())
    }

    pub fn skip_whitespace(&mut self) {
        self.advance_while(is_whitespace);
    }

    pub fn skip_to_line_break(&mut self) {
        self.advance_while(|c| !is_line_break(c));
    }
}

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0C' | '\n' | '\r')
}

pub fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_immediately_at_end() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), EOF_CHAR);
        assert!(!cursor.move_next());
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn peek_out_of_bounds_in_both_directions() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(-1), EOF_CHAR);
        assert_eq!(cursor.peek(1), 'b');
        assert_eq!(cursor.peek(2), EOF_CHAR);

        cursor.advance(1);
        assert_eq!(cursor.peek(-1), 'a');
        assert_eq!(cursor.current(), 'b');
        assert!(!cursor.move_next());
        assert_eq!(cursor.current(), EOF_CHAR);
    }

    #[test]
    fn whitespace_and_line_breaks() {
        let mut cursor = Cursor::new(" \t\x0C\r\n x // tail\nnext");
        assert!(cursor.is_at_whitespace());
        cursor.skip_whitespace();
        assert_eq!(cursor.current(), 'x');

        cursor.skip_to_line_break();
        assert!(cursor.is_at_line_break());
        assert!(cursor.is_at_whitespace());
        assert_eq!(&cursor.text()[cursor.pos()..], "\nnext");
    }

    #[test]
    fn words_respect_identifier_boundaries() {
        let cursor = Cursor::new("-inf -info");
        assert!(cursor.at_word(1, "inf"));

        let mut cursor = cursor;
        cursor.advance(5);
        assert!(!cursor.at_word(1, "inf"));
    }

    #[test]
    fn advance_char_steps_over_multibyte_characters() {
        let mut cursor = Cursor::new("é!");
        cursor.advance_char();
        assert_eq!(cursor.pos(), 2);
        assert_eq!(cursor.current(), '!');
    }
}
