//! Identifier and keyword scanning.

use super::core::{is_letter, Lexer};

impl Lexer {
    /// Reads the maximal run of letters/digits/underscore starting at the
    /// current character (which must already satisfy [`is_letter`]).
    pub(crate) fn read_identifier(&mut self) -> String {
        let start = self.position();
        while is_letter(self.current()) || self.current().is_ascii_digit() {
            self.read_char();
        }
        String::from_utf8_lossy(self.slice(start, self.position())).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use crate::Lexer;
    use monkey_token::TokenKind;

    #[test]
    fn reads_identifiers_and_keywords() {
        let mut l = Lexer::new("foobar fn _private x1");
        assert_eq!(l.next_token().kind, TokenKind::Ident);
        assert_eq!(l.next_token().kind, TokenKind::Function);
        assert_eq!(l.next_token().kind, TokenKind::Ident);
        assert_eq!(l.next_token().kind, TokenKind::Ident);
    }
}
