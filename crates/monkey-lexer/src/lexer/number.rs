//! Integer literal scanning. Monkey has no floating-point type, so this is
//! the only numeric literal form.

use super::core::Lexer;

impl Lexer {
    /// Reads the maximal run of ASCII digits starting at the current
    /// character (which must already be a digit).
    pub(crate) fn read_number(&mut self) -> String {
        let start = self.position();
        while self.current().is_ascii_digit() {
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
    fn reads_integer_literals() {
        let mut l = Lexer::new("5 10 12345");
        let tok = l.next_token();
        assert_eq!(tok.kind, TokenKind::Int);
        assert_eq!(tok.literal, "5");
        assert_eq!(l.next_token().literal, "10");
        assert_eq!(l.next_token().literal, "12345");
    }
}
