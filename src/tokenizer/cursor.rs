pub struct CharCursor {
    chars: Vec<char>,
    position: usize,
}

impl CharCursor {
    pub fn new(expression: &str) -> Self {
        Self {
            chars: expression.chars().collect(),
            position: 0,
        }
    }

    pub fn current(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// First character after the current one that is not whitespace.
    pub fn next_significant(&self) -> Option<char> {
        self.chars
            .iter()
            .skip(self.position + 1)
            .find(|c| !c.is_whitespace())
            .copied()
    }

    pub fn advance(&mut self) -> Option<char> {
        let current = self.current()?;
        self.position += 1;
        Some(current)
    }

    pub fn skip_whitespace(&mut self) {
        while self.current().is_some_and(char::is_whitespace) {
            self.position += 1;
        }
    }

    /// Consumes characters while `accept` holds and returns them as a string.
    pub fn take_while<F>(&mut self, mut accept: F) -> String
    where
        F: FnMut(char) -> bool,
    {
        let start = self.position;
        while self.current().is_some_and(&mut accept) {
            self.position += 1;
        }
        self.chars[start..self.position].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_lookahead() {
        let mut cursor = CharCursor::new("ab c");
        assert_eq!(cursor.current(), Some('a'));
        assert_eq!(cursor.next_significant(), Some('b'));

        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.current(), Some('b'));
        assert_eq!(cursor.next_significant(), Some('c'));
    }

    #[test]
    fn test_take_while_stops_at_rejected_char() {
        let mut cursor = CharCursor::new("max2(1)");
        let word = cursor.take_while(|c| c.is_alphanumeric());
        assert_eq!(word, "max2");
        assert_eq!(cursor.current(), Some('('));
    }

    #[test]
    fn test_skip_whitespace_reaches_end() {
        let mut cursor = CharCursor::new("   ");
        cursor.skip_whitespace();
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.advance(), None);
    }
}
