//! Whitespace and comment skipping.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and `//` line comments.
    ///
    /// Whitespace is space, tab, carriage return, and newline; newlines
    /// advance the cursor's line counter. A comment runs to the end of
    /// the line (or end of input) and is discarded entirely.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            while matches!(self.cursor.current_char(), ' ' | '\t' | '\r' | '\n') {
                self.cursor.advance();
            }

            if self.cursor.current_char() == '/' && self.cursor.peek_char(1) == '/' {
                while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                    self.cursor.advance();
                }
                continue;
            }

            break;
        }
    }
}
