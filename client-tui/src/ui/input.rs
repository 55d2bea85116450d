use chess::Square;

/// Buffer for collecting square input (e.g., "e2", "e4")
///
/// Typing a coordinate is the keyboard equivalent of clicking that square.
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    buffer: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Accepts a file letter first, then a rank digit; anything else is dropped.
    pub fn push_char(&mut self, c: char) {
        let accepted = match self.buffer.len() {
            0 => ('a'..='h').contains(&c),
            1 => ('1'..='8').contains(&c),
            _ => false,
        };
        if accepted {
            self.buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.buffer.len() == 2
    }

    /// Parse and clear the buffer once a full square has been typed.
    pub fn take_square(&mut self) -> Option<Square> {
        if !self.is_complete() {
            return None;
        }
        let square = self.buffer.parse().ok();
        self.buffer.clear();
        square
    }
}
