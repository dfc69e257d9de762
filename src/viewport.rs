/// Visible window onto the document, in lines and columns.
pub struct Viewport {
    pub offset_line: usize,
    pub offset_col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            offset_line: 0,
            offset_col: 0,
            rows,
            cols,
        }
    }

    pub fn reset(&mut self) {
        self.offset_line = 0;
        self.offset_col = 0;
    }

    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows.max(1);
        self.cols = cols.max(1);
    }

    /// Scroll as little as possible so the cursor cell is on screen.
    pub fn scroll_to_cursor(&mut self, cursor_line: usize, cursor_col: usize) {
        if cursor_line < self.offset_line {
            self.offset_line = cursor_line;
        } else if cursor_line >= self.offset_line + self.rows {
            self.offset_line = cursor_line + 1 - self.rows;
        }
        if cursor_col < self.offset_col {
            self.offset_col = cursor_col;
        } else if cursor_col >= self.offset_col + self.cols {
            self.offset_col = cursor_col + 1 - self.cols;
        }
    }
}
