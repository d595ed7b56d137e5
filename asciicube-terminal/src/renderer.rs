/// Flushes the character buffer to a terminal
use asciicube_core::BufferStore;
use crossterm::{
    cursor, queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Starts every row; raw mode turns off the tty's `\n` -> `\r\n` translation
const ROW_START: &[u8] = b"\r\n";

/// Writes frames as plain bytes to any `Write` sink
pub struct AsciiDisplay<W: Write> {
    out: W,
}

impl<W: Write> AsciiDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Clear the whole screen once before the first frame
    pub fn begin(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), cursor::Hide)?;
        self.out.flush()
    }

    /// Home the cursor and emit the frame row by row.
    ///
    /// Column 0 of every row carries the line break instead of its cell, so
    /// each row shows columns `1..width`.
    pub fn present(&mut self, store: &BufferStore) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0))?;
        for row in store.rows() {
            self.out.write_all(ROW_START)?;
            if let Some(visible) = row.get(1..) {
                self.out.write_all(visible)?;
            }
        }
        self.out.flush()
    }

    /// Put the cursor back and leave the prompt below the last frame
    pub fn finish(&mut self) -> io::Result<()> {
        queue!(self.out, cursor::Show)?;
        self.out.write_all(ROW_START)?;
        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home_sequence() -> Vec<u8> {
        let mut buf = Vec::new();
        queue!(buf, cursor::MoveTo(0, 0)).unwrap();
        buf
    }

    #[test]
    fn test_present_layout() {
        let mut store = BufferStore::with_dimensions(10, 5).unwrap();
        store.write_pixel(0, 0, 1.0, b'X');
        store.write_pixel(1, 0, 1.0, b'A');
        store.write_pixel(9, 4, 1.0, b'F');

        let mut display = AsciiDisplay::new(Vec::new());
        display.present(&store).unwrap();
        let out = display.into_inner();

        let home = home_sequence();
        assert!(out.starts_with(&home));

        let body = &out[home.len()..];
        let rows: Vec<&[u8]> = body.split(|&b| b == b'\n').collect();
        // Leading break yields an empty first chunk, then one chunk per row
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], b"\r");
        assert_eq!(rows[1], b"A        \r");
        assert_eq!(rows[5], b"        F");
        // Column 0 is replaced by the line break
        assert!(!body.contains(&b'X'));
    }

    #[test]
    fn test_present_size() {
        let store = BufferStore::with_dimensions(80, 22).unwrap();
        let mut display = AsciiDisplay::new(Vec::new());
        display.present(&store).unwrap();
        let body_len = display.get_ref().len() - home_sequence().len();
        assert_eq!(body_len, 22 * (ROW_START.len() + 79));
    }

    #[test]
    fn test_begin_clears_screen() {
        let mut display = AsciiDisplay::new(Vec::new());
        display.begin().unwrap();
        let out = String::from_utf8(display.into_inner()).unwrap();
        assert!(out.contains("\x1b[2J"));
    }
}
