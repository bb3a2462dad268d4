use core::fmt;

/// Fixed-capacity text buffer for `core::fmt` output.
///
/// Text past the capacity is dropped (cut back to a char boundary) rather
/// than failing the whole write, so a long panic message still shows its
/// beginning.
pub struct MsgBuffer<const BUFF_SIZE: usize> {
    buffer: [u8; BUFF_SIZE],
    used: usize,
    truncated: bool,
}

impl<const BUFF_SIZE: usize> Default for MsgBuffer<BUFF_SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const BUFF_SIZE: usize> MsgBuffer<BUFF_SIZE> {
    pub const fn new() -> Self {
        MsgBuffer {
            buffer: [0; BUFF_SIZE],
            used: 0,
            truncated: false,
        }
    }

    pub fn as_str(&self) -> &str {
        // only whole chars are ever copied in
        core::str::from_utf8(&self.buffer[..self.used]).unwrap_or("")
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Formats `args` from the start of the buffer.
    pub fn format(&mut self, args: fmt::Arguments) -> &str {
        self.used = 0;
        self.truncated = false;
        // our write_str never fails, only the formatted value can
        let _ = fmt::write(self, args);
        self.as_str()
    }
}

impl<const BUFF_SIZE: usize> fmt::Write for MsgBuffer<BUFF_SIZE> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = BUFF_SIZE - self.used;

        let mut len = s.len();
        if len > remaining {
            self.truncated = true;
            len = remaining;
            while !s.is_char_boundary(len) {
                len -= 1;
            }
        }

        self.buffer[self.used..self.used + len].copy_from_slice(&s.as_bytes()[..len]);
        self.used += len;

        Ok(())
    }
}
