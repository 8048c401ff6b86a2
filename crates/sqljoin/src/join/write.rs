//! Writer adapters.
//!
//! Every write is one fragment: it is prefixed with the delimiter unless the
//! text is still empty. `write!` renders its whole format string first, so one
//! `write!` call is one fragment as well. Writers never carry parameters.

use super::builder::Join;
use crate::error::JoinError;
use std::{fmt, io};

impl fmt::Write for Join {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.is_failed() {
            return Err(fmt::Error);
        }
        self.append(s).map_err(|err| {
            self.latch(err);
            fmt::Error
        })
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        if self.is_failed() {
            return Err(fmt::Error);
        }
        match args.as_str() {
            Some(s) => fmt::Write::write_str(self, s),
            None => {
                let rendered = render(self, args)?;
                fmt::Write::write_str(self, &rendered)
            }
        }
    }
}

/// Byte writer. Each `write` call is one fragment and must be complete UTF-8;
/// anything else latches [`JoinError::InvalidUtf8`].
///
/// Do not wrap a `Join` in `BufWriter` or feed it through `io::copy`: they split
/// or merge writes, which moves delimiters and can cut a multi-byte character
/// in two. Write whole fragments with `write!` or `write_all`.
impl io::Write for Join {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(err) = self.error() {
            return Err(err.clone().into());
        }

        let result = std::str::from_utf8(buf)
            .map_err(JoinError::from)
            .and_then(|text| self.append(text));
        match result {
            Ok(()) => Ok(buf.len()),
            Err(err) => {
                self.latch(err.clone());
                Err(err.into())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        if let Some(err) = self.error() {
            return Err(err.clone().into());
        }
        let rendered = render(self, args).map_err(|_| io::Error::from(JoinError::Render))?;
        io::Write::write(self, rendered.as_bytes()).map(|_| ())
    }
}

/// Render `args` into a local buffer, latching [`JoinError::Render`] on a formatter error.
fn render(join: &mut Join, args: fmt::Arguments<'_>) -> Result<String, fmt::Error> {
    let mut rendered = String::new();
    fmt::Write::write_fmt(&mut rendered, args).inspect_err(|_| join.latch(JoinError::Render))?;
    Ok(rendered)
}
