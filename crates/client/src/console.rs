//! Terminal narration and menus.
//!
//! One [`Console`] serves as both the encounter's [`Reporter`] and its
//! [`InputProvider`]. Clones share the same reader and writer, so the two
//! roles never fight over stdin.
use std::cell::RefCell;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::rc::Rc;

use encounter_core::{Choice, InputProvider, Reporter};

const MINOR_RULE: &str = "- - - - - - - - - -";
const MAJOR_RULE: &str = "* * * * * * * * * *";

struct Terminal<R, W> {
    reader: R,
    writer: W,
    pause: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    fn framed(&mut self, rule: &str, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{rule}")?;
        writeln!(self.writer, "{message}")?;
        writeln!(self.writer, "{rule}")?;
        self.writer.flush()?;
        if self.pause {
            self.read_line()?;
        }
        Ok(())
    }

    fn menu(&mut self, prompt: &str, options: &[Choice]) -> io::Result<String> {
        writeln!(self.writer, "{prompt}")?;
        for (index, option) in options.iter().enumerate() {
            if option.detail.is_empty() {
                writeln!(self.writer, "{}.\t{}", index + 1, option.label)?;
            } else {
                writeln!(self.writer, "{}.\t{} - {}", index + 1, option.label, option.detail)?;
            }
        }
        write!(self.writer, "> ")?;
        self.writer.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line)
    }
}

/// Shared handle to a terminal.
pub struct Console<R, W> {
    inner: Rc<RefCell<Terminal<R, W>>>,
}

impl<R, W> Clone for Console<R, W> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio(pause: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), pause)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W, pause: bool) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Terminal {
                reader,
                writer,
                pause,
            })),
        }
    }
}

impl<R: BufRead, W: Write> Reporter for Console<R, W> {
    fn report(&mut self, message: &str) {
        if let Err(error) = self.inner.borrow_mut().framed(MINOR_RULE, message) {
            tracing::warn!(%error, "failed to write report");
        }
    }

    fn major_report(&mut self, message: &str) {
        if let Err(error) = self.inner.borrow_mut().framed(MAJOR_RULE, message) {
            tracing::warn!(%error, "failed to write report");
        }
    }
}

impl<R: BufRead, W: Write> InputProvider for Console<R, W> {
    /// A closed or broken stdin answers with an empty line, which selects the
    /// first option.
    fn choose(&mut self, prompt: &str, options: &[Choice]) -> String {
        match self.inner.borrow_mut().menu(prompt, options) {
            Ok(answer) => answer,
            Err(error) => {
                tracing::warn!(%error, "failed to read answer");
                String::new()
            }
        }
    }
}
