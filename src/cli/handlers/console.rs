use std::io::{self, BufRead, Write};

use crate::controller::{Interaction, Notice, NoticeKind};

/// Terminal interaction for the CLI: notices go to stdout (warnings to
/// stderr), questions are answered on stdin.
pub struct ConsoleInteraction<R, W, E> {
    input: R,
    out: W,
    err: E,
    /// Prompt answer given on the command line
    pub reply: Option<String>,
    /// Answer yes to every confirmation
    pub assume_yes: bool,
    /// Keep stdout clean for JSON; warnings still reach stderr
    pub quiet: bool,
}

impl ConsoleInteraction<io::StdinLock<'static>, io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        ConsoleInteraction::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> ConsoleInteraction<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        ConsoleInteraction {
            input,
            out,
            err,
            reply: None,
            assume_yes: false,
            quiet: false,
        }
    }

    /// Read one line; `None` at end of input.
    fn read_answer(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
        }
    }
}

impl<R: BufRead, W: Write, E: Write> Interaction for ConsoleInteraction<R, W, E> {
    fn notify(&mut self, notice: Notice) {
        let _ = match notice.kind {
            NoticeKind::Warning => writeln!(self.err, "warning: {}", notice.message),
            _ if self.quiet => Ok(()),
            _ => writeln!(self.out, "{}", notice.message),
        };
    }

    fn confirm(&mut self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let _ = write!(self.err, "{} [y/N] ", question);
        let _ = self.err.flush();
        matches!(
            self.read_answer().map(|a| a.trim().to_ascii_lowercase()).as_deref(),
            Some("y" | "yes")
        )
    }

    /// An empty line or end of input cancels, keeping the current text.
    fn prompt(&mut self, message: &str, initial: &str) -> Option<String> {
        if let Some(reply) = self.reply.take() {
            return Some(reply);
        }
        let _ = writeln!(self.err, "{} (empty to keep)", message);
        let _ = write!(self.err, "[{}] > ", initial);
        let _ = self.err.flush();
        self.read_answer().filter(|a| !a.is_empty())
    }
}
