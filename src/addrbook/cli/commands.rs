//! # Session Loop
//!
//! `run()` resolves the context, loads the snapshot, and drives the read-eval loop
//! until `close`/`exit` or end of input. The loop itself is generic over its reader
//! and writer so it can be driven from tests without a terminal.
//!
//! Command errors are rendered and the loop continues. Only startup and the final
//! save can fail the process.

use super::logging;
use super::render::{render_error, render_result};
use super::setup::Cli;
use addrbook::api::AddressBookApi;
use addrbook::commands::parse_input;
use addrbook::error::Result;
use addrbook::init::{initialize, Overrides};
use addrbook::store::SnapshotStore;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, error};

pub const BANNER: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = initialize(&Overrides {
        home: cli.home,
        file: cli.file,
    })?;
    debug!(home = %ctx.home.display(), "session starting");

    let mut session = SaveOnDrop::new(ctx.api);
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl(&mut session.api, stdin.lock(), stdout.lock())?;
    session.finish()
}

/// Writes the snapshot when dropped, unless [`finish`](Self::finish) already did.
struct SaveOnDrop<S: SnapshotStore> {
    api: AddressBookApi<S>,
    saved: bool,
}

impl<S: SnapshotStore> SaveOnDrop<S> {
    fn new(api: AddressBookApi<S>) -> Self {
        Self { api, saved: false }
    }

    fn finish(mut self) -> Result<()> {
        self.saved = true;
        self.api.save()
    }
}

impl<S: SnapshotStore> Drop for SaveOnDrop<S> {
    fn drop(&mut self) {
        if self.saved {
            return;
        }
        self.saved = true;
        match self.api.save() {
            Ok(()) => debug!("snapshot saved on early exit"),
            Err(e) => error!(error = %e, "failed to save snapshot on early exit"),
        }
    }
}

/// Returns on `close`/`exit` or end of input. Only I/O failures on the streams
/// themselves propagate.
fn repl<S, R, W>(api: &mut AddressBookApi<S>, mut input: R, mut output: W) -> Result<()>
where
    S: SnapshotStore,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", BANNER)?;
    let mut raw = Vec::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            debug!("end of input");
            writeln!(output)?;
            break;
        }
        let line = String::from_utf8_lossy(&raw);

        let Some((command, args)) = parse_input(&line) else {
            continue;
        };

        match api.execute(&command, &args) {
            Ok(result) => {
                for rendered in render_result(&result) {
                    writeln!(output, "{}", rendered)?;
                }
                if result.exit {
                    break;
                }
            }
            Err(e) => {
                debug!(%command, error = %e, "command failed");
                writeln!(output, "{}", render_error(&e))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrbook::book::DEFAULT_WINDOW_DAYS;
    use addrbook::store::fs::FileStore;
    use addrbook::store::memory::InMemoryStore;
    use std::io::Cursor;

    fn session(input: &str) -> (AddressBookApi<InMemoryStore>, String) {
        let mut api = AddressBookApi::open(InMemoryStore::new(), DEFAULT_WINDOW_DAYS).unwrap();
        let mut out = Vec::new();
        repl(&mut api, Cursor::new(input), &mut out).unwrap();
        (api, String::from_utf8(out).unwrap())
    }

    #[test]
    fn banner_prompt_and_farewell() {
        let (_, out) = session("hello\nexit\n");
        assert!(out.starts_with(BANNER));
        assert!(out.contains(PROMPT));
        assert!(out.contains("How can I help you?"));
        assert!(out.contains("Good bye!"));
    }

    #[test]
    fn stops_reading_after_exit() {
        let (api, _) = session("close\nadd alice 1234567890\n");
        assert!(api.book().is_empty());
    }

    #[test]
    fn eof_ends_the_session() {
        let (api, out) = session("add alice 1234567890\n");
        assert!(out.contains("Contact added."));
        assert!(api.book().find("alice").is_some());
    }

    #[test]
    fn invalid_utf8_line_does_not_end_the_session() {
        let mut api = AddressBookApi::open(InMemoryStore::new(), DEFAULT_WINDOW_DAYS).unwrap();
        let mut input = b"add \xff\xfe 1234567890\n".to_vec();
        input.extend_from_slice(b"add bob 1234567890\nexit\n");
        let mut out = Vec::new();
        repl(&mut api, Cursor::new(input), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Good bye!"));
        assert!(api.book().find("bob").is_some());
    }

    #[test]
    fn blank_lines_and_errors_do_not_stop_the_loop() {
        let (api, out) = session("\n   \nphone ghost\nadd bob 123\nadd bob 1234567890\nexit\n");
        assert!(out.contains("Contact ghost not found."));
        assert!(out.contains("Contact added."));
        assert_eq!(api.book().find("bob").unwrap().phones().len(), 1);
    }

    fn file_api(dir: &tempfile::TempDir) -> AddressBookApi<FileStore> {
        AddressBookApi::open(FileStore::new(dir.path().join("book.json")), DEFAULT_WINDOW_DAYS)
            .unwrap()
    }

    #[test]
    fn guard_saves_when_dropped() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut guard = SaveOnDrop::new(file_api(&dir));
        let mut out = Vec::new();
        repl(&mut guard.api, Cursor::new("add alice 1234567890\n"), &mut out).unwrap();
        drop(guard);

        let reopened = file_api(&dir);
        assert!(reopened.book().find("alice").is_some());
    }

    #[test]
    fn guard_saves_when_unwinding() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        let outcome = std::panic::catch_unwind(|| {
            let mut guard = SaveOnDrop::new(
                AddressBookApi::open(FileStore::new(path.clone()), DEFAULT_WINDOW_DAYS).unwrap(),
            );
            let mut out = Vec::new();
            repl(&mut guard.api, Cursor::new("add bob 1111111111\n"), &mut out).unwrap();
            panic!("boom");
        });
        assert!(outcome.is_err());

        let reopened = file_api(&dir);
        assert!(reopened.book().find("bob").is_some());
    }

    #[test]
    fn finish_writes_snapshot() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut guard = SaveOnDrop::new(file_api(&dir));
        let mut out = Vec::new();
        repl(&mut guard.api, Cursor::new("add carol 2222222222\nexit\n"), &mut out).unwrap();
        guard.finish().unwrap();

        assert!(dir.path().join("book.json").exists());
        assert!(file_api(&dir).book().find("carol").is_some());
    }
}
