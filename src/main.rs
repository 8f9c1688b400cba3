//! Native REPL over the same session the browser terminal drives. Handy for
//! poking at the virtual shell without a frontend.

use codebench::session::{Session, Submission};
use std::io::{self, BufRead, Write};

fn print_new_entries(session: &Session, from: usize) -> usize {
    for entry in &session.scrollback()[from..] {
        if !entry.output.is_empty() {
            println!("{}", entry.output);
        }
    }
    session.scrollback().len()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut session = Session::new();
    let mut printed = print_new_entries(&session, 0);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("{} ", session.prompt());
        let _ = stdout.flush();

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => break, // eof
            Ok(_) => {}
        }

        match session.submit(&input) {
            Submission::Done => {}
            Submission::Busy => continue,
            Submission::Pending(pending) => {
                std::thread::sleep(pending.delay);
                session.deliver(pending);
            }
        }
        printed = print_new_entries(&session, printed);

        if input.trim() == "exit" {
            break;
        }
    }
}
