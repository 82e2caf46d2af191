/*!
# Rust Terminal Module

Interactive front end: a line editor wired to one `Runtime`. This layer
only shuttles bytes; everything the machine prints comes back from
`Runtime::enter` and is echoed here, with diagnostic lines in bold.

*/

extern crate ansi_term;
extern crate env_logger;
extern crate linefeed;

use crate::mach::Runtime;
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};

pub fn main() {
    env_logger::init();
    if let Err(error) = main_loop() {
        eprintln!("{}", error);
    }
}

fn main_loop() -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    let interface = Interface::new("forth")?;
    interface.set_report_signal(Signal::Interrupt, true);
    interface.set_prompt("")?;
    writeln!(interface, "Simple Forth Interpreter")?;

    loop {
        match interface.read_line()? {
            ReadResult::Input(line) => {
                let output = runtime.enter(&line);
                write_output(&interface, &output)?;
                writeln!(interface, " ok")?;
                if !line.trim().is_empty() {
                    interface.add_history_unique(line);
                }
            }
            ReadResult::Signal(Signal::Interrupt) => {
                // Abandon any half-open definition with the input line.
                interface.set_buffer("")?;
                runtime.interrupt();
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        }
    }
    Ok(())
}

fn write_output(interface: &Interface<DefaultTerminal>, output: &str) -> std::io::Result<()> {
    for line in output.split_inclusive('\n') {
        if line.starts_with("Error:") {
            let text = line.trim_end_matches('\n');
            writeln!(interface, "{}", Style::new().bold().paint(text))?;
        } else {
            write!(interface, "{}", line)?;
        }
    }
    Ok(())
}
