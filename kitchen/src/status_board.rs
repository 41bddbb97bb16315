//! Where the kitchen shows how the order is going

use tracing::info;

pub trait StatusBoard {
    fn show(&mut self, line: &str);
}

/// Prints every line on stdout
#[derive(Debug, Default)]
pub struct ConsoleBoard;

impl StatusBoard for ConsoleBoard {
    fn show(&mut self, line: &str) {
        println!("{}", line);
    }
}

impl StatusBoard for Vec<String> {
    fn show(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

impl<B: StatusBoard + ?Sized> StatusBoard for &mut B {
    fn show(&mut self, line: &str) {
        (**self).show(line);
    }
}

/// Shows `line` on the board and records it as a tracing event
pub(crate) fn announce<B: StatusBoard + ?Sized>(board: &mut B, line: &str) {
    info!(target: "kitchen::board", "{}", line);
    board.show(line);
}
