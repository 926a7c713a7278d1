use crate::shell::start_shell;

mod disk;
mod fs;
mod shell;

fn main() {
    start_shell();
}
