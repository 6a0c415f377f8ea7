mod io;
mod runner;

pub use io::{open_input, open_output};
pub use runner::{run, RunOptions, RunStats};
