pub mod console_writer;

pub use console_writer::ConsoleWriter;
