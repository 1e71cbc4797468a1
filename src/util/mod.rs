pub mod shell;

pub use shell::{InteractiveRunner, ProcessRunner};
