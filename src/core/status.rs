// src/core/status.rs
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Neutral,
    Success,
    Error,
}

/// The status display region of the importer.
pub trait StatusSink {
    fn set(&mut self, kind: StatusKind, text: &str);
}

pub struct ConsoleStatus;

impl StatusSink for ConsoleStatus {
    fn set(&mut self, kind: StatusKind, text: &str) {
        match kind {
            StatusKind::Neutral => println!("{}", text.blue()),
            StatusKind::Success => println!("{}", text.green().bold()),
            StatusKind::Error => eprintln!("{}", text.red().bold()),
        }
    }
}
