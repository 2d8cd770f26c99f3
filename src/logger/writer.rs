//! Log writer module
//!
//! The dispatcher writes through a `LogSink` so the destination can be
//! swapped without touching response generation.

/// Destination for access and error lines
pub trait LogSink: Send + Sync {
    fn write_access(&self, message: &str);
    fn write_error(&self, message: &str);
}

/// Access lines to stdout, errors to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_access(&self, message: &str) {
        println!("{message}");
    }

    fn write_error(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Collects lines in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    pub access: std::sync::Mutex<Vec<String>>,
    pub errors: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MemorySink {
    pub fn access_lines(&self) -> Vec<String> {
        self.access.lock().unwrap().clone()
    }

    pub fn error_lines(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl LogSink for MemorySink {
    fn write_access(&self, message: &str) {
        self.access.lock().unwrap().push(message.to_string());
    }

    fn write_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
