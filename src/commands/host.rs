use std::io::Write;

/// The process surroundings a command runs in.
///
/// The binary wires this to stdout, stderr and `process::exit`; tests capture everything so a
/// command can be run in-process and its output and exit status inspected.
pub trait Host: Send + Sync {
    /// Destination of the rendered profile or of a JSON error object
    fn output(&mut self) -> impl Write;

    /// Destination of diagnostics and of the console message for an unknown user
    fn error(&mut self) -> impl Write;

    /// End the run with `code`. A capturing host records the code and returns.
    fn exit(&mut self, code: i32);
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct TestHost {
    pub output_buf: Vec<u8>,
    pub error_buf: Vec<u8>,
    pub exit_code: Option<i32>,
}

#[cfg(test)]
impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    pub fn error_text(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

#[cfg(test)]
impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}
