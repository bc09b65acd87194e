/// Destination for the text a session produces.
///
/// The environment calls [`OutputSink::write`] once per `show` statement, with
/// the full rendered block.
pub trait OutputSink {
    /// Delivers one block of output.
    fn write(&mut self, text: &str);
}

/// Prints every block to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn write(&mut self, text: &str) {
        print!("{text}");
    }
}

/// Keeps every block in memory.
///
/// # Example
/// ```
/// use lct::interpreter::sink::{CaptureSink, OutputSink};
///
/// let mut sink = CaptureSink::new();
/// sink.write("A = [1]\n");
/// sink.write("B = [2]\n");
///
/// assert_eq!(sink.blocks().len(), 2);
/// assert_eq!(sink.joined(), "A = [1]\nB = [2]\n");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CaptureSink {
    blocks: Vec<String>,
}

impl CaptureSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The blocks written so far, oldest first.
    #[must_use]
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// All blocks concatenated in order.
    #[must_use]
    pub fn joined(&self) -> String {
        self.blocks.concat()
    }

    /// Takes the captured blocks, leaving the sink empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.blocks)
    }
}

impl OutputSink for CaptureSink {
    fn write(&mut self, text: &str) {
        self.blocks.push(text.to_string());
    }
}
