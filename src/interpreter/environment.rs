use log::debug;

use crate::{
    ast::Statement,
    config::Config,
    error::LctResult,
    interpreter::{
        builder::StatementBuilder,
        evaluator::comprehension::ComprehensionEngine,
        parser::core::parse,
        sink::OutputSink,
        value::store::ListStore,
    },
};

/// Whether the environment is currently running a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Waiting for the next statement.
    #[default]
    Idle,
    /// A statement is being executed.
    Evaluating,
}

/// An interactive session.
///
/// Owns the list store for its whole lifetime and executes statements against
/// it one at a time. A statement that fails leaves the store as it was.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    store:   ListStore,
    builder: StatementBuilder,
    state:   State,
}

impl Environment {
    /// Creates a session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session using `config`.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { store:   ListStore::new(),
               builder: StatementBuilder::new(config.range_limits),
               state:   State::Idle, }
    }

    /// The lists defined so far.
    #[must_use]
    pub const fn store(&self) -> &ListStore {
        &self.store
    }

    /// The current execution state.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Executes one statement, reporting errors against line 1.
    ///
    /// # Example
    /// ```
    /// use lct::interpreter::{environment::Environment, sink::CaptureSink};
    ///
    /// let mut env = Environment::new();
    /// let mut sink = CaptureSink::new();
    ///
    /// env.execute("N = [1,2,3,4,5]", &mut sink).unwrap();
    /// env.execute("R = [n * 10 | n in N | n > 2]", &mut sink).unwrap();
    /// env.execute("show", &mut sink).unwrap();
    ///
    /// assert_eq!(sink.joined(), "N = [1,2,3,4,5]\nR = [30,40,50]\n");
    /// ```
    pub fn execute(&mut self, input: &str, sink: &mut dyn OutputSink) -> LctResult<()> {
        self.execute_line(input, 1, sink)
    }

    /// Executes one statement that starts on `line`.
    ///
    /// Blank input and comments are accepted and do nothing.
    pub fn execute_line(&mut self,
                        input: &str,
                        line: usize,
                        sink: &mut dyn OutputSink)
                        -> LctResult<()> {
        self.state = State::Evaluating;
        let result = self.run(input, line, sink);
        self.state = State::Idle;
        result
    }

    /// Executes a multi-line script, one statement per line.
    ///
    /// Stops at the first failing statement; its error carries the 1-based
    /// line it came from. Statements before it keep their effect.
    ///
    /// # Example
    /// ```
    /// use lct::interpreter::{environment::Environment, sink::CaptureSink};
    ///
    /// let mut env = Environment::new();
    /// let mut sink = CaptureSink::new();
    ///
    /// let error = env.execute_script("A = [1]\n\nB = [1 / 0 | x in A]\nshow", &mut sink)
    ///                .unwrap_err();
    /// assert_eq!(error.line(), 3);
    /// assert_eq!(env.store().len(), 1);
    /// assert!(sink.blocks().is_empty());
    /// ```
    pub fn execute_script(&mut self, source: &str, sink: &mut dyn OutputSink) -> LctResult<()> {
        for (index, text) in source.lines().enumerate() {
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }
            self.execute_line(text, index + 1, sink)?;
        }
        Ok(())
    }

    fn run(&mut self, input: &str, line: usize, sink: &mut dyn OutputSink) -> LctResult<()> {
        let Some(node) = parse(input, line)? else {
            return Ok(());
        };

        match self.builder.build(&node)? {
            Statement::Definitions(lists) => {
                for list in lists {
                    debug!("line {line}: defining '{}'", list.name);
                    self.store.add_or_replace(list);
                }
            },
            Statement::Show { .. } => {
                debug!("line {line}: showing {} lists", self.store.len());
                sink.write(&self.store.render());
            },
            Statement::Comprehension(comprehension) => {
                let list = ComprehensionEngine::new(&self.store).run(&comprehension)?;
                debug!("line {line}: registering '{}'", list.name);
                self.store.add_or_replace(list);
            },
        }
        Ok(())
    }
}
