use std::path::PathBuf;

/// Where the script to run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    /// Source text given directly on the command line.
    Inline(String),
    /// A file to read the source text from.
    File(PathBuf),
    /// Read statements interactively from standard input.
    Repl,
}

/// Settings for one invocation of the interpreter binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the script comes from.
    pub source:      ScriptSource,
    /// Print every token before parsing.
    pub dump_tokens: bool,
    /// Print the parsed statements before running them.
    pub dump_ast:    bool,
    /// Print the variable table after running.
    pub dump_vars:   bool,
    /// Number of `-v` flags given.
    pub verbosity:   u8,
}

impl Config {
    /// Creates a configuration with every dump disabled.
    #[must_use]
    pub const fn new(source: ScriptSource) -> Self {
        Self { source,
               dump_tokens: false,
               dump_ast: false,
               dump_vars: false,
               verbosity: 0 }
    }

    /// The log filter used when `RUST_LOG` is unset.
    ///
    /// # Example
    /// ```
    /// use tinyscript::config::{Config, ScriptSource};
    ///
    /// let mut config = Config::new(ScriptSource::Repl);
    /// assert_eq!(config.log_directive(), "warn");
    ///
    /// config.verbosity = 2;
    /// assert_eq!(config.log_directive(), "trace");
    /// ```
    #[must_use]
    pub const fn log_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
