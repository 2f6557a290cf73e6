//! 交互式运行器：逐行生成、试听、保留或重录。
//!
//! # Interactive Runner
//!
//! Drives one guided session over a parsed script:
//!
//! ```text
//! Prompting --skip--> next line
//! Prompting --edit--> Prompting (new text, this run only)
//! Prompting --generate--> quota check --> synthesize --> write --> play --> Reviewing
//! Reviewing --keep--> next line
//! Reviewing --discard--> Prompting (same line)
//! ```
//!
//! Quota is re-fetched before every generation attempt. Any provider failure,
//! insufficient quota or unbound speaker ends the run with an error carrying the
//! line to resume from.
//!
//! The runner does no terminal I/O of its own. Operator input comes through a
//! [`Prompter`] and progress goes out as [`RunEvent`]s to an [`EventSink`].

mod events;
mod prompt;
mod session;

pub use events::{EventSink, RunEvent};
pub use prompt::{parse_continue, Action, Prompter, Review};
pub use session::{InteractiveRunner, InteractiveRunnerBuilder, RunSummary};
