//! 台本解析模块：把对白脚本拆分为按行编号的 speaker/text 记录。
//!
//! # Script Module
//!
//! Splits raw script text into ordered [`ScriptLine`] records. A dialogue line has
//! the form `speaker: text`; everything else (blank lines, comments, stage
//! directions) is skipped, but still counts towards line numbering so that
//! "start from line N" matches what an editor shows.
//!
//! ```rust
//! use autotts::script::Script;
//!
//! let script = Script::parse("Alice: Hello there\n(door slams)\nBob: Hi!");
//! assert_eq!(script.lines().len(), 2);
//! assert_eq!(script.lines()[1].line_number, 3);
//! ```

mod parser;

pub use parser::{parse_lines, parse_start_line, Script, ScriptLine};
