//! 配额模块：查询账户剩余字符额度并计算文本的字符成本。
//!
//! # Quota Module
//!
//! The provider bills synthesis per character. [`QuotaTracker`] asks the account
//! endpoint for the remaining budget every time it is called; nothing is cached,
//! since other consumers of the same account may spend characters between calls.
//!
//! The up-front [`QuotaSource::cost_of_script`] estimate is informational only.
//! Enforcement happens per line, right before each synthesis request.

mod tracker;

pub use tracker::{QuotaSnapshot, QuotaSource, QuotaTracker, COST_PER_CHARACTER};
