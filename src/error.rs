use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "config.stability", "voices.Narrator")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected range, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "voices", "subscription", "text_to_speech")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for autotts.
///
/// Everything except [`Error::ConfigMissing`] is fatal to a run: the caller reports
/// it (with [`Error::resume_line`] when known) and the operator relaunches.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Provider unavailable: {message}{}", format_context(.context))]
    ProviderUnavailable {
        message: String,
        context: ErrorContext,
    },

    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Provider error: HTTP {status}: {}", format_provider_detail(.body, .hint))]
    Provider {
        status: u16,
        body: String,
        hint: Option<String>,
    },

    #[error("Unknown voice: '{reference}' matches no voice ID or name")]
    UnknownVoice { reference: String },

    #[error("Speaker '{speaker}' on line {line} has no voice bound in the configuration")]
    UnboundSpeaker { speaker: String, line: usize },

    #[error("Not enough characters left for line {line}: costs {cost}, {remaining} remaining")]
    InsufficientQuota {
        line: usize,
        cost: u64,
        remaining: u64,
    },

    #[error("Configuration file not found: {path}")]
    ConfigMissing { path: String },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("No .txt script file found in {dir}")]
    ScriptNotFound { dir: String },

    #[error("Invalid start line '{input}': {reason}")]
    InvalidStartLine { input: String, reason: String },

    /// A fatal failure while working on one script line.
    #[error("Line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

fn format_provider_detail(body: &str, hint: &Option<String>) -> String {
    hint.clone().unwrap_or_else(|| body.to_string())
}

impl Error {
    /// Create a provider-unavailable error with structured context
    pub fn unavailable_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::ProviderUnavailable {
            message: msg.into(),
            context,
        }
    }

    /// Create a configuration error without context
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn invalid_start_line(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidStartLine {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Tie this error to a script line, unless it already names one.
    pub fn at_line(self, line: usize) -> Self {
        if self.resume_line().is_some() {
            self
        } else {
            Error::AtLine {
                line,
                source: Box::new(self),
            }
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::ProviderUnavailable { context, .. } | Error::Configuration { context, .. } => {
                Some(context)
            }
            Error::AtLine { source, .. } => source.context(),
            _ => None,
        }
    }

    /// True for failures talking to the remote service (transport, decoding or non-OK status).
    pub fn is_provider_failure(&self) -> bool {
        match self {
            Error::AtLine { source, .. } => source.is_provider_failure(),
            other => matches!(
                other,
                Error::ProviderUnavailable { .. } | Error::Decode { .. } | Error::Provider { .. }
            ),
        }
    }

    /// Script line the operator should resume from, when the error is tied to one.
    pub fn resume_line(&self) -> Option<usize> {
        match self {
            Error::InsufficientQuota { line, .. }
            | Error::UnboundSpeaker { line, .. }
            | Error::AtLine { line, .. } => Some(*line),
            _ => None,
        }
    }
}
