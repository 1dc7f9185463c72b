/// Classification of a failure, independent of the stage it happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or blank credential.
    Configuration,
    /// The remote API answered `429 Too Many Requests`.
    RateLimit,
    /// Non-2xx response or transport failure (`status` is `None` for the latter).
    Remote { status: Option<u16> },
    /// A payload that is not a font catalog.
    Parse,
    /// Local snapshot I/O.
    Storage,
}

type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

pub struct AppError {
    kind: ErrorKind,
    exit_code: u8,
    message: String,
    cause: Option<Cause>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            exit_code: 1,
            message: message.into(),
            cause: None,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Attach the underlying error; it is reported as the diagnostic trace.
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn with_exit_code(mut self, exit_code: u8) -> Self {
        self.exit_code = exit_code;
        self
    }

    /// Prefix the message with the context of the failing step.
    pub fn context(mut self, context: impl std::fmt::Display) -> Self {
        self.message = format!("{context}: {}", self.message);
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the chain of underlying causes, outermost first.
    ///
    /// Returns `None` when the error was raised directly (no cause attached).
    pub fn trace(&self) -> Option<String> {
        let mut lines = Vec::new();
        let mut next = std::error::Error::source(self);
        while let Some(err) = next {
            lines.push(format!("{}: {err}", lines.len()));
            next = err.source();
        }
        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .field("cause", &self.cause)
            .finish()
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_lists_cause_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = AppError::storage("Failed to open catalog").with_cause(io);
        assert_eq!(err.trace().as_deref(), Some("0: no such file"));
    }

    #[test]
    fn trace_is_none_without_cause() {
        assert!(AppError::configuration("missing key").trace().is_none());
    }

    #[test]
    fn context_prefixes_message() {
        let err = AppError::parse("bad json")
            .context("Failed to fetch data")
            .with_exit_code(2);
        assert_eq!(err.to_string(), "Failed to fetch data: bad json");
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
