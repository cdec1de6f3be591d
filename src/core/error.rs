use thiserror::Error;

/// Why a page component could not set itself up.
///
/// None of these are fatal: the component stays inert (or falls back to a
/// static presentation) and the rest of the page carries on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("{0} is not supported")]
    Unsupported(&'static str),
    #[error("js error: {0}")]
    Js(String),
}

impl SetupError {
    /// Log at a level matching how surprising the failure is.
    pub fn report(&self, component: &str) {
        match self {
            SetupError::MissingElement(_) => log::debug!("[{}] skipped: {}", component, self),
            SetupError::Unsupported(_) => log::info!("[{}] fallback: {}", component, self),
            SetupError::Js(_) => log::warn!("[{}] {}", component, self),
        }
    }
}

/// Run a component's setup and swallow (but report) its failure.
pub fn guard<T>(component: &str, result: Result<T, SetupError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            e.report(component);
            None
        }
    }
}
