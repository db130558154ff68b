use thiserror::Error;

/// Failures of the touch-injection facility. All of them are fatal: the
/// program never retries, and touch events already delivered stay delivered.
#[derive(Debug, Error)]
pub enum InjectError {
    #[error("failed to initialize touch injection: access denied (os error {code:#010x})")]
    PermissionDenied { code: i32 },
    #[error("failed to initialize touch injection (os error {code:#010x})")]
    InitFailed { code: i32 },
    #[error("failed to inject {action} (os error {code:#010x})")]
    InjectionFailed { action: &'static str, code: i32 },
    #[error("touch injection is only available on Windows")]
    Unsupported,
}

impl InjectError {
    /// Extra guidance printed after the error line, when there is any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            InjectError::PermissionDenied { .. } => {
                Some("touch injection requires administrative privileges or UI Access")
            }
            _ => None,
        }
    }
}
