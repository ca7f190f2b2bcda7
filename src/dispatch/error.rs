// Dispatch error taxonomy
// Every failure is produced at the site that detects it and ends up as an ErrorRecord

use super::controller::HandlerError;
use super::types::ErrorRecord;

/// Failure of a single dispatch attempt
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// No factory registered under the canonical component identifier
    #[error("Component not found")]
    NotFoundComponent { component: String },

    /// The factory exists but refused to build the controller
    #[error("{source}")]
    Instantiation {
        component: String,
        source: HandlerError,
    },

    /// The resolved controller has no operation with this name
    #[error("Method not found")]
    NotFoundMethod { component: String, method: String },

    /// The operation itself reported a failure
    #[error("{0}")]
    InvocationFailure(HandlerError),

    /// Neither an explicit callback nor a default route was available
    #[error("No callback function found")]
    NoCallback,
}

impl DispatchError {
    pub const fn status(&self) -> u16 {
        match self {
            Self::NotFoundComponent { .. } | Self::NotFoundMethod { .. } | Self::NoCallback => 404,
            Self::Instantiation { source, .. } => source.status,
            Self::InvocationFailure(err) => err.status,
        }
    }

    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord::new(self.status(), self.to_string())
    }
}

impl From<DispatchError> for ErrorRecord {
    fn from(err: DispatchError) -> Self {
        err.to_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        let err = DispatchError::NotFoundComponent {
            component: "Ghost.Controllers.GhostController".to_string(),
        };
        assert_eq!(err.to_record(), ErrorRecord::new(404, "Component not found"));

        let err = DispatchError::NotFoundMethod {
            component: "Widgets.Controllers.WidgetsController".to_string(),
            method: "fly".to_string(),
        };
        assert_eq!(err.to_record(), ErrorRecord::new(404, "Method not found"));

        assert_eq!(
            DispatchError::NoCallback.to_record(),
            ErrorRecord::new(404, "No callback function found")
        );
    }

    #[test]
    fn test_handler_failures_keep_status_and_message() {
        let err = DispatchError::InvocationFailure(HandlerError::new(409, "Already purged"));
        assert_eq!(err.to_record(), ErrorRecord::new(409, "Already purged"));

        let err = DispatchError::Instantiation {
            component: "Db.Controllers.DbController".to_string(),
            source: HandlerError::internal("connection refused"),
        };
        assert_eq!(ErrorRecord::from(err), ErrorRecord::new(500, "connection refused"));
    }
}
