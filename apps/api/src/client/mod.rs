//! Client side of an assessment: the form's local state machine and the
//! multipart transport that submits it.

pub mod session;
pub mod transport;

pub use session::{FormSession, SessionError, Step};
pub use transport::{SubmissionClient, SubmitError};
