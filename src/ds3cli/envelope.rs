//! # Output Envelope
//!
//! Every top-level response is exactly one [`Envelope`]:
//!
//! ```json
//! { "status": "OK", "message": "optional note", "data": { "optional": "payload" } }
//! ```
//!
//! `message` and `data` are omitted when absent. The field names and their
//! order are the wire contract consumers rely on.
//!
//! Envelopes are built fluently and carry their payload type, so a renderer
//! never has to go through an untyped value:
//!
//! ```rust
//! use ds3cli::envelope::{Envelope, Status};
//!
//! let empty = Envelope::new(Status::Ok).with_message("You do not have any tapes");
//! assert!(empty.data.is_none());
//!
//! let full = Envelope::ok().with_data(vec!["a", "b"]);
//! assert_eq!(full.data, Some(vec!["a", "b"]));
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = ()> {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl Envelope<()> {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            message: None,
            data: None,
        }
    }

    pub fn ok() -> Self {
        Self::new(Status::Ok)
    }

    pub fn error() -> Self {
        Self::new(Status::Error)
    }
}

impl<T> Envelope<T> {
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attaches the payload, keeping status and message.
    pub fn with_data<U>(self, data: U) -> Envelope<U> {
        Envelope {
            status: self.status,
            message: self.message,
            data: Some(data),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}
