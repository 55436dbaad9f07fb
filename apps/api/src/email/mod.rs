//! Candidate notifications — HTML composition, SMTP dispatch, and the
//! preview/send HTTP surface.

pub mod compose;
pub mod handlers;
pub mod mailer;
