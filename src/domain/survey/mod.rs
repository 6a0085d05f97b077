//! Survey domain module.
//!
//! Read-only input records for analytics: question definitions, submitted
//! responses and the answers inside them.

mod answer;
mod question;
mod response;

pub use answer::Answer;
pub use question::{Question, QuestionType};
pub use response::Response;
