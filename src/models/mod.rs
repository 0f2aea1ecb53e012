pub mod question;

pub use question::{ExtractionOutcome, QuestionRecord, UNKNOWN_ANSWER};
