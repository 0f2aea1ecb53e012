pub mod html_extractor;
pub mod result_writer;
pub mod warn_writer;
pub mod word_exporter;

pub use html_extractor::QuestionExtractor;
pub use result_writer::ResultWriter;
pub use warn_writer::WarnWriter;
pub use word_exporter::WordExporter;
