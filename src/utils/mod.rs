pub mod html_files;
pub mod logging;
