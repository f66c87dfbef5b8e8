mod report;
mod shared;

pub(crate) use report::{handle_languages, handle_report, handle_topics};
