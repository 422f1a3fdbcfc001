mod report;
pub mod utils;
