pub mod generate;
pub mod report;
