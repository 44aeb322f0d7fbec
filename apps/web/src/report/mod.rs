// Report export: write-only HTML artifact generated from the results page.

pub mod export;
pub mod handlers;
