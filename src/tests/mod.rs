// Shared fakes for the browser seams
pub mod common;
