mod header;
mod home;
mod results;

pub use header::Header;
pub use home::Home;
pub use results::Results;
