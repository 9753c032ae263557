mod csv_loader;
mod twse;

pub use csv_loader::load_records;
pub use twse::TwseClient;
