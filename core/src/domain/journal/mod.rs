pub mod entities;
pub mod history;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use history::JournalHistory;
pub use ports::*;
pub use value_objects::*;
