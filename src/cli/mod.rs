pub mod chronometer;
pub mod configuration;
pub mod error;
pub mod hex;
pub mod logger;
pub mod run;

pub use configuration::Configuration;
pub use error::Error;
pub use logger::Logger;
pub use run::run;
