pub mod environment;
pub mod relevance;
pub mod render;
pub mod resume;
pub mod utils;
pub mod web;

pub use environment::EnvironmentConfig;
pub use resume::ResumeRecord;
pub use web::start_web_server;
