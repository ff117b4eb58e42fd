pub mod career_use_cases;
pub mod domain;
pub mod forms;
pub mod ports;
pub mod service;
