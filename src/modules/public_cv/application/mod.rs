pub mod domain;
pub mod ports;
pub mod public_cv_use_cases;
pub mod service;
