mod career_fact_service;

pub use career_fact_service::CareerFactService;
