pub mod admin;
pub mod career;
pub mod multimedia;
pub mod profile;
pub mod public_cv;
