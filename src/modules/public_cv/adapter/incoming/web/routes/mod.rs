mod get_public_cv;

pub use get_public_cv::{__path_get_public_cv_handler, get_public_cv_handler};
