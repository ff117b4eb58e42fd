mod save_response;

pub use save_response::{save_error_response, NotFoundBody};
