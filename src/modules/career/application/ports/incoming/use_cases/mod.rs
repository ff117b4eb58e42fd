mod career_fact;

pub use career_fact::{CareerFactError, CareerFactUseCase};
