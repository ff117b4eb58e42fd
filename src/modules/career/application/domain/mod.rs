pub mod career_record;
pub mod entities;

pub use career_record::CareerRecord;
