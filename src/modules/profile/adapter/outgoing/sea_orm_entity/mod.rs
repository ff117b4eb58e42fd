pub mod profiles;
pub mod section_visibilities;
