pub mod academic_products;
pub mod completed_courses;
pub mod garage_sale_items;
pub mod recognitions;
pub mod work_experiences;
pub mod work_products;
