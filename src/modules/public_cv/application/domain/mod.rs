pub mod public_cv;

pub use public_cv::PublicCv;
