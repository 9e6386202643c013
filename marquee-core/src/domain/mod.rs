pub mod references;
pub mod validation;
pub mod video;
