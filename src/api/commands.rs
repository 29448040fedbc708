pub mod system;
pub mod translator;
