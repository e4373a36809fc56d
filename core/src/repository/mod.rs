pub mod file;
pub mod traits;

pub use file::FileConfigRepository;
pub use traits::ConfigRepository;
