pub mod not_found;
pub mod section;

pub use not_found::NotFound;
pub use section::SectionPage;
