//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod about_repo;
pub mod certification_repo;
pub mod contact_repo;
pub mod education_repo;
pub mod experience_repo;
pub mod gallery_repo;
pub mod homepage_repo;
pub mod settings_repo;
pub mod skill_repo;
pub mod user_repo;

pub use about_repo::AboutRepo;
pub use certification_repo::CertificationRepo;
pub use contact_repo::ContactRepo;
pub use education_repo::EducationRepo;
pub use experience_repo::ExperienceRepo;
pub use gallery_repo::GalleryRepo;
pub use homepage_repo::HomepageRepo;
pub use settings_repo::SettingsRepo;
pub use skill_repo::SkillRepo;
pub use user_repo::UserRepo;
