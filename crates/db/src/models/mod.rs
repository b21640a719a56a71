pub mod about;
pub mod certification;
pub mod contact;
pub mod education;
pub mod experience;
pub mod gallery;
pub mod homepage;
pub mod settings;
pub mod skill;
pub mod user;
