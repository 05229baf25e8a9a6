pub mod article;
pub mod editor;
pub mod guide;
pub mod home;
pub mod not_found;
