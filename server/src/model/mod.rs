pub mod note;
pub mod response;
