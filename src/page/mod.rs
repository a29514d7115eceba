//! Page model: the in-memory stand-in for the browser document

pub mod model;

pub use model::{PageModel, ProfileImage, SectionAnchor, SharedPage, SubmitControl};
