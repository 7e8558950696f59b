//! Models module

mod request;

pub use request::SampleRequest;
pub use wortkarte::WordEntry;
