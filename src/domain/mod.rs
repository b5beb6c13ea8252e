// Domain model: URI templates and paging helpers

pub mod paging;
pub mod template;

pub use paging::{strip_paging_parameters, PAGING_PARAMETERS};
