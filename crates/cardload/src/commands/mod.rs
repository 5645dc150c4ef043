pub mod import;
pub mod labels;
pub mod lists;
pub mod validate;
