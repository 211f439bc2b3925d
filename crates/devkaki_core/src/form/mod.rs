//! Create/edit form input resolution.

pub mod task_form;
