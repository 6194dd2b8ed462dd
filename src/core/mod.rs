//! Core module - creation-time formatting and the two file commands

mod metadata;
mod types;

pub(crate) use metadata::{append_creation_time_to_file_name, copy_creation_time};
pub(crate) use types::{ActiveFile, Feature, Notice};
