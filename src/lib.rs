pub mod config;
pub mod error;
pub mod summary;
pub mod timestamp;

pub mod commands {
    pub mod backup;
}
