//! Infrastructure layer for CaseMS.
//!
//! In-memory repositories, session cache backends, notifiers, bundled seed
//! data and configuration loading.

pub mod config_service;
pub mod memory_case_repository;
pub mod memory_category_repository;
pub mod memory_comment_repository;
pub mod notifier;
pub mod paths;
pub mod seed;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::memory_case_repository::MemoryCaseRepository;
pub use crate::memory_category_repository::MemoryCategoryRepository;
pub use crate::memory_comment_repository::MemoryCommentRepository;
pub use crate::notifier::{RecordingNotifier, TracingNotifier};
pub use crate::paths::{CasemsPaths, ServiceType};
pub use crate::seed::SeedData;
pub use crate::storage::{FileSessionCache, MemorySessionCache};
