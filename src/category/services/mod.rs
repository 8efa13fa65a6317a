//! Application services for category orchestration.

mod categories;

pub use categories::{
    CategoryService, CategoryServiceError, CategoryServiceResult, CreateCategoryRequest,
};
