mod pg_pool;
mod repositories;

pub use repositories::InMemoryCategoryRepository;
pub use repositories::InMemoryDocumentRepository;
pub use repositories::PgCategoryRepository;
pub use repositories::PgDocumentRepository;

pub use pg_pool::{create_pool, run_migrations};
