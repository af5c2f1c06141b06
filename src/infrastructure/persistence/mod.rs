mod in_memory_image_repository;
mod pg_image_repository;
mod pg_pool;

pub use in_memory_image_repository::InMemoryImageRepository;
pub use pg_image_repository::PgImageRepository;
pub use pg_pool::{create_pool, run_migrations};
