pub mod memory;
pub mod todo;
pub mod user;

pub use memory::InMemoryStore;
pub use todo::PostgresTodoRepository;
pub use user::PostgresUserRepository;
