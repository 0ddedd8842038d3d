//! In-memory repository implementations for testing and development.

mod career;
mod games;
mod state;

pub use career::InMemoryCareerRepository;
pub use games::InMemoryGameRepository;
pub use state::InMemoryStateRepo;
