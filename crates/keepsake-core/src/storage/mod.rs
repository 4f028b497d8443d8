mod database;
mod letter_repo;
mod media_repo;

pub use database::Database;
pub use letter_repo::LetterRepository;
pub use media_repo::MediaRepository;
