pub mod listing;
pub mod preview;
pub mod seeding;
pub mod server;
