//! Fixed, parameterized catalog queries.

pub mod film_repo;
pub mod showtime_repo;

pub use film_repo::FilmRepo;
pub use showtime_repo::ShowtimeRepo;
