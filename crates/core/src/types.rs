/// Catalog primary keys (films, genres, showtimes).
pub type DbId = i64;
