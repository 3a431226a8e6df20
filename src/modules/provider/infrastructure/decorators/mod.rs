pub mod tmdb_artwork_decorator;

pub use tmdb_artwork_decorator::TmdbArtworkDecorator;
