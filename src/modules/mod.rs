pub mod movies;
pub mod shows;
pub mod users;
