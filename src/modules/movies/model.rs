pub use marquee_models::movies::{Movie, MovieDto};
