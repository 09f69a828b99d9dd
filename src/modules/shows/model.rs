pub use marquee_models::shows::{RatingDto, Show, ShowDto};
