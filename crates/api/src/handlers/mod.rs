pub mod episode;
pub mod feed;
pub mod history;
pub mod star;
pub mod toon;
pub mod user;
