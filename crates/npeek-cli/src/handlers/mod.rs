pub mod info;
pub mod urls;

pub use info::InfoHandler;
pub use urls::UrlsHandler;
