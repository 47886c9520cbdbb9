pub mod fetcher;
pub mod traits;

pub use fetcher::FplClient;
pub use traits::DataSource;
