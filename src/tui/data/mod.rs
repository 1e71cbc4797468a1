pub mod live;
pub mod provider;

pub use live::LiveDataProvider;
pub use provider::DataProvider;
