pub mod euvd;

pub use euvd::EuvdClient;
