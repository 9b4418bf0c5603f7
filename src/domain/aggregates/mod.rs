pub mod service_listing;

pub use service_listing::ServiceListing;
