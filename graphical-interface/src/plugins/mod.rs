mod current_location;
mod shops;

pub use current_location::CurrentLocation;
pub use shops::Shops;
