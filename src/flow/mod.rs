pub mod conversion;
pub mod definition;
pub mod fixture;
pub mod loader;
pub mod lookup;

pub use conversion::*;
pub use definition::*;
pub use fixture::*;
pub use lookup::*;
