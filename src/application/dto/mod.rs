pub mod auth;
pub mod categories;
pub mod pagination;
pub mod serde_time;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use categories::CategoryDto;
pub use pagination::PaginatedResult;
