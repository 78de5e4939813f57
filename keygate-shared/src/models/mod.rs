/// Domain data structures
///
/// # Models
///
/// - `user`: User accounts

pub mod user;
