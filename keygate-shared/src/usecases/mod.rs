/// Orchestration operations
///
/// Each operation is a single transaction over the store and, for the
/// self-service operations, the identity resolver. There is no partial
/// failure to roll back: nothing here takes more than one durable step.
///
/// # Modules
///
/// - `users`: register, login, and authenticated self-service

pub mod users;
