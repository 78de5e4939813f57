/// User storage
///
/// The service keeps its entire user population in process memory; there is
/// no database behind it. See [`memory::UserStore`] for the registry and its
/// id-allocation policy.

pub mod memory;

pub use memory::{StoreError, UserStore};
