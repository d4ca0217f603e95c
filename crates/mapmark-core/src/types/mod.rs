//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for `Rc<RefCell<T>>` and `Arc<Mutex<T>>`.
//! - [`ids`]: The id allocator shared by shapes and groups.

pub mod aliases;
pub mod ids;

pub use aliases::*;
pub use ids::*;
