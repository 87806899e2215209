//! Authentication and User Management
//!
//! - **`users`** - user model and database operations
//! - **`sessions`** - JWT token creation and verification
//! - **`handlers`** - signup, login and current-user endpoints

pub mod handlers;
pub mod sessions;
pub mod users;
