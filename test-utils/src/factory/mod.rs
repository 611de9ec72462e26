//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let restaurant = factory::restaurant::create_restaurant(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, restaurant, visit) =
//!         factory::helpers::create_visit_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let restaurant = factory::restaurant::RestaurantFactory::new(&db)
//!     .name("Milano Pizza")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `restaurant` - Create restaurant entities
//! - `dish` - Create dish entities
//! - `visit` - Create visit entities
//! - `order` - Create order entities

pub mod dish;
pub mod helpers;
pub mod order;
pub mod restaurant;
pub mod user;
pub mod visit;
