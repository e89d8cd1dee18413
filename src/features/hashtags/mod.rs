//! Hashtags feature: free-form labels attached to destinations and POIs.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/hashtags` | List all hashtags |
//! | GET | `/api/hashtags/{id}` | Get hashtag by ID |
//! | POST | `/api/hashtags` | Create hashtag |
//! | PUT | `/api/hashtags` | Update hashtag |
//! | DELETE | `/api/hashtags/{id}` | Deactivate hashtag |

pub mod dtos;
pub mod handlers;
pub mod mapping;
pub mod models;
pub mod repositories;
pub mod routes;
