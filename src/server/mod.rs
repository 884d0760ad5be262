//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: HTTP endpoints, business rules, data
//! access, caching and the background report worker. The backend uses Axum as the web
//! framework, SeaORM for database operations and Redis (or an in-process map) as the
//! read-through cache.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules orchestrating repositories and the cache
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token authentication and role guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Cache** (`cache/`) - Redis and in-process cache backends behind one trait
//! - **State** (`state`) - Shared application state (database, cache, token keys)
//! - **Startup** (`startup`) - Tracing, database migrations and cache connection
//! - **Router** (`router`) - Route table, CORS, tracing and the OpenAPI document
//! - **Scheduler** (`scheduler/`) - Cron job storing the daily monitoring report
//! - **Util** (`util/`) - Dates, password hashing and signed tokens
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and applies CORS and tracing layers
//! 2. **Controller** authenticates the caller, checks the role, and calls a service
//! 3. **Service** validates input, enforces ownership, consults the cache
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod cache;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
