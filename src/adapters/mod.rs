//! External system integrations for URL Exporter.
//!
//! - [`service`] - Count/Page service client and wire models
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind traits so the export
//! orchestrator can be exercised against scripted fakes:
//!
//! ```rust,no_run
//! use url_exporter::adapters::service::{HttpUrlService, UrlService};
//! use url_exporter::config::{secret_string, ServiceConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServiceConfig {
//!     endpoint: "https://blog.example.com/wp-admin/admin-ajax.php".to_string(),
//!     nonce: Some(secret_string("a1b2c3".to_string())),
//!     ..Default::default()
//! };
//!
//! let service = HttpUrlService::new(&config)?;
//! println!("Exporting from {}", service.endpoint());
//! # Ok(())
//! # }
//! ```

pub mod service;
