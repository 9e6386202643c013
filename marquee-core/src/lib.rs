//! # Marquee Core
//!
//! Video catalog core for Marquee: the video aggregate, its media encoding
//! state machine, and the use cases that create, update and track videos.
//!
//! ## Overview
//!
//! - **Domain** ([`domain`]): the [`Video`](domain::video::Video) aggregate,
//!   media value objects, validation via [`Notification`](domain::validation::Notification)
//!   and the ports the aggregate is persisted through
//! - **Application** ([`application`]): create/update/get/delete use cases,
//!   media lookup and the encoder driven status updates
//! - **Infrastructure** ([`infrastructure`]): in-memory and filesystem
//!   storage, the in-process event bus and the encoder message listener
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use marquee_core::application::video::{CreateVideoCommand, CreateVideoUseCase};
//! use marquee_core::catalog::VideoCatalog;
//! use marquee_core::infrastructure::InMemoryStorageService;
//!
//! async fn create() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog =
//!         VideoCatalog::in_memory(Arc::new(InMemoryStorageService::new()), 64);
//!     let output = catalog
//!         .create_video
//!         .execute(CreateVideoCommand {
//!             title: Some("System Design".into()),
//!             description: Some("Interview prep".into()),
//!             launched_at: Some(2022),
//!             duration: Some(120.0),
//!             opened: Some(true),
//!             published: Some(false),
//!             rating: Some("L".into()),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("created {}", output.id);
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod application;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{CatalogError, Result};
pub use marquee_model as model;
