#![forbid(unsafe_code)]

pub mod app_services;
pub mod controller;
pub mod error;
pub mod renderer;
pub mod tracker_service;

pub use app_services::AppServices;
pub use controller::TrackerController;
pub use error::{AppServicesError, TrackerServiceError};
pub use renderer::Renderer;
pub use tracker_service::TrackerService;
