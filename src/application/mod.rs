// Application layer - Use cases over the dashboard folder
pub mod catalog_service;
pub mod document_loader;
pub mod visualization_service;

#[cfg(test)]
pub mod fake_loader;
#[cfg(test)]
pub mod log_capture;
