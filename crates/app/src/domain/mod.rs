//! CRM Domain Concerns

pub mod clients;
pub mod sales;
