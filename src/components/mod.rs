//! Reusable UI components shared by pages.

pub mod dashboard_header;
