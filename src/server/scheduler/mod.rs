//! Cron jobs that run alongside (or instead of) the HTTP server.

pub mod report;
