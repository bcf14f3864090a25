//! Help center search integration tests
//!
//! Drives the public `helpdesk` facade the way a request handler would.

mod flaky;
mod scenarios;
