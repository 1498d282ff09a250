//! A prelude of the `percolate` for the crate which want to call the API.
//!
//! This module is intended to be included by `use percolate::prelude::*;`,
//! to access the various traits mostly will be used.

pub use crate::methods::ApiMethod;
pub use crate::request::{BaseRequest, Request};
pub use crate::transport::Transport;
