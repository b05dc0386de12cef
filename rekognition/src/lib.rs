/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request, response and value shapes for Amazon Rekognition.
//!
//! Every remote operation has an input in [`input`], an output in [`output`] and a response
//! handler in [`operation`]. Inputs validate the constraints the service documents and turn
//! themselves into an awsJson1.1 request:
//!
//! ```
//! use rekognition::input::ListFacesInput;
//! use rekognition::Config;
//!
//! let config = Config::builder().region("us-east-1").build();
//! let op = ListFacesInput::builder()
//!     .collection_id("my-collection")
//!     .max_results(100)
//!     .build()
//!     .expect("valid input")
//!     .make_operation(&config)
//!     .expect("valid request");
//! assert_eq!(
//!     op.request().http().headers()["x-amz-target"],
//!     "RekognitionService.ListFaces"
//! );
//! ```
//!
//! Signing and dispatching the request is left to the caller; the loaded response is handed
//! back to [`Operation::parse`](smithy_http::operation::Operation::parse).

#[macro_use]
mod macros;

mod aws_json_errors;
mod blob_serde;
pub mod config;
pub mod error;
pub mod idempotency_token;
pub mod input;
mod instant_epoch;
pub mod model;
pub mod operation;
pub mod output;
pub mod validation;

pub use config::{Config, Region};
pub use error::{BuildError, RekognitionError};
pub use smithy_types::{Blob, Instant};

pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
