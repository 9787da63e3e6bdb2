//! Dynamic loader and proxy for the JNI invocation API.
//!
//! This crate opens a VM implementation library at runtime, resolves the
//! three JNI invocation entry points (`JNI_GetDefaultJavaVMInitArgs`,
//! `JNI_CreateJavaVM`, `JNI_GetCreatedJavaVMs`), and forwards calls to them.
//! Which library gets opened is decided by a selection policy: a hardcoded
//! fallback plus an environment-gated override that is only honored in
//! debuggable mode.
//!
//! The crate also builds as a `cdylib` exporting the three entry points
//! under their exact JNI names, so it can stand in for a statically linked
//! VM and redirect the invocation API to a dynamically chosen
//! implementation.
//!
//! # Quick Start
//!
//! ```no_run
//! use vmbridge_core::{JniInvocation, SelectionPolicy};
//!
//! let policy = SelectionPolicy::from_env();
//! let invocation = JniInvocation::init(Some("libart.so"), &policy)?;
//! vmbridge_core::install(invocation)?;
//! # Ok::<(), vmbridge_core::InvocationError>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod invocation;
pub mod jni;
pub mod loader;
pub mod policy;

pub use api::{active_library_name, install, installed, uninstall};
pub use error::{InvocationError, Result};
pub use invocation::JniInvocation;
pub use loader::{VmEntryPoints, VmLibrary};
pub use policy::{SelectionPolicy, FALLBACK_LIBRARY};
