//! Process-wide registration and the exported JNI entry points.
//!
//! The three `extern "C"` functions below carry the exact names and
//! signatures of the JNI invocation API, so a binary linking (or preloading)
//! this crate's `cdylib` sees a drop-in replacement for a statically linked
//! VM. That ABI is parameterless global lookup by nature, which is the one
//! reason a global slot exists at all; the Rust surface keeps registration
//! explicit and recoverable instead.
//!
//! Install and uninstall are expected to happen once, early in process
//! lifetime, before any concurrent use of the entry points. The lock below
//! makes misuse memory-safe, not correct.

use std::os::raw::c_void;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::error;

use crate::error::{InvocationError, Result};
use crate::invocation::JniInvocation;
use crate::jni::{JavaVm, Jint, JniEnv, Jsize};
use crate::loader::VmEntryPoints;

static ACTIVE: Lazy<RwLock<Option<JniInvocation>>> = Lazy::new(|| RwLock::new(None));

/// Register `invocation` as the process-wide instance behind the exported
/// entry points. Fails with [`InvocationError::AlreadyInstalled`] if one is
/// already registered.
pub fn install(invocation: JniInvocation) -> Result<()> {
    let mut slot = ACTIVE.write();
    if slot.is_some() {
        return Err(InvocationError::AlreadyInstalled);
    }
    *slot = Some(invocation);
    Ok(())
}

/// Clear the process-wide instance and hand it back to the caller.
/// Dropping the returned value closes the library handle.
pub fn uninstall() -> Option<JniInvocation> {
    ACTIVE.write().take()
}

/// Whether a process-wide instance is currently registered.
pub fn installed() -> bool {
    ACTIVE.read().is_some()
}

/// Name of the library behind the registered instance, for diagnostics.
pub fn active_library_name() -> Result<String> {
    ACTIVE
        .read()
        .as_ref()
        .map(|invocation| invocation.library_name().to_string())
        .ok_or(InvocationError::NotInstalled)
}

/// Copy the entry points out of the slot; the forwarding call itself runs
/// outside the lock.
///
/// The C ABI has no error channel here, and reaching this point without an
/// installed instance is a bootstrap ordering bug, so it is fatal.
fn active_entry_points() -> VmEntryPoints {
    match ACTIVE.read().as_ref() {
        Some(invocation) => invocation.entry_points(),
        None => {
            error!("JNI invocation API used before an instance was installed");
            std::process::abort();
        }
    }
}

/// Exported `JNI_GetDefaultJavaVMInitArgs`.
///
/// # Safety
/// Same contract as the entry point of the loaded library; the arguments are
/// forwarded unchecked. Aborts the process if nothing is installed.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn JNI_GetDefaultJavaVMInitArgs(vm_args: *mut c_void) -> Jint {
    active_entry_points().get_default_init_args(vm_args)
}

/// Exported `JNI_CreateJavaVM`.
///
/// # Safety
/// As above.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn JNI_CreateJavaVM(
    vm: *mut *mut JavaVm,
    env: *mut *mut JniEnv,
    vm_args: *mut c_void,
) -> Jint {
    active_entry_points().create_vm(vm, env, vm_args)
}

/// Exported `JNI_GetCreatedJavaVMs`.
///
/// # Safety
/// As above.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn JNI_GetCreatedJavaVMs(
    vms: *mut *mut JavaVm,
    size: Jsize,
    vm_count: *mut Jsize,
) -> Jint {
    active_entry_points().get_created_vms(vms, size, vm_count)
}
