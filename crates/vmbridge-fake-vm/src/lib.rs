//! Instrumented stand-in for a VM implementation library.
//!
//! Exports the three JNI invocation entry points with echo behavior so
//! callers can verify that arguments and results pass through the proxy
//! verbatim:
//!
//! - `JNI_GetDefaultJavaVMInitArgs` writes `JNI_VERSION_1_6` through
//!   `vm_args` (treated as a `jint` slot) and returns `JNI_OK`;
//! - `JNI_CreateJavaVM` echoes the `vm_args` pointer through both out
//!   parameters and returns the `jint` stored at `vm_args`;
//! - `JNI_GetCreatedJavaVMs` echoes `size` through `vm_count` and stores
//!   the `vm_count` pointer in the first slot of `vms`.
//!
//! Deliberately dependency-free: it mimics a foreign library, not a crate
//! in this workspace, so it defines its own slice of the JNI ABI.

use std::os::raw::{c_int, c_void};

pub type Jint = c_int;
pub type Jsize = c_int;

pub const JNI_OK: Jint = 0;
pub const JNI_ERR: Jint = -1;
pub const JNI_VERSION_1_6: Jint = 0x0001_0006;

#[repr(C)]
pub struct JavaVm {
    _private: [u8; 0],
}

#[repr(C)]
pub struct JniEnv {
    _private: [u8; 0],
}

/// # Safety
/// `vm_args`, if non-null, must point to a writable `jint`.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn JNI_GetDefaultJavaVMInitArgs(vm_args: *mut c_void) -> Jint {
    if vm_args.is_null() {
        return JNI_ERR;
    }
    unsafe { *(vm_args as *mut Jint) = JNI_VERSION_1_6 };
    JNI_OK
}

/// # Safety
/// `vm` and `env` must be writable; `vm_args`, if non-null, must point to a
/// readable `jint`.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn JNI_CreateJavaVM(
    vm: *mut *mut JavaVm,
    env: *mut *mut JniEnv,
    vm_args: *mut c_void,
) -> Jint {
    if vm.is_null() || env.is_null() {
        return JNI_ERR;
    }
    unsafe {
        *vm = vm_args as *mut JavaVm;
        *env = vm_args as *mut JniEnv;
    }
    if vm_args.is_null() {
        JNI_ERR
    } else {
        unsafe { *(vm_args as *const Jint) }
    }
}

/// # Safety
/// `vms` must point to at least `size` writable slots when `size > 0`;
/// `vm_count` must be writable if non-null.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn JNI_GetCreatedJavaVMs(
    vms: *mut *mut JavaVm,
    size: Jsize,
    vm_count: *mut Jsize,
) -> Jint {
    if !vms.is_null() && size > 0 {
        unsafe { *vms = vm_count as *mut JavaVm };
    }
    if !vm_count.is_null() {
        unsafe { *vm_count = size };
    }
    JNI_OK
}
