//! Minimal JNI invocation-API surface types.
//!
//! Only the slice of the JNI ABI this crate proxies: the handle types, the
//! integer aliases, and the signatures of the three invocation entry points.

use std::os::raw::{c_int, c_void};

/// Opaque `JavaVM` handle.
#[repr(C)]
pub struct JavaVm {
    _private: [u8; 0],
}

/// Opaque `JNIEnv` handle.
#[repr(C)]
pub struct JniEnv {
    _private: [u8; 0],
}

pub type Jint = c_int;
pub type Jsize = c_int;

pub const JNI_OK: Jint = 0;
pub const JNI_ERR: Jint = -1;
pub const JNI_VERSION_1_6: Jint = 0x0001_0006;

/// `JNI_GetDefaultJavaVMInitArgs(void* vm_args)`.
pub type GetDefaultJavaVmInitArgsFn = unsafe extern "C" fn(vm_args: *mut c_void) -> Jint;

/// `JNI_CreateJavaVM(JavaVM** p_vm, JNIEnv** p_env, void* vm_args)`.
pub type CreateJavaVmFn =
    unsafe extern "C" fn(vm: *mut *mut JavaVm, env: *mut *mut JniEnv, vm_args: *mut c_void) -> Jint;

/// `JNI_GetCreatedJavaVMs(JavaVM** vms, jsize size, jsize* vm_count)`.
pub type GetCreatedJavaVmsFn =
    unsafe extern "C" fn(vms: *mut *mut JavaVm, size: Jsize, vm_count: *mut Jsize) -> Jint;
