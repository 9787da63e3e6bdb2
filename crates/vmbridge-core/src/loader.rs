//! Dynamic library opening and entry-point resolution.
//!
//! [`VmLibrary`] wraps an opened library handle; [`VmEntryPoints`] is the
//! resolved, copyable set of the three invocation-API function pointers.
//! Resolution is kept separate from the proxy so tests can exercise the
//! forwarding layer without loading a real library.

use std::os::raw::c_void;

use libloading::Library;
use tracing::{debug, error};

use crate::error::{InvocationError, Result};
use crate::jni::{
    CreateJavaVmFn, GetCreatedJavaVmsFn, GetDefaultJavaVmInitArgsFn, JavaVm, Jint, JniEnv, Jsize,
};

const GET_DEFAULT_INIT_ARGS_SYMBOL: &str = "JNI_GetDefaultJavaVMInitArgs";
const CREATE_VM_SYMBOL: &str = "JNI_CreateJavaVM";
const GET_CREATED_VMS_SYMBOL: &str = "JNI_GetCreatedJavaVMs";

/// An opened VM implementation library.
///
/// Dropping the value closes the handle, so every failed path that discards
/// a `VmLibrary` releases the library deterministically.
#[derive(Debug)]
pub struct VmLibrary {
    library: Library,
    name: String,
}

impl VmLibrary {
    /// Open a library by name or path with eager symbol binding.
    pub fn open(name: &str) -> Result<Self> {
        let library = open_eager(name).map_err(|source| InvocationError::OpenFailed {
            library: name.to_string(),
            source,
        })?;
        debug!(library = name, "opened vm library");
        Ok(Self {
            library,
            name: name.to_string(),
        })
    }

    /// The name or path this library was opened under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve the three invocation entry points, in fixed order.
    ///
    /// Fails on the first missing symbol. The caller is expected to discard
    /// the library on failure; a partially resolved set is never returned.
    pub fn entry_points(&self) -> Result<VmEntryPoints> {
        Ok(VmEntryPoints {
            get_default_init_args: self.resolve(GET_DEFAULT_INIT_ARGS_SYMBOL)?,
            create_vm: self.resolve(CREATE_VM_SYMBOL)?,
            get_created_vms: self.resolve(GET_CREATED_VMS_SYMBOL)?,
        })
    }

    fn resolve<T: Copy>(&self, symbol: &str) -> Result<T> {
        let resolved = unsafe { self.library.get::<T>(symbol.as_bytes()) };
        match resolved {
            Ok(sym) => Ok(*sym),
            Err(source) => {
                error!(symbol, library = %self.name, error = %source, "failed to resolve entry point");
                Err(InvocationError::SymbolMissing {
                    symbol: symbol.to_string(),
                    library: self.name.clone(),
                    source,
                })
            }
        }
    }
}

/// Eager binding: resolve all symbols at open time so a library missing a
/// link-time dependency fails here rather than at call time.
#[cfg(unix)]
fn open_eager(name: &str) -> std::result::Result<Library, libloading::Error> {
    use libloading::os::unix::{Library as UnixLibrary, RTLD_LOCAL, RTLD_NOW};

    let library = unsafe { UnixLibrary::open(Some(name), RTLD_NOW | RTLD_LOCAL) }?;
    Ok(library.into())
}

#[cfg(not(unix))]
fn open_eager(name: &str) -> std::result::Result<Library, libloading::Error> {
    unsafe { Library::new(name) }
}

/// The three resolved invocation entry points.
///
/// Plain function pointers copied out of the library's symbol table; the
/// pointers are only valid while the [`VmLibrary`] they came from is alive.
#[derive(Clone, Copy, Debug)]
pub struct VmEntryPoints {
    get_default_init_args: GetDefaultJavaVmInitArgsFn,
    create_vm: CreateJavaVmFn,
    get_created_vms: GetCreatedJavaVmsFn,
}

impl VmEntryPoints {
    /// Forward to `JNI_GetDefaultJavaVMInitArgs`.
    ///
    /// # Safety
    /// `vm_args` must satisfy whatever contract the resolved library puts on
    /// its own entry point; the call is a verbatim pass-through.
    pub unsafe fn get_default_init_args(&self, vm_args: *mut c_void) -> Jint {
        (self.get_default_init_args)(vm_args)
    }

    /// Forward to `JNI_CreateJavaVM`.
    ///
    /// # Safety
    /// As for [`Self::get_default_init_args`]; all three pointers are handed
    /// to the library unchecked.
    pub unsafe fn create_vm(
        &self,
        vm: *mut *mut JavaVm,
        env: *mut *mut JniEnv,
        vm_args: *mut c_void,
    ) -> Jint {
        (self.create_vm)(vm, env, vm_args)
    }

    /// Forward to `JNI_GetCreatedJavaVMs`.
    ///
    /// # Safety
    /// `vms` must point to at least `size` slots and `vm_count` must be
    /// writable, per the external API contract.
    pub unsafe fn get_created_vms(
        &self,
        vms: *mut *mut JavaVm,
        size: Jsize,
        vm_count: *mut Jsize,
    ) -> Jint {
        (self.get_created_vms)(vms, size, vm_count)
    }
}
