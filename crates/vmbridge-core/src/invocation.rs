//! The loader/proxy instance.
//!
//! [`JniInvocation::init`] runs the whole bootstrap in one shot: resolve the
//! effective library name through the policy, open the library (falling back
//! once on open failure), and resolve the three entry points. A value of
//! this type therefore always holds an open library and three resolved
//! pointers; there is no observable half-initialized state. Dropping it
//! closes the library handle.

use std::os::raw::c_void;

use tracing::{error, info, warn};

use crate::error::Result;
use crate::jni::{JavaVm, Jint, JniEnv, Jsize};
use crate::loader::{VmEntryPoints, VmLibrary};
use crate::policy::{SelectionPolicy, FALLBACK_LIBRARY};

/// A fully initialized proxy to one VM implementation library.
#[derive(Debug)]
pub struct JniInvocation {
    library: VmLibrary,
    entry: VmEntryPoints,
}

impl JniInvocation {
    /// Select, open, and resolve a VM library.
    ///
    /// If the selected name fails to open and is not already the fallback,
    /// the fallback is tried once (logged as a warning). Open failure of the
    /// fallback and missing entry points are both terminal for the attempt;
    /// nothing is left open in either case, and `init` may simply be called
    /// again.
    pub fn init(requested: Option<&str>, policy: &SelectionPolicy) -> Result<Self> {
        let name = policy.select(requested);

        let library = match VmLibrary::open(&name) {
            Ok(library) => library,
            Err(err) if name != FALLBACK_LIBRARY => {
                warn!(
                    library = %name,
                    fallback = FALLBACK_LIBRARY,
                    error = %err,
                    "falling back after open error"
                );
                VmLibrary::open(FALLBACK_LIBRARY).map_err(|err| {
                    error!(library = FALLBACK_LIBRARY, error = %err, "failed to open fallback library");
                    err
                })?
            }
            Err(err) => {
                error!(library = %name, error = %err, "failed to open library");
                return Err(err);
            }
        };

        // Dropping `library` on resolution failure closes the handle, so a
        // library missing an entry point is never left usable.
        let entry = library.entry_points()?;

        info!(library = library.name(), "jni invocation initialized");
        Ok(Self { library, entry })
    }

    /// The name or path of the library actually opened (the fallback, if the
    /// requested name failed to open).
    pub fn library_name(&self) -> &str {
        self.library.name()
    }

    /// Copy of the resolved entry points.
    pub fn entry_points(&self) -> VmEntryPoints {
        self.entry
    }

    /// Forward to the library's `JNI_GetDefaultJavaVMInitArgs`.
    ///
    /// # Safety
    /// See [`VmEntryPoints::get_default_init_args`].
    pub unsafe fn get_default_java_vm_init_args(&self, vm_args: *mut c_void) -> Jint {
        self.entry.get_default_init_args(vm_args)
    }

    /// Forward to the library's `JNI_CreateJavaVM`.
    ///
    /// # Safety
    /// See [`VmEntryPoints::create_vm`].
    pub unsafe fn create_java_vm(
        &self,
        vm: *mut *mut JavaVm,
        env: *mut *mut JniEnv,
        vm_args: *mut c_void,
    ) -> Jint {
        self.entry.create_vm(vm, env, vm_args)
    }

    /// Forward to the library's `JNI_GetCreatedJavaVMs`.
    ///
    /// # Safety
    /// See [`VmEntryPoints::get_created_vms`].
    pub unsafe fn get_created_java_vms(
        &self,
        vms: *mut *mut JavaVm,
        size: Jsize,
        vm_count: *mut Jsize,
    ) -> Jint {
        self.entry.get_created_vms(vms, size, vm_count)
    }
}
