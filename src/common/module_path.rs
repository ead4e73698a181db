//! Locating the folder of the binary this code was loaded from.
//!
//! Inside the host the crate is a shared library, so `current_exe` would name
//! the host instead. The module is looked up from the address of one of its
//! own functions.

use anyhow::{Context, Result, bail};
use log::debug;
use std::path::PathBuf;

/// Folder containing the loaded module, falling back to the folder of the
/// running executable when the module cannot be resolved.
pub fn module_folder() -> Result<PathBuf> {
    let module = match module_file() {
        Ok(path) => path,
        Err(e) => {
            debug!("Module lookup failed, using the executable path: {:#}", e);
            std::env::current_exe().context("Failed to read the executable path")?
        }
    };

    match module.parent() {
        Some(parent) => Ok(parent.to_path_buf()),
        None => bail!("'{}' has no parent folder", module.display()),
    }
}

#[cfg(windows)]
fn module_file() -> Result<PathBuf> {
    use std::ffi::OsString;
    use std::os::windows::ffi::OsStringExt;
    use windows::Win32::Foundation::HMODULE;
    use windows::Win32::System::LibraryLoader::{
        GET_MODULE_HANDLE_EX_FLAG_FROM_ADDRESS, GET_MODULE_HANDLE_EX_FLAG_UNCHANGED_REFCOUNT,
        GetModuleFileNameW, GetModuleHandleExW,
    };
    use windows::core::PCWSTR;

    let mut module = HMODULE::default();
    let address = module_folder as *const () as *const u16;

    unsafe {
        GetModuleHandleExW(
            GET_MODULE_HANDLE_EX_FLAG_FROM_ADDRESS | GET_MODULE_HANDLE_EX_FLAG_UNCHANGED_REFCOUNT,
            PCWSTR(address),
            &mut module,
        )
    }
    .context("GetModuleHandleExW failed")?;

    // Long path limit
    let mut buffer = vec![0u16; 32_768];
    let len = unsafe { GetModuleFileNameW(module, &mut buffer) } as usize;
    if len == 0 || len >= buffer.len() {
        bail!("GetModuleFileNameW failed: {}", std::io::Error::last_os_error());
    }

    Ok(PathBuf::from(OsString::from_wide(&buffer[..len])))
}

#[cfg(unix)]
fn module_file() -> Result<PathBuf> {
    use std::ffi::{CStr, OsStr};
    use std::os::unix::ffi::OsStrExt;

    let address = module_folder as *const () as *const libc::c_void;
    let mut info: libc::Dl_info = unsafe { std::mem::zeroed() };

    if unsafe { libc::dladdr(address, &mut info) } == 0 || info.dli_fname.is_null() {
        bail!("dladdr could not resolve the module");
    }

    let name = unsafe { CStr::from_ptr(info.dli_fname) };
    let path = PathBuf::from(OsStr::from_bytes(name.to_bytes()));

    // The main executable may be reported by its bare invocation name.
    if path.is_absolute() {
        Ok(path)
    } else {
        std::fs::canonicalize(&path)
            .with_context(|| format!("Failed to resolve module path '{}'", path.display()))
    }
}

#[cfg(not(any(unix, windows)))]
fn module_file() -> Result<PathBuf> {
    bail!("module lookup is not supported on this platform")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_folder_exists() {
        let folder = module_folder().unwrap();

        assert!(folder.is_absolute());
        assert!(folder.is_dir());
    }
}
