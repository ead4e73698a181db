use crate::service::priority::PriorityClass;
use log::debug;
use std::io;

/// Sets the scheduling priority of the current process.
#[cfg_attr(test, mockall::automock)]
pub trait PrioritySetter {
    fn set_priority_class(&self, class: PriorityClass) -> io::Result<()>;
}

/// The real OS call.
pub struct SystemPriority;

#[cfg(windows)]
impl PrioritySetter for SystemPriority {
    fn set_priority_class(&self, class: PriorityClass) -> io::Result<()> {
        use windows::Win32::System::Threading::{
            GetCurrentProcess, PROCESS_CREATION_FLAGS, SetPriorityClass,
        };

        debug!("SetPriorityClass(0x{:X})", class.windows_class());

        unsafe {
            SetPriorityClass(
                GetCurrentProcess(),
                PROCESS_CREATION_FLAGS(class.windows_class()),
            )
        }
        .map_err(|e| io::Error::other(e.to_string()))
    }
}

#[cfg(unix)]
impl PrioritySetter for SystemPriority {
    fn set_priority_class(&self, class: PriorityClass) -> io::Result<()> {
        let nice_value = class.nice_value();

        for tid in thread_ids() {
            debug!("setpriority(PRIO_PROCESS, {}, {})", tid, nice_value);
            match set_nice(tid, nice_value) {
                Ok(()) => {}
                // Thread exited after the listing
                Err(nix::errno::Errno::ESRCH) if tid != 0 => {}
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }
}

#[cfg(unix)]
fn set_nice(who: libc::id_t, nice_value: i32) -> nix::Result<()> {
    use nix::errno::Errno;

    Errno::result(unsafe { libc::setpriority(libc::PRIO_PROCESS, who, nice_value) }).map(drop)
}

/// Every thread of the process. Linux keeps a nice value per thread, so
/// `who == 0` would only reach the caller.
#[cfg(target_os = "linux")]
fn thread_ids() -> Vec<libc::id_t> {
    let tids: Vec<libc::id_t> = match std::fs::read_dir("/proc/self/task") {
        Ok(entries) => entries
            .flatten()
            .filter_map(|entry| entry.file_name().to_str()?.parse().ok())
            .collect(),
        Err(e) => {
            debug!("Cannot list /proc/self/task: {}", e);
            Vec::new()
        }
    };

    if tids.is_empty() { vec![0] } else { tids }
}

/// Elsewhere `PRIO_PROCESS` with `who == 0` covers the whole process.
#[cfg(all(unix, not(target_os = "linux")))]
fn thread_ids() -> Vec<libc::id_t> {
    vec![0]
}

#[cfg(not(any(unix, windows)))]
impl PrioritySetter for SystemPriority {
    fn set_priority_class(&self, _class: PriorityClass) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "process priority is not supported on this platform",
        ))
    }
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;

    fn nice_of(who: libc::id_t) -> i32 {
        unsafe { libc::getpriority(libc::PRIO_PROCESS, who) }
    }

    #[test]
    fn test_thread_ids_include_caller() {
        let caller = unsafe { libc::syscall(libc::SYS_gettid) } as libc::id_t;

        assert!(thread_ids().contains(&caller));
    }

    #[test]
    fn test_system_priority_sets_normal() {
        // Lowering a raised nice value needs privilege, only run from 0.
        if nice_of(0) != 0 {
            return;
        }

        SystemPriority
            .set_priority_class(PriorityClass::Normal)
            .unwrap();

        assert_eq!(nice_of(0), 0);
    }
}
