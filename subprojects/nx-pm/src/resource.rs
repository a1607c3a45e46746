//! Resource-limit memory boost arbitration.
//!
//! Mirrors `BoostSystemMemoryResourceLimit`: moving memory from the
//! application pool to the system pool (or back) has to write both pools'
//! limits without ever letting their sum exceed the machine's total, so the
//! write order flips depending on whether the boost is growing or shrinking
//! and, on firmware 5.0.0+, whether the "system side" write is a resource
//! limit at all (it becomes an unsafe-memory-limit SVC instead).

use nx_std_sync::Mutex;

use crate::process_info::FirmwareVersion;

/// The three resource-limit groups processes are assigned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceLimitGroup {
    System,
    Application,
    Applet,
}

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum ResourceError {
    /// The requested boost would take more memory than the application pool holds.
    #[error("boost size exceeds application memory pool")]
    InvalidSize,
    /// The underlying limit write (or unsafe-limit SVC) was rejected.
    #[error("resource limit write rejected")]
    LimitRejected,
}

pub type Result<T> = core::result::Result<T, ResourceError>;

/// Performs the actual kernel-facing writes. Split out of [`BoostArbiter`] so
/// the ordering logic can be exercised without a kernel: tests supply a
/// recording implementation and assert on the call sequence.
pub trait ResourceLimitWriter {
    fn set_memory_limit(&mut self, group: ResourceLimitGroup, new_value: u64) -> Result<()>;
    /// fw >= 5.0.0 only: adjusts the kernel's unsafe-memory allowance instead
    /// of writing a resource limit directly.
    fn set_unsafe_limit(&mut self, boost_size: u64) -> Result<()>;
}

struct State {
    application_size: u64,
    system_size: u64,
    boost_size: u64,
}

/// Arbitrates `BoostSystemMemoryResourceLimit` calls against a fixed
/// application memory pool size.
pub struct BoostArbiter {
    state: Mutex<State>,
}

impl BoostArbiter {
    pub fn new(application_pool_size: u64, system_pool_size: u64) -> Self {
        Self {
            state: Mutex::new(State {
                application_size: application_pool_size,
                system_size: system_pool_size,
                boost_size: 0,
            }),
        }
    }

    /// Current boosted-away size, i.e. how much of the application pool has
    /// been handed to the system side.
    pub fn current_boost_size(&self) -> u64 {
        self.state.lock().boost_size
    }

    /// Applies a new boost size, writing the pool limits in the order that
    /// keeps `system + application` from ever exceeding the machine total at
    /// any intermediate point.
    pub fn boost(
        &self,
        boost_size: u64,
        fw: FirmwareVersion,
        writer: &mut impl ResourceLimitWriter,
    ) -> Result<()> {
        let mut state = self.state.lock();

        if boost_size > state.application_size {
            return Err(ResourceError::InvalidSize);
        }

        let new_app_size = state.application_size - boost_size;
        let shrinking = boost_size < state.boost_size;

        if fw >= FirmwareVersion::V5_0_0 {
            if shrinking {
                writer.set_unsafe_limit(boost_size)?;
                writer.set_memory_limit(ResourceLimitGroup::Application, new_app_size)?;
            } else {
                writer.set_memory_limit(ResourceLimitGroup::Application, new_app_size)?;
                writer.set_unsafe_limit(boost_size)?;
            }
        } else {
            let new_sys_size = state.system_size + boost_size;
            if shrinking {
                writer.set_memory_limit(ResourceLimitGroup::System, new_sys_size)?;
                writer.set_memory_limit(ResourceLimitGroup::Application, new_app_size)?;
            } else {
                writer.set_memory_limit(ResourceLimitGroup::Application, new_app_size)?;
                writer.set_memory_limit(ResourceLimitGroup::System, new_sys_size)?;
            }
            state.system_size = new_sys_size;
        }

        state.application_size = new_app_size;
        state.boost_size = boost_size;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    enum Call {
        Memory(ResourceLimitGroup, u64),
        Unsafe(u64),
    }

    struct Recorder {
        calls: Vec<Call>,
    }

    impl Recorder {
        fn new() -> Self {
            Self { calls: Vec::new() }
        }
    }

    impl ResourceLimitWriter for Recorder {
        fn set_memory_limit(&mut self, group: ResourceLimitGroup, new_value: u64) -> Result<()> {
            self.calls.push(Call::Memory(group, new_value));
            Ok(())
        }

        fn set_unsafe_limit(&mut self, boost_size: u64) -> Result<()> {
            self.calls.push(Call::Unsafe(boost_size));
            Ok(())
        }
    }

    #[test]
    fn rejects_boost_larger_than_application_pool() {
        let arbiter = BoostArbiter::new(100, 50);
        let mut writer = Recorder::new();
        assert_eq!(
            arbiter.boost(200, FirmwareVersion::V5_0_0, &mut writer),
            Err(ResourceError::InvalidSize)
        );
    }

    #[test]
    fn pre_500_growing_boost_writes_application_then_system() {
        let arbiter = BoostArbiter::new(100, 50);
        let mut writer = Recorder::new();
        arbiter
            .boost(10, FirmwareVersion::V2_0_0, &mut writer)
            .unwrap();
        assert_eq!(
            writer.calls,
            alloc::vec![
                Call::Memory(ResourceLimitGroup::Application, 90),
                Call::Memory(ResourceLimitGroup::System, 60),
            ]
        );
    }

    #[test]
    fn pre_500_shrinking_boost_writes_system_then_application() {
        let arbiter = BoostArbiter::new(100, 50);
        let mut writer = Recorder::new();
        arbiter
            .boost(10, FirmwareVersion::V2_0_0, &mut writer)
            .unwrap();
        writer.calls.clear();

        arbiter
            .boost(5, FirmwareVersion::V2_0_0, &mut writer)
            .unwrap();
        assert_eq!(
            writer.calls,
            alloc::vec![
                Call::Memory(ResourceLimitGroup::System, 55),
                Call::Memory(ResourceLimitGroup::Application, 95),
            ]
        );
    }

    #[test]
    fn post_500_growing_boost_writes_application_then_unsafe_limit() {
        let arbiter = BoostArbiter::new(100, 50);
        let mut writer = Recorder::new();
        arbiter
            .boost(10, FirmwareVersion::V5_0_0, &mut writer)
            .unwrap();
        assert_eq!(
            writer.calls,
            alloc::vec![
                Call::Memory(ResourceLimitGroup::Application, 90),
                Call::Unsafe(10),
            ]
        );
    }

    #[test]
    fn post_500_shrinking_boost_writes_unsafe_limit_then_application() {
        let arbiter = BoostArbiter::new(100, 50);
        let mut writer = Recorder::new();
        arbiter
            .boost(10, FirmwareVersion::V5_0_0, &mut writer)
            .unwrap();
        writer.calls.clear();

        arbiter
            .boost(5, FirmwareVersion::V5_0_0, &mut writer)
            .unwrap();
        assert_eq!(
            writer.calls,
            alloc::vec![Call::Unsafe(5), Call::Memory(ResourceLimitGroup::Application, 95)]
        );
    }
}
