#![allow(missing_copy_implementations, missing_debug_implementations)]

#[cfg(feature = "profiler")]
use measureme::{EventId, TimingGuard};
#[cfg(feature = "profiler")]
use once_cell::sync::OnceCell;
#[cfg(feature = "profiler")]
use std::{
    path::Path,
    thread::{current, ThreadId},
};

#[cfg(feature = "profiler")]
pub struct Profiler {
    profiler: measureme::Profiler,
}

/// This static instance should never be public; all access goes through
/// the `global()` method, which manages initialization.
#[cfg(feature = "profiler")]
static INSTANCE: OnceCell<Profiler> = OnceCell::new();

#[cfg(feature = "profiler")]
impl Profiler {
    pub fn start_event(&self, label: &str, category: &str) -> TimingGuard<'_> {
        let kind = self.profiler.alloc_string(category);
        let id = EventId::from_label(self.profiler.alloc_string(label));
        let thread_id = Self::thread_id_to_u32(current().id());
        self.profiler
            .start_recording_interval_event(kind, id, thread_id)
    }

    fn default() -> Self {
        let profiler = measureme::Profiler::new(Path::new("./smelt_trace"))
            .expect("must be able to create the trace file");
        Self { profiler }
    }

    pub fn global() -> &'static Self {
        INSTANCE.get_or_init(Self::default)
    }

    // Stable Rust offers no public accessor for the integer value of a
    // `ThreadId`, see https://github.com/rust-lang/rust/issues/67939
    fn thread_id_to_u32(tid: ThreadId) -> u32 {
        unsafe { std::mem::transmute::<ThreadId, u64>(tid) as u32 }
    }
}

#[cfg(not(feature = "profiler"))]
pub struct Profiler;

#[allow(clippy::unused_unit, clippy::unused_self)]
#[cfg(not(feature = "profiler"))]
impl Profiler {
    pub fn start_event(&self, _label: &str, _category: &str) -> () {}

    pub fn global() -> Self {
        Self
    }
}
