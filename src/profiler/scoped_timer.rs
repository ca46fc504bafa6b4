use std::time::Instant;

/// Measures its own lifetime and reports the elapsed time on drop,
/// tagged with a label. One instance = one measurement window, so the
/// type is deliberately neither `Copy` nor `Clone`.
pub struct ScopedTimer {
    label: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Whole milliseconds since construction, truncated.
    pub fn elapsed_ms(&self) -> u128 {
        self.start.elapsed().as_millis()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        println!("{}", measurement_line(self.elapsed_ms(), self.label));
    }
}

/// The exact line a timer emits when its scope ends.
pub fn measurement_line(ms: u128, label: &str) -> String {
    format!("{} ms {}", ms, label)
}
