use atomic_counter::{AtomicCounter, RelaxedCounter};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::{Arc, Weak};
use std::thread;
use std::time::Duration;

/// A row counter shared by the distance threads, drawn as an indicatif bar.
///
/// Worker threads only bump the counter. A watcher thread holding a weak
/// handle to it redraws the bar every `refresh_rate` milliseconds and stops
/// once the Bar is gone.
pub struct Bar {
    rows: Arc<RelaxedCounter>,
    bar: ProgressBar,
}

/// Redraws `bar` from the counter until the counter is dropped or the bar
/// is finished.
fn watch(rows: Weak<RelaxedCounter>, bar: ProgressBar, refresh_rate: u64) {
    while let Some(rows) = rows.upgrade() {
        if bar.is_finished() {
            break;
        }
        bar.set_position(rows.get() as u64);
        drop(rows);
        thread::sleep(Duration::from_millis(refresh_rate));
    }
}

impl Bar {
    fn build(len: u64, refresh_rate: u64, prefix: String, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(len, target);
        bar.set_prefix(prefix);
        bar.set_style(ProgressStyle::default_bar()
                          .template("{prefix}{wide_bar} {pos}/{len} rows [{elapsed_precise}]")
                          .progress_chars("##-"));
        let rows = Arc::new(RelaxedCounter::new(0));
        let (weak, watched) = (Arc::downgrade(&rows), bar.clone());
        thread::spawn(move || watch(weak, watched, refresh_rate));
        Self { rows, bar }
    }

    /// A bar of `len` rows drawn on stderr.
    pub fn visible(len: u64, refresh_rate: u64, prefix: String) -> Self {
        Self::build(len, refresh_rate, prefix, ProgressDrawTarget::stderr())
    }

    /// A bar that only counts, for library calls and tests.
    pub fn hidden(len: u64) -> Self {
        Self::build(len, 100, String::new(), ProgressDrawTarget::hidden())
    }

    /// Marks one more row as finished.
    pub fn tick(&self) {
        self.rows.inc();
    }

    /// Rows finished so far.
    pub fn count(&self) -> usize {
        self.rows.get()
    }
}

impl Drop for Bar {
    fn drop(&mut self) {
        self.bar.set_position(self.count() as u64);
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_new() {
        let bar = Bar::hidden(10);
        assert_eq!(bar.count(), 0);
    }

    #[test]
    fn progress_tick_threads() {
        let bar = Bar::hidden(8);
        crossbeam_utils::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|_| {
                    bar.tick();
                    bar.tick();
                });
            }
        }).unwrap();
        assert_eq!(bar.count(), 8)
    }

    #[test]
    fn progress_watcher_stops() {
        let rows = Arc::new(RelaxedCounter::new(3));
        let bar = ProgressBar::hidden();
        let weak = Arc::downgrade(&rows);
        drop(rows);
        // returns straight away once the counter is gone
        watch(weak, bar.clone(), 1);
        assert_eq!(bar.position(), 0);
    }
}
