use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use ferris_blocks::core::{GameSnapshot, GameState};
use ferris_blocks::driver::{Driver, DriverConfig};
use ferris_blocks::types::Action;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// Single test in this binary so no other test allocates while counting.
#[test]
fn gameplay_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut gs = GameState::new(1);
    let mut snap = GameSnapshot::default();
    gs.snapshot_into(&mut snap);

    let mut driver = Driver::new(DriverConfig::default()).unwrap();
    let t0 = Instant::now();
    driver.start(t0);

    // Warm-up (registers log callsites on the lock path).
    let _ = gs.drop();
    gs.snapshot_into(&mut snap);

    let allocs = with_alloc_counting(|| {
        // Gravity should be allocation-free.
        for _ in 0..200 {
            let _ = gs.tick();
        }

        // Common actions should be allocation-free.
        for _ in 0..50 {
            let _ = gs.move_left();
            let _ = gs.move_right();
            let _ = gs.move_down();
            let _ = gs.rotate();
        }

        // Hard drop drives lock, row clear and spawn.
        for _ in 0..25 {
            if gs.game_over() {
                break;
            }
            let _ = gs.drop();
            gs.snapshot_into(&mut snap);
        }

        for i in 0..100u64 {
            let now = t0 + Duration::from_millis(150 * i);
            let _ = driver.frame(now);
            let _ = driver.apply(Action::MoveLeft, now);
        }
    });

    assert_eq!(allocs, 0);
}
