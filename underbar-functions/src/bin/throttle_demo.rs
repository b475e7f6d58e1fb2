//! Decorator demonstration with logging
//!
//! Drives `once`, `memoize` and a leading-edge `throttle` against the real
//! clock and prints what each call returned. Decorator and timer events are
//! logged through `tracing`; set `RUST_LOG` to change the level.
//!
//! Run with: cargo run --bin throttle_demo --features demo

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use underbar_functions::{ThrottleOptions, default_scheduler, delay, memoize, once, throttle};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    println!("=== once ===");
    let connect = once(|host: &str| format!("connected to {host}"));
    for host in ["alpha", "beta", "gamma"] {
        println!("  connect({host}) -> {}", connect(host));
    }

    println!("\n=== memoize ===");
    let computed = Rc::new(Cell::new(0));
    let counter = Rc::clone(&computed);
    let slow_square = memoize(move |n: &u64| {
        counter.set(counter.get() + 1);
        n * n
    });
    for n in [4, 4, 9, 4, 9] {
        println!("  square({n}) -> {}", slow_square(&n));
    }
    println!("  computed {} times for 5 calls", computed.get());

    println!("\n=== throttle (100ms, leading) ===");
    let scheduler = default_scheduler();
    let save = match throttle(
        |draft: String| {
            println!("  saving {draft:?}");
            draft.len()
        },
        ThrottleOptions::from_millis(100).leading(true),
        &scheduler,
    ) {
        Ok(save) => save,
        Err(err) => {
            eprintln!("throttle setup failed: {err}");
            return;
        }
    };

    let mut draft = String::new();
    for word in ["the", " quick", " brown", " fox", " jumps"] {
        draft.push_str(word);
        println!("  call -> last saved length {}", save.call(draft.clone()));
        scheduler.run_for(Duration::from_millis(40));
    }
    scheduler.run_for(Duration::from_millis(150));

    println!("\n=== delay ===");
    delay(&scheduler, Duration::from_millis(50), || println!("  delayed hello"));
    scheduler.run_for(Duration::from_millis(60));

    drop(save);
    println!("\ntimers left: {}", scheduler.pending());
}
