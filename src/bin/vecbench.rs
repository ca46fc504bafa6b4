use std::io::{self, BufRead};
use std::process;

use vecbench::growth::{count_reallocs, vec_alloc, vec_alloc_by_reserve};

/// First whitespace-delimited token on the next stdin line, parsed as a
/// non-negative count.
fn read_count() -> Option<usize> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok()?;
    line.split_whitespace().next()?.parse::<usize>().ok()
}

fn main() {
    println!("Enter a number");

    let n = match read_count() {
        Some(n) => n,
        None => {
            eprintln!("vecbench: expected a non-negative integer on stdin");
            process::exit(1);
        }
    };

    if vecbench::debug_enabled() {
        eprintln!(
            "[VECBENCH] growing to {} elements moves the backing storage {} times",
            n,
            count_reallocs(n)
        );
    }

    vec_alloc(n);
    vec_alloc_by_reserve(n);
}
