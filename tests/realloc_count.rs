use vecbench::growth::count_reallocs;

#[test]
fn empty_fill_never_moves_storage() {
    assert_eq!(count_reallocs(0), 0);
}

#[test]
fn realloc_count_grows_logarithmically() -> Result<(), Box<dyn std::error::Error>> {
    assert!(count_reallocs(1) >= 1);

    // Doubling growth: the move count is non-decreasing in n and stays
    // tiny even for a million elements.
    let mut prev = 0;
    for n in [1usize, 10, 100, 1000, 10_000, 100_000, 1_000_000] {
        let moves = count_reallocs(n);
        assert!(moves >= prev, "moves dropped from {} to {} at n={}", prev, moves, n);
        prev = moves;
    }
    assert!(prev < 64, "expected O(log n) storage moves, got {}", prev);

    if vecbench::debug_enabled() {
        println!("[TEST] n=1_000_000 moved storage {} times", prev);
    }
    Ok(())
}
