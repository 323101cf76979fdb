//! In-place Fisher-Yates shuffle of the leaf list.
//!
//! Performed exactly once per run, after traversal and before copying, so
//! the copy engine can simply take candidates front to back. `thread_rng`
//! is OS-seeded at first use; every permutation is equally likely.

use rand::Rng;

pub fn shuffle<T>(items: &mut [T]) {
    let mut rng = rand::thread_rng();
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
