use rand::rngs::OsRng;
use rand::Rng;

/// Takes one item uniformly at random. Uses the operating system's RNG since
/// picks end up in public posts and should not be predictable.
#[must_use]
pub fn pick<T>(mut items: Vec<T>) -> Option<T> {
    if items.is_empty() {
        return None;
    }

    let index = OsRng.gen_range(0..items.len());
    Some(items.swap_remove(index))
}
