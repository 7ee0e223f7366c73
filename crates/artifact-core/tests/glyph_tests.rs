// Host-side tests for the floating glyph lifecycle with an in-memory container.

use artifact_core::{FloatingGlyph, GlyphContainer, GlyphParams, GlyphSpawner, GLYPH_SET};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct MemoryContainer {
    children: Vec<(usize, char)>,
    next: usize,
    refuse: bool,
}

impl GlyphContainer for MemoryContainer {
    type Node = usize;

    fn append(&mut self, glyph: &FloatingGlyph) -> anyhow::Result<usize> {
        if self.refuse {
            anyhow::bail!("container detached");
        }
        let node = self.next;
        self.next += 1;
        self.children.push((node, glyph.glyph));
        Ok(node)
    }

    fn remove(&mut self, node: usize) {
        self.children.retain(|(n, _)| *n != node);
    }
}

fn spawner() -> GlyphSpawner<MemoryContainer> {
    GlyphSpawner::with_rng(
        MemoryContainer::default(),
        GlyphParams::default(),
        StdRng::seed_from_u64(9),
    )
}

#[test]
fn startup_burst_appends_ten_children() {
    let mut s = spawner();
    let ids = s.spawn_startup();
    assert_eq!(ids.len(), 10);
    assert_eq!(s.container().children.len(), 10);
    assert_eq!(s.live_count(), 10);
    assert!(s
        .container()
        .children
        .iter()
        .all(|(_, c)| GLYPH_SET.contains(c)));
}

#[test]
fn completing_every_animation_leaves_no_nodes() {
    let mut s = spawner();
    let ids = s.spawn_startup();
    for (i, id) in ids.iter().enumerate() {
        assert!(s.complete(*id));
        assert_eq!(s.container().children.len(), 10 - i - 1);
    }
    assert_eq!(s.live_count(), 0);
    assert!(s.container().children.is_empty());
}

#[test]
fn completion_is_idempotent_per_node() {
    let mut s = spawner();
    let id = s.spawn().expect("appended");
    let other = s.spawn().expect("appended");
    assert!(s.complete(id));
    assert!(!s.complete(id));
    assert_eq!(s.container().children.len(), 1);
    assert!(s.node(other).is_some());
}

#[test]
fn interval_ticks_interleave_with_completions() {
    let mut s = spawner();
    let first = s.spawn_startup();
    let later: Vec<_> = (0..5).filter_map(|_| s.spawn()).collect();
    assert_eq!(s.container().children.len(), 15);
    for id in first.iter().chain(later.iter()) {
        s.complete(*id);
    }
    assert!(s.container().children.is_empty());
}

#[test]
fn refused_append_is_not_tracked() {
    let mut s = GlyphSpawner::with_rng(
        MemoryContainer {
            refuse: true,
            ..Default::default()
        },
        GlyphParams::default(),
        StdRng::seed_from_u64(1),
    );
    assert!(s.spawn().is_none());
    assert!(s.spawn_startup().is_empty());
    assert_eq!(s.live_count(), 0);
}
