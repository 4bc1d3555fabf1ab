//! Benchmarks for the story editor store.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use storyedit::{DrawingPath, StickerElementUpdate, StoryEditorStore, TextElementUpdate};

/// A store with `n` text elements, `n` stickers and `n` drawing paths.
fn populated_store(n: usize) -> StoryEditorStore {
    let mut store = StoryEditorStore::new();
    for i in 0..n {
        store.add_text_element(format!("label {}", i));
        store.add_sticker_element("⭐", Some(i as f64), Some(i as f64));
        let mut path = DrawingPath::new("#000000", 4.0);
        for p in 0..64 {
            path = path.with_point(p as f64, (p * i) as f64);
        }
        store.add_drawing_path(path);
    }
    store
}

fn bench_new(c: &mut Criterion) {
    c.bench_function("new", |b| b.iter(|| black_box(StoryEditorStore::new())));
}

fn bench_add_text(c: &mut Criterion) {
    c.bench_function("add_text_element", |b| {
        let mut store = StoryEditorStore::new();
        b.iter(|| {
            black_box(store.add_text_element("Hello"));
            if store.history_len() > 200 {
                store.reset_editor();
            }
        })
    });
}

fn bench_drag_updates(c: &mut Criterion) {
    c.bench_function("update_sticker_drag", |b| {
        let mut store = populated_store(20);
        let id = store.state().sticker_elements[10].id.clone();
        let mut x = 0.0;
        b.iter(|| {
            x += 1.0;
            store.update_sticker_element(&id, StickerElementUpdate::new().with_position(x, x));
        })
    });

    c.bench_function("update_text_font_size", |b| {
        let mut store = populated_store(20);
        let id = store.state().text_elements[10].id.clone();
        b.iter(|| {
            store.update_text_element(&id, TextElementUpdate::new().with_font_size(48.0));
        })
    });
}

fn bench_save_to_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("save_to_history");
    for n in [10, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut store = populated_store(n);
            b.iter(|| {
                store.save_to_history();
                store.undo();
            })
        });
    }
    group.finish();
}

fn bench_undo_redo(c: &mut Criterion) {
    let mut group = c.benchmark_group("undo_redo");
    for n in [10, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut store = populated_store(n);
            b.iter(|| {
                store.undo();
                store.redo();
            })
        });
    }
    group.finish();
}

fn bench_to_draft_json(c: &mut Criterion) {
    c.bench_function("to_draft_json_50", |b| {
        let store = populated_store(50);
        b.iter(|| black_box(store.to_draft().to_json().unwrap()))
    });
}

criterion_group!(
    benches,
    bench_new,
    bench_add_text,
    bench_drag_updates,
    bench_save_to_history,
    bench_undo_redo,
    bench_to_draft_json,
);
criterion_main!(benches);
