use criterion::{Criterion, black_box, criterion_group, criterion_main};
use skillset_fs::{io, list_files};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn populate(root: &Path) {
    for dir in 0..10 {
        let sub = root.join(format!("dir{dir}"));
        fs::create_dir_all(&sub).unwrap();
        for file in 0..20 {
            fs::write(sub.join(format!("file{file}.md")), "# skill\n").unwrap();
        }
    }
}

fn list_files_benchmark(c: &mut Criterion) {
    c.bench_function("tree::list_files (200 files)", |b| {
        let dir = tempdir().unwrap();
        populate(dir.path());

        b.iter(|| {
            let files = list_files(black_box(dir.path())).unwrap();
            assert_eq!(files.len(), 200);
        })
    });
}

fn copy_tree_benchmark(c: &mut Criterion) {
    c.bench_function("io::copy_tree (200 files)", |b| {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        populate(&src);
        let dest = dir.path().join("dest");

        b.iter(|| {
            io::remove_tree(&dest).unwrap();
            io::copy_tree(black_box(&src), black_box(&dest)).unwrap();
        })
    });
}

criterion_group!(benches, list_files_benchmark, copy_tree_benchmark);
criterion_main!(benches);
