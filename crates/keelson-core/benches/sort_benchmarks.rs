use criterion::{criterion_group, criterion_main, Criterion};
use keelson_core::sort_manifests;
use keelson_schema::{SortOrder, VersionSet, INSTALL_ORDER};
use std::collections::BTreeMap;

fn create_bundle(sources: usize) -> BTreeMap<String, String> {
    let mut files = BTreeMap::new();
    for i in 0..sources {
        let kind = INSTALL_ORDER[i % INSTALL_ORDER.len()];
        let weight = (i % 7) as i64 - 3;
        let mut content = format!(
            "kind: {kind}\napiVersion: v1\nmetadata:\n  name: res-{i}\n  annotations:\n    \"helm.sh/weight\": \"{weight}\"\n"
        );
        if i % 10 == 0 {
            content.push_str(&format!(
                "---\nkind: Job\napiVersion: batch/v1\nmetadata:\n  name: hook-{i}\n  annotations:\n    \"helm.sh/hook\": pre-install,post-upgrade\n"
            ));
        }
        files.insert(format!("templates/res-{i:04}.yaml"), content);
    }
    files
}

fn bench_sort_install(c: &mut Criterion) {
    let files = create_bundle(500);
    let versions = VersionSet::default();
    c.bench_function("sort_manifests_install_500", |b| {
        b.iter(|| sort_manifests(&files, &versions, SortOrder::Install).unwrap());
    });
}

fn bench_sort_uninstall(c: &mut Criterion) {
    let files = create_bundle(500);
    let versions = VersionSet::default();
    c.bench_function("sort_manifests_uninstall_500", |b| {
        b.iter(|| sort_manifests(&files, &versions, SortOrder::Uninstall).unwrap());
    });
}

criterion_group!(benches, bench_sort_install, bench_sort_uninstall);
criterion_main!(benches);
