#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use nohang_indicator::domain::ports::collector::SystemCollector;
use nohang_indicator::infrastructure::collectors::procfs::ProcfsCollector;

fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/host")
}

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

/// Copies the fixture host tree so individual sources can be removed.
fn copy_host(dst: &Path) {
    for rel in [
        "proc/meminfo",
        "proc/swaps",
        "proc/pressure/memory",
        "sys/block/zram0/disksize",
        "sys/block/zram0/mm_stat",
    ] {
        let target = dst.join(rel);
        std::fs::create_dir_all(target.parent().expect("parent")).expect("mkdir");
        std::fs::copy(fixture_root().join(rel), &target).expect("copy fixture");
    }
}

#[test]
fn fixture_host_snapshot() {
    let root = fixture_root();
    let snapshot = ProcfsCollector::new(root.join("proc"), root.join("sys")).collect();

    let mem = &snapshot.memory;
    approx(mem.total_mib, 16000.0);
    approx(mem.available_mib, 2000.0);
    approx(mem.available_percent, 12.5);
    approx(mem.swap_total_mib, 4096.0);
    approx(mem.swap_free_mib, 3072.0);
    approx(mem.swap_free_percent, 75.0);

    let zram = &snapshot.zram;
    assert!(zram.present);
    approx(zram.disk_size_mib, 4096.0);
    approx(zram.orig_data_mib, 1024.0);
    approx(zram.compr_data_mib, 256.0);
    approx(zram.mem_used_total_mib, 272.0);
    approx(zram.logical_used_percent, 25.0);

    approx(snapshot.psi.some_avg10, 1.25);
    approx(snapshot.psi.full_avg10, 0.5);
}

#[test]
fn each_source_degrades_on_its_own() {
    let dir = tempfile::tempdir().expect("tempdir");
    copy_host(dir.path());
    std::fs::remove_file(dir.path().join("proc/pressure/memory")).expect("rm psi");
    std::fs::remove_dir_all(dir.path().join("sys/block/zram0")).expect("rm zram");

    let snapshot =
        ProcfsCollector::new(dir.path().join("proc"), dir.path().join("sys")).collect();

    approx(snapshot.memory.total_mib, 16000.0);
    approx(snapshot.memory.swap_free_mib, 3072.0);
    assert!(!snapshot.zram.present);
    approx(snapshot.zram.orig_data_mib, 0.0);
    approx(snapshot.psi.some_avg10, 0.0);
    approx(snapshot.psi.full_avg10, 0.0);
}

#[test]
fn swap_table_overrides_meminfo() {
    let dir = tempfile::tempdir().expect("tempdir");
    let proc_root = dir.path().join("proc");
    std::fs::create_dir_all(&proc_root).expect("mkdir");
    std::fs::write(
        proc_root.join("meminfo"),
        "MemTotal: 1024 kB\nMemAvailable: 512 kB\nSwapTotal: 0 kB\nSwapFree: 0 kB\n",
    )
    .expect("write meminfo");
    std::fs::write(
        proc_root.join("swaps"),
        "Filename Type Size Used Priority\n/dev/sda2 partition 512 256 -2\n/swapfile file 1024 512 -3\n",
    )
    .expect("write swaps");

    let snapshot = ProcfsCollector::new(&proc_root, dir.path().join("sys")).collect();
    approx(snapshot.memory.swap_total_mib, 1.5);
    approx(snapshot.memory.swap_free_mib, 0.75);
    approx(snapshot.memory.swap_free_percent, 50.0);
}

#[test]
fn empty_host_is_all_zero() {
    let dir = tempfile::tempdir().expect("tempdir");
    let snapshot =
        ProcfsCollector::new(dir.path().join("proc"), dir.path().join("sys")).collect();
    approx(snapshot.memory.total_mib, 0.0);
    approx(snapshot.memory.available_percent, 0.0);
    assert!(!snapshot.zram.present);
}
